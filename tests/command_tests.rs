use qubit_histogram::commands::{execute_plot, validate_args, validate_report_file, PlotArgs};
use qubit_histogram::output::read_report;
use std::fs;
use tempfile::tempdir;

fn plot_args(dir: &std::path::Path, results: &str) -> PlotArgs {
    let input = dir.join("results.json");
    fs::write(&input, results).unwrap();

    PlotArgs {
        input,
        title: "Bell pairs".to_string(),
        output_json: dir.join("out").join("report.json"),
        ..Default::default()
    }
}

#[test]
fn test_validate_args_valid() {
    let args = PlotArgs {
        title: "Coin flips".to_string(),
        basis: "x".to_string(),
        qubits: Some(4),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_empty_input() {
    let args = PlotArgs {
        input: "".into(),
        title: "Coin flips".to_string(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_zero_size_chart() {
    let mut args = PlotArgs {
        title: "Coin flips".to_string(),
        ..Default::default()
    };
    args.chart_config.width = 0;

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_plot_writes_report_and_chart() {
    let dir = tempdir().unwrap();
    let mut args = plot_args(
        dir.path(),
        r#"{"results": [["Zero", "One"], ["Zero", "One"], ["One", "One"]]}"#,
    );
    args.hide_empty = true;
    args.output_svg = Some(dir.path().join("out").join("chart.svg"));

    let histogram = execute_plot(args.clone()).unwrap();
    assert_eq!(histogram.labels(), vec!["|01⟩", "|11⟩"]);

    let report = read_report(&args.output_json).unwrap();
    assert_eq!(report.title, "Bell pairs");
    assert_eq!(report.total_shots, 3);
    assert!(report.hide_empty);
    assert_eq!(report.rows.len(), 2);

    let svg = fs::read_to_string(args.output_svg.as_ref().unwrap()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Bell pairs"));
    assert_eq!(svg.matches(r#"<g class="bar">"#).count(), 2);

    assert!(validate_report_file(args.output_json).is_ok());
}

#[test]
fn test_execute_plot_empty_batch_hide_empty_with_chart() {
    let dir = tempdir().unwrap();
    let mut args = plot_args(dir.path(), "[]");
    args.hide_empty = true;
    args.output_svg = Some(dir.path().join("out").join("chart.svg"));

    let histogram = execute_plot(args.clone()).unwrap();
    assert!(histogram.is_empty());

    let report = read_report(&args.output_json).unwrap();
    assert_eq!(report.total_shots, 0);
    assert!(report.rows.is_empty());

    let svg = fs::read_to_string(args.output_svg.as_ref().unwrap()).unwrap();
    assert!(svg.contains("Bell pairs"));
    assert!(!svg.contains(r#"<g class="bar">"#));

    assert!(validate_report_file(args.output_json).is_ok());
}

#[test]
fn test_execute_plot_uses_declared_qubits_for_empty_batch() {
    let dir = tempdir().unwrap();
    let mut args = plot_args(dir.path(), r#"{"qubits": 2, "results": []}"#);
    args.basis = "X".to_string();

    let histogram = execute_plot(args).unwrap();
    assert_eq!(histogram.labels(), vec!["|++⟩", "|+-⟩", "|-+⟩", "|--⟩"]);
    assert_eq!(histogram.frequencies(), vec![0, 0, 0, 0]);
}

#[test]
fn test_execute_plot_flag_overrides_declared_qubits() {
    let dir = tempdir().unwrap();
    let mut args = plot_args(dir.path(), r#"{"qubits": 2, "results": []}"#);
    args.qubits = Some(1);

    let histogram = execute_plot(args).unwrap();
    assert_eq!(histogram.len(), 2);
}

#[test]
fn test_execute_plot_unknown_basis_skips_outputs() {
    let dir = tempdir().unwrap();
    let mut args = plot_args(dir.path(), r#"["Zero"]"#);
    args.basis = "Y".to_string();

    let err = execute_plot(args.clone()).unwrap_err();
    assert!(err.to_string().contains("Unsupported basis: Y"));
    assert!(!args.output_json.exists());
}

#[test]
fn test_execute_plot_inconsistent_shots() {
    let dir = tempdir().unwrap();
    let args = plot_args(dir.path(), r#"["Zero", ["One", "One"]]"#);

    assert!(execute_plot(args).is_err());
}

#[test]
fn test_validate_report_rejects_tampered_rows() {
    let dir = tempdir().unwrap();
    let args = plot_args(dir.path(), r#"["Zero", "One", "One"]"#);
    execute_plot(args.clone()).unwrap();

    let contents = fs::read_to_string(&args.output_json).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    json["rows"][0]["frequency"] = serde_json::json!(7);
    fs::write(&args.output_json, json.to_string()).unwrap();

    assert!(validate_report_file(args.output_json).is_err());
}
