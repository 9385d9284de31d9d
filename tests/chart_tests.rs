use qubit_histogram::aggregator::{aggregate, MeasurementResult::*, Shot};
use qubit_histogram::chart::{render_histogram, ChartConfig, ChartRenderer, SvgBarChart, TextBarChart};
use qubit_histogram::utils::error::ChartError;

fn bell_histogram(hide_empty: bool) -> qubit_histogram::aggregator::Histogram {
    let shots = vec![
        Shot::from([Zero, Zero]),
        Shot::from([Zero, Zero]),
        Shot::from([One, One]),
    ];
    aggregate(&shots, "X", hide_empty).unwrap()
}

#[test]
fn test_svg_bars_follow_histogram_order() {
    let svg = render_histogram(&bell_histogram(false), &SvgBarChart::default(), "Bell").unwrap();

    let positions: Vec<usize> = ["|++⟩: 2", "|+-⟩: 0", "|-+⟩: 0", "|--⟩: 1"]
        .iter()
        .map(|needle| svg.find(needle).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_svg_respects_config() {
    let config = ChartConfig::new()
        .with_size(320, 240)
        .with_bar_color("teal");
    let svg = render_histogram(&bell_histogram(true), &SvgBarChart::new(config), "Bell").unwrap();

    assert!(svg.contains(r#"width="320" height="240""#));
    assert!(svg.contains(r#"fill="teal""#));
    assert_eq!(svg.matches(r#"<g class="bar">"#).count(), 2);
}

#[test]
fn test_svg_escapes_title() {
    let svg = render_histogram(&bell_histogram(true), &SvgBarChart::default(), "A < B & C").unwrap();
    assert!(svg.contains("A &lt; B &amp; C"));
}

#[test]
fn test_svg_empty_hidden_histogram() {
    let histogram = aggregate(&[], "Z", true).unwrap();
    assert!(histogram.is_empty());

    let svg = render_histogram(&histogram, &SvgBarChart::default(), "Nothing").unwrap();
    assert!(svg.contains(">Nothing</text>"));
    assert_eq!(svg.matches(r#"<g class="bar">"#).count(), 0);
}

#[test]
fn test_text_empty_hidden_histogram() {
    let histogram = aggregate(&[], "Z", true).unwrap();
    let text = render_histogram(&histogram, &TextBarChart::default(), "Nothing").unwrap();
    assert!(text.contains("(no outcomes to display)"));
}

#[test]
fn test_renderers_reject_misaligned_input() {
    let labels = vec!["|0⟩".to_string()];
    let frequencies = vec![1, 2];

    assert!(matches!(
        SvgBarChart::default().render(&labels, &frequencies, "t"),
        Err(ChartError::LengthMismatch { labels: 1, frequencies: 2 })
    ));
    assert!(TextBarChart::default()
        .render(&labels, &frequencies, "t")
        .is_err());
}
