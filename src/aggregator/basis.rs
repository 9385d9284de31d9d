//! Measurement bases and their two-symbol alphabets.
//!
//! Zero always maps to the first symbol and One to the second.

use super::shot::MeasurementResult;
use crate::utils::error::UnsupportedBasisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Basis a batch is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Basis {
    /// Computational basis: `0`, `1`
    #[default]
    Z,
    /// Spin notation of the computational basis: `↑`, `↓`
    #[serde(rename = "Z'")]
    ZPrime,
    /// Hadamard basis: `+`, `-`
    X,
}

/// Token and alphabet for every basis
const BASIS_TABLE: [(&str, Basis, [char; 2]); 3] = [
    ("Z", Basis::Z, ['0', '1']),
    ("Z'", Basis::ZPrime, ['↑', '↓']),
    ("X", Basis::X, ['+', '-']),
];

impl Basis {
    pub const ALL: [Basis; 3] = [Basis::Z, Basis::ZPrime, Basis::X];

    fn entry(self) -> &'static (&'static str, Basis, [char; 2]) {
        match self {
            Self::Z => &BASIS_TABLE[0],
            Self::ZPrime => &BASIS_TABLE[1],
            Self::X => &BASIS_TABLE[2],
        }
    }

    /// Canonical token (`Z`, `Z'` or `X`)
    pub fn token(self) -> &'static str {
        self.entry().0
    }

    /// The `[Zero, One]` symbols
    pub fn symbols(self) -> [char; 2] {
        self.entry().2
    }

    pub fn symbol(self, result: MeasurementResult) -> char {
        let [zero, one] = self.symbols();
        if result.is_zero() {
            zero
        } else {
            one
        }
    }

    /// Outcome string for one shot, in qubit order
    pub fn classify(self, results: &[MeasurementResult]) -> String {
        results.iter().map(|r| self.symbol(*r)).collect()
    }
}

impl FromStr for Basis {
    type Err = UnsupportedBasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BASIS_TABLE
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, basis, _)| *basis)
            .ok_or_else(|| UnsupportedBasisError::new(s))
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MeasurementResult::{One, Zero};

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("z".parse::<Basis>(), Ok(Basis::Z));
        assert_eq!("Z'".parse::<Basis>(), Ok(Basis::ZPrime));
        assert_eq!("z'".parse::<Basis>(), Ok(Basis::ZPrime));
        assert_eq!("x".parse::<Basis>(), Ok(Basis::X));
    }

    #[test]
    fn test_parse_unknown_basis() {
        let err = "Y".parse::<Basis>().unwrap_err();
        assert_eq!(err.basis, "Y");
        let message = err.to_string();
        assert!(message.contains("Y"));
        assert!(message.contains("'Z'"));
        assert!(message.contains("'X'"));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Basis::Z.symbols(), ['0', '1']);
        assert_eq!(Basis::ZPrime.symbols(), ['↑', '↓']);
        assert_eq!(Basis::X.symbols(), ['+', '-']);
    }

    #[test]
    fn test_classify() {
        assert_eq!(Basis::Z.classify(&[Zero, One, One]), "011");
        assert_eq!(Basis::ZPrime.classify(&[One]), "↓");
        assert_eq!(Basis::X.classify(&[One, Zero]), "-+");
    }

    #[test]
    fn test_token_round_trips_through_parse() {
        for basis in Basis::ALL {
            assert_eq!(basis.token().parse::<Basis>(), Ok(basis));
        }
    }

    #[test]
    fn test_parse_rejects_padded_token() {
        for token in [" z'", "Z ", "\tX"] {
            let err = token.parse::<Basis>().unwrap_err();
            assert_eq!(err, UnsupportedBasisError::new(token));
        }
    }
}
