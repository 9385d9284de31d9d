//! Outcome domain enumeration and zero-filled frequency tables.
//!
//! The domain for n qubits is every length-n string over the basis
//! alphabet, in Cartesian-product order: the first position varies
//! slowest. Entry `i` is the n-bit binary expansion of `i` (MSB first)
//! mapped through the alphabet, so the domain is produced lazily without
//! materialising all 2^n strings up front.

use super::basis::Basis;
use crate::utils::error::AggregateError;
use std::collections::HashMap;

/// Widest domain whose size fits in a `usize`
pub const MAX_DOMAIN_QUBITS: usize = usize::BITS as usize - 1;

/// Lazy iterator over every outcome of an n-qubit measurement
#[derive(Debug, Clone)]
pub struct OutcomeDomain {
    symbols: [char; 2],
    qubits: usize,
    next: usize,
    len: usize,
}

impl OutcomeDomain {
    /// Domain for `qubits` positions over the alphabet of `basis`
    ///
    /// The domain has `2^qubits` members; iterating it is the caller's cost.
    ///
    /// # Errors
    /// * `AggregateError::TooManyQubits` - `2^qubits` does not fit in a `usize`
    pub fn new(basis: Basis, qubits: usize) -> Result<Self, AggregateError> {
        if qubits > MAX_DOMAIN_QUBITS {
            return Err(AggregateError::TooManyQubits(qubits, MAX_DOMAIN_QUBITS));
        }
        Ok(Self {
            symbols: basis.symbols(),
            qubits,
            next: 0,
            len: 1usize << qubits,
        })
    }

    pub fn qubits(&self) -> usize {
        self.qubits
    }

    fn outcome_at(&self, index: usize) -> String {
        (0..self.qubits)
            .map(|position| {
                let bit = (index >> (self.qubits - 1 - position)) & 1;
                self.symbols[bit]
            })
            .collect()
    }
}

impl Iterator for OutcomeDomain {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let outcome = self.outcome_at(self.next);
        self.next += 1;
        Some(outcome)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OutcomeDomain {}

/// Tally of observed outcomes
///
/// Lookups default to zero, so merging with an [`OutcomeDomain`] yields a
/// table covering the whole domain.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Count every outcome in `outcomes`
    pub fn tally<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut table = Self::default();
        for outcome in outcomes {
            *table.counts.entry(outcome).or_insert(0) += 1;
            table.total += 1;
        }
        table
    }

    /// Count for `outcome` (zero if never observed)
    pub fn count(&self, outcome: &str) -> u64 {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Number of shots tallied
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct outcomes observed
    pub fn observed(&self) -> usize {
        self.counts.len()
    }

    /// Every domain member paired with its count, in domain order
    pub fn zero_filled(
        &self,
        domain: OutcomeDomain,
    ) -> impl Iterator<Item = (String, u64)> + '_ {
        domain.map(move |outcome| {
            let count = self.count(&outcome);
            (outcome, count)
        })
    }

    /// Observed outcomes only, in domain order
    ///
    /// Same rows as `zero_filled` minus the zeros, without walking the
    /// domain. Outcomes are assumed to be spelled in `basis`.
    pub fn nonzero_in_order(&self, basis: Basis) -> Vec<(String, u64)> {
        let [zero, _] = basis.symbols();
        let mut rows: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(outcome, count)| (outcome.clone(), *count))
            .collect();
        // Product order is lexicographic over bits, first position slowest
        rows.sort_by_cached_key(|(outcome, _)| {
            outcome.chars().map(|c| c != zero).collect::<Vec<bool>>()
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_qubit_domain() {
        let domain: Vec<String> = OutcomeDomain::new(Basis::Z, 1).unwrap().collect();
        assert_eq!(domain, vec!["0", "1"]);
    }

    #[test]
    fn test_product_order() {
        let domain: Vec<String> = OutcomeDomain::new(Basis::X, 2).unwrap().collect();
        assert_eq!(domain, vec!["++", "+-", "-+", "--"]);

        let domain: Vec<String> = OutcomeDomain::new(Basis::Z, 3).unwrap().collect();
        assert_eq!(
            domain,
            vec!["000", "001", "010", "011", "100", "101", "110", "111"]
        );
    }

    #[test]
    fn test_domain_len() {
        let domain = OutcomeDomain::new(Basis::ZPrime, 5).unwrap();
        assert_eq!(domain.len(), 32);
        assert_eq!(domain.qubits(), 5);
    }

    #[test]
    fn test_zero_qubit_domain_has_empty_outcome() {
        let domain: Vec<String> = OutcomeDomain::new(Basis::Z, 0).unwrap().collect();
        assert_eq!(domain, vec![String::new()]);
    }

    #[test]
    fn test_tally_counts() {
        let table = FrequencyTable::tally(
            ["01", "01", "11"].iter().map(|s| s.to_string()),
        );
        assert_eq!(table.count("01"), 2);
        assert_eq!(table.count("11"), 1);
        assert_eq!(table.count("00"), 0);
        assert_eq!(table.total(), 3);
        assert_eq!(table.observed(), 2);
    }

    #[test]
    fn test_zero_filled_covers_domain() {
        let table = FrequencyTable::tally(["↓".to_string()]);
        let filled: Vec<(String, u64)> = table
            .zero_filled(OutcomeDomain::new(Basis::ZPrime, 1).unwrap())
            .collect();
        assert_eq!(
            filled,
            vec![("↑".to_string(), 0), ("↓".to_string(), 1)]
        );
    }

    #[test]
    fn test_domain_too_wide_for_usize() {
        let err = OutcomeDomain::new(Basis::Z, MAX_DOMAIN_QUBITS + 1).unwrap_err();
        assert_eq!(
            err,
            AggregateError::TooManyQubits(MAX_DOMAIN_QUBITS + 1, MAX_DOMAIN_QUBITS)
        );
        assert!(OutcomeDomain::new(Basis::Z, MAX_DOMAIN_QUBITS).is_ok());
    }

    #[test]
    fn test_nonzero_in_order_matches_zero_filled() {
        let table = FrequencyTable::tally(
            ["--+", "+-+", "--+", "+++"].iter().map(|s| s.to_string()),
        );
        let filled: Vec<(String, u64)> = table
            .zero_filled(OutcomeDomain::new(Basis::X, 3).unwrap())
            .filter(|(_, count)| *count > 0)
            .collect();
        assert_eq!(table.nonzero_in_order(Basis::X), filled);
    }
}
