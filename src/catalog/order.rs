//! Footprint name ordering.
//!
//! Cycling order is the sort order of names within a library. The default is
//! plain lexicographic, matching what most library browsers show. The
//! numerically aware [`NameOrder::Natural`] option sorts embedded integers by
//! value, so "R2" comes before "R10".

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// How footprint names are ordered within a library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameOrder {
    /// Plain lexicographic byte ordering.
    #[default]
    Lexicographic,
    /// Numerically aware ordering: runs of digits compare by value.
    Natural,
}

impl NameOrder {
    /// Compares two names under this ordering.
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Lexicographic => a.cmp(b),
            Self::Natural => natural_cmp(a, b),
        }
    }

    /// Sorts a slice of names in place under this ordering.
    pub fn sort(self, names: &mut [String]) {
        names.sort_by(|a, b| self.compare(a, b));
    }
}

/// Compares two strings, treating maximal runs of ASCII digits as numbers.
///
/// Digit runs compare by value (leading zeros ignored, then by the raw run as
/// a tiebreak so the ordering stays total); everything else compares
/// byte-wise. At a position where one side has a digit and the other does
/// not, the digit sorts first, consistent with ASCII.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.as_bytes();
    let mut b = b.as_bytes();

    loop {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        let (run_a, rest_a, digits_a) = split_run(a);
        let (run_b, rest_b, digits_b) = split_run(b);

        let ord = match (digits_a, digits_b) {
            (true, true) => cmp_digit_runs(run_a, run_b),
            (false, false) => run_a.cmp(run_b),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }

        a = rest_a;
        b = rest_b;
    }
}

/// Splits off the leading maximal run of digits or non-digits.
fn split_run(s: &[u8]) -> (&[u8], &[u8], bool) {
    let digits = s[0].is_ascii_digit();
    let len = s
        .iter()
        .take_while(|c| c.is_ascii_digit() == digits)
        .count();
    (&s[..len], &s[len..], digits)
}

/// Compares two runs of ASCII digits by numeric value.
fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    fn trim(run: &[u8]) -> &[u8] {
        let zeros = run.iter().take_while(|c| **c == b'0').count();
        // Keep one digit so "0" stays comparable.
        &run[zeros.min(run.len() - 1)..]
    }
    let (ta, tb) = (trim(a), trim(b));
    ta.len()
        .cmp(&tb.len())
        .then_with(|| ta.cmp(tb))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural_sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| NameOrder::Natural.compare(a, b));
        names
    }

    #[test]
    fn lexicographic_puts_r10_before_r2() {
        assert_eq!(
            NameOrder::Lexicographic.compare("R10", "R2"),
            Ordering::Less
        );
    }

    #[test]
    fn natural_puts_r2_before_r10() {
        assert_eq!(NameOrder::Natural.compare("R2", "R10"), Ordering::Less);
        assert_eq!(NameOrder::Natural.compare("R10", "R2"), Ordering::Greater);
    }

    #[test]
    fn natural_sort_sequence() {
        assert_eq!(
            natural_sorted(vec!["R10", "R2", "R1", "R100", "C1"]),
            vec!["C1", "R1", "R2", "R10", "R100"]
        );
    }

    #[test]
    fn natural_handles_leading_zeros() {
        assert_eq!(NameOrder::Natural.compare("R002", "R2"), Ordering::Less);
        assert_eq!(NameOrder::Natural.compare("R02", "R10"), Ordering::Less);
    }

    #[test]
    fn natural_equal_strings() {
        assert_eq!(NameOrder::Natural.compare("R_0603", "R_0603"), Ordering::Equal);
    }

    #[test]
    fn natural_prefix_sorts_first() {
        assert_eq!(NameOrder::Natural.compare("R", "R1"), Ordering::Less);
        assert_eq!(NameOrder::Natural.compare("R1", "R1A"), Ordering::Less);
    }

    #[test]
    fn natural_is_total_on_zero_variants() {
        // "01" and "1" have the same value; the raw run breaks the tie.
        assert_ne!(NameOrder::Natural.compare("R01", "R1"), Ordering::Equal);
    }

    #[test]
    fn sort_matches_spec_example() {
        let mut names = vec![
            "R_0805".to_string(),
            "R_0402".to_string(),
            "R_0603".to_string(),
        ];
        NameOrder::Lexicographic.sort(&mut names);
        assert_eq!(names, vec!["R_0402", "R_0603", "R_0805"]);
    }
}
