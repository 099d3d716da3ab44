//! Discrete hyperparameter lookup: exact boundary coefficients per
//! regularization strength, with a documented fallback entry.

use serde::{Deserialize, Serialize};

use crate::boundary::linear::LinearBoundary;

/// Ordered `alpha key -> boundary` table. Keys are the display strings of
/// the discrete regularization strengths (`"0.01"`, `"0.1"`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryTable {
    entries: Vec<(String, LinearBoundary)>,
    fallback: String,
}

impl BoundaryTable {
    /// `fallback` must name one of `entries`; unknown lookups resolve to it
    /// rather than failing.
    pub fn new(entries: Vec<(String, LinearBoundary)>, fallback: &str) -> Self {
        debug_assert!(
            entries.iter().any(|(k, _)| k == fallback),
            "fallback key must exist in the table"
        );
        BoundaryTable {
            entries,
            fallback: fallback.to_string(),
        }
    }

    /// Boundary for `key`, falling back to the default entry when the key
    /// is unrecognized.
    pub fn get(&self, key: &str) -> LinearBoundary {
        if let Some((_, b)) = self.entries.iter().find(|(k, _)| k == key) {
            return *b;
        }
        log::warn!(
            "unknown boundary key {:?}, falling back to {:?}",
            key,
            self.fallback
        );
        self.entries
            .iter()
            .find(|(k, _)| *k == self.fallback)
            .map(|(_, b)| *b)
            // The constructor asserts the fallback key exists.
            .unwrap_or(LinearBoundary::new(0.0, 0.0, 0.0))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BoundaryTable {
        BoundaryTable::new(
            vec![
                ("0.1".to_string(), LinearBoundary::new(-7.5, 0.82, 0.72)),
                ("1".to_string(), LinearBoundary::new(-7.0, 0.78, 0.68)),
                ("10".to_string(), LinearBoundary::new(-6.2, 0.70, 0.62)),
            ],
            "1",
        )
    }

    #[test]
    fn known_key_returns_its_entry() {
        assert_eq!(table().get("0.1"), LinearBoundary::new(-7.5, 0.82, 0.72));
    }

    #[test]
    fn unknown_key_falls_back_to_default() {
        let t = table();
        assert_eq!(t.get("999"), t.get("1"));
    }

    #[test]
    fn keys_preserve_insertion_order() {
        let t = table();
        let keys: Vec<&str> = t.keys().collect();
        assert_eq!(keys, ["0.1", "1", "10"]);
    }
}
