//! Transition rows and anchor models

use crate::io::error::{PhonoError, Result};
use crate::phonology::symbols::Symbol;
use std::collections::BTreeMap;

/// Non-negative weights over the symbols that may follow a given symbol
///
/// Rows need not sum to one; every consumer renormalizes. An absent entry
/// is reported as `None` and treated as zero probability.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionRow {
    weights: BTreeMap<Symbol, f64>,
}

impl TransitionRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(next, weight)` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or not finite
    pub fn from_weights(previous: Symbol, weights: &[(char, f64)]) -> Result<Self> {
        let mut row = Self::new();
        for &(next, weight) in weights {
            row.insert(previous, Symbol::new(next), weight)?;
        }
        Ok(row)
    }

    /// Set the weight of one successor
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is negative or not finite
    pub fn insert(&mut self, previous: Symbol, next: Symbol, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(PhonoError::InvalidWeight {
                previous: previous.as_char(),
                next: next.as_char(),
                weight,
            });
        }
        self.weights.insert(next, weight);
        Ok(())
    }

    /// Weight of a successor, `None` if absent
    pub fn weight(&self, next: Symbol) -> Option<f64> {
        self.weights.get(&next).copied()
    }

    /// Successors named by this row, in symbol order
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.weights.keys().copied()
    }

    /// `(successor, weight)` pairs in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        self.weights.iter().map(|(&s, &w)| (s, w))
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Number of named successors
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the row names no successor
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Copy of the row scaled to sum to one
    ///
    /// A row with zero total is returned unchanged.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total <= 0.0 {
            return self.clone();
        }
        Self {
            weights: self.weights.iter().map(|(&s, &w)| (s, w / total)).collect(),
        }
    }
}

/// Transition rows keyed by the previous symbol
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorModel {
    rows: BTreeMap<Symbol, TransitionRow>,
}

impl AnchorModel {
    /// Create a model with no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from `(previous, [(next, weight)])` entries
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or not finite
    pub fn from_entries(entries: &[(char, &[(char, f64)])]) -> Result<Self> {
        let mut model = Self::new();
        for &(previous, weights) in entries {
            let previous = Symbol::new(previous);
            model.insert_row(previous, TransitionRow::from_weights(previous, weights)?);
        }
        Ok(model)
    }

    /// Add or replace the row for a previous symbol
    pub fn insert_row(&mut self, previous: Symbol, row: TransitionRow) {
        self.rows.insert(previous, row);
    }

    /// Row keyed by `previous`, `None` if absent
    pub fn row(&self, previous: Symbol) -> Option<&TransitionRow> {
        self.rows.get(&previous)
    }

    /// Previous symbols with a row, in symbol order
    pub fn keys(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rows.keys().copied()
    }

    /// Every symbol named as a key or as a successor
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rows
            .iter()
            .flat_map(|(&key, row)| std::iter::once(key).chain(row.symbols()))
    }
}
