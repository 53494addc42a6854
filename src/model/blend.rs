//! Geometric blending of two anchor models along the drift axis
//!
//! For every previous symbol named by either anchor, the successor weights
//! are interpolated in log space and renormalized with a softmax:
//!
//! `logmix(s) = (1 - α)·ln(pA(s)) + α·ln(pB(s))`
//!
//! Missing or non-positive weights are floored before taking logs, so a
//! successor named by only one anchor keeps a small positive probability
//! even at the opposite extreme.

use crate::math::probability::{floored_ln, stable_softmax};
use crate::model::drift::Drift;
use crate::model::row::AnchorModel;
use crate::phonology::symbols::Symbol;
use ndarray::Array2;
use std::collections::BTreeSet;

/// Ordered set of symbols indexing the rows and columns of a blended model
///
/// Always contains the boundary symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Collect, sort and deduplicate symbols, adding the boundary
    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        let set: BTreeSet<Symbol> = symbols
            .into_iter()
            .chain(std::iter::once(Symbol::BOUNDARY))
            .collect();
        Self {
            symbols: set.into_iter().collect(),
        }
    }

    /// Dense index of a symbol
    pub fn index_of(&self, symbol: Symbol) -> Option<usize> {
        self.symbols.binary_search(&symbol).ok()
    }

    /// Symbol at a dense index
    pub fn symbol(&self, index: usize) -> Option<Symbol> {
        self.symbols.get(index).copied()
    }

    /// Symbols in index order
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Transition table derived from two anchors at a fixed drift
///
/// Dense over the alphabet; entries outside a row's successor union are
/// zero. Read-only once built, so it can be shared across generators.
#[derive(Clone, Debug, PartialEq)]
pub struct BlendedModel {
    alphabet: Alphabet,
    weights: Array2<f64>,
    has_row: Vec<bool>,
    drift: Drift,
}

impl BlendedModel {
    /// Use a single model directly, each row scaled to sum to one
    ///
    /// Rows with zero total stay empty.
    pub fn from_model(model: &AnchorModel) -> Self {
        let alphabet = Alphabet::from_symbols(model.symbols());
        let mut blended = Self::empty(alphabet, Drift::ANCHOR_A);

        for key in model.keys() {
            if let Some(row) = model.row(key) {
                let normalized = row.normalized();
                blended.fill_row(key, normalized.iter());
            }
        }

        blended
    }

    fn empty(alphabet: Alphabet, drift: Drift) -> Self {
        let n = alphabet.len();
        Self {
            weights: Array2::zeros((n, n)),
            has_row: vec![false; n],
            alphabet,
            drift,
        }
    }

    fn fill_row<I: IntoIterator<Item = (Symbol, f64)>>(&mut self, previous: Symbol, row: I) {
        let Some(k) = self.alphabet.index_of(previous) else {
            return;
        };
        if let Some(flag) = self.has_row.get_mut(k) {
            *flag = true;
        }
        for (next, probability) in row {
            if let Some(j) = self.alphabet.index_of(next) {
                if let Some(cell) = self.weights.get_mut([k, j]) {
                    *cell = probability;
                }
            }
        }
    }

    /// Successors of `previous` with positive probability, in alphabet order
    ///
    /// Empty when the model has no row for `previous`.
    pub fn row(&self, previous: Symbol) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        self.alphabet
            .index_of(previous)
            .into_iter()
            .flat_map(move |k| {
                self.alphabet
                    .iter()
                    .enumerate()
                    .filter_map(move |(j, next)| {
                        self.weights
                            .get([k, j])
                            .copied()
                            .filter(|&w| w > 0.0)
                            .map(|w| (next, w))
                    })
            })
    }

    /// Probability of `next` following `previous`, zero if absent
    pub fn probability(&self, previous: Symbol, next: Symbol) -> f64 {
        match (self.alphabet.index_of(previous), self.alphabet.index_of(next)) {
            (Some(k), Some(j)) => self.weights.get([k, j]).copied().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Sum of the row for `previous`
    pub fn row_sum(&self, previous: Symbol) -> f64 {
        self.row(previous).map(|(_, w)| w).sum()
    }

    /// Whether either source named `previous` as a key
    pub fn has_row(&self, previous: Symbol) -> bool {
        self.alphabet
            .index_of(previous)
            .and_then(|k| self.has_row.get(k))
            .copied()
            .unwrap_or(false)
    }

    /// Previous symbols with a row, in alphabet order
    pub fn keys(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.alphabet
            .iter()
            .zip(&self.has_row)
            .filter(|&(_, &present)| present)
            .map(|(symbol, _)| symbol)
    }

    /// Symbols indexing the table
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Dense probability matrix, rows keyed by previous symbol
    pub const fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Drift this model was blended at
    pub const fn drift(&self) -> Drift {
        self.drift
    }
}

/// Blend two anchors at the given drift
///
/// Total for any pair of models: rows with an empty successor union yield
/// an empty blended row.
pub fn blend(a: &AnchorModel, b: &AnchorModel, drift: Drift) -> BlendedModel {
    let alphabet = Alphabet::from_symbols(a.symbols().chain(b.symbols()));
    let mut blended = BlendedModel::empty(alphabet, drift);
    let alpha = drift.value();

    let keys: BTreeSet<Symbol> = a.keys().chain(b.keys()).collect();
    for key in keys {
        let row_a = a.row(key);
        let row_b = b.row(key);

        let successors: Vec<Symbol> = row_a
            .into_iter()
            .chain(row_b)
            .flat_map(|row| row.symbols())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let logmix: Vec<f64> = successors
            .iter()
            .map(|&next| {
                let ln_a = floored_ln(row_a.and_then(|row| row.weight(next)));
                let ln_b = floored_ln(row_b.and_then(|row| row.weight(next)));
                (1.0 - alpha).mul_add(ln_a, alpha * ln_b)
            })
            .collect();

        let probabilities = stable_softmax(&logmix);
        blended.fill_row(key, successors.into_iter().zip(probabilities));
    }

    tracing::debug!(
        %drift,
        symbols = blended.alphabet.len(),
        "blended anchor models"
    );

    blended
}
