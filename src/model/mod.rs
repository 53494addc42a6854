//! Markov transition models and their drift blend

/// Compiled-in anchor transition tables
pub mod anchors;
/// Log-space interpolation of two anchors
pub mod blend;
/// Memoization of blended models keyed on drift
pub mod cache;
/// Drift coefficient newtype
pub mod drift;
/// Transition rows and anchor models
pub mod row;
