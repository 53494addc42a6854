//! Product-automaton word and sequence generation

/// Candidate selection policies
pub mod sampler;
/// Batches of independently generated words
pub mod sequence;
/// Single-word generation with optional tracing
pub mod word;
