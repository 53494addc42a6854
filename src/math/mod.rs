//! Mathematical utilities for the generator

/// Log-space probability helpers and information measures
pub mod probability;
