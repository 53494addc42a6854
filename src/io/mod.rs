/// Command-line interface and run orchestration
pub mod cli;
/// Generator constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display for large batches
pub mod progress;
/// Text rendering of words and traces
pub mod report;
