//! Generator constants and runtime configuration defaults

// Blending
/// Floor substituted for missing or non-positive anchor weights before taking logs
pub const PROBABILITY_FLOOR: f64 = 1e-9;

/// Tolerance used when checking that blended rows sum to one
pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

// Generation bounds
/// Sampling steps allowed per requested syllable before a word is cut off
pub const MAX_STEPS_PER_SYLLABLE: usize = 16;

/// Largest word count accepted by the sequence generator
pub const MAX_WORD_COUNT: usize = 1_000_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default drift, pure anchor A
pub const DEFAULT_DRIFT: f64 = 0.0;

/// Default number of words per sequence
pub const DEFAULT_WORD_COUNT: usize = 8;

/// Smallest syllable budget drawn per word by default
pub const DEFAULT_MIN_SYLLABLES: usize = 2;

/// Largest syllable budget drawn per word by default
pub const DEFAULT_MAX_SYLLABLES: usize = 3;

// Progress bar display settings
/// Word count above which a progress bar is shown
pub const PROGRESS_THRESHOLD: usize = 10_000;

/// Words generated between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 1_000;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
