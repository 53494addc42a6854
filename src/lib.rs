//! Phonotactic word generation from two drifting Markov anchors
//!
//! Words are sampled from a product automaton: a Markov transition table,
//! blended in log space between two anchor models, is intersected at every
//! step with the symbol classes a syllable-structure automaton accepts.
//! Traced generation reports the raw probability, renormalized effective
//! probability and surprise of every sampled transition.

#![forbid(unsafe_code)]

/// Word and sequence generation over the product automaton
pub mod generation;
/// Input/output operations, configuration and error handling
pub mod io;
/// Log-space probability helpers
pub mod math;
/// Anchor models, drift and blending
pub mod model;
/// Symbol classes and the syllable automaton
pub mod phonology;

pub use generation::sampler::{MostProbable, SamplingPolicy, WeightedSampler};
pub use generation::sequence::generate_sequence;
pub use generation::word::{Edge, TracedWord, Word, WordGenerator};
pub use io::error::{PhonoError, Result};
pub use model::blend::{BlendedModel, blend};
pub use model::drift::Drift;
