//! Batches of independently generated words under one blended model

use crate::generation::sampler::WeightedSampler;
use crate::generation::word::{TracedWord, Word, WordGenerator};
use crate::io::configuration::{
    DEFAULT_MAX_SYLLABLES, DEFAULT_MIN_SYLLABLES, DEFAULT_WORD_COUNT, MAX_WORD_COUNT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::model::anchors::{anchor_a, anchor_b};
use crate::model::blend::{BlendedModel, blend};
use crate::model::drift::Drift;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::ops::RangeInclusive;

/// Parameters shared by every word of a sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of words to generate
    pub word_count: usize,
    /// Range each word draws its syllable budget from
    pub syllables: RangeInclusive<usize>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            syllables: DEFAULT_MIN_SYLLABLES..=DEFAULT_MAX_SYLLABLES,
        }
    }
}

impl SequenceConfig {
    /// Build and validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the word count exceeds the cap or the syllable
    /// range is empty
    pub fn new(word_count: usize, min_syllables: usize, max_syllables: usize) -> Result<Self> {
        let config = Self {
            word_count,
            syllables: min_syllables..=max_syllables,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the word count exceeds the cap or the syllable
    /// range is empty
    pub fn validate(&self) -> Result<()> {
        if self.word_count > MAX_WORD_COUNT {
            return Err(invalid_parameter(
                "word_count",
                &self.word_count,
                &format!("must not exceed {MAX_WORD_COUNT}"),
            ));
        }
        if self.syllables.is_empty() {
            return Err(invalid_parameter(
                "syllables",
                &format!("{}..={}", self.syllables.start(), self.syllables.end()),
                &"minimum must not exceed maximum",
            ));
        }
        Ok(())
    }
}

/// Generates sequences of words, each with its own syllable budget
#[derive(Clone, Debug, Default)]
pub struct SequenceGenerator {
    config: SequenceConfig,
}

impl SequenceGenerator {
    /// Create a generator from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: SequenceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub const fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Draw one word's syllable budget
    pub fn syllable_budget<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(self.config.syllables.clone())
    }

    /// Blend the compiled-in anchors at `drift` and generate a sequence
    pub fn generate_sequence<R: Rng>(&self, drift: Drift, rng: &mut R) -> Vec<Word> {
        let model = blend(anchor_a(), anchor_b(), drift);
        self.generate(&model, rng)
    }

    /// Generate a sequence from an existing model
    pub fn generate<R: Rng>(&self, model: &BlendedModel, rng: &mut R) -> Vec<Word> {
        let generator = WordGenerator::new(model);
        (0..self.config.word_count)
            .map(|_| {
                let budget = self.syllable_budget(rng);
                generator.generate_word(budget, &mut WeightedSampler::new(&mut *rng))
            })
            .collect()
    }

    /// Generate a sequence from an existing model, recording every edge
    pub fn generate_traced<R: Rng>(&self, model: &BlendedModel, rng: &mut R) -> Vec<TracedWord> {
        let generator = WordGenerator::new(model);
        (0..self.config.word_count)
            .map(|_| self.traced_word(&generator, rng))
            .collect()
    }

    /// Generate one traced word with a freshly drawn syllable budget
    pub fn traced_word<R: Rng>(&self, generator: &WordGenerator<'_>, rng: &mut R) -> TracedWord {
        let budget = self.syllable_budget(rng);
        generator.generate_traced(budget, &mut WeightedSampler::new(&mut *rng))
    }
}

/// Generate `word_count` words at drift `alpha` from the compiled-in anchors
///
/// `alpha` is clamped into `[0, 1]`; randomness comes from the operating
/// system and syllable budgets from the default range.
pub fn generate_sequence(alpha: f64, word_count: usize) -> Vec<Word> {
    let generator = SequenceGenerator {
        config: SequenceConfig {
            word_count: word_count.min(MAX_WORD_COUNT),
            ..SequenceConfig::default()
        },
    };
    let mut rng = StdRng::from_os_rng();
    generator.generate_sequence(Drift::clamped(alpha), &mut rng)
}
