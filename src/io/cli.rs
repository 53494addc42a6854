//! Command-line interface for batch word generation

use crate::generation::sequence::{SequenceConfig, SequenceGenerator};
use crate::generation::word::{TracedWord, WordGenerator};
use crate::io::configuration::{
    DEFAULT_DRIFT, DEFAULT_MAX_SYLLABLES, DEFAULT_MIN_SYLLABLES, DEFAULT_SEED, DEFAULT_WORD_COUNT,
};
use crate::io::error::{Result, file_system_error};
use crate::io::progress::ProgressManager;
use crate::io::report::{render_traces, render_words};
use crate::model::anchors::{anchor_a, anchor_b};
use crate::model::blend::blend;
use crate::model::drift::Drift;
use clap::{ArgAction, Parser};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "phonodrift")]
#[command(
    author,
    version,
    about = "Generate words from drifting phonotactic Markov models"
)]
/// Command-line arguments for the word generation tool
pub struct Cli {
    /// Drift between anchor A (0.0) and anchor B (1.0)
    #[arg(short, long, default_value_t = DEFAULT_DRIFT)]
    pub drift: f64,

    /// Clamp an out-of-range drift instead of rejecting it
    #[arg(long)]
    pub clamp: bool,

    /// Number of words to generate
    #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT)]
    pub words: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Smallest syllable budget per word
    #[arg(long, default_value_t = DEFAULT_MIN_SYLLABLES)]
    pub min_syllables: usize,

    /// Largest syllable budget per word
    #[arg(long, default_value_t = DEFAULT_MAX_SYLLABLES)]
    pub max_syllables: usize,

    /// Print every sampled transition with its probabilities and surprise
    #[arg(short, long)]
    pub trace: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter directive implied by the verbosity flag
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Validated drift, clamped when requested
    ///
    /// # Errors
    ///
    /// Returns an error if the drift is out of range and clamping is off
    pub fn drift(&self) -> Result<Drift> {
        if self.clamp {
            Ok(Drift::clamped(self.drift))
        } else {
            Drift::new(self.drift)
        }
    }

    /// Validated sequence configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the word count or syllable range is invalid
    pub fn sequence_config(&self) -> Result<SequenceConfig> {
        SequenceConfig::new(self.words, self.min_syllables, self.max_syllables)
    }
}

/// Orchestrates one generation run with progress tracking
pub struct SequenceRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SequenceRunner {
    /// Create a runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and render words according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation fails or output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let output = self.render()?;

        match &self.cli.output {
            Some(path) => std::fs::write(path, output)
                .map_err(|source| file_system_error(path, "write", source)),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(output.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
        }
    }

    /// Generate words and render them as text
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation fails
    pub fn render(&mut self) -> Result<String> {
        let traces = self.generate()?;

        if self.cli.trace {
            Ok(render_traces(&traces))
        } else {
            let words: Vec<_> = traces.into_iter().map(|t| t.word).collect();
            Ok(render_words(&words))
        }
    }

    fn generate(&mut self) -> Result<Vec<TracedWord>> {
        let drift = self.cli.drift()?;
        let sequence = SequenceGenerator::new(self.cli.sequence_config()?)?;
        let word_count = sequence.config().word_count;

        let start = Instant::now();
        let model = blend(anchor_a(), anchor_b(), drift);
        let generator = WordGenerator::new(&model);
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(word_count);
        }

        let mut traces = Vec::with_capacity(word_count);
        for index in 0..word_count {
            traces.push(sequence.traced_word(&generator, &mut rng));
            if let Some(ref pm) = self.progress_manager {
                pm.update(index + 1);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        tracing::info!(
            %drift,
            words = word_count,
            seed = self.cli.seed,
            elapsed_secs = start.elapsed().as_secs_f64(),
            "generated sequence"
        );

        Ok(traces)
    }
}
