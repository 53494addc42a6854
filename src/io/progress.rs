//! Progress display for large generation batches

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD, PROGRESS_UPDATE_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Words: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress bar shown only for batches above the display threshold
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a batch of `word_count` words
    pub fn initialize(&mut self, word_count: usize) {
        if word_count >= PROGRESS_THRESHOLD {
            let bar = ProgressBar::new(word_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Whether a bar is being displayed
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Report the number of words generated so far
    pub fn update(&self, generated: usize) {
        if let Some(ref bar) = self.bar {
            if generated % PROGRESS_UPDATE_INTERVAL == 0 {
                bar.set_position(generated as u64);
            }
        }
    }

    /// Clear the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
