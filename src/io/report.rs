//! Text rendering of generated words and their traces

use crate::generation::word::{Edge, TracedWord, Word};
use std::fmt::Write;

/// Aggregate statistics over a batch of traced words
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceSummary {
    /// Number of words
    pub words: usize,
    /// Words with no visible symbol
    pub empty_words: usize,
    /// Number of sampled edges
    pub edges: usize,
    /// Mean surprise per edge, in nats
    pub mean_surprise: f64,
    /// Largest surprise of any edge, in nats
    pub max_surprise: f64,
}

impl TraceSummary {
    /// Summarize a batch of traced words
    pub fn from_traces(traces: &[TracedWord]) -> Self {
        let edges: Vec<&Edge> = traces.iter().flat_map(|t| &t.edges).collect();
        let total: f64 = edges.iter().map(|e| e.surprise).sum();

        Self {
            words: traces.len(),
            empty_words: traces.iter().filter(|t| t.word.is_empty()).count(),
            edges: edges.len(),
            mean_surprise: if edges.is_empty() {
                0.0
            } else {
                total / edges.len() as f64
            },
            max_surprise: edges.iter().map(|e| e.surprise).fold(0.0, f64::max),
        }
    }
}

/// One word per line
pub fn render_words(words: &[Word]) -> String {
    let mut out = String::new();
    for word in words {
        let _ = writeln!(out, "{word}");
    }
    out
}

/// Format a single edge as an indented table row
pub fn render_edge(edge: &Edge) -> String {
    format!(
        "  {} -> {}  raw={:.4}  eff={:.4}  surprise={:.4}",
        edge.previous,
        edge.next,
        edge.raw_probability,
        edge.effective_probability,
        edge.surprise
    )
}

/// Each word followed by its edges, then a batch summary
pub fn render_traces(traces: &[TracedWord]) -> String {
    let mut out = String::new();
    for trace in traces {
        let _ = writeln!(
            out,
            "{} ({} syllables, {:.4} nats)",
            trace.word,
            trace.word.syllables(),
            trace.total_surprise()
        );
        for edge in &trace.edges {
            let _ = writeln!(out, "{}", render_edge(edge));
        }
    }

    let summary = TraceSummary::from_traces(traces);
    let _ = writeln!(
        out,
        "{} words ({} empty), {} edges, mean surprise {:.4}, max surprise {:.4}",
        summary.words, summary.empty_words, summary.edges, summary.mean_surprise, summary.max_surprise
    );
    out
}
