//! Product-automaton word generation
//!
//! Each step intersects the blended Markov row of the last symbol with the
//! classes the automaton accepts in its current state, renormalizes the
//! surviving mass and samples one successor. A boundary symbol, or landing
//! in `Sep`, completes a syllable and resets the Markov cursor to the
//! boundary. Generation stops once the syllable budget is spent or no legal
//! successor remains.

use crate::generation::sampler::{Candidate, SamplingPolicy};
use crate::io::configuration::MAX_STEPS_PER_SYLLABLE;
use crate::math::probability::surprise;
use crate::model::blend::BlendedModel;
use crate::phonology::automaton::{ClassAutomaton, State};
use crate::phonology::symbols::{Class, ClassTable, Symbol};
use std::fmt;

/// Boundary-stripped symbol sequence
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Word {
    symbols: Vec<Symbol>,
    syllables: usize,
}

impl Word {
    /// Visible symbols in order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Syllables completed while generating this word
    pub const fn syllables(&self) -> usize {
        self.syllables
    }

    /// Number of visible symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no visible symbol was produced
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// One sampled transition with its probability statistics
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Markov cursor before the step
    pub previous: Symbol,
    /// Sampled successor
    pub next: Symbol,
    /// Blended probability of `next` after `previous`
    pub raw_probability: f64,
    /// Probability renormalized over the legal candidates of the step
    pub effective_probability: f64,
    /// Negative natural log of the effective probability
    pub surprise: f64,
}

/// A word together with every transition sampled while building it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TracedWord {
    /// The generated word
    pub word: Word,
    /// Sampled transitions, boundary steps included
    pub edges: Vec<Edge>,
}

impl TracedWord {
    /// Summed surprise over all edges, in nats
    pub fn total_surprise(&self) -> f64 {
        self.edges.iter().map(|edge| edge.surprise).sum()
    }
}

/// Samples words from a blended model under the class automaton
pub struct WordGenerator<'m> {
    model: &'m BlendedModel,
    automaton: ClassAutomaton,
    classes: ClassTable,
}

impl<'m> WordGenerator<'m> {
    /// Generator over the standard syllable grammar and alphabet
    pub fn new(model: &'m BlendedModel) -> Self {
        Self::with_grammar(model, ClassAutomaton::standard(), ClassTable::standard())
    }

    /// Generator over a custom automaton and class table
    pub const fn with_grammar(
        model: &'m BlendedModel,
        automaton: ClassAutomaton,
        classes: ClassTable,
    ) -> Self {
        Self {
            model,
            automaton,
            classes,
        }
    }

    /// The automaton constraining generation
    pub const fn automaton(&self) -> &ClassAutomaton {
        &self.automaton
    }

    /// The symbol classification in use
    pub const fn classes(&self) -> &ClassTable {
        &self.classes
    }

    /// Generate one word of at most `max_syllables` syllables
    pub fn generate_word<P: SamplingPolicy>(&self, max_syllables: usize, policy: &mut P) -> Word {
        self.run(max_syllables, policy, None)
    }

    /// Generate one word and record every sampled edge
    pub fn generate_traced<P: SamplingPolicy>(
        &self,
        max_syllables: usize,
        policy: &mut P,
    ) -> TracedWord {
        let mut edges = Vec::new();
        let word = self.run(max_syllables, policy, Some(&mut edges));
        TracedWord { word, edges }
    }

    /// Legal successors of `previous` in `state` and their summed probability
    pub fn candidates(&self, state: State, previous: Symbol) -> (Vec<Candidate>, f64) {
        let candidates: Vec<Candidate> = self
            .model
            .row(previous)
            .filter_map(|(symbol, probability)| {
                let class = self.classes.class_of(symbol);
                (probability > 0.0 && self.automaton.allows(state, class)).then_some(Candidate {
                    symbol,
                    class,
                    probability,
                })
            })
            .collect();
        let total = candidates.iter().map(|c| c.probability).sum();
        (candidates, total)
    }

    fn run<P: SamplingPolicy>(
        &self,
        max_syllables: usize,
        policy: &mut P,
        mut edges: Option<&mut Vec<Edge>>,
    ) -> Word {
        let mut state = self.automaton.initial();
        let mut last = Symbol::BOUNDARY;
        let mut word = Word::default();
        let step_limit = max_syllables.saturating_mul(MAX_STEPS_PER_SYLLABLE);
        let mut steps = 0;

        while word.syllables < max_syllables {
            if steps >= step_limit {
                tracing::debug!(
                    steps,
                    syllables = word.syllables,
                    "step limit reached, cutting word short"
                );
                break;
            }
            steps += 1;

            let (candidates, total) = self.candidates(state, last);
            if candidates.is_empty() || total <= 0.0 {
                break;
            }

            let Some(chosen) = policy
                .choose(&candidates, total)
                .and_then(|index| candidates.get(index))
            else {
                break;
            };

            if let Some(edges) = edges.as_mut() {
                let effective = chosen.probability / total;
                let edge = Edge {
                    previous: last,
                    next: chosen.symbol,
                    raw_probability: chosen.probability,
                    effective_probability: effective,
                    surprise: surprise(effective),
                };
                tracing::trace!(?edge, %state, "sampled edge");
                edges.push(edge);
            }

            if !chosen.symbol.is_boundary() {
                word.symbols.push(chosen.symbol);
            }

            state = self.automaton.next(state, chosen.class);
            if chosen.class == Class::Boundary || state == State::Sep {
                word.syllables += 1;
                state = State::Sep;
                last = Symbol::BOUNDARY;
            } else {
                last = chosen.symbol;
            }
        }

        word
    }
}
