//! Candidate selection policies for the word generator
//!
//! The generator never draws randomness itself; it hands the legal
//! candidates of each step to a [`SamplingPolicy`]. Production code uses a
//! [`WeightedSampler`], tests substitute [`MostProbable`] or [`Scripted`].

use crate::phonology::symbols::{Class, Symbol};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;

/// A legal successor at one generation step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Successor symbol
    pub symbol: Symbol,
    /// Class of the successor
    pub class: Class,
    /// Raw blended probability, before renormalization over the legal set
    pub probability: f64,
}

/// Picks one candidate per generation step
pub trait SamplingPolicy {
    /// Index of the chosen candidate
    ///
    /// `total` is the summed probability of `candidates`. Returning `None`
    /// ends the word early.
    fn choose(&mut self, candidates: &[Candidate], total: f64) -> Option<usize>;
}

impl<P: SamplingPolicy + ?Sized> SamplingPolicy for &mut P {
    fn choose(&mut self, candidates: &[Candidate], total: f64) -> Option<usize> {
        (**self).choose(candidates, total)
    }
}

/// Proportional sampling driven by an injected random source
///
/// Candidates are visited in a freshly shuffled order each step, so no
/// candidate gains precedence from its position in the row.
pub struct WeightedSampler<R> {
    rng: R,
}

impl WeightedSampler<StdRng> {
    /// Create a deterministic sampler
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a sampler seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> WeightedSampler<R> {
    /// Wrap a random source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Access the underlying random source
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: Rng> SamplingPolicy for WeightedSampler<R> {
    fn choose(&mut self, candidates: &[Candidate], total: f64) -> Option<usize> {
        if candidates.is_empty() || total <= 0.0 {
            return None;
        }

        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.shuffle(&mut self.rng);

        let mut rand_val = self.rng.random::<f64>() * total;
        let mut last = None;
        for index in order {
            let Some(candidate) = candidates.get(index) else {
                continue;
            };
            rand_val -= candidate.probability;
            last = Some(index);
            if rand_val <= 0.0 {
                return Some(index);
            }
        }
        // Rounding can leave a sliver of mass unassigned
        last
    }
}

/// Always picks the highest-probability candidate
///
/// Ties go to the earliest candidate in row order.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostProbable;

impl SamplingPolicy for MostProbable {
    fn choose(&mut self, candidates: &[Candidate], _total: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            if best.is_none_or(|(_, p)| candidate.probability > p) {
                best = Some((index, candidate.probability));
            }
        }
        best.map(|(index, _)| index)
    }
}

/// Replays a fixed list of candidate indices
///
/// Ends the word once the script runs out or names an index out of range.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    picks: VecDeque<usize>,
}

impl Scripted {
    /// Create a script from candidate indices
    pub fn new<I: IntoIterator<Item = usize>>(picks: I) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Picks not yet consumed
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl SamplingPolicy for Scripted {
    fn choose(&mut self, candidates: &[Candidate], _total: f64) -> Option<usize> {
        self.picks
            .pop_front()
            .filter(|&index| index < candidates.len())
    }
}
