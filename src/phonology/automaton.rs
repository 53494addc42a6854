//! Deterministic finite-state machine over phonological classes
//!
//! Encodes which syllable shapes are legal. Besides the plain class-keyed
//! edges, a state may carry a consonant override edge: when present it both
//! permits the consonant class and redirects every consonant to its target,
//! taking precedence over the plain consonant edge.
//!
//! The standard table places the override on `Nucleus`, so consonants after
//! a nucleus start a new onset and only nasals ever reach `Coda`. Downstream
//! output depends on this routing.

use crate::phonology::classes::ClassSet;
use crate::phonology::symbols::Class;
use std::fmt;

/// Position within a syllable
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Initial state before any symbol
    Start,
    /// Consonant preceding the nucleus
    Onset,
    /// Vowel at the syllable core
    Nucleus,
    /// Nasal closing the syllable
    Coda,
    /// Syllable boundary just crossed
    Sep,
}

impl State {
    /// Every state in index order
    pub const ALL: [Self; 5] = [
        Self::Start,
        Self::Onset,
        Self::Nucleus,
        Self::Coda,
        Self::Sep,
    ];

    /// Number of states
    pub const COUNT: usize = Self::ALL.len();

    const fn index(self) -> usize {
        match self {
            Self::Start => 0,
            Self::Onset => 1,
            Self::Nucleus => 2,
            Self::Coda => 3,
            Self::Sep => 4,
        }
    }

    /// Whether a word may end in this state
    pub const fn is_accepting(self) -> bool {
        matches!(self, Self::Nucleus | Self::Coda | Self::Sep)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Onset => "onset",
            Self::Nucleus => "nucleus",
            Self::Coda => "coda",
            Self::Sep => "sep",
        };
        write!(f, "{name}")
    }
}

/// Class automaton with plain edges and per-state consonant overrides
#[derive(Clone, Debug, Default)]
pub struct ClassAutomaton {
    edges: [[Option<State>; Class::COUNT]; State::COUNT],
    consonant_override: [Option<State>; State::COUNT],
}

impl ClassAutomaton {
    /// Create an automaton with no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard syllable grammar
    pub fn standard() -> Self {
        Self::new()
            .with_edge(State::Start, Class::Consonant, State::Onset)
            .with_edge(State::Start, Class::Vowel, State::Nucleus)
            .with_edge(State::Sep, Class::Consonant, State::Onset)
            .with_edge(State::Sep, Class::Vowel, State::Nucleus)
            .with_edge(State::Onset, Class::Vowel, State::Nucleus)
            .with_edge(State::Nucleus, Class::Consonant, State::Coda)
            .with_edge(State::Nucleus, Class::Nasal, State::Coda)
            .with_edge(State::Nucleus, Class::Boundary, State::Sep)
            .with_consonant_override(State::Nucleus, State::Onset)
            .with_edge(State::Coda, Class::Boundary, State::Sep)
            .with_edge(State::Coda, Class::Consonant, State::Onset)
    }

    /// Add or replace a plain edge
    #[must_use]
    pub fn with_edge(mut self, from: State, class: Class, to: State) -> Self {
        if let Some(slot) = self
            .edges
            .get_mut(from.index())
            .and_then(|row| row.get_mut(class.index()))
        {
            *slot = Some(to);
        }
        self
    }

    /// Add or replace the consonant override edge of a state
    #[must_use]
    pub fn with_consonant_override(mut self, from: State, to: State) -> Self {
        if let Some(slot) = self.consonant_override.get_mut(from.index()) {
            *slot = Some(to);
        }
        self
    }

    /// The unique initial state
    pub const fn initial(&self) -> State {
        State::Start
    }

    fn plain_edge(&self, state: State, class: Class) -> Option<State> {
        self.edges
            .get(state.index())
            .and_then(|row| row.get(class.index()))
            .copied()
            .flatten()
    }

    fn override_edge(&self, state: State) -> Option<State> {
        self.consonant_override
            .get(state.index())
            .copied()
            .flatten()
    }

    /// Raw lookup with the consonant override applied
    ///
    /// `None` means the table has no entry for the pair.
    pub fn transition(&self, state: State, class: Class) -> Option<State> {
        if class == Class::Consonant {
            if let Some(target) = self.override_edge(state) {
                return Some(target);
            }
        }
        self.plain_edge(state, class)
    }

    /// Whether a symbol of `class` may follow in `state`
    pub fn allows(&self, state: State, class: Class) -> bool {
        (class == Class::Consonant && self.override_edge(state).is_some())
            || self.plain_edge(state, class).is_some()
    }

    /// Successor state, staying in place when no entry exists
    pub fn next(&self, state: State, class: Class) -> State {
        self.transition(state, class).unwrap_or_else(|| {
            tracing::debug!(%state, %class, "no automaton entry, staying in place");
            state
        })
    }

    /// Classes accepted in `state`
    pub fn legal_classes(&self, state: State) -> ClassSet {
        Class::ALL
            .into_iter()
            .filter(|&class| self.allows(state, class))
            .collect()
    }

    /// Every (state, class) pair without an entry
    ///
    /// These pairs fall back to staying in place.
    pub fn missing_entries(&self) -> Vec<(State, Class)> {
        State::ALL
            .into_iter()
            .flat_map(|state| Class::ALL.into_iter().map(move |class| (state, class)))
            .filter(|&(state, class)| self.transition(state, class).is_none())
            .collect()
    }
}
