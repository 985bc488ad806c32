//! Deterministic weighted automata that summarize one half of the tape.
//!
//! An automaton reads its tape half from the far blank end toward the head.
//! Unlike the machine, its table is meant to be total; a missing entry is
//! malformed data rather than a halt, which is why [`Transition`] has no
//! halting variant.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Symbol;

pub type Weight = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutomatonState(pub u32);

impl AutomatonState {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AutomatonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub next: AutomatonState,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedAutomaton {
    pub states: usize,
    pub symbols: usize,
    pub start: AutomatonState,
    /// One row per state, one transition per symbol.
    pub transitions: Vec<Vec<Transition>>,
}

impl WeightedAutomaton {
    /// The transition at `(state, symbol)`. Entries stored past the declared
    /// state count or alphabet size are never returned.
    #[must_use]
    pub fn transition(&self, state: AutomatonState, symbol: Symbol) -> Option<Transition> {
        if state.index() >= self.states || symbol.index() >= self.symbols {
            return None;
        }
        self.transitions
            .get(state.index())
            .and_then(|row| row.get(symbol.index()))
            .copied()
    }

    /// Every `(state, symbol, transition)` inside the declared bounds that
    /// has an entry.
    pub fn entries(&self) -> impl Iterator<Item = (AutomatonState, Symbol, Transition)> + '_ {
        (0..self.states).flat_map(move |state| {
            (0..self.symbols).filter_map(move |symbol| {
                let state = AutomatonState(state as u32);
                let symbol = Symbol(symbol as u32);
                self.transition(state, symbol)
                    .map(|transition| (state, symbol, transition))
            })
        })
    }
}

/// States whose accumulated weight keeps a fixed sign under every extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignSets {
    #[serde(default)]
    pub non_negative: BTreeSet<AutomatonState>,
    #[serde(default)]
    pub non_positive: BTreeSet<AutomatonState>,
}

impl SignSets {
    #[must_use]
    pub fn contains_non_negative(&self, state: AutomatonState) -> bool {
        self.non_negative.contains(&state)
    }

    #[must_use]
    pub fn contains_non_positive(&self, state: AutomatonState) -> bool {
        self.non_positive.contains(&state)
    }
}
