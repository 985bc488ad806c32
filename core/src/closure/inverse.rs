//! Reverse lookup of automaton transitions.

use wfar_types::{AutomatonState, Symbol, Weight, WeightedAutomaton};

/// One way of having arrived in a state: the state before, the symbol read
/// and the weight the transition added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predecessor {
    pub state: AutomatonState,
    pub symbol: Symbol,
    pub weight: Weight,
}

/// For every automaton state, all transitions that land on it.
///
/// Built once per automaton and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct InverseIndex {
    by_target: Vec<Vec<Predecessor>>,
}

impl InverseIndex {
    /// Index every in-range transition. Targets past the state count are
    /// skipped; structural validation has already rejected them.
    #[must_use]
    pub fn build(wfa: &WeightedAutomaton) -> Self {
        let mut by_target = vec![Vec::new(); wfa.states];
        for (state, symbol, transition) in wfa.entries() {
            if let Some(bucket) = by_target.get_mut(transition.next.index()) {
                bucket.push(Predecessor {
                    state,
                    symbol,
                    weight: transition.weight,
                });
            }
        }
        Self { by_target }
    }

    #[must_use]
    pub fn predecessors(&self, target: AutomatonState) -> &[Predecessor] {
        self.by_target
            .get(target.index())
            .map_or(&[], Vec::as_slice)
    }
}
