//! Well-formedness of the machine and both automata.

use wfar_types::{AutomatonState, Machine, Symbol, WeightedAutomaton};

#[must_use]
pub fn machine_is_valid(machine: &Machine) -> bool {
    if machine.states == 0 || machine.symbols == 0 {
        tracing::debug!(
            states = machine.states,
            symbols = machine.symbols,
            "machine has an empty state set or alphabet"
        );
        return false;
    }
    true
}

/// The automaton is non-empty, starts in range, and has an in-range
/// transition for every state and symbol.
#[must_use]
pub fn automaton_is_deterministic(wfa: &WeightedAutomaton) -> bool {
    if wfa.states == 0 || wfa.symbols == 0 {
        tracing::debug!(
            states = wfa.states,
            symbols = wfa.symbols,
            "automaton has an empty state set or alphabet"
        );
        return false;
    }
    if wfa.start.index() >= wfa.states {
        tracing::debug!(start = %wfa.start, states = wfa.states, "automaton start out of range");
        return false;
    }
    for state in 0..wfa.states {
        for symbol in 0..wfa.symbols {
            let state = AutomatonState(state as u32);
            let symbol = Symbol(symbol as u32);
            match wfa.transition(state, symbol) {
                None => {
                    tracing::debug!(%state, %symbol, "automaton transition missing");
                    return false;
                }
                Some(transition) if transition.next.index() >= wfa.states => {
                    tracing::debug!(%state, %symbol, next = %transition.next, "automaton target out of range");
                    return false;
                }
                Some(_) => {}
            }
        }
    }
    true
}

#[must_use]
pub fn alphabets_compatible(
    machine: &Machine,
    left: &WeightedAutomaton,
    right: &WeightedAutomaton,
) -> bool {
    let compatible = machine.symbols == left.symbols && machine.symbols == right.symbols;
    if !compatible {
        tracing::debug!(
            machine = machine.symbols,
            left = left.symbols,
            right = right.symbols,
            "alphabet sizes disagree"
        );
    }
    compatible
}
