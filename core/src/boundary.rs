//! Acceptance at the edges of the run: the initial configuration must be
//! accepted and no configuration one step from halting may be.

use wfar_types::{AcceptSet, ConfigKey, Machine, MachineState, Symbol, WeightedAutomaton};

/// The true initial configuration is accepted with a condition that admits
/// Δ = 0, since neither automaton has accumulated weight yet.
#[must_use]
pub fn start_config_accepted(
    left: &WeightedAutomaton,
    right: &WeightedAutomaton,
    accept: &AcceptSet,
) -> bool {
    let key = ConfigKey::new(MachineState::START, Symbol::BLANK, left.start, right.start);
    match accept.get(&key) {
        Some(condition) if condition.admits(0) => true,
        Some(condition) => {
            tracing::debug!(%key, %condition, "start configuration rejects Δ = 0");
            false
        }
        None => {
            tracing::debug!(%key, "start configuration not accepted");
            false
        }
    }
}

#[must_use]
pub fn no_halting_config_accepted(machine: &Machine, accept: &AcceptSet) -> bool {
    accept.keys().all(|key| {
        if key.state.index() >= machine.states {
            tracing::debug!(%key, states = machine.states, "accepted key has out-of-range machine state");
            return false;
        }
        if halts_next_step(machine, key.state, key.symbol) {
            tracing::debug!(%key, "accepted key halts on the next step");
            return false;
        }
        true
    })
}

/// Absent entries, explicit halts and out-of-range targets all halt.
#[must_use]
pub fn halts_next_step(machine: &Machine, state: MachineState, symbol: Symbol) -> bool {
    machine.step(state, symbol).is_none()
}
