//! Builders shared by the unit tests.

use wfar_types::{
    AcceptSet, AutomatonState, Certificate, Condition, ConfigKey, Machine, MachineState,
    SignSets, Symbol, Transition, WeightedAutomaton,
};

pub fn transition(next: u32, weight: i64) -> Transition {
    Transition {
        next: AutomatonState(next),
        weight,
    }
}

pub fn key(state: u32, symbol: u32, left: u32, right: u32) -> ConfigKey {
    ConfigKey::new(
        MachineState(state),
        Symbol(symbol),
        AutomatonState(left),
        AutomatonState(right),
    )
}

pub fn signs(non_negative: &[u32], non_positive: &[u32]) -> SignSets {
    SignSets {
        non_negative: non_negative.iter().copied().map(AutomatonState).collect(),
        non_positive: non_positive.iter().copied().map(AutomatonState).collect(),
    }
}

/// Every state loops to itself with zero weight.
pub fn constant_wfa(states: usize, symbols: usize) -> WeightedAutomaton {
    WeightedAutomaton {
        states,
        symbols,
        start: AutomatonState(0),
        transitions: (0..states)
            .map(|state| vec![transition(state as u32, 0); symbols])
            .collect(),
    }
}

/// One state; each 1 read adds one.
pub fn ones_counter() -> WeightedAutomaton {
    WeightedAutomaton {
        states: 1,
        symbols: 2,
        start: AutomatonState(0),
        transitions: vec![vec![transition(0, 0), transition(0, 1)]],
    }
}

/// q0 while only blanks have been read, q1 forever after the first 1.
pub fn blank_tracker() -> WeightedAutomaton {
    WeightedAutomaton {
        states: 2,
        symbols: 2,
        start: AutomatonState(0),
        transitions: vec![
            vec![transition(0, 0), transition(1, 0)],
            vec![transition(1, 0), transition(1, 0)],
        ],
    }
}

/// A single state that writes 1 and moves right on blank; halts on 1.
pub fn counting_machine() -> Machine {
    Machine::parse_standard("1RA---").expect("fixture machine is well-formed")
}

/// The counting machine with the left half counting ones and the right half
/// known to be blank. Δ never drops below zero.
pub fn counting_certificate() -> Certificate {
    let mut accept = AcceptSet::new();
    accept.insert(key(0, 0, 0, 0), Condition::at_least(0));
    Certificate {
        machine: counting_machine(),
        left: ones_counter(),
        right: blank_tracker(),
        left_signs: SignSets::default(),
        right_signs: SignSets::default(),
        accept,
    }
}
