//! Domain types for weighted-automaton non-halting certificates.
//!
//! Pure data with no IO. Every value here may be malformed: range, totality
//! and compatibility are decided by `wfar-core`, not enforced on construction.

mod acceptance;
mod automaton;
mod certificate;
mod machine;

pub use acceptance::{AcceptSet, AcceptSetError, Condition, ConfigKey, Mode};
pub use automaton::{AutomatonState, SignSets, Transition, Weight, WeightedAutomaton};
pub use certificate::Certificate;
pub use machine::{
    Direction, HALT_LABEL, Machine, MachineFormatError, MachineRule, MachineState, Step, Symbol,
    state_label,
};
