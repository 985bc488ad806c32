//! The full proof object handed to the verifier.

use serde::{Deserialize, Serialize};

use crate::{AcceptSet, Machine, SignSets, WeightedAutomaton};

/// A claimed non-halting proof. Nothing here is trusted until the verifier
/// has checked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub machine: Machine,
    pub left: WeightedAutomaton,
    pub right: WeightedAutomaton,
    #[serde(default)]
    pub left_signs: SignSets,
    #[serde(default)]
    pub right_signs: SignSets,
    pub accept: AcceptSet,
}
