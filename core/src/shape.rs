//! Shape of the invariant: the leading-blank normalization and closure of
//! the sign-stable sets.

use wfar_types::{AutomatonState, SignSets, Symbol, Weight, WeightedAutomaton};

/// The start state loops on blank with zero weight, so padding a tape half
/// with any number of blanks leaves its summary unchanged.
#[must_use]
pub fn leading_blank_holds(wfa: &WeightedAutomaton) -> bool {
    match wfa.transition(wfa.start, Symbol::BLANK) {
        Some(transition) if transition.next == wfa.start && transition.weight == 0 => true,
        other => {
            tracing::debug!(start = %wfa.start, ?other, "start state does not self-loop on blank with zero weight");
            false
        }
    }
}

/// Every transition into a sign-stable state comes from the same set and
/// carries a weight of that sign.
///
/// Checked over all states and symbols, reachable or not.
#[must_use]
pub fn sign_sets_closed(wfa: &WeightedAutomaton, signs: &SignSets) -> bool {
    wfa.entries().all(|(state, symbol, transition)| {
        let retained = transition_retains_sign(state, transition.next, transition.weight, signs);
        if !retained {
            tracing::debug!(%state, %symbol, next = %transition.next, weight = transition.weight, "transition escapes a sign-stable set");
        }
        retained
    })
}

fn transition_retains_sign(
    from: AutomatonState,
    to: AutomatonState,
    weight: Weight,
    signs: &SignSets,
) -> bool {
    if signs.contains_non_positive(to) && (!signs.contains_non_positive(from) || weight > 0) {
        return false;
    }
    if signs.contains_non_negative(to) && (!signs.contains_non_negative(from) || weight < 0) {
        return false;
    }
    true
}
