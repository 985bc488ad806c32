//! One-step closure of the acceptance table.
//!
//! For each accepted key the machine takes its single defined step. The tape
//! half the head leaves gains the written symbol, so its automaton runs one
//! transition forward. The half the head enters loses its innermost symbol,
//! which is unknown, so every transition landing on that half's state is a
//! hypothesis for the new head symbol and the remaining summary. Each
//! hypothesis must lead to an accepted key whose condition is entailed by
//! the old condition shifted by the weights involved.
//!
//! Δ is left weight minus right weight. Moving right adds the written
//! symbol's weight on the left and removes the consumed symbol's weight on
//! the right, so both raise Δ; moving left lowers it by the same sum.

mod interval;
mod inverse;

pub use interval::Interval;
pub use inverse::{InverseIndex, Predecessor};

use wfar_types::{
    AcceptSet, AutomatonState, Condition, ConfigKey, Direction, Machine, SignSets,
    WeightedAutomaton,
};

/// One tape half's summarizer and what is known about it.
#[derive(Debug)]
struct Side<'a> {
    wfa: &'a WeightedAutomaton,
    signs: &'a SignSets,
    inverse: InverseIndex,
}

impl<'a> Side<'a> {
    fn new(wfa: &'a WeightedAutomaton, signs: &'a SignSets) -> Self {
        Self {
            wfa,
            signs,
            inverse: InverseIndex::build(wfa),
        }
    }
}

/// Checks accepted keys against the table, sharing one inverse index per
/// automaton across all keys.
#[derive(Debug)]
pub struct ClosureEngine<'a> {
    machine: &'a Machine,
    accept: &'a AcceptSet,
    left: Side<'a>,
    right: Side<'a>,
}

impl<'a> ClosureEngine<'a> {
    #[must_use]
    pub fn new(
        machine: &'a Machine,
        left: (&'a WeightedAutomaton, &'a SignSets),
        right: (&'a WeightedAutomaton, &'a SignSets),
        accept: &'a AcceptSet,
    ) -> Self {
        Self {
            machine,
            accept,
            left: Side::new(left.0, left.1),
            right: Side::new(right.0, right.1),
        }
    }

    /// Bounds on Δ implied by sign-stable membership alone.
    ///
    /// A state in a sign-stable set is only reachable through that set with
    /// weights of that sign, so its accumulated weight has that sign too.
    #[must_use]
    pub fn sign_facts(&self, left: AutomatonState, right: AutomatonState) -> Interval {
        let lower = (self.left.signs.contains_non_negative(left)
            && self.right.signs.contains_non_positive(right))
        .then_some(0);
        let upper = (self.left.signs.contains_non_positive(left)
            && self.right.signs.contains_non_negative(right))
        .then_some(0);
        Interval::new(lower, upper)
    }

    #[must_use]
    pub fn all_closed(&self) -> bool {
        self.accept
            .iter()
            .all(|(key, condition)| self.key_closed(key, condition))
    }

    #[must_use]
    pub fn key_closed(&self, key: ConfigKey, condition: Condition) -> bool {
        let Some(step) = self.machine.step(key.state, key.symbol) else {
            tracing::debug!(%key, "accepted key has no successor move");
            return false;
        };

        if step.write.index() >= self.machine.symbols {
            tracing::debug!(%key, write = %step.write, "machine writes a symbol outside its alphabet");
            return false;
        }

        let (extended, decomposed, extended_state, decomposed_state) = match step.direction {
            Direction::Right => (&self.left, &self.right, key.left, key.right),
            Direction::Left => (&self.right, &self.left, key.right, key.left),
        };

        let Some(written) = extended.wfa.transition(extended_state, step.write) else {
            tracing::debug!(%key, write = %step.write, "written symbol has no automaton transition");
            return false;
        };

        let hypotheses = decomposed.inverse.predecessors(decomposed_state);
        if hypotheses.is_empty() {
            tracing::debug!(%key, state = %decomposed_state, "no transition reaches the entered half's state");
            return false;
        }

        let before = Interval::of(condition).intersect(self.sign_facts(key.left, key.right));

        hypotheses.iter().all(|hypothesis| {
            let (left, right) = match step.direction {
                Direction::Right => (written.next, hypothesis.state),
                Direction::Left => (hypothesis.state, written.next),
            };
            let successor = ConfigKey::new(step.next, hypothesis.symbol, left, right);

            let Some(required) = self.accept.get(&successor) else {
                tracing::debug!(%key, %successor, "successor configuration not accepted");
                return false;
            };

            let moved = i128::from(written.weight) + i128::from(hypothesis.weight);
            let offset = match step.direction {
                Direction::Right => moved,
                Direction::Left => -moved,
            };
            let after = before
                .translate(offset)
                .intersect(self.sign_facts(left, right));

            let entailed = after.within(required);
            if !entailed {
                tracing::debug!(%key, %condition, %successor, %required, offset = %offset, "successor condition not entailed");
            }
            entailed
        })
    }
}

/// Every accepted key steps only to accepted keys with entailed conditions.
#[must_use]
pub fn forward_closed(
    machine: &Machine,
    left: &WeightedAutomaton,
    right: &WeightedAutomaton,
    left_signs: &SignSets,
    right_signs: &SignSets,
    accept: &AcceptSet,
) -> bool {
    ClosureEngine::new(machine, (left, left_signs), (right, right_signs), accept).all_closed()
}
