//! Sets of possible Δ values, used to decide whether one condition entails
//! another after a step shifts Δ by a known offset.
//!
//! Bounds are `i128` so translating an `i64` threshold by a sum of `i64`
//! weights cannot overflow.

use wfar_types::{Condition, Mode};

/// A closed integer interval; `None` bounds are unbounded. Empty when
/// `lo > hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    lo: Option<i128>,
    hi: Option<i128>,
}

impl Interval {
    pub const UNBOUNDED: Interval = Interval { lo: None, hi: None };

    #[must_use]
    pub const fn new(lo: Option<i128>, hi: Option<i128>) -> Self {
        Self { lo, hi }
    }

    /// All Δ a condition admits.
    #[must_use]
    pub fn of(condition: Condition) -> Self {
        let t = i128::from(condition.threshold);
        match condition.mode {
            Mode::Equal => Self::new(Some(t), Some(t)),
            Mode::AtLeast => Self::new(Some(t), None),
            Mode::AtMost => Self::new(None, Some(t)),
            Mode::Always => Self::UNBOUNDED,
        }
    }

    #[must_use]
    pub fn translate(self, offset: i128) -> Self {
        Self {
            lo: self.lo.map(|lo| lo + offset),
            hi: self.hi.map(|hi| hi + offset),
        }
    }

    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        let lo = match (self.lo, other.lo) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let hi = match (self.hi, other.hi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        Self { lo, hi }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!((self.lo, self.hi), (Some(lo), Some(hi)) if lo > hi)
    }

    /// Whether every value in `self` satisfies `condition`.
    #[must_use]
    pub fn within(self, condition: Condition) -> bool {
        if self.is_empty() {
            return true;
        }
        let target = Self::of(condition);
        let lo_ok = match (target.lo, self.lo) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(bound), Some(lo)) => bound <= lo,
        };
        let hi_ok = match (target.hi, self.hi) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(bound), Some(hi)) => hi <= bound,
        };
        lo_ok && hi_ok
    }
}
