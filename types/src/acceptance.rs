//! Abstract configurations and the acceptance table.
//!
//! Δ is the left automaton's accumulated weight minus the right automaton's,
//! along whatever concrete tape realizes a key. It is never stored.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::{AutomatonState, MachineState, Symbol, Weight};

/// Abstraction of a concrete configuration: machine state, head symbol and
/// the automaton states summarizing each tape half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConfigKey {
    pub state: MachineState,
    pub symbol: Symbol,
    pub left: AutomatonState,
    pub right: AutomatonState,
}

impl ConfigKey {
    #[must_use]
    pub const fn new(
        state: MachineState,
        symbol: Symbol,
        left: AutomatonState,
        right: AutomatonState,
    ) -> Self {
        Self {
            state,
            symbol,
            left,
            right,
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.state, self.symbol, self.left, self.right
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Δ equals the threshold.
    Equal,
    /// The threshold is at most Δ.
    AtLeast,
    /// Δ is at most the threshold.
    AtMost,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    pub mode: Mode,
    #[serde(default)]
    pub threshold: Weight,
}

impl Condition {
    #[must_use]
    pub const fn equal(threshold: Weight) -> Self {
        Self {
            mode: Mode::Equal,
            threshold,
        }
    }

    #[must_use]
    pub const fn at_least(threshold: Weight) -> Self {
        Self {
            mode: Mode::AtLeast,
            threshold,
        }
    }

    #[must_use]
    pub const fn at_most(threshold: Weight) -> Self {
        Self {
            mode: Mode::AtMost,
            threshold,
        }
    }

    #[must_use]
    pub const fn always() -> Self {
        Self {
            mode: Mode::Always,
            threshold: 0,
        }
    }

    #[must_use]
    pub fn admits(self, delta: Weight) -> bool {
        match self.mode {
            Mode::Equal => delta == self.threshold,
            Mode::AtLeast => self.threshold <= delta,
            Mode::AtMost => delta <= self.threshold,
            Mode::Always => true,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            Mode::Equal => write!(f, "Δ = {}", self.threshold),
            Mode::AtLeast => write!(f, "Δ >= {}", self.threshold),
            Mode::AtMost => write!(f, "Δ <= {}", self.threshold),
            Mode::Always => f.write_str("always"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcceptSetError {
    #[error("acceptance table lists {key} more than once")]
    DuplicateKey { key: ConfigKey },
}

/// Partial map from configuration keys to conditions. Absent keys are
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptSet {
    entries: BTreeMap<ConfigKey, Condition>,
}

/// One row of the serialized table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct AcceptEntry {
    #[serde(flatten)]
    key: ConfigKey,
    #[serde(flatten)]
    condition: Condition,
}

impl AcceptSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows, refusing to silently overwrite a repeated key.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (ConfigKey, Condition)>,
    ) -> Result<Self, AcceptSetError> {
        let mut set = Self::new();
        for (key, condition) in entries {
            if set.insert(key, condition).is_some() {
                return Err(AcceptSetError::DuplicateKey { key });
            }
        }
        Ok(set)
    }

    /// Returns the previous condition for `key`, if any.
    pub fn insert(&mut self, key: ConfigKey, condition: Condition) -> Option<Condition> {
        self.entries.insert(key, condition)
    }

    pub fn remove(&mut self, key: &ConfigKey) -> Option<Condition> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &ConfigKey) -> Option<Condition> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConfigKey, Condition)> + '_ {
        self.entries.iter().map(|(key, condition)| (*key, *condition))
    }

    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.entries.keys()
    }
}

impl Serialize for AcceptSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<AcceptEntry> = self
            .iter()
            .map(|(key, condition)| AcceptEntry { key, condition })
            .collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AcceptSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<AcceptEntry>::deserialize(deserializer)?;
        AcceptSet::from_entries(rows.into_iter().map(|row| (row.key, row.condition)))
            .map_err(D::Error::custom)
    }
}
