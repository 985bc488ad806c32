//! Head automaton being certified.
//!
//! The transition table is *partial*: an entry may be missing or explicitly
//! [`MachineRule::Halt`], and a [`MachineRule::Step`] may name a state past
//! the state count. All three mean the machine halts.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tape symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub u32);

impl Symbol {
    /// The symbol every unwritten cell holds.
    pub const BLANK: Symbol = Symbol(0);

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Label rendered for a halting target.
pub const HALT_LABEL: &str = "[HALT]";

/// A machine state index. State 0 is the start state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineState(pub u32);

impl MachineState {
    pub const START: MachineState = MachineState(0);

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Letter label for a state: `A`, `B`, ... `Z`, then the raw index.
#[must_use]
pub fn state_label(state: MachineState) -> String {
    match u8::try_from(state.0) {
        Ok(n) if n < 26 => char::from(b'A' + n).to_string(),
        _ => format!("#{}", state.0),
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&state_label(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A defined move: write, shift the head, enter `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub write: Symbol,
    pub direction: Direction,
    pub next: MachineState,
}

/// One entry of the machine's partial transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MachineRule {
    Step {
        write: Symbol,
        direction: Direction,
        next: MachineState,
    },
    Halt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub states: usize,
    pub symbols: usize,
    /// One row per state, one rule per symbol. Short rows leave entries absent.
    pub rules: Vec<Vec<MachineRule>>,
}

impl Machine {
    /// The rule at `(state, symbol)`, or `None` outside the declared state
    /// count and alphabet size.
    #[must_use]
    pub fn rule(&self, state: MachineState, symbol: Symbol) -> Option<MachineRule> {
        if state.index() >= self.states || symbol.index() >= self.symbols {
            return None;
        }
        self.rules
            .get(state.index())
            .and_then(|row| row.get(symbol.index()))
            .copied()
    }

    /// The successor move, if the machine does not halt at `(state, symbol)`.
    #[must_use]
    pub fn step(&self, state: MachineState, symbol: Symbol) -> Option<Step> {
        match self.rule(state, symbol)? {
            MachineRule::Step {
                write,
                direction,
                next,
            } if next.index() < self.states => Some(Step {
                write,
                direction,
                next,
            }),
            MachineRule::Step { .. } | MachineRule::Halt => None,
        }
    }

    /// Parse the `1RB1LB_1LA---` notation.
    ///
    /// The state count is the number of `_`-separated rows and the alphabet
    /// size is the rule count of the first row. Each rule is a written digit,
    /// `L` or `R`, and a state letter; `---` leaves the entry undefined.
    pub fn parse_standard(text: &str) -> Result<Self, MachineFormatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MachineFormatError::Empty);
        }

        let mut rules = Vec::new();
        let mut symbols = None;
        for (row_index, row) in text.split('_').enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.is_empty() || chars.len() % 3 != 0 {
                return Err(MachineFormatError::RowLength {
                    row: row_index,
                    len: chars.len(),
                });
            }
            let width = chars.len() / 3;
            match symbols {
                None => symbols = Some(width),
                Some(expected) if expected != width => {
                    return Err(MachineFormatError::RaggedRow {
                        row: row_index,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            let parsed = chars
                .chunks(3)
                .map(|rule| parse_rule(row_index, rule))
                .collect::<Result<Vec<_>, _>>()?;
            rules.push(parsed);
        }

        Ok(Self {
            states: rules.len(),
            symbols: symbols.unwrap_or_default(),
            rules,
        })
    }

    /// Render back to `1RB1LB_1LA---` notation. Absent and halting entries
    /// render as `---`.
    ///
    /// Returns `None` when a rule writes a symbol above 9 or targets a state
    /// past `Z`, since the notation has no character for either.
    #[must_use]
    pub fn to_standard(&self) -> Option<String> {
        let mut rows = Vec::with_capacity(self.states);
        for state in 0..self.states {
            let mut row = String::with_capacity(self.symbols * 3);
            for symbol in 0..self.symbols {
                match self.rule(MachineState(state as u32), Symbol(symbol as u32)) {
                    Some(MachineRule::Step {
                        write,
                        direction,
                        next,
                    }) => {
                        if write.0 > 9 || next.0 >= 26 {
                            return None;
                        }
                        row.push_str(&format!("{write}{direction}{next}"));
                    }
                    Some(MachineRule::Halt) | None => row.push_str("---"),
                }
            }
            rows.push(row);
        }
        Some(rows.join("_"))
    }
}

fn parse_rule(row: usize, rule: &[char]) -> Result<MachineRule, MachineFormatError> {
    if rule.iter().all(|c| *c == '-') {
        return Ok(MachineRule::Halt);
    }
    let bad = |found: char| MachineFormatError::BadRule { row, found };

    let write = rule[0].to_digit(10).ok_or_else(|| bad(rule[0]))?;
    let direction = match rule[1] {
        'L' => Direction::Left,
        'R' => Direction::Right,
        other => return Err(bad(other)),
    };
    if !rule[2].is_ascii_uppercase() {
        return Err(bad(rule[2]));
    }
    let next = MachineState(u32::from(rule[2] as u8 - b'A'));

    Ok(MachineRule::Step {
        write: Symbol(write),
        direction,
        next,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineFormatError {
    #[error("machine text is empty")]
    Empty,
    #[error("row {row} has {len} characters, expected a non-zero multiple of 3")]
    RowLength { row: usize, len: usize },
    #[error("row {row} has {found} rules, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has an invalid rule character {found:?}")]
    BadRule { row: usize, found: char },
}
