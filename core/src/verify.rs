//! Runs every check in dependency order and collapses them into one verdict.

use std::fmt;

use wfar_types::{AcceptSet, Certificate, Machine, SignSets, WeightedAutomaton};

use crate::boundary::{no_halting_config_accepted, start_config_accepted};
use crate::closure::forward_closed;
use crate::shape::{leading_blank_holds, sign_sets_closed};
use crate::structure::{alphabets_compatible, automaton_is_deterministic, machine_is_valid};

/// The individual checks, in the order they must run. Later checks assume
/// the earlier ones passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    ValidMachine,
    DeterministicLeft,
    DeterministicRight,
    SymbolCompatibility,
    LeadingBlankLeft,
    LeadingBlankRight,
    SignSetsLeft,
    SignSetsRight,
    StartAccepted,
    NoHaltingAccepted,
    ForwardClosed,
}

impl Check {
    pub const ALL: [Check; 11] = [
        Check::ValidMachine,
        Check::DeterministicLeft,
        Check::DeterministicRight,
        Check::SymbolCompatibility,
        Check::LeadingBlankLeft,
        Check::LeadingBlankRight,
        Check::SignSetsLeft,
        Check::SignSetsRight,
        Check::StartAccepted,
        Check::NoHaltingAccepted,
        Check::ForwardClosed,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Check::ValidMachine => "machine has states and symbols",
            Check::DeterministicLeft => "left automaton is deterministic and total",
            Check::DeterministicRight => "right automaton is deterministic and total",
            Check::SymbolCompatibility => "alphabet sizes agree",
            Check::LeadingBlankLeft => "left automaton ignores leading blanks",
            Check::LeadingBlankRight => "right automaton ignores leading blanks",
            Check::SignSetsLeft => "left sign-stable sets are closed",
            Check::SignSetsRight => "right sign-stable sets are closed",
            Check::StartAccepted => "start configuration is accepted",
            Check::NoHaltingAccepted => "no accepted configuration halts",
            Check::ForwardClosed => "acceptance table is closed under one step",
        }
    }

    #[must_use]
    pub fn run(self, cert: &Certificate) -> bool {
        self.run_on(CertificateParts::from(cert))
    }

    #[must_use]
    pub fn run_on(self, parts: CertificateParts<'_>) -> bool {
        let CertificateParts {
            machine,
            left,
            right,
            left_signs,
            right_signs,
            accept,
        } = parts;
        match self {
            Check::ValidMachine => machine_is_valid(machine),
            Check::DeterministicLeft => automaton_is_deterministic(left),
            Check::DeterministicRight => automaton_is_deterministic(right),
            Check::SymbolCompatibility => alphabets_compatible(machine, left, right),
            Check::LeadingBlankLeft => leading_blank_holds(left),
            Check::LeadingBlankRight => leading_blank_holds(right),
            Check::SignSetsLeft => sign_sets_closed(left, left_signs),
            Check::SignSetsRight => sign_sets_closed(right, right_signs),
            Check::StartAccepted => start_config_accepted(left, right, accept),
            Check::NoHaltingAccepted => no_halting_config_accepted(machine, accept),
            Check::ForwardClosed => {
                forward_closed(machine, left, right, left_signs, right_signs, accept)
            }
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Borrowed view of a certificate's parts, for callers that do not hold a
/// [`Certificate`].
#[derive(Debug, Clone, Copy)]
pub struct CertificateParts<'a> {
    pub machine: &'a Machine,
    pub left: &'a WeightedAutomaton,
    pub right: &'a WeightedAutomaton,
    pub left_signs: &'a SignSets,
    pub right_signs: &'a SignSets,
    pub accept: &'a AcceptSet,
}

impl<'a> From<&'a Certificate> for CertificateParts<'a> {
    fn from(cert: &'a Certificate) -> Self {
        Self {
            machine: &cert.machine,
            left: &cert.left,
            right: &cert.right,
            left_signs: &cert.left_signs,
            right_signs: &cert.right_signs,
            accept: &cert.accept,
        }
    }
}

fn verify_parts(parts: CertificateParts<'_>) -> bool {
    Check::ALL.iter().all(|check| {
        let passed = check.run_on(parts);
        if !passed {
            tracing::debug!(%check, "certificate rejected");
        }
        passed
    })
}

/// `true` iff the certificate proves the machine never halts.
#[must_use]
pub fn verify(cert: &Certificate) -> bool {
    verify_parts(CertificateParts::from(cert))
}

/// [`verify`] over the certificate's parts.
#[must_use]
pub fn mitm_wfar_verifier(
    machine: &Machine,
    left: &WeightedAutomaton,
    right: &WeightedAutomaton,
    left_signs: &SignSets,
    right_signs: &SignSets,
    accept: &AcceptSet,
) -> bool {
    verify_parts(CertificateParts {
        machine,
        left,
        right,
        left_signs,
        right_signs,
        accept,
    })
}
