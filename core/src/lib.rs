//! Decision procedure for MITM-WFAR non-halting certificates.
//!
//! Every check is a pure predicate over borrowed data. Malformed input and
//! a well-formed but wrong proof both produce `false`; there is no error
//! type. Rejections are logged at `debug` level through `tracing`.

pub mod boundary;
pub mod closure;
pub mod shape;
pub mod structure;
mod verify;

#[cfg(test)]
mod fixtures;

pub use closure::{ClosureEngine, InverseIndex, Interval, Predecessor, forward_closed};
pub use verify::{CertificateParts, Check, mitm_wfar_verifier, verify};
