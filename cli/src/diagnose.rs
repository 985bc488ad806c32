//! Names the first check a certificate fails.
//!
//! The verifier itself only answers yes or no; this reruns its checks one by
//! one so the report can say which one failed.

use thiserror::Error;
use wfar_core::Check;
use wfar_types::Certificate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("check failed: {check}")]
pub struct Rejection {
    pub check: Check,
}

pub fn diagnose(cert: &Certificate) -> Result<(), Rejection> {
    match Check::ALL.into_iter().find(|check| !check.run(cert)) {
        Some(check) => Err(Rejection { check }),
        None => Ok(()),
    }
}
