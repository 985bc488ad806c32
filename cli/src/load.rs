use std::path::Path;

use anyhow::{Context, Result};
use wfar_types::Certificate;

pub fn load_certificate(path: &Path) -> Result<Certificate> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read certificate {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse certificate {}", path.display()))
}

/// Whether the certificate's table fits under the configured cap.
pub fn within_limit(cert: &Certificate, max_accept_entries: Option<usize>) -> bool {
    max_accept_entries.is_none_or(|max| cert.accept.len() <= max)
}
