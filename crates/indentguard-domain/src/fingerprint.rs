use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an indentation finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - line
/// - column
pub fn fingerprint_for_indent(check_id: &str, code: &str, line: u32, column: u32) -> String {
    let canonical = format!("{check_id}|{code}|{line}|{column}");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
