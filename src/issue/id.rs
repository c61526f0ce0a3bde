//! Issue identifiers: random 128-bit values rendered as 32 lowercase hex digits.
use uuid::Uuid;

/// Generate a fresh issue identifier.
#[must_use]
pub fn generate_issue_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Check whether a string has the shape of a generated issue id.
///
/// Anything else cannot name a stored issue.
#[must_use]
pub fn is_issue_id(s: &str) -> bool {
    s.len() == 32 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
