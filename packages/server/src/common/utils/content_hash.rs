//! Article provenance fingerprint.
//!
//! The hash binds title, body, and publication time. It is byte-exact on
//! purpose: provenance has to distinguish edits, so no normalization is
//! applied before hashing.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// SHA256 fingerprint of an article at its moment of publication.
pub fn provenance_hash(title: &str, content: &str, published_at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(b"\n");
    hasher.update(content.as_bytes());
    hasher.update(b"\n");
    hasher.update(published_at.to_rfc3339().as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn identical_inputs_same_hash() {
        let a = provenance_hash("Headline", "Body text.", ts());
        let b = provenance_hash("Headline", "Body text.", ts());
        assert_eq!(a, b);
    }

    #[test]
    fn title_changes_hash() {
        let a = provenance_hash("Headline", "Body text.", ts());
        let b = provenance_hash("Headline!", "Body text.", ts());
        assert_ne!(a, b);
    }

    #[test]
    fn content_changes_hash() {
        let a = provenance_hash("Headline", "Body text.", ts());
        let b = provenance_hash("Headline", "Body text, revised.", ts());
        assert_ne!(a, b);
    }

    #[test]
    fn timestamp_changes_hash() {
        let later = ts() + chrono::Duration::seconds(1);
        let a = provenance_hash("Headline", "Body text.", ts());
        let b = provenance_hash("Headline", "Body text.", later);
        assert_ne!(a, b);
    }

    #[test]
    fn hash_format_is_valid() {
        let hash = provenance_hash("Headline", "Body text.", ts());
        // SHA256 hash should be 64 hex characters
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
