use sha2::Digest;

/// Derive the natural key of an uploaded row.
///
/// Deterministic: sha256("<source_id>\0<row_number>"), first 16 bytes as
/// lowercase hex. Re-importing the same file yields the same fingerprints,
/// which is what lets a store reject replays after a partial failure.
#[must_use]
pub fn row_fingerprint(source_id: &str, row_number: u32) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(source_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(row_number.to_string().as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    hex::encode(&digest[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        let a = row_fingerprint("places.csv", 2);
        let b = row_fingerprint("places.csv", 2);
        let c = row_fingerprint("places.csv", 3);
        let d = row_fingerprint("other.csv", 2);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}
