use sha2::{Digest, Sha256};

/// Stable content digest for audit and traceability of rendered exports.
/// Deterministic for identical content; not a security boundary.
pub fn content_digest(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    encode_hex(digest.as_slice())
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
