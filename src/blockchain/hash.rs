use sha2::{Digest, Sha256};

use super::Block;

/// SHA-256 of `bytes`, lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Digest of a block over its canonical encoding.
///
/// The block is first converted into a JSON value, whose object keys are
/// kept sorted, and then written compactly. The bytes depend only on field
/// values, never on how the block was built or the order fields arrived in.
pub fn hash_block(block: &Block) -> String {
    let value = serde_json::to_value(block).expect("block serializes to JSON");
    let canonical = serde_json::to_vec(&value).expect("JSON value serializes");
    sha256_hex(&canonical)
}
