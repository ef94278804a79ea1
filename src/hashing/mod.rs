//! Content hashes and cache-key derivation.
//!
//! Every key is derived from the full 256-bit BLAKE3 digest, hex encoded. The
//! hash is not used for security; the digest width keeps accidental collisions
//! between stored documents out of reach.

use blake3::Hasher;

#[cfg(test)]
mod tests;

/// Prefix for term-vector cache keys.
pub const VECTOR_KEY_PREFIX: &str = "vector_";
/// Prefix for search-result cache keys.
pub const SEARCH_KEY_PREFIX: &str = "search_";
/// Prefix for completion-answer cache keys.
pub const API_KEY_PREFIX: &str = "api_";

/// Hex digest of raw bytes, used to deduplicate uploaded documents.
#[inline]
pub fn content_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

#[inline]
pub fn vector_cache_key(text: &str) -> String {
    format!("{VECTOR_KEY_PREFIX}{}", blake3::hash(text.as_bytes()).to_hex())
}

/// Key for a `(query, top_k, method)` search signature.
///
/// Fields are separated and `top_k` is hashed as fixed-width bytes so that
/// `("a1", 2)` and `("a", 12)` never share a key.
pub fn search_cache_key(query: &str, top_k: usize, method: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(query.as_bytes());
    hasher.update(b"|");
    hasher.update(&(top_k as u64).to_le_bytes());
    hasher.update(b"|");
    hasher.update(method.as_bytes());
    format!("{SEARCH_KEY_PREFIX}{}", hasher.finalize().to_hex())
}

/// Key for the exact prompt text sent to the completion service.
#[inline]
pub fn prompt_cache_key(prompt: &str) -> String {
    format!("{API_KEY_PREFIX}{}", blake3::hash(prompt.as_bytes()).to_hex())
}
