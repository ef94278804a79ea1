use super::*;
use std::collections::HashSet;

#[test]
fn test_vector_key_format() {
    let key = vector_cache_key("hello world");

    assert!(key.starts_with(VECTOR_KEY_PREFIX));
    assert_eq!(key.len(), VECTOR_KEY_PREFIX.len() + 64);
    assert_eq!(key, vector_cache_key("hello world"));
}

#[test]
fn test_vector_key_uniqueness() {
    let texts = ["玉米施肥", "玉米 施肥", "小麦施肥", "玉米施肥 "];

    let keys: HashSet<_> = texts.iter().map(|t| vector_cache_key(t)).collect();

    assert_eq!(keys.len(), texts.len());
}

#[test]
fn test_search_key_sensitivity() {
    let base = search_cache_key("水稻病害", 5, "cosine");

    assert_ne!(base, search_cache_key("水稻病害", 6, "cosine"));
    assert_ne!(base, search_cache_key("水稻病害", 5, "keyword"));
    assert_ne!(base, search_cache_key("水稻", 5, "cosine"));
    assert_eq!(base, search_cache_key("水稻病害", 5, "cosine"));
}

#[test]
fn test_search_key_field_boundaries() {
    let a = search_cache_key("a1", 2, "cosine");
    let b = search_cache_key("a", 12, "cosine");

    assert_ne!(a, b);
}

#[test]
fn test_prompt_key_prefix_and_determinism() {
    let key = prompt_cache_key("如何防治稻瘟病？");

    assert!(key.starts_with(API_KEY_PREFIX));
    assert_eq!(key, prompt_cache_key("如何防治稻瘟病？"));
    assert_ne!(key, prompt_cache_key("如何防治稻瘟病?"));
}

#[test]
fn test_content_hash_matches_blake3_hex() {
    let bytes = b"file contents";
    assert_eq!(content_hash(bytes), blake3::hash(bytes).to_hex().to_string());
}
