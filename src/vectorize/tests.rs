use super::*;
use crate::cache::{CacheConfig, CacheHandle, CacheRegistry};
use crate::constants::VECTOR_CACHE_NAME;

fn vectorizer() -> TextVectorizer {
    TextVectorizer::with_cache(CacheHandle::new(CacheConfig::unbounded_ttl(16)))
}

#[test]
fn test_tokenize_splits_ideographs() {
    assert_eq!(tokenize("水稻病害"), vec!["水", "稻", "病", "害"]);
}

#[test]
fn test_tokenize_groups_alphanumeric_runs() {
    assert_eq!(tokenize("NPK fertilizer 15kg"), vec!["npk", "fertilizer", "15kg"]);
}

#[test]
fn test_tokenize_strips_punctuation() {
    assert_eq!(
        tokenize("rice, wheat; corn! 水稻，小麦。"),
        vec!["rice", "wheat", "corn", "水", "稻", "小", "麦"]
    );
}

#[test]
fn test_tokenize_drops_single_non_ideographic_chars() {
    assert_eq!(tokenize("a b c 稻 pH"), vec!["稻", "ph"]);
}

#[test]
fn test_tokenize_mixed_script_boundaries() {
    assert_eq!(tokenize("ph值7.5"), vec!["ph", "值"]);
    assert_eq!(tokenize("n2肥料"), vec!["n2", "肥", "料"]);
}

#[test]
fn test_tokenize_empty_and_symbols() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("!!! ... ???").is_empty());
}

#[test]
fn test_is_ideographic_block_bounds() {
    assert!(is_ideographic('\u{4e00}'));
    assert!(is_ideographic('\u{9fff}'));
    assert!(!is_ideographic('a'));
    assert!(!is_ideographic('。'));
}

#[test]
fn test_term_vector_relative_frequencies() {
    let vector = TermVector::from_text("rice rice wheat corn");

    assert_eq!(vector.len(), 3);
    assert!((vector.weight("rice") - 0.5).abs() < 1e-12);
    assert!((vector.weight("wheat") - 0.25).abs() < 1e-12);
    assert_eq!(vector.weight("barley"), 0.0);

    let total: f64 = vector.terms().map(|(_, w)| w).sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn test_term_vector_empty_text() {
    let vector = TermVector::from_text("。，！");
    assert!(vector.is_empty());
    assert_eq!(vector.norm(), 0.0);
}

#[test]
fn test_cosine_identical_texts() {
    let texts = [
        "水稻病害防治",
        "水稻常见病害包括稻瘟病和白叶枯病，防治方法是喷洒农药并轮作",
        "corn planting schedule",
        "小麦 wheat 施肥 fertilizer 2024",
    ];

    for text in texts {
        let a = TermVector::from_text(text);
        assert_eq!(cosine_similarity(&a, &a), 1.0, "self-similarity of {text:?}");
        assert_eq!(a.dot(&a), a.norm_sq());
    }
}

#[test]
fn test_cosine_symmetry_and_bounds() {
    let pairs = [
        ("水稻病害防治", "水稻常见病害包括稻瘟病"),
        ("corn planting schedule", "planting corn in spring"),
        ("小麦施肥", "wheat fertilizer"),
    ];

    for (left, right) in pairs {
        let a = TermVector::from_text(left);
        let b = TermVector::from_text(right);
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);

        assert_eq!(ab, ba, "asymmetric for {left:?} / {right:?}");
        assert!((0.0..=1.0).contains(&ab));
    }
}

#[test]
fn test_cosine_disjoint_is_zero() {
    let a = TermVector::from_text("水稻");
    let b = TermVector::from_text("wheat");
    assert_eq!(cosine_similarity(&a, &b), 0.0);
}

#[test]
fn test_cosine_zero_norm_is_zero() {
    let empty = TermVector::default();
    let a = TermVector::from_text("水稻");

    assert_eq!(cosine_similarity(&empty, &a), 0.0);
    assert_eq!(cosine_similarity(&a, &empty), 0.0);
    assert_eq!(cosine_similarity(&empty, &empty), 0.0);
}

#[test]
fn test_vectorize_is_cached_and_identical() {
    let vectorizer = vectorizer();

    let first = vectorizer.vectorize("玉米种植需要充足的光照");
    let hits_before = vectorizer.cache().get_stats().hit_count;
    let second = vectorizer.vectorize("玉米种植需要充足的光照");

    assert_eq!(first, second);
    assert_eq!(vectorizer.cache().get_stats().hit_count, hits_before + 1);
    assert_eq!(vectorizer.cache().size(), 1);
}

#[test]
fn test_vectorize_distinct_texts_use_distinct_keys() {
    let vectorizer = vectorizer();

    vectorizer.vectorize("小麦");
    vectorizer.vectorize("大豆");

    assert_eq!(vectorizer.cache().size(), 2);
}

#[test]
fn test_vectorizer_uses_registry_vector_cache() {
    let registry = CacheRegistry::default();
    let vectorizer = TextVectorizer::new(&registry).expect("vector cache");

    vectorizer.vectorize("施肥");

    let stats = registry.get_all_stats();
    assert_eq!(stats[VECTOR_CACHE_NAME].size, 1);
    assert_eq!(stats[VECTOR_CACHE_NAME].max_size, 200);
}

#[test]
fn test_similarity_goes_through_cache() {
    let vectorizer = vectorizer();

    let score = vectorizer.similarity("水稻病害防治", "水稻病害防治");

    assert!((score - 1.0).abs() < 1e-9);
    assert_eq!(vectorizer.cache().get_stats().hit_count, 1);
}
