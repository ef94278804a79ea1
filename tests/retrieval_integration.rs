//! Vectorization and search through the public API.

mod common;

use std::collections::HashSet;

use common::{RICE_TEXT, farm_store, rice_store};
use harvest::constants::{SEARCH_CACHE_NAME, VECTOR_CACHE_NAME};
use harvest::{
    CacheRegistry, SearchEngine, SimilarityMethod, TextVectorizer, cosine_similarity,
    search_cache_key, vector_cache_key,
};

#[tokio::test]
async fn test_rice_example_end_to_end() {
    let registry = CacheRegistry::default();
    let engine =
        SearchEngine::new(rice_store(), &registry, SimilarityMethod::Cosine).expect("engine");

    let first = engine.search("水稻病害防治", 1).await.expect("first search");
    let second = engine.search("水稻病害防治", 1).await.expect("second search");

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].filename, "rice.txt");
    assert!(first[0].content.starts_with(RICE_TEXT));
    assert_eq!(first[0].similarity_method, SimilarityMethod::Cosine);
    assert_eq!(first[0].similarity_method.as_str(), "cosine");
    assert!(first[0].similarity_score > 0.05);

    assert_eq!(first[0].similarity_score, second[0].similarity_score);
    assert_eq!(registry.get_all_stats()[SEARCH_CACHE_NAME].hit_count, 1);
}

#[tokio::test]
async fn test_results_are_sorted_and_prefix_stable() {
    for method in [SimilarityMethod::Cosine, SimilarityMethod::Keyword] {
        let registry = CacheRegistry::default();
        let engine = SearchEngine::new(farm_store(), &registry, method).expect("engine");
        let query = "病虫害防治 施肥 水稻 土壤";

        let ten = engine.search(query, 10).await.expect("top 10");
        let two = engine.search(query, 2).await.expect("top 2");

        assert!(
            ten.windows(2)
                .all(|w| w[0].similarity_score >= w[1].similarity_score),
            "{method} results out of order"
        );
        let expected = &ten[..ten.len().min(2)];
        assert_eq!(two.as_slice(), expected, "{method} top-2 is not a prefix");
    }
}

#[tokio::test]
async fn test_search_scores_are_bounded() {
    let registry = CacheRegistry::default();
    let engine =
        SearchEngine::new(farm_store(), &registry, SimilarityMethod::Keyword).expect("engine");

    let results = engine.search("防治", 10).await.expect("search");

    assert!(!results.is_empty());
    assert!(
        results
            .iter()
            .all(|r| r.similarity_score > 0.1 && r.similarity_score <= 1.0)
    );
}

#[test]
fn test_vectorizer_is_idempotent_and_cached() {
    let registry = CacheRegistry::default();
    let vectorizer = TextVectorizer::new(&registry).expect("vectorizer");

    let a = vectorizer.vectorize("水稻需要充足的水分和光照");
    let hits = registry.get_all_stats()[VECTOR_CACHE_NAME].hit_count;
    let b = vectorizer.vectorize("水稻需要充足的水分和光照");

    assert_eq!(a, b);
    assert_eq!(registry.get_all_stats()[VECTOR_CACHE_NAME].hit_count, hits + 1);
}

#[test]
fn test_cosine_properties_over_corpus() {
    let registry = CacheRegistry::default();
    let vectorizer = TextVectorizer::new(&registry).expect("vectorizer");
    let texts = common::FARM_DOCS.map(|(_, text)| text);

    for a in texts {
        let va = vectorizer.vectorize(a);
        assert!((cosine_similarity(&va, &va) - 1.0).abs() < 1e-9);
        for b in texts {
            let vb = vectorizer.vectorize(b);
            let ab = cosine_similarity(&va, &vb);
            assert_eq!(ab, cosine_similarity(&vb, &va));
            assert!((0.0..=1.0).contains(&ab));
        }
    }
}

#[test]
fn test_cache_keys_are_namespaced_and_distinct() {
    let keys: HashSet<String> = [
        vector_cache_key("水稻"),
        search_cache_key("水稻", 3, "cosine"),
        search_cache_key("水稻", 3, "keyword"),
        search_cache_key("水稻", 5, "cosine"),
    ]
    .into_iter()
    .collect();

    assert_eq!(keys.len(), 4);
    assert!(vector_cache_key("水稻").starts_with("vector_"));
    assert!(search_cache_key("水稻", 3, "cosine").starts_with("search_"));
}
