use tracing::debug;

use super::vector::TermVector;
use crate::cache::{CacheHandle, CacheRegistry, RegistryError};
use crate::constants::VECTOR_CACHE_NAME;
use crate::hashing::vector_cache_key;

/// Converts text to [`TermVector`]s, memoized by content hash.
#[derive(Debug, Clone)]
pub struct TextVectorizer {
    cache: CacheHandle<TermVector>,
}

impl TextVectorizer {
    /// Uses the registry's shared vector cache.
    pub fn new(registry: &CacheRegistry) -> Result<Self, RegistryError> {
        Ok(Self {
            cache: registry.cache(VECTOR_CACHE_NAME)?,
        })
    }

    pub fn with_cache(cache: CacheHandle<TermVector>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &CacheHandle<TermVector> {
        &self.cache
    }

    pub fn vectorize(&self, text: &str) -> TermVector {
        let key = vector_cache_key(text);
        if let Some(vector) = self.cache.get(&key) {
            debug!(text_len = text.len(), "vector cache hit");
            return vector;
        }

        let vector = TermVector::from_text(text);
        self.cache.put(key, vector.clone());
        debug!(text_len = text.len(), terms = vector.len(), "vector cached");
        vector
    }

    /// Cosine similarity of two texts, vectorizing both through the cache.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        super::cosine_similarity(&self.vectorize(a), &self.vectorize(b))
    }
}
