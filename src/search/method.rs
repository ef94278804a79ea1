use serde::Serialize;

use super::error::UnknownMethodError;
use crate::constants::{
    COSINE_GROUNDING_THRESHOLD, COSINE_INCLUSION_THRESHOLD, KEYWORD_GROUNDING_THRESHOLD,
    KEYWORD_INCLUSION_THRESHOLD,
};

/// Scoring strategy, chosen once when the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMethod {
    /// Cosine similarity over term-frequency vectors.
    #[default]
    Cosine,
    /// Weighted substring / keyword / word-overlap heuristic.
    Keyword,
}

impl SimilarityMethod {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMethod::Cosine => "cosine",
            SimilarityMethod::Keyword => "keyword",
        }
    }

    /// Chunks must score strictly above this to be returned.
    #[inline]
    pub fn inclusion_threshold(&self) -> f64 {
        match self {
            SimilarityMethod::Cosine => COSINE_INCLUSION_THRESHOLD,
            SimilarityMethod::Keyword => KEYWORD_INCLUSION_THRESHOLD,
        }
    }

    /// Best-chunk score needed before an answer is grounded in retrieval.
    #[inline]
    pub fn grounding_threshold(&self) -> f64 {
        match self {
            SimilarityMethod::Cosine => COSINE_GROUNDING_THRESHOLD,
            SimilarityMethod::Keyword => KEYWORD_GROUNDING_THRESHOLD,
        }
    }
}

impl std::fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SimilarityMethod {
    type Err = UnknownMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cosine" => Ok(Self::Cosine),
            "keyword" => Ok(Self::Keyword),
            _ => Err(UnknownMethodError {
                value: s.to_string(),
            }),
        }
    }
}
