//! Keyword heuristic scoring.
//!
//! Four signals, summed in order and capped at 1.0:
//!
//! 1. verbatim (lower-cased) substring match: `0.6 + 0.2 * query_len / chunk_len`
//! 2. domain-keyword overlap: `0.3 * |common| / |query keywords|`
//! 3. whitespace-word overlap: `0.1 * |matched| / |query words|`
//! 4. chunks under 50 characters: whole score × 0.8

use std::collections::HashSet;

use crate::constants::{
    KEYWORD_OVERLAP_WEIGHT, KEYWORD_SHORT_CHUNK_CHARS, KEYWORD_SHORT_CHUNK_PENALTY,
    KEYWORD_SUBSTRING_BASE, KEYWORD_SUBSTRING_COVERAGE_WEIGHT, KEYWORD_WORD_OVERLAP_WEIGHT,
};
use crate::knowledge::{ChunkRecord, extract_keywords};

/// A query prepared once for scoring against many chunks.
#[derive(Debug, Clone)]
pub struct KeywordQuery {
    lowered: String,
    lowered_chars: usize,
    keywords: Vec<&'static str>,
    words: Vec<String>,
}

impl KeywordQuery {
    pub fn new(query: &str) -> Self {
        let lowered = query.to_lowercase();
        let words = lowered.split_whitespace().map(str::to_string).collect();
        Self {
            lowered_chars: lowered.chars().count(),
            keywords: extract_keywords(query),
            words,
            lowered,
        }
    }

    pub fn keywords(&self) -> &[&'static str] {
        &self.keywords
    }

    /// Uncapped composite score for `chunk`.
    pub fn raw_score(&self, chunk: &ChunkRecord) -> f64 {
        let content_lower = chunk.content.to_lowercase();
        let mut score = 0.0;

        if !self.lowered.is_empty() && content_lower.contains(&self.lowered) {
            let match_ratio = self.lowered_chars as f64 / content_lower.chars().count() as f64;
            score += KEYWORD_SUBSTRING_BASE + match_ratio * KEYWORD_SUBSTRING_COVERAGE_WEIGHT;
        }

        let query_keywords: HashSet<&str> = self.keywords.iter().copied().collect();
        let common = chunk
            .keywords
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .intersection(&query_keywords)
            .count();
        if common > 0 {
            let keyword_ratio = common as f64 / self.keywords.len().max(1) as f64;
            score += keyword_ratio * KEYWORD_OVERLAP_WEIGHT;
        }

        if !self.words.is_empty() {
            let content_words: HashSet<&str> = content_lower.split_whitespace().collect();
            let matched = self
                .words
                .iter()
                .map(String::as_str)
                .collect::<HashSet<_>>()
                .intersection(&content_words)
                .count();
            if matched > 0 {
                let word_ratio = matched as f64 / self.words.len() as f64;
                score += word_ratio * KEYWORD_WORD_OVERLAP_WEIGHT;
            }
        }

        if chunk.content.chars().count() < KEYWORD_SHORT_CHUNK_CHARS {
            score *= KEYWORD_SHORT_CHUNK_PENALTY;
        }

        score
    }

    /// Composite score capped at 1.0.
    #[inline]
    pub fn score(&self, chunk: &ChunkRecord) -> f64 {
        self.raw_score(chunk).min(1.0)
    }
}
