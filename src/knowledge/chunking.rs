//! Sentence-based chunking with character overlap.

use crate::constants::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

const SENTENCE_END: char = '。';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkingConfig {
    /// Soft upper bound on chunk length, in characters.
    pub chunk_size: usize,
    /// Characters carried over from the end of the previous chunk.
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// Splits `text` into chunks on `。` boundaries.
///
/// Sentences accumulate until the next one would push the chunk past
/// `chunk_size` characters. A single sentence longer than `chunk_size` still
/// becomes its own (oversized) chunk.
pub fn chunk_text(text: &str, config: ChunkingConfig) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let flattened = text.replace('\n', " ");
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for sentence in flattened.split(SENTENCE_END) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        let sentence_len = sentence.chars().count();

        if current_len + sentence_len > config.chunk_size && !current.is_empty() {
            chunks.push(current.trim().to_string());
            let carried = tail_chars(&current, config.overlap);
            current = format!("{carried} {sentence}{SENTENCE_END}");
        } else {
            current.push_str(sentence);
            current.push(SENTENCE_END);
        }
        current_len = current.chars().count();
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}

/// Last `n` characters of `s` (all of `s` if shorter).
fn tail_chars(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    if len <= n {
        return s;
    }
    match s.char_indices().nth(len - n) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
