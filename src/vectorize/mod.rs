//! Term-frequency vectorization and cosine similarity.
//!
//! - [`tokenize`] normalizes text into tokens.
//! - [`TermVector`] is the sparse term → weight representation.
//! - [`TextVectorizer`] memoizes vectors through the vector cache.

pub mod tokenize;
pub mod vector;
pub mod vectorizer;

#[cfg(test)]
mod tests;

pub use tokenize::{is_ideographic, tokenize};
pub use vector::{TermVector, cosine_similarity};
pub use vectorizer::TextVectorizer;
