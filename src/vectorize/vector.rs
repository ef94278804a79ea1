use std::collections::HashMap;

use super::tokenize::tokenize;

/// Sparse term-frequency vector: token → relative frequency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: HashMap<String, f64>,
}

impl TermVector {
    /// Builds the vector for `text` (no caching). Empty when `text` has no tokens.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut total = 0usize;
        for token in tokens {
            *counts.entry(token).or_default() += 1;
            total += 1;
        }

        if total == 0 {
            return Self::default();
        }

        let weights = counts
            .into_iter()
            .map(|(token, count)| (token, count as f64 / total as f64))
            .collect();
        Self { weights }
    }

    #[inline]
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, weight)| (term.as_str(), *weight))
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Sum of squared weights, accumulated in the same order as [`Self::dot`]
    /// so that `a.dot(&a) == a.norm_sq()` exactly.
    pub fn norm_sq(&self) -> f64 {
        let mut squares: Vec<f64> = self.weights.values().map(|w| w * w).collect();
        squares.sort_by(f64::total_cmp);
        squares.iter().sum()
    }

    pub fn dot(&self, other: &TermVector) -> f64 {
        // Iterate the smaller map.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut products: Vec<f64> = small
            .weights
            .iter()
            .filter_map(|(term, weight)| large.weights.get(term).map(|other| weight * other))
            .collect();
        // Sorted so a.dot(b) and b.dot(a) sum in the same order.
        products.sort_by(f64::total_cmp);
        products.iter().sum()
    }
}

/// Cosine similarity in `[0, 1]`; `0.0` if either vector has zero norm.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_sq_a = a.norm_sq();
    let norm_sq_b = b.norm_sq();
    if norm_sq_a == 0.0 || norm_sq_b == 0.0 {
        return 0.0;
    }
    // One square root, so cosine(a, a) is exactly 1.0.
    (a.dot(b) / (norm_sq_a * norm_sq_b).sqrt()).clamp(0.0, 1.0)
}
