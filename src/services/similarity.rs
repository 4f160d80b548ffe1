//! Term-frequency vector space and pairwise cosine similarity.
//!
//! Documents are split on whitespace. The vocabulary is the sorted set of
//! distinct terms across the corpus, and each document becomes a sparse
//! count vector over it. Counts are non-negative, so every similarity lies
//! in `[0, 1]`.

use std::collections::{BTreeMap, BTreeSet};

/// Sorted term → column mapping shared by every vector of a corpus
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: BTreeMap<String, usize>,
}

impl Vocabulary {
    pub fn build<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = documents
            .into_iter()
            .flat_map(str::split_whitespace)
            .collect();

        Self {
            terms: distinct
                .into_iter()
                .enumerate()
                .map(|(column, term)| (term.to_string(), column))
                .collect(),
        }
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.terms.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Counts the terms of one document; terms outside the vocabulary are dropped
    pub fn vectorize(&self, document: &str) -> TermVector {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for column in document.split_whitespace().filter_map(|t| self.column(t)) {
            *counts.entry(column).or_insert(0) += 1;
        }
        TermVector {
            entries: counts.into_iter().collect(),
        }
    }
}

/// Sparse term-frequency vector, entries sorted by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, u32)>,
}

impl TermVector {
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_col, a_count) = self.entries[i];
            let (b_col, b_count) = other.entries[j];
            match a_col.cmp(&b_col) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += f64::from(a_count) * f64::from(b_count);
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Sum of squared counts; an integer, so exact in `f64` for any real document
    pub fn squared_norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, c)| f64::from(c) * f64::from(c))
            .sum()
    }
}

/// Cosine similarity, defined as 0 when either vector is zero
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    cosine_from_parts(a.dot(b), a.squared_norm(), b.squared_norm())
}

// Takes one square root of the product of squared norms rather than
// multiplying two roots, so identical vectors score exactly 1.0.
fn cosine_from_parts(dot: f64, squared_norm_a: f64, squared_norm_b: f64) -> f64 {
    if squared_norm_a == 0.0 || squared_norm_b == 0.0 {
        return 0.0;
    }
    (dot / (squared_norm_a * squared_norm_b).sqrt()).clamp(0.0, 1.0)
}

/// Dense symmetric N×N matrix of pairwise cosine similarities
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Vectorizes the documents and scores every pair
    pub fn build<'a, I>(documents: I) -> (Vocabulary, Self)
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let documents = documents.into_iter();
        let vocabulary = Vocabulary::build(documents.clone());
        let vectors: Vec<TermVector> = documents.map(|d| vocabulary.vectorize(d)).collect();
        let matrix = Self::from_vectors(&vectors);

        tracing::debug!(
            documents = matrix.size,
            vocabulary = vocabulary.len(),
            "Built similarity matrix"
        );

        (vocabulary, matrix)
    }

    /// Scores every pair of precomputed vectors
    pub fn from_vectors(vectors: &[TermVector]) -> Self {
        let size = vectors.len();
        let squared_norms: Vec<f64> = vectors.iter().map(TermVector::squared_norm).collect();
        let mut values = vec![0.0; size * size];

        for i in 0..size {
            for j in i..size {
                let dot = vectors[i].dot(&vectors[j]);
                let score = cosine_from_parts(dot, squared_norms[i], squared_norms[j]);
                values[i * size + j] = score;
                values[j * size + i] = score;
            }
        }

        Self { size, values }
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}
