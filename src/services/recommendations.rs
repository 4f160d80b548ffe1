use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    services::{corpus::Corpus, similarity::SimilarityMatrix},
};

/// Result count used when the caller does not choose one
pub const DEFAULT_K: usize = 10;

/// A recommended title with its similarity to the query
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub score: f64,
}

/// Content-based recommender over a fixed corpus
///
/// Built once, then only read. Safe to share across threads behind an
/// `Arc` without locking.
#[derive(Debug, Clone)]
pub struct Recommender {
    corpus: Corpus,
    matrix: SimilarityMatrix,
}

impl Recommender {
    /// Scores the corpus and wraps it for querying
    pub fn new(corpus: Corpus) -> Self {
        let (vocabulary, matrix) = SimilarityMatrix::build(corpus.bags_of_words());
        tracing::info!(
            movies = corpus.len(),
            vocabulary = vocabulary.len(),
            "Similarity matrix ready"
        );
        Self { corpus, matrix }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Up to `k` titles most similar to `title`, best first
    pub fn recommend(&self, title: &str, k: usize) -> AppResult<Vec<String>> {
        Ok(self
            .recommend_scored(title, k)?
            .into_iter()
            .map(|r| r.title)
            .collect())
    }

    /// Like [`Recommender::recommend`], keeping each similarity score
    ///
    /// The row is ranked by descending similarity with a stable sort, so
    /// equal scores stay in corpus order. The top-ranked position is then
    /// dropped unconditionally: it is the query itself whenever its
    /// self-similarity of 1.0 is not tied by an earlier duplicate document.
    pub fn recommend_scored(&self, title: &str, k: usize) -> AppResult<Vec<Recommendation>> {
        let position = self
            .corpus
            .position(title)
            .ok_or_else(|| AppError::movie_not_found(title))?;

        let mut ranked: Vec<(usize, f64)> = self
            .matrix
            .row(position)
            .iter()
            .copied()
            .enumerate()
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let recommendations: Vec<Recommendation> = ranked
            .into_iter()
            .skip(1)
            .take(k)
            .filter_map(|(i, score)| {
                self.corpus.title(i).map(|t| Recommendation {
                    title: t.to_string(),
                    score,
                })
            })
            .collect();

        tracing::debug!(
            title,
            k,
            returned = recommendations.len(),
            "Recommendations computed"
        );

        Ok(recommendations)
    }
}
