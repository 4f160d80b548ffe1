use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::MovieRecord,
};

/// Ordered set of movie records with a title index
///
/// Position `i` and `records[i].title` form a bijection for the lifetime of
/// the corpus: records cannot be added, removed or reordered after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<MovieRecord>,
    index: HashMap<String, usize>,
}

impl Corpus {
    /// Builds the corpus, rejecting duplicate titles
    pub fn new(records: Vec<MovieRecord>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if let Some(previous) = index.insert(record.title.clone(), position) {
                return Err(AppError::Data(format!(
                    "duplicate title {:?} at rows {} and {}",
                    record.title, previous, position
                )));
            }
        }

        Ok(Self { records, index })
    }

    /// Position of an exact, case-sensitive title match
    pub fn position(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    pub fn title(&self, position: usize) -> Option<&str> {
        self.records.get(position).map(|r| r.title.as_str())
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.title.as_str())
    }

    pub fn bags_of_words(&self) -> impl Iterator<Item = &str> + Clone {
        self.records.iter().map(|r| r.bag_of_words.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, bag: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genre_tokens: Vec::new(),
            director_token: String::new(),
            actor_tokens: Vec::new(),
            keyword_tokens: Vec::new(),
            bag_of_words: bag.to_string(),
        }
    }

    #[test]
    fn test_position_and_title_are_inverse() {
        let records = vec![record("A", "x"), record("B", "y"), record("C", "z")];
        let corpus = Corpus::new(records).unwrap();

        for (i, title) in corpus.titles().enumerate() {
            assert_eq!(corpus.position(title), Some(i));
            assert_eq!(corpus.title(i), Some(title));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let corpus = Corpus::new(vec![record("Logan", "x")]).unwrap();

        assert_eq!(corpus.position("Logan"), Some(0));
        assert_eq!(corpus.position("logan"), None);
        assert_eq!(corpus.position(" Logan"), None);
    }

    #[test]
    fn test_duplicate_titles_rejected() {
        let result = Corpus::new(vec![record("Heat", "x"), record("Heat", "y")]);
        assert!(matches!(result, Err(AppError::Data(_))));
    }

    #[test]
    fn test_bags_in_order() {
        let corpus = Corpus::new(vec![record("A", "one"), record("B", "two")]).unwrap();
        let bags: Vec<&str> = corpus.bags_of_words().collect();
        assert_eq!(bags, vec!["one", "two"]);
    }
}
