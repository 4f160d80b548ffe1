//! Plot keyword extraction using rapid automatic keyword extraction (RAKE).
//!
//! Plot text is tokenized into word and punctuation runs. Stopwords and
//! punctuation act as phrase delimiters, so every candidate phrase is a
//! maximal run of content words. Each phrase forms a clique among its words:
//! a word's degree is the number of co-occurrence edges it takes part in
//! across the whole text, self-occurrences included.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::stopwords::Stopwords;

/// Which keyword set an extractor hands to the bag-of-words composer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMode {
    /// Distinct candidate phrases in order of first appearance
    #[default]
    Phrases,
    /// Distinct scored words in order of first appearance
    Words,
}

/// Per-word metric summed into a phrase score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankingMetric {
    #[default]
    DegreeToFrequencyRatio,
    WordDegree,
    WordFrequency,
}

/// Phrase length limits, counted in words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseLimits {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for PhraseLimits {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 100_000,
        }
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w+|[^\w\s]+").expect("token pattern is valid"))
}

/// Result of running RAKE over one text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Candidate phrases in text order, repeats included
    phrases: Vec<Vec<String>>,
    /// Distinct content words in order of first appearance
    words: Vec<String>,
    frequencies: HashMap<String, usize>,
    degrees: HashMap<String, usize>,
}

impl Extraction {
    fn from_phrases(phrases: Vec<Vec<String>>) -> Self {
        let mut words = Vec::new();
        let mut frequencies: HashMap<String, usize> = HashMap::new();
        let mut degrees: HashMap<String, usize> = HashMap::new();

        for phrase in &phrases {
            for word in phrase {
                let frequency = frequencies.entry(word.clone()).or_insert(0);
                if *frequency == 0 {
                    words.push(word.clone());
                }
                *frequency += 1;
                // One edge to every member of the clique, itself included.
                *degrees.entry(word.clone()).or_insert(0) += phrase.len();
            }
        }

        Self {
            phrases,
            words,
            frequencies,
            degrees,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Distinct phrases, each joined with single spaces, in first-appearance order
    pub fn distinct_phrases(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.phrases
            .iter()
            .map(|phrase| phrase.join(" "))
            .filter(|phrase| seen.insert(phrase.clone()))
            .collect()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn frequency(&self, word: &str) -> usize {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    pub fn degree(&self, word: &str) -> usize {
        self.degrees.get(word).copied().unwrap_or(0)
    }

    /// Word degrees in first-appearance order
    pub fn word_degrees(&self) -> Vec<(String, usize)> {
        self.words
            .iter()
            .map(|word| (word.clone(), self.degree(word)))
            .collect()
    }

    fn word_score(&self, word: &str, metric: RankingMetric) -> f64 {
        match metric {
            RankingMetric::DegreeToFrequencyRatio => {
                let frequency = self.frequency(word);
                if frequency == 0 {
                    0.0
                } else {
                    self.degree(word) as f64 / frequency as f64
                }
            }
            RankingMetric::WordDegree => self.degree(word) as f64,
            RankingMetric::WordFrequency => self.frequency(word) as f64,
        }
    }

    /// Distinct phrases with scores, highest first; ties keep text order
    pub fn ranked_phrases(&self, metric: RankingMetric) -> Vec<(String, f64)> {
        let mut seen = HashSet::new();
        let mut ranked: Vec<(String, f64)> = self
            .phrases
            .iter()
            .filter(|phrase| seen.insert(phrase.join(" ")))
            .map(|phrase| {
                let score: f64 = phrase.iter().map(|w| self.word_score(w, metric)).sum();
                (phrase.join(" "), score)
            })
            .collect();

        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// RAKE keyword extractor over a configurable stopword set
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stopwords: Stopwords,
    limits: PhraseLimits,
    mode: KeywordMode,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Stopwords::english())
    }
}

impl KeywordExtractor {
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            stopwords,
            limits: PhraseLimits::default(),
            mode: KeywordMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: KeywordMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_limits(mut self, limits: PhraseLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn mode(&self) -> KeywordMode {
        self.mode
    }

    /// Splits text into candidate phrases and scores their words
    pub fn extract(&self, text: &str) -> Extraction {
        let mut phrases = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for token in token_pattern().find_iter(text) {
            let token = token.as_str().to_lowercase();
            if self.is_delimiter(&token) {
                if !current.is_empty() {
                    phrases.push(std::mem::take(&mut current));
                }
            } else {
                current.push(token);
            }
        }
        if !current.is_empty() {
            phrases.push(current);
        }

        phrases.retain(|phrase| {
            phrase.len() >= self.limits.min_length && phrase.len() <= self.limits.max_length
        });

        Extraction::from_phrases(phrases)
    }

    /// Keyword tokens for the bag of words, according to the configured mode
    pub fn keywords(&self, text: &str) -> Vec<String> {
        let extraction = self.extract(text);
        match self.mode {
            KeywordMode::Phrases => extraction.distinct_phrases(),
            KeywordMode::Words => extraction.words().to_vec(),
        }
    }

    fn is_delimiter(&self, token: &str) -> bool {
        !token.chars().any(|c| c.is_alphanumeric() || c == '_') || self.stopwords.contains(token)
    }
}
