use serde::{Deserialize, Serialize};

/// One catalog row as read from the source, before any normalization
///
/// Every field is optional so that an absent column or an empty cell can be
/// reported as a data error instead of silently defaulting.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawMovie {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// Comma-separated genre labels
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    /// Director's full name
    #[serde(rename = "Director")]
    pub director: Option<String>,
    /// Comma-separated cast list, lead actors first
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    /// Free-text plot summary
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
}

impl RawMovie {
    /// Creates a fully populated raw row
    pub fn new(title: &str, genre: &str, director: &str, actors: &str, plot: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            genre: Some(genre.to_string()),
            director: Some(director.to_string()),
            actors: Some(actors.to_string()),
            plot: Some(plot.to_string()),
        }
    }
}

/// A movie whose categorical fields have been normalized into tokens
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMovie {
    pub title: String,
    pub genre_tokens: Vec<String>,
    pub director_token: String,
    pub actor_tokens: Vec<String>,
    /// Plot text kept verbatim for keyword extraction
    pub plot: String,
}

/// A fully prepared catalog entry ready for vectorization
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub genre_tokens: Vec<String>,
    pub director_token: String,
    pub actor_tokens: Vec<String>,
    pub keyword_tokens: Vec<String>,
    pub bag_of_words: String,
}
