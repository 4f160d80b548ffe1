use serde::{Deserialize, Serialize};

use crate::services::Recommendation;

pub mod movie;

pub use movie::{MovieRecord, NormalizedMovie, RawMovie};

/// Query string for the recommendations endpoint
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    /// Exact, case-sensitive catalog title
    pub title: String,
    /// Number of results; the configured default when absent
    pub k: Option<usize>,
}

/// Ranked recommendations for one title
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub k: usize,
    pub recommendations: Vec<Recommendation>,
}

/// Catalog titles in corpus order
#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub count: usize,
    pub titles: Vec<String>,
}

/// A single prepared catalog entry and its corpus position
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub position: usize,
    #[serde(flatten)]
    pub record: MovieRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_without_k() {
        let query: RecommendationQuery =
            serde_json::from_value(json!({ "title": "Logan" })).unwrap();
        assert_eq!(query.title, "Logan");
        assert_eq!(query.k, None);
    }

    #[test]
    fn test_recommendation_response_shape() {
        let response = RecommendationResponse {
            title: "Logan".to_string(),
            k: 1,
            recommendations: vec![Recommendation {
                title: "X-Men".to_string(),
                score: 0.5,
            }],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Logan",
                "k": 1,
                "recommendations": [{ "title": "X-Men", "score": 0.5 }]
            })
        );
    }

    #[test]
    fn test_movie_response_is_flat() {
        let response = MovieResponse {
            position: 3,
            record: MovieRecord {
                title: "Up".to_string(),
                genre_tokens: vec!["animation".to_string()],
                director_token: "petedocter".to_string(),
                actor_tokens: Vec::new(),
                keyword_tokens: Vec::new(),
                bag_of_words: "animation petedocter  ".to_string(),
            },
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["position"], 3);
        assert_eq!(value["title"], "Up");
        assert_eq!(value["director_token"], "petedocter");
    }
}
