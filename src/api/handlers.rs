use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{MovieResponse, MoviesResponse, RecommendationQuery, RecommendationResponse},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "movies": state.recommender.corpus().len()
        })),
    )
}

/// List catalog titles in corpus order
pub async fn list_movies(State(state): State<AppState>) -> Json<MoviesResponse> {
    let titles: Vec<String> = state
        .recommender
        .corpus()
        .titles()
        .map(str::to_string)
        .collect();

    Json(MoviesResponse {
        count: titles.len(),
        titles,
    })
}

/// Show the prepared record for one title
pub async fn get_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<MovieResponse>> {
    let corpus = state.recommender.corpus();
    let position = corpus
        .position(&title)
        .ok_or_else(|| AppError::movie_not_found(&title))?;

    Ok(Json(MovieResponse {
        position,
        record: corpus.records()[position].clone(),
    }))
}

/// Recommend titles similar to the queried one
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let k = query.k.unwrap_or(state.default_k);
    if k > state.max_k {
        return Err(AppError::InvalidInput(format!(
            "k must be at most {}, got {}",
            state.max_k, k
        )));
    }

    tracing::info!(
        request_id = %request_id,
        title = %query.title,
        k,
        "Processing recommendation request"
    );

    let recommendations = state
        .recommender
        .recommend_scored(&query.title, k)
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, error = %e, "Recommendation failed")
        })?;

    tracing::info!(
        request_id = %request_id,
        returned = recommendations.len(),
        "Recommendation completed"
    );

    Ok(Json(RecommendationResponse {
        title: query.title,
        k,
        recommendations,
    }))
}
