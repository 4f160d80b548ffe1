use crate::{
    error::{AppError, AppResult},
    models::{NormalizedMovie, RawMovie},
};

/// Number of billed actors kept as the lead-cast signal
pub const LEAD_CAST_SIZE: usize = 3;

/// Splits a comma-separated genre field into lowercase labels
///
/// Surrounding whitespace is kept as-is; it disappears later when the bag
/// of words is split into terms.
pub fn normalize_genres(genre: &str) -> Vec<String> {
    genre.to_lowercase().split(',').map(str::to_string).collect()
}

/// Keeps the first three actors, each lowercased with spaces removed
pub fn normalize_actors(actors: &str) -> Vec<String> {
    actors
        .split(',')
        .take(LEAD_CAST_SIZE)
        .map(|actor| actor.to_lowercase().replace(' ', ""))
        .collect()
}

/// Collapses a director's full name into one lowercase token
pub fn normalize_director(director: &str) -> String {
    director.split(' ').collect::<String>().to_lowercase()
}

fn missing(row: usize, title: Option<&str>, field: &str) -> AppError {
    match title {
        Some(title) => AppError::Data(format!(
            "row {row} ({title:?}): missing required field {field}"
        )),
        None => AppError::Data(format!("row {row}: missing required field {field}")),
    }
}

/// Normalizes one catalog row
///
/// `row` is the zero-based position in the catalog and only feeds error
/// messages. A missing plot is treated as empty text.
pub fn normalize(raw: &RawMovie, row: usize) -> AppResult<NormalizedMovie> {
    let title = raw
        .title
        .as_deref()
        .ok_or_else(|| missing(row, None, "Title"))?;
    let genre = raw
        .genre
        .as_deref()
        .ok_or_else(|| missing(row, Some(title), "Genre"))?;
    let director = raw
        .director
        .as_deref()
        .ok_or_else(|| missing(row, Some(title), "Director"))?;
    let actors = raw
        .actors
        .as_deref()
        .ok_or_else(|| missing(row, Some(title), "Actors"))?;

    Ok(NormalizedMovie {
        title: title.to_string(),
        genre_tokens: normalize_genres(genre),
        director_token: normalize_director(director),
        actor_tokens: normalize_actors(actors),
        plot: raw.plot.clone().unwrap_or_default(),
    })
}
