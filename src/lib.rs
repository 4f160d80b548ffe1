//! Content-based movie recommendations.
//!
//! A catalog is loaded once, each movie's genre, director, lead cast and
//! plot keywords are folded into a bag of words, and a pairwise cosine
//! similarity matrix is built over term-frequency vectors. Queries then rank
//! one row of that matrix.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
