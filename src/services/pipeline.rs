use tracing::instrument;

use crate::{
    config::Config,
    error::AppResult,
    models::{MovieRecord, RawMovie},
    services::{
        catalog::CatalogSource,
        composer::compose,
        corpus::Corpus,
        keywords::KeywordExtractor,
        normalizer::normalize,
        recommendations::Recommender,
        stopwords::Stopwords,
    },
};

/// Builds the keyword extractor described by the configuration
pub fn keyword_extractor(config: &Config) -> AppResult<KeywordExtractor> {
    let stopwords = match &config.stopwords_path {
        Some(path) => Stopwords::from_file(path)?,
        None => Stopwords::english(),
    };
    Ok(KeywordExtractor::new(stopwords).with_mode(config.keyword_mode))
}

/// Turns one raw row into a complete record
pub fn prepare(raw: &RawMovie, row: usize, extractor: &KeywordExtractor) -> AppResult<MovieRecord> {
    let movie = normalize(raw, row)?;
    let keywords = extractor.keywords(&movie.plot);
    Ok(compose(movie, keywords))
}

/// Prepares every row; the first bad row fails the whole build
#[instrument(skip_all, fields(rows = rows.len()))]
pub fn build_corpus(rows: &[RawMovie], extractor: &KeywordExtractor) -> AppResult<Corpus> {
    let records = rows
        .iter()
        .enumerate()
        .map(|(row, raw)| prepare(raw, row, extractor))
        .collect::<AppResult<Vec<_>>>()
        .inspect_err(|e| tracing::error!(error = %e, "Catalog normalization failed"))?;

    let corpus = Corpus::new(records)?;
    tracing::info!(movies = corpus.len(), mode = ?extractor.mode(), "Corpus built");
    Ok(corpus)
}

/// Loads the catalog and builds a ready-to-query recommender
#[instrument(skip_all, fields(source = %source.name()))]
pub fn build_recommender(
    source: &dyn CatalogSource,
    extractor: &KeywordExtractor,
) -> AppResult<Recommender> {
    let rows = source.load()?;
    let corpus = build_corpus(&rows, extractor)?;
    Ok(Recommender::new(corpus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, services::catalog::MockCatalogSource};

    fn catalog_rows() -> Vec<RawMovie> {
        vec![
            RawMovie::new(
                "The Dark Knight",
                "Action, Crime, Drama",
                "Christopher Nolan",
                "Christian Bale, Heath Ledger, Aaron Eckhart, Michael Caine",
                "Batman faces the Joker, a criminal mastermind who spreads chaos in Gotham.",
            ),
            RawMovie::new(
                "Batman Begins",
                "Action, Adventure",
                "Christopher Nolan",
                "Christian Bale, Michael Caine, Liam Neeson",
                "Bruce Wayne becomes Batman to fight crime in Gotham.",
            ),
            RawMovie::new(
                "Toy Story",
                "Animation, Adventure, Comedy",
                "John Lasseter",
                "Tom Hanks,Tim Allen,Don Rickles,Jim Varney",
                "A cowboy doll feels threatened by a new spaceman toy.",
            ),
        ]
    }

    fn mock_source(rows: Vec<RawMovie>) -> MockCatalogSource {
        let mut source = MockCatalogSource::new();
        source.expect_name().return_const("mock".to_string());
        source.expect_load().times(1).return_once(move || Ok(rows));
        source
    }

    #[test]
    fn test_prepare_composes_all_fields() {
        let rows = catalog_rows();
        let record = prepare(&rows[2], 2, &KeywordExtractor::default()).unwrap();

        assert_eq!(record.actor_tokens, vec!["tomhanks", "timallen", "donrickles"]);
        assert_eq!(record.director_token, "johnlasseter");
        assert_eq!(
            record.keyword_tokens,
            vec!["cowboy doll feels threatened", "new spaceman toy"]
        );
        assert_eq!(
            record.bag_of_words,
            "animation  adventure  comedy johnlasseter tomhanks timallen donrickles \
             cowboy doll feels threatened new spaceman toy"
        );
    }

    #[test]
    fn test_build_recommender_from_source() {
        let source = mock_source(catalog_rows());
        let recommender = build_recommender(&source, &KeywordExtractor::default()).unwrap();

        let results = recommender.recommend("The Dark Knight", 10).unwrap();
        assert_eq!(results, vec!["Batman Begins", "Toy Story"]);
    }

    #[test]
    fn test_bad_row_fails_whole_build() {
        let mut rows = catalog_rows();
        rows[1].actors = None;
        let source = mock_source(rows);

        let result = build_recommender(&source, &KeywordExtractor::default());
        assert!(matches!(result, Err(AppError::Data(_))));
    }

    #[test]
    fn test_source_error_propagates() {
        let mut source = MockCatalogSource::new();
        source.expect_name().return_const("broken".to_string());
        source
            .expect_load()
            .return_once(|| Err(AppError::Internal("unreadable".to_string())));

        let result = build_recommender(&source, &KeywordExtractor::default());
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_duplicate_titles_fail_build() {
        let mut rows = catalog_rows();
        rows[2].title = Some("Batman Begins".to_string());

        let result = build_corpus(&rows, &KeywordExtractor::default());
        assert!(matches!(result, Err(AppError::Data(_))));
    }

    #[test]
    fn test_keyword_extractor_from_config() {
        let config = Config {
            keyword_mode: crate::services::keywords::KeywordMode::Words,
            ..Config::default()
        };

        let extractor = keyword_extractor(&config).unwrap();
        assert_eq!(
            extractor.keywords("Spaceman toy, spaceman doll."),
            vec!["spaceman", "toy", "doll"]
        );
    }

    #[test]
    fn test_keyword_extractor_missing_stopwords_file() {
        let config = Config {
            stopwords_path: Some("/nonexistent/stopwords.txt".to_string()),
            ..Config::default()
        };

        assert!(matches!(keyword_extractor(&config), Err(AppError::Io(_))));
    }
}
