use std::path::{Path, PathBuf};

use crate::{error::AppResult, models::RawMovie};

/// Source of raw catalog rows
///
/// Implementations only read; the returned order fixes every row's
/// position for the rest of the run.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    /// Reads every row of the catalog
    fn load(&self) -> AppResult<Vec<RawMovie>>;

    /// Source name for logging and debugging
    fn name(&self) -> String;
}

/// Catalog stored as a CSV file with `Title, Genre, Director, Actors, Plot` headers
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses catalog rows from any CSV reader
    pub fn read_from<R: std::io::Read>(reader: R) -> AppResult<Vec<RawMovie>> {
        let mut reader = csv::Reader::from_reader(reader);
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<RawMovie>, csv::Error>>()?;
        Ok(rows)
    }
}

impl CatalogSource for CsvCatalog {
    fn load(&self) -> AppResult<Vec<RawMovie>> {
        let file = std::fs::File::open(&self.path)?;
        let rows = Self::read_from(std::io::BufReader::new(file))?;
        tracing::info!(path = %self.path.display(), rows = rows.len(), "Catalog loaded");
        Ok(rows)
    }

    fn name(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
