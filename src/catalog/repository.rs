use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use super::movie::Movie;

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog unavailable: {message}")]
    Unavailable { message: String },
}

/// Source of movies for the view-model.
///
/// `load` may block; callers run it off the async runtime.
pub trait MovieRepository: Send + Sync + 'static {
    fn load(&self) -> Result<Vec<Movie>, CatalogError>;
}

/// Accepts both `{"movies": [...]}` and a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { movies: Vec<Movie> },
    Bare(Vec<Movie>),
}

/// Reads the catalog from a JSON file on every `load`.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(content: &str, path: PathBuf) -> Result<Vec<Movie>, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)
            .map_err(|source| CatalogError::ParseError { path, source })?;
        Ok(match file {
            CatalogFile::Wrapped { movies } => movies,
            CatalogFile::Bare(movies) => movies,
        })
    }
}

impl MovieRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Movie>, CatalogError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CatalogError::ReadError {
            path: self.path.clone(),
            source,
        })?;
        let movies = Self::parse(&content, self.path.clone())?;
        tracing::debug!(path = %self.path.display(), count = movies.len(), "Catalog loaded");
        Ok(movies)
    }
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    movies: Vec<Movie>,
}

impl InMemoryRepository {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}

impl MovieRepository for InMemoryRepository {
    fn load(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.movies.clone())
    }
}
