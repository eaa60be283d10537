use std::fmt;
use std::sync::Arc;

use crate::catalog::{CatalogError, Movie};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoviesViewState {
    pub is_loading: bool,
    /// `None` while nothing new is available for the list area.
    pub movies: Option<Vec<Movie>>,
    /// Selects the search-result list over the normal list.
    pub is_search: bool,
    /// When set, the list is not rendered for this state.
    pub error: Option<MoviesError>,
}

impl UiState for MoviesViewState {}

impl MoviesViewState {
    pub fn loading(is_search: bool) -> Self {
        Self {
            is_loading: true,
            is_search,
            ..Self::default()
        }
    }

    pub fn loaded(movies: Vec<Movie>, is_search: bool) -> Self {
        Self {
            movies: Some(movies),
            is_search,
            ..Self::default()
        }
    }

    pub fn failed(error: MoviesError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Error carried inside a state: a user-facing message plus the underlying cause.
#[derive(Debug, Clone)]
pub struct MoviesError {
    message: String,
    cause: Option<Arc<CatalogError>>,
}

impl MoviesError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: CatalogError) -> Self {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&CatalogError> {
        self.cause.as_deref()
    }
}

impl PartialEq for MoviesError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.cause.as_ref().map(|c| c.to_string())
                == other.cause.as_ref().map(|c| c.to_string())
    }
}

impl fmt::Display for MoviesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MoviesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|c| c as &(dyn std::error::Error + 'static))
    }
}
