use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoviesIntent {
    /// Screen started: show the full catalog.
    Init,
    /// Debounced text from the search box.
    Search(String),
}

impl Intent for MoviesIntent {}
