use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: u16,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Rating on a 0..=5 scale.
    #[serde(default)]
    pub rating: u8,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: u16, rating: u8) -> Self {
        Self {
            title: title.into(),
            year,
            cast: Vec::new(),
            genres: Vec::new(),
            rating,
        }
    }

    /// Case-insensitive title match. `needle` must already be lowercase.
    pub(crate) fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}
