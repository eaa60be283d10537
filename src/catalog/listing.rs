//! Ordering and search rules applied to the raw catalog.

use std::cmp::Reverse;

use super::movie::Movie;

/// Number of movies kept per year in search results.
pub const TOP_RATED_PER_YEAR: usize = 5;

/// Full catalog ordered newest year first, then best rated, then by title.
pub fn full_listing(movies: &[Movie]) -> Vec<Movie> {
    let mut listing = movies.to_vec();
    listing.sort_by(|a, b| {
        (Reverse(a.year), Reverse(a.rating), &a.title).cmp(&(
            Reverse(b.year),
            Reverse(b.rating),
            &b.title,
        ))
    });
    listing
}

/// Movies whose title contains `query` (case-insensitive), grouped by year
/// newest first, keeping the [`TOP_RATED_PER_YEAR`] best rated of each year.
pub fn search_by_title(movies: &[Movie], query: &str) -> Vec<Movie> {
    let needle = query.trim().to_lowercase();
    let matches: Vec<Movie> = movies
        .iter()
        .filter(|movie| movie.title_contains(&needle))
        .cloned()
        .collect();

    let mut results = Vec::with_capacity(matches.len());
    let mut current_year = None;
    let mut kept_for_year = 0;
    for movie in full_listing(&matches) {
        if current_year != Some(movie.year) {
            current_year = Some(movie.year);
            kept_for_year = 0;
        }
        if kept_for_year < TOP_RATED_PER_YEAR {
            kept_for_year += 1;
            results.push(movie);
        }
    }
    results
}
