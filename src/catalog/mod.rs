//! Movie catalog: the data the movies view-model reduces over.

mod listing;
mod movie;
mod repository;

pub use listing::{full_listing, search_by_title, TOP_RATED_PER_YEAR};
pub use movie::Movie;
pub use repository::{CatalogError, InMemoryRepository, JsonFileRepository, MovieRepository};
