mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::MoviesIntent;
pub use reducer::{MoviesChange, MoviesReducer};
pub use state::{MoviesError, MoviesViewState};
pub use view_model::MoviesViewModel;
