use crate::catalog::Movie;
use crate::ui::movies::state::{MoviesError, MoviesViewState};
use crate::ui::mvi::Reducer;

/// Partial results produced while handling a [`MoviesIntent`](super::MoviesIntent).
#[derive(Debug, Clone)]
pub enum MoviesChange {
    Loading { search: bool },
    Loaded { movies: Vec<Movie>, search: bool },
    Failed(MoviesError),
}

pub struct MoviesReducer;

impl Reducer for MoviesReducer {
    type State = MoviesViewState;
    type Change = MoviesChange;

    fn reduce(state: Self::State, change: Self::Change) -> Self::State {
        match change {
            MoviesChange::Loading { search } => MoviesViewState::loading(search),
            MoviesChange::Loaded { movies, search } => MoviesViewState::loaded(movies, search),
            MoviesChange::Failed(error) => MoviesViewState {
                is_search: state.is_search,
                ..MoviesViewState::failed(error)
            },
        }
    }
}
