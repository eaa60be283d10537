mod common;

use common::{movies, RecordingSurface, SurfaceCall};
use moviesdecade::catalog::CatalogError;
use moviesdecade::ui::movies::{MoviesError, MoviesViewState};
use moviesdecade::ui::{render, ListKind};

fn rendered(state: &MoviesViewState) -> Vec<SurfaceCall> {
    let (mut surface, log) = RecordingSurface::new();
    render(&mut surface, state);
    let calls = log.lock().clone();
    calls
}

#[test]
fn loading_only_state_leaves_list_untouched() {
    let calls = rendered(&MoviesViewState::loading(false));
    assert_eq!(calls, vec![SurfaceCall::Loading(true)]);
}

#[test]
fn error_short_circuits_list() {
    let state = MoviesViewState {
        is_loading: false,
        movies: Some(movies(&[("Up", 2009, 4)])),
        is_search: false,
        error: Some(MoviesError::new("Network error")),
    };
    assert_eq!(
        rendered(&state),
        vec![
            SurfaceCall::Loading(false),
            SurfaceCall::Error("Network error".to_string()),
        ]
    );
}

#[test]
fn error_keeps_loading_flag_from_state() {
    let state = MoviesViewState {
        is_loading: true,
        error: Some(MoviesError::with_cause(
            "Network error",
            CatalogError::Unavailable {
                message: "timeout".to_string(),
            },
        )),
        ..MoviesViewState::default()
    };
    let calls = rendered(&state);
    assert_eq!(calls[0], SurfaceCall::Loading(true));
    assert_eq!(calls.len(), 2);
}

#[test]
fn empty_movies_show_placeholder() {
    let calls = rendered(&MoviesViewState::loaded(Vec::new(), true));
    assert_eq!(calls, vec![SurfaceCall::Loading(false), SurfaceCall::Empty]);
}

#[test]
fn search_results_route_to_search_list() {
    let state = MoviesViewState::loaded(movies(&[("Batman", 1989, 4)]), true);
    assert_eq!(
        rendered(&state),
        vec![
            SurfaceCall::Loading(false),
            SurfaceCall::List(ListKind::Search, vec!["Batman".to_string()]),
        ]
    );
}

#[test]
fn normal_results_route_to_normal_list() {
    let state = MoviesViewState::loaded(movies(&[("Up", 2009, 4), ("Her", 2013, 4)]), false);
    let calls = rendered(&state);
    assert_eq!(
        calls[1],
        SurfaceCall::List(ListKind::Normal, vec!["Up".to_string(), "Her".to_string()])
    );
    assert!(!calls
        .iter()
        .any(|call| matches!(call, SurfaceCall::List(ListKind::Search, _))));
}

#[test]
fn default_state_only_hides_loading() {
    assert_eq!(
        rendered(&MoviesViewState::default()),
        vec![SurfaceCall::Loading(false)]
    );
}
