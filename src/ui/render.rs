//! Dispatch of one view-state onto a rendering surface.

use crate::catalog::Movie;
use crate::ui::movies::MoviesViewState;

/// Which of the two interchangeable list renderers receives the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Normal,
    Search,
}

/// Presentation-only collaborator. Implementations must not feed anything back
/// into the intent stream.
pub trait RenderSurface: Send + 'static {
    fn show_loading(&mut self, visible: bool);

    /// Non-blocking user notification.
    fn show_error(&mut self, message: &str);

    /// Show the empty placeholder and hide the list.
    fn show_empty(&mut self);

    /// Hand `items` to the `kind` list, hide the placeholder and show the list.
    fn show_list(&mut self, kind: ListKind, items: &[Movie]);
}

/// Renders `state` onto `surface`.
///
/// A state without movies and without error leaves the list area untouched,
/// so the last rendered list stays on screen.
pub fn render<S: RenderSurface + ?Sized>(surface: &mut S, state: &MoviesViewState) {
    surface.show_loading(state.is_loading);

    if let Some(error) = &state.error {
        surface.show_error(error.message());
        match error.cause() {
            Some(cause) => tracing::error!(error = %error, cause = %cause, "Rendering error state"),
            None => tracing::error!(error = %error, "Rendering error state"),
        }
        return;
    }

    match state.movies.as_deref() {
        Some([]) => surface.show_empty(),
        Some(movies) => {
            let kind = if state.is_search {
                ListKind::Search
            } else {
                ListKind::Normal
            };
            surface.show_list(kind, movies);
        }
        None => {}
    }
}
