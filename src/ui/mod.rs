//! View side of the movies screen and the MVI loop around it.

pub mod binder;
pub mod dispose;
pub mod input;
pub mod movies;
pub mod mvi;
pub mod render;
pub mod search;
pub mod terminal;

pub use binder::{BindError, Binder};
pub use dispose::{DisposeHandle, Disposables};
pub use input::{text_input, IntentSource, TextInput, TextInputHandle};
pub use render::{render, ListKind, RenderSurface};
pub use terminal::TerminalSurface;
