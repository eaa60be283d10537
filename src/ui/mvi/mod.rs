//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between a view and its view-model.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ ViewModel ──→ State ──→ View
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of what the view displays
//! - **Intent**: User actions fed into the view-model
//! - **Reducer**: Pure function folding changes into the next state
//! - **ViewModel**: Consumes an intent stream, publishes a state stream

mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use view_model::{IntentStream, StateStream, ViewModel};
