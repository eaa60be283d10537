//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions such as screen startup or a text change.
/// They are moved into the view-model, so the view cannot reuse one after
/// submitting it.
pub trait Intent: Send + 'static {}
