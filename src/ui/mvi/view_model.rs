//! View-model contract consumed by the view.

use tokio::sync::mpsc::UnboundedReceiver;

use super::intent::Intent;
use super::state::UiState;

/// Ordered intent sequence handed to a view-model. Ends when every sender is dropped.
pub type IntentStream<I> = UnboundedReceiver<I>;

/// Ordered state sequence published by a view-model.
pub type StateStream<S> = UnboundedReceiver<S>;

/// Owner of business rules: reduces intents into states.
///
/// The view treats implementations as a black box. Two guarantees are
/// required of them:
/// - every state emitted after `states()` returns reaches that stream
/// - intents are processed in the order they arrive
pub trait ViewModel: Send + Sync + 'static {
    type Intent: Intent;
    type State: UiState;

    /// Subscribe to states emitted from now on.
    fn states(&self) -> StateStream<Self::State>;

    /// Start consuming `intents`. Processing stops when the stream ends.
    fn process_intents(&self, intents: IntentStream<Self::Intent>);
}
