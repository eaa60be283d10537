//! View-side intent source: one `Init`, then debounced searches.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::ui::binder::BindError;
use crate::ui::dispose::Disposables;
use crate::ui::movies::MoviesIntent;
use crate::ui::mvi::IntentStream;
use crate::ui::search::run_search_source;

/// Creates a connected text-input pair.
pub fn text_input() -> (TextInputHandle, TextInput) {
    let (tx, rx) = mpsc::unbounded_channel();
    (TextInputHandle { tx }, TextInput { rx })
}

/// Writer side, held by whatever produces text-change events.
#[derive(Debug, Clone)]
pub struct TextInputHandle {
    tx: UnboundedSender<String>,
}

impl TextInputHandle {
    /// Report the full current text. Returns `false` once nobody listens.
    pub fn set_text(&self, text: impl Into<String>) -> bool {
        self.tx.send(text.into()).is_ok()
    }
}

/// Reader side: the raw sequence of text values, one per change.
#[derive(Debug)]
pub struct TextInput {
    rx: UnboundedReceiver<String>,
}

impl TextInput {
    pub async fn recv(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}

/// Merges the init and search sources into the single intent stream of a view.
pub struct IntentSource {
    text: Option<TextInput>,
    debounce: Duration,
}

impl IntentSource {
    pub fn new(text: TextInput, debounce: Duration) -> Self {
        Self {
            text: Some(text),
            debounce,
        }
    }

    /// Start producing intents. Can only be called once.
    ///
    /// The search task is registered with `disposables`; the stream ends when
    /// the text input closes or the disposables are released.
    pub fn subscribe(
        &mut self,
        disposables: &Disposables,
    ) -> Result<IntentStream<MoviesIntent>, BindError> {
        let text = self.text.take().ok_or(BindError::AlreadySubscribed)?;
        let (tx, rx) = mpsc::unbounded_channel();

        // Queued before the search task exists, so no search can overtake it.
        let _ = tx.send(MoviesIntent::Init);

        let task = tokio::spawn(run_search_source(
            text,
            self.debounce,
            tx,
            MoviesIntent::Search,
            disposables.handle(),
        ));
        disposables.add(task);
        Ok(rx)
    }
}
