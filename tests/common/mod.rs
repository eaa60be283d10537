//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use moviesdecade::catalog::Movie;
use moviesdecade::ui::movies::{MoviesIntent, MoviesViewState};
use moviesdecade::ui::mvi::{IntentStream, StateStream, ViewModel};
use moviesdecade::ui::{ListKind, RenderSurface};
use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Loading(bool),
    Error(String),
    Empty,
    List(ListKind, Vec<String>),
}

pub type CallLog = Arc<Mutex<Vec<SurfaceCall>>>;

/// Surface that only records what it was asked to show.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    log: CallLog,
}

impl RecordingSurface {
    pub fn new() -> (Self, CallLog) {
        let surface = Self::default();
        let log = Arc::clone(&surface.log);
        (surface, log)
    }
}

impl RenderSurface for RecordingSurface {
    fn show_loading(&mut self, visible: bool) {
        self.log.lock().push(SurfaceCall::Loading(visible));
    }

    fn show_error(&mut self, message: &str) {
        self.log.lock().push(SurfaceCall::Error(message.to_string()));
    }

    fn show_empty(&mut self) {
        self.log.lock().push(SurfaceCall::Empty);
    }

    fn show_list(&mut self, kind: ListKind, items: &[Movie]) {
        let titles = items.iter().map(|m| m.title.clone()).collect();
        self.log.lock().push(SurfaceCall::List(kind, titles));
    }
}

/// View-model double: records how it was wired and lets the test emit states.
#[derive(Clone)]
pub struct ScriptedViewModel {
    inner: Arc<ScriptedInner>,
}

struct ScriptedInner {
    calls: Mutex<Vec<&'static str>>,
    subscribers: Mutex<Vec<UnboundedSender<MoviesViewState>>>,
    seen_tx: UnboundedSender<MoviesIntent>,
    seen_rx: Mutex<Option<UnboundedReceiver<MoviesIntent>>>,
}

impl ScriptedViewModel {
    pub fn new() -> Self {
        let (seen_tx, seen_rx) = mpsc::unbounded_channel();
        Self {
            inner: Arc::new(ScriptedInner {
                calls: Mutex::new(Vec::new()),
                subscribers: Mutex::new(Vec::new()),
                seen_tx,
                seen_rx: Mutex::new(Some(seen_rx)),
            }),
        }
    }

    /// Order in which the binder called `states` and `process_intents`.
    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.calls.lock().clone()
    }

    /// Every intent that reached the view-model, in order.
    pub fn take_intents(&self) -> UnboundedReceiver<MoviesIntent> {
        self.inner
            .seen_rx
            .lock()
            .take()
            .expect("intents already taken")
    }

    /// Publish a state to every live subscriber.
    pub fn emit(&self, state: MoviesViewState) {
        self.inner
            .subscribers
            .lock()
            .retain(|subscriber| subscriber.send(state.clone()).is_ok());
    }
}

impl ViewModel for ScriptedViewModel {
    type Intent = MoviesIntent;
    type State = MoviesViewState;

    fn states(&self) -> StateStream<MoviesViewState> {
        self.inner.calls.lock().push("states");
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().push(tx);
        rx
    }

    fn process_intents(&self, mut intents: IntentStream<MoviesIntent>) {
        self.inner.calls.lock().push("process_intents");
        let seen = self.inner.seen_tx.clone();
        tokio::spawn(async move {
            while let Some(intent) = intents.recv().await {
                let _ = seen.send(intent);
            }
        });
    }
}

/// Poll `condition` until it holds, failing the test after five seconds.
pub async fn wait_until(condition: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

/// Next intent, treating a closed stream as a failure.
pub async fn next_intent(rx: &mut UnboundedReceiver<MoviesIntent>) -> MoviesIntent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no intent in time")
        .expect("intent stream ended")
}

pub fn movies(titles: &[(&str, u16, u8)]) -> Vec<Movie> {
    titles
        .iter()
        .map(|(title, year, rating)| Movie::new(*title, *year, *rating))
        .collect()
}
