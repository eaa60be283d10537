//! Reference view-model: reduces movie intents over a catalog repository.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;

use crate::catalog::{full_listing, search_by_title, CatalogError, Movie, MovieRepository};
use crate::ui::movies::intent::MoviesIntent;
use crate::ui::movies::reducer::{MoviesChange, MoviesReducer};
use crate::ui::movies::state::{MoviesError, MoviesViewState};
use crate::ui::mvi::{IntentStream, Reducer, StateStream, ViewModel};

const LOAD_FAILED_MESSAGE: &str = "Couldn't load movies";

/// Cheap to clone; clones share subscribers, state and the cached catalog.
#[derive(Clone)]
pub struct MoviesViewModel {
    inner: Arc<Inner>,
}

struct Inner {
    repository: Arc<dyn MovieRepository>,
    catalog: OnceCell<Arc<Vec<Movie>>>,
    state: Mutex<MoviesViewState>,
    subscribers: Mutex<Vec<UnboundedSender<MoviesViewState>>>,
    processing: Mutex<Vec<JoinHandle<()>>>,
}

impl MoviesViewModel {
    pub fn new(repository: impl MovieRepository) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    pub fn from_shared(repository: Arc<dyn MovieRepository>) -> Self {
        Self {
            inner: Arc::new(Inner {
                repository,
                catalog: OnceCell::new(),
                state: Mutex::new(MoviesViewState::default()),
                subscribers: Mutex::new(Vec::new()),
                processing: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Latest reduced state.
    pub fn current_state(&self) -> MoviesViewState {
        self.inner.state.lock().clone()
    }

    /// Resolves once every intent stream handed to `process_intents` has ended
    /// and its intents were reduced.
    pub async fn finished(&self) {
        let tasks = std::mem::take(&mut *self.inner.processing.lock());
        for task in tasks {
            let _ = task.await;
        }
    }

    /// End every state stream. Already emitted states stay readable.
    pub fn close(&self) {
        self.inner.subscribers.lock().clear();
    }
}

impl ViewModel for MoviesViewModel {
    type Intent = MoviesIntent;
    type State = MoviesViewState;

    fn states(&self) -> StateStream<MoviesViewState> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().push(tx);
        rx
    }

    /// Must be called from within a tokio runtime.
    fn process_intents(&self, mut intents: IntentStream<MoviesIntent>) {
        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            while let Some(intent) = intents.recv().await {
                inner.handle(intent).await;
            }
            tracing::debug!("Intent stream ended");
        });
        self.inner.processing.lock().push(task);
    }
}

impl Inner {
    async fn handle(&self, intent: MoviesIntent) {
        tracing::debug!(?intent, "Processing intent");
        let query = match intent {
            MoviesIntent::Init => None,
            MoviesIntent::Search(query) if query.trim().is_empty() => None,
            MoviesIntent::Search(query) => Some(query),
        };
        let search = query.is_some();

        self.apply(MoviesChange::Loading { search });
        let change = match self.catalog().await {
            Ok(catalog) => {
                let movies = match &query {
                    Some(query) => search_by_title(&catalog, query),
                    None => full_listing(&catalog),
                };
                MoviesChange::Loaded { movies, search }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Catalog load failed");
                MoviesChange::Failed(MoviesError::with_cause(LOAD_FAILED_MESSAGE, err))
            }
        };
        self.apply(change);
    }

    /// Loads the catalog once; failures are not cached so the next intent retries.
    async fn catalog(&self) -> Result<Arc<Vec<Movie>>, CatalogError> {
        let catalog = self
            .catalog
            .get_or_try_init(|| async {
                let repository = Arc::clone(&self.repository);
                let movies = tokio::task::spawn_blocking(move || repository.load())
                    .await
                    .map_err(|err| CatalogError::Unavailable {
                        message: err.to_string(),
                    })??;
                Ok::<_, CatalogError>(Arc::new(movies))
            })
            .await?;
        Ok(Arc::clone(catalog))
    }

    fn apply(&self, change: MoviesChange) {
        let next = {
            let mut state = self.state.lock();
            let next = MoviesReducer::reduce(state.clone(), change);
            *state = next.clone();
            next
        };
        self.subscribers
            .lock()
            .retain(|subscriber| subscriber.send(next.clone()).is_ok());
    }
}
