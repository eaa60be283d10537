//! Wires a view-model, an intent source and a rendering surface into one loop.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::ui::dispose::{DisposeHandle, Disposables};
use crate::ui::input::IntentSource;
use crate::ui::movies::{MoviesIntent, MoviesViewState};
use crate::ui::mvi::{StateStream, ViewModel};
use crate::ui::render::{render, RenderSurface};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("View is already attached")]
    AlreadyAttached,

    #[error("Intent source was already subscribed")]
    AlreadySubscribed,

    #[error("View was detached and cannot be attached again")]
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Attached,
    Detached,
}

/// One view activation: `attach()` once, `detach()` when torn down.
pub struct Binder<VM, S> {
    view_model: VM,
    surface: Arc<Mutex<S>>,
    intents: IntentSource,
    disposables: Disposables,
    render_task: Option<JoinHandle<()>>,
    phase: Phase,
}

impl<VM, S> Binder<VM, S>
where
    VM: ViewModel<Intent = MoviesIntent, State = MoviesViewState>,
    S: RenderSurface,
{
    pub fn new(view_model: VM, surface: S, intents: IntentSource) -> Self {
        Self {
            view_model,
            surface: Arc::new(Mutex::new(surface)),
            intents,
            disposables: Disposables::new(),
            render_task: None,
            phase: Phase::Idle,
        }
    }

    pub fn view_model(&self) -> &VM {
        &self.view_model
    }

    pub fn is_attached(&self) -> bool {
        self.phase == Phase::Attached
    }

    /// Start the loop. Must be called from within a tokio runtime.
    ///
    /// The renderer subscribes to states before any intent is handed over,
    /// so the view-model cannot emit a state nobody is listening to.
    pub fn attach(&mut self) -> Result<(), BindError> {
        match self.phase {
            Phase::Idle => {}
            Phase::Attached => return Err(BindError::AlreadyAttached),
            Phase::Detached => return Err(BindError::Detached),
        }

        let states = self.view_model.states();
        self.render_task = Some(tokio::spawn(render_loop(
            states,
            Arc::clone(&self.surface),
            self.disposables.handle(),
        )));

        let intents = self.intents.subscribe(&self.disposables)?;
        self.view_model.process_intents(intents);

        self.phase = Phase::Attached;
        tracing::debug!("View attached");
        Ok(())
    }

    /// Wait until the state stream ends on its own and every received state was rendered.
    pub async fn rendered_all(&mut self) {
        if let Some(task) = self.render_task.take() {
            let _ = task.await;
        }
    }

    /// Release every subscription. Safe to call repeatedly.
    ///
    /// Once this returns the surface receives no further calls.
    pub fn detach(&mut self) {
        if self.phase == Phase::Detached {
            return;
        }
        {
            // A render in progress finishes before the flag flips.
            let _surface = self.surface.lock();
            self.disposables.dispose();
        }
        if let Some(task) = self.render_task.take() {
            task.abort();
        }
        self.phase = Phase::Detached;
        tracing::debug!("View detached");
    }
}

impl<VM, S> Drop for Binder<VM, S> {
    fn drop(&mut self) {
        let _surface = self.surface.lock();
        self.disposables.dispose();
        if let Some(task) = self.render_task.take() {
            task.abort();
        }
    }
}

async fn render_loop<S: RenderSurface>(
    mut states: StateStream<MoviesViewState>,
    surface: Arc<Mutex<S>>,
    dispose: DisposeHandle,
) {
    loop {
        let state = tokio::select! {
            biased;
            _ = dispose.wait() => return,
            state = states.recv() => state,
        };
        let Some(state) = state else {
            tracing::debug!("State stream ended");
            return;
        };

        let mut guard = surface.lock();
        if dispose.is_disposed() {
            return;
        }
        render(&mut *guard, &state);
    }
}
