use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{sleep_until, Instant};

use super::pipeline::SearchPipeline;
use crate::ui::dispose::DisposeHandle;
use crate::ui::input::TextInput;

/// Drives a [`SearchPipeline`] from `input` until the input closes, the
/// consumer goes away, or `dispose` fires.
///
/// Runs as its own task so debouncing never stalls the render task. Queries
/// are mapped with `to_intent` and sent to `out`, the merged intent channel.
pub async fn run_search_source<I, F>(
    mut input: TextInput,
    window: Duration,
    out: UnboundedSender<I>,
    to_intent: F,
    dispose: DisposeHandle,
) where
    F: Fn(String) -> I,
{
    let mut pipeline = SearchPipeline::new(window);
    loop {
        let deadline = pipeline.deadline();
        let query = tokio::select! {
            biased;
            _ = dispose.wait() => return,
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                pipeline.on_timer(Instant::now())
            }
            text = input.recv() => match text {
                Some(text) => {
                    pipeline.on_input(text, Instant::now());
                    None
                }
                None => {
                    if let Some(query) = pipeline.flush() {
                        let _ = out.send(to_intent(query));
                    }
                    tracing::debug!("Text input closed");
                    return;
                }
            },
        };

        if let Some(query) = query {
            tracing::trace!(%query, "Search query settled");
            if out.send(to_intent(query)).is_err() {
                return;
            }
        }
    }
}
