use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use reroute_core_types::NavigationEvent;

use crate::engine::RedirectEngine;

/// Drain a navigation event channel, processing each event on its own
/// detached task. Events are cheap and independent, so there is no
/// queueing or backpressure beyond the channel itself, and no
/// cancellation: an event that started processing runs to completion.
/// The returned handle finishes when the sender side closes.
pub fn spawn_listener(
    engine: Arc<RedirectEngine>,
    mut events: mpsc::Receiver<NavigationEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move {
                let decision = engine.handle(event).await;
                debug!(redirected = decision.is_redirect(), "navigation event processed");
            });
        }
        debug!("navigation event source closed; listener exiting");
    })
}
