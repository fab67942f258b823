use async_trait::async_trait;
use tracing::debug;
use url::Url;

use reroute_core_types::TabId;

use crate::errors::NavigateError;

/// The one mutating call the engine makes: point `tab` at `target`.
/// Implemented by the host against whatever transport actually drives
/// the browser.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn apply(&self, tab: TabId, target: &Url) -> Result<(), NavigateError>;
}

/// Navigator that only logs. Useful while wiring a host up, and as a
/// stand-in in tests that exercise decisions rather than effects.
#[derive(Debug, Default)]
pub struct NoopNavigator;

#[async_trait]
impl Navigator for NoopNavigator {
    async fn apply(&self, tab: TabId, target: &Url) -> Result<(), NavigateError> {
        debug!(%tab, %target, "noop navigator: dropping redirect");
        Ok(())
    }
}
