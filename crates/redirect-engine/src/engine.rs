use std::sync::Arc;

use tracing::{debug, error, info, warn};
use url::Url;

use reroute_config_center::{ConfigStore, RedirectConfig};
use reroute_core_types::{NavigationEvent, RedirectDecision};
use reroute_service_registry::{builtin_services, ServiceDescriptor};

use crate::navigator::Navigator;

/// The redirect decision engine. Stateless across events: every
/// navigation is evaluated from scratch against the snapshot current
/// at that moment, so configuration changes take effect on the next
/// navigation. Safe to share across concurrently processed events.
pub struct RedirectEngine {
    services: &'static [ServiceDescriptor],
    config: Arc<dyn ConfigStore>,
    navigator: Arc<dyn Navigator>,
}

impl RedirectEngine {
    pub fn new(config: Arc<dyn ConfigStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self::with_services(builtin_services(), config, navigator)
    }

    /// Engine over a custom registry slice. Slice order is priority
    /// order: the first matching enabled service wins.
    pub fn with_services(
        services: &'static [ServiceDescriptor],
        config: Arc<dyn ConfigStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            services,
            config,
            navigator,
        }
    }

    /// Process one navigation event end to end: fetch the config
    /// snapshot, decide, and on a redirect invoke the navigate effect
    /// exactly once. Effect failure is logged and terminal for this
    /// event; the navigation then simply proceeds unmodified.
    pub async fn handle(&self, event: NavigationEvent) -> RedirectDecision {
        if !event.frame.is_main() {
            return RedirectDecision::NoAction;
        }
        let Some(config) = self.config.snapshot().await else {
            debug!(%event, "no redirect configuration present");
            return RedirectDecision::NoAction;
        };
        let decision = self.decide(&event, &config);
        if let RedirectDecision::Redirect(target) = &decision {
            info!(tab = %event.tab, from = %event.url, to = %target, "redirecting navigation");
            if let Err(err) = self.navigator.apply(event.tab, target).await {
                error!(tab = %event.tab, %err, "navigate effect failed; navigation proceeds unmodified");
            }
        }
        decision
    }

    /// The pure decision pipeline over one event and one snapshot.
    /// Produces at most one redirect; evaluation order over the
    /// registry is the tie-break when several services match.
    pub fn decide(&self, event: &NavigationEvent, config: &RedirectConfig) -> RedirectDecision {
        if !event.frame.is_main() {
            return RedirectDecision::NoAction;
        }
        if !config.onboarding_complete {
            debug!("onboarding incomplete; redirects stay off");
            return RedirectDecision::NoAction;
        }
        let original = match Url::parse(&event.url) {
            Ok(url) => url,
            Err(err) => {
                error!(url = %event.url, %err, "navigation url failed to parse");
                return RedirectDecision::NoAction;
            }
        };
        if !matches!(original.scheme(), "http" | "https") {
            return RedirectDecision::NoAction;
        }
        let Some(host) = original.host_str() else {
            debug!(url = %event.url, "navigation url has no host");
            return RedirectDecision::NoAction;
        };

        for service in self.services {
            let Some(rule) = config.rule(&service.id().config_key()) else {
                continue;
            };
            if !rule.enabled || !service.matches_host(host) {
                continue;
            }
            let instance = rule.instance.trim();
            if instance.is_empty() {
                // Recoverable misconfiguration; later services still get their turn.
                warn!(service = %service.id(), "service enabled without a chosen instance; skipping");
                continue;
            }
            let base = match Url::parse(&normalize_instance(instance)) {
                Ok(url) => url,
                Err(err) => {
                    error!(service = %service.id(), instance = %rule.instance, %err,
                        "chosen instance is not a valid url; skipping");
                    continue;
                }
            };
            let Some(candidate) = synthesize_target(&base, &original) else {
                error!(service = %service.id(), instance = %rule.instance,
                    "chosen instance has no host; skipping");
                continue;
            };
            if candidate.host_str() == original.host_str()
                || candidate.as_str() == original.as_str()
            {
                // Self-referential instance; a redirect would loop, and trying
                // further services would mask the misconfiguration.
                warn!(service = %service.id(), url = %event.url,
                    "chosen instance points back at the original host; aborting");
                return RedirectDecision::NoAction;
            }
            return RedirectDecision::Redirect(candidate);
        }

        RedirectDecision::NoAction
    }
}

/// Bare hosts are taken as https.
fn normalize_instance(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Replacement URL: the instance's scheme+host+port carrying the
/// original's path, query and fragment, so deep links survive the
/// rewrite. Userinfo and path segments of the instance string do not
/// survive. `None` when the instance URL has no host to redirect to.
fn synthesize_target(base: &Url, original: &Url) -> Option<Url> {
    base.host_str()?;
    let mut target = base.clone();
    let _ = target.set_username("");
    let _ = target.set_password(None);
    target.set_path(original.path());
    target.set_query(original.query());
    target.set_fragment(original.fragment());
    Some(target)
}
