use reroute_service_registry::builtin_services;

use crate::model::{RedirectConfig, ServiceRule};

/// Suggested public instance per builtin service, keyed by the
/// lower-cased service identifier.
static SUGGESTED_INSTANCES: &[(&str, &str)] = &[
    ("youtube", "https://yewtu.be"),
    ("twitter", "https://nitter.net"),
    ("reddit", "https://teddit.net"),
    ("instagram", "https://bibliogram.art"),
    ("medium", "https://scribe.rip"),
    ("imgur", "https://rimgo.pussthecat.org"),
];

/// Seeded configuration: every builtin service enabled with a
/// suggested instance, onboarding still incomplete so nothing fires
/// until setup finishes.
pub fn default_config() -> RedirectConfig {
    let mut config = RedirectConfig::default();
    for service in builtin_services() {
        let key = service.id().config_key();
        let instance = SUGGESTED_INSTANCES
            .iter()
            .find(|(id, _)| *id == key)
            .map(|(_, instance)| *instance)
            .unwrap_or_default();
        config.rules.insert(key, ServiceRule::enabled(instance));
    }
    config
}
