use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::defaults::default_config;
use crate::errors::ConfigError;
use crate::model::{RedirectConfig, ServiceRule};

const ENV_ONBOARDING: &str = "REROUTE_ONBOARDING_COMPLETE";
const ENV_RULE_PREFIX: &str = "REROUTE_RULE__";

/// Partial overlay as read from a YAML file; absent fields keep
/// whatever the layer below provided.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    onboarding_complete: Option<bool>,
    #[serde(default)]
    rules: HashMap<String, RuleOverlay>,
}

#[derive(Debug, Default, Deserialize)]
struct RuleOverlay {
    enabled: Option<bool>,
    instance: Option<String>,
}

/// Build a configuration snapshot: seeded defaults, overlaid by the
/// optional YAML file at `path`, overlaid by `REROUTE_*` env vars.
/// Later layers win per field. Read-only tooling; nothing here writes
/// configuration back anywhere.
pub fn load_config(path: Option<&Path>) -> Result<RedirectConfig, ConfigError> {
    let mut config = default_config();

    if let Some(path) = path {
        if path.exists() {
            let overlay = overlay_from_file(path)?;
            apply_overlay(&mut config, overlay);
        }
    }

    apply_env(&mut config);
    Ok(config)
}

fn overlay_from_file(path: &Path) -> Result<ConfigOverlay, ConfigError> {
    let content = fs::read_to_string(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    serde_yaml::from_str(&content).map_err(|err| ConfigError::Invalid(err.to_string()))
}

fn apply_overlay(config: &mut RedirectConfig, overlay: ConfigOverlay) {
    if let Some(onboarding) = overlay.onboarding_complete {
        config.onboarding_complete = onboarding;
    }
    for (key, rule_overlay) in overlay.rules {
        let rule = config
            .rules
            .entry(key.to_ascii_lowercase())
            .or_insert_with(ServiceRule::default);
        if let Some(enabled) = rule_overlay.enabled {
            rule.enabled = enabled;
        }
        if let Some(instance) = rule_overlay.instance {
            rule.instance = instance;
        }
    }
}

fn apply_env(config: &mut RedirectConfig) {
    if let Ok(raw) = env::var(ENV_ONBOARDING) {
        match parse_bool(&raw) {
            Some(value) => config.onboarding_complete = value,
            None => warn!(var = ENV_ONBOARDING, value = %raw, "ignoring non-boolean env override"),
        }
    }

    for (key, raw) in env::vars() {
        let Some(stripped) = key.strip_prefix(ENV_RULE_PREFIX) else {
            continue;
        };
        // REROUTE_RULE__<SERVICE>__ENABLED / __INSTANCE
        let Some((service, field)) = stripped.split_once("__") else {
            warn!(var = %key, "ignoring malformed rule env override");
            continue;
        };
        let rule = config
            .rules
            .entry(service.to_ascii_lowercase())
            .or_insert_with(ServiceRule::default);
        match field {
            "ENABLED" => match parse_bool(&raw) {
                Some(value) => rule.enabled = value,
                None => warn!(var = %key, value = %raw, "ignoring non-boolean env override"),
            },
            "INSTANCE" => rule.instance = raw,
            other => warn!(var = %key, field = other, "ignoring unknown rule field"),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
