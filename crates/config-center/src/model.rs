use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-service redirect rule. `instance` is the user-chosen alternate
/// host, either a full URL or a bare host; it may be empty when the
/// user enabled a service without picking an instance yet.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServiceRule {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub instance: String,
}

impl ServiceRule {
    pub fn enabled(instance: impl Into<String>) -> Self {
        Self {
            enabled: true,
            instance: instance.into(),
        }
    }
}

/// One immutable snapshot of the redirect configuration. Rules are
/// keyed by the lower-cased service identifier.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RedirectConfig {
    /// Redirects never fire before initial setup has finished, even
    /// when individual rules are present.
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default)]
    pub rules: HashMap<String, ServiceRule>,
}

impl RedirectConfig {
    pub fn rule(&self, key: &str) -> Option<&ServiceRule> {
        self.rules.get(key)
    }
}
