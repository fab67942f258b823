use std::fmt;

/// Stable, display-cased identifier of a known service.
///
/// The identifier itself is case-sensitive; configuration maps are
/// keyed by its lower-cased form (see [`ServiceId::config_key`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ServiceId(&'static str);

impl ServiceId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Lower-cased form used as the per-service configuration key.
    pub fn config_key(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One entry of the registry: a service identifier plus the root
/// domains it is known under. Pure data, defined at process start,
/// never mutated.
#[derive(Clone, Copy, Debug)]
pub struct ServiceDescriptor {
    id: ServiceId,
    host_suffixes: &'static [&'static str],
}

impl ServiceDescriptor {
    pub const fn new(id: ServiceId, host_suffixes: &'static [&'static str]) -> Self {
        Self { id, host_suffixes }
    }

    pub fn id(&self) -> ServiceId {
        self.id
    }

    /// True when `hostname` is one of this service's root domains or a
    /// subdomain of one. Matching is case-insensitive and tolerates a
    /// trailing dot (fully-qualified form).
    pub fn matches_host(&self, hostname: &str) -> bool {
        let normalized = hostname.trim().trim_end_matches('.').to_ascii_lowercase();
        if normalized.is_empty() {
            return false;
        }
        self.host_suffixes.iter().any(|suffix| {
            normalized == *suffix || normalized.ends_with(&format!(".{suffix}"))
        })
    }
}
