use crate::model::{ServiceDescriptor, ServiceId};

/// The builtin registry, in priority order. Evaluation walks this
/// slice front to back and the first matching descriptor wins, so the
/// order here is the tie-break when several predicates would match.
///
/// Adding a service is a data addition to this table only; nothing in
/// the decision engine changes.
static SERVICES: &[ServiceDescriptor] = &[
    ServiceDescriptor::new(ServiceId::new("YouTube"), &["youtube.com", "youtu.be"]),
    ServiceDescriptor::new(ServiceId::new("Twitter"), &["twitter.com", "x.com"]),
    ServiceDescriptor::new(ServiceId::new("Reddit"), &["reddit.com"]),
    ServiceDescriptor::new(ServiceId::new("Instagram"), &["instagram.com"]),
    ServiceDescriptor::new(ServiceId::new("Medium"), &["medium.com"]),
    ServiceDescriptor::new(ServiceId::new("Imgur"), &["imgur.com"]),
];

pub fn builtin_services() -> &'static [ServiceDescriptor] {
    SERVICES
}

/// Classify a hostname against the builtin table; returns the first
/// matching service, or `None` for unknown hosts. Pure and safe for
/// unsynchronized concurrent calls.
pub fn match_hostname(hostname: &str) -> Option<ServiceId> {
    SERVICES
        .iter()
        .find(|service| service.matches_host(hostname))
        .map(|service| service.id())
}
