use std::fmt;

use thiserror::Error;
use url::Url;

/// Shared error type the member-crate errors bridge into.
#[derive(Debug, Error, Clone)]
pub enum RerouteError {
    #[error("{message}")]
    Message { message: String },
}

impl RerouteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

/// Identifier of the browser tab that owns a navigation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TabId(pub i64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the frame a navigation occurs in. Frame 0 is the
/// main frame of its tab; everything else is an embedded sub-frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FrameId(pub i64);

impl FrameId {
    pub const MAIN: FrameId = FrameId(0);

    pub fn is_main(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One top-level (or sub-frame) navigation attempt as delivered by the
/// browser, before it completes. Transient; never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavigationEvent {
    pub tab: TabId,
    pub frame: FrameId,
    pub url: String,
}

impl NavigationEvent {
    pub fn new(tab: TabId, frame: FrameId, url: impl Into<String>) -> Self {
        Self {
            tab,
            frame,
            url: url.into(),
        }
    }

    /// Convenience constructor for a main-frame navigation.
    pub fn top_level(tab: TabId, url: impl Into<String>) -> Self {
        Self::new(tab, FrameId::MAIN, url)
    }
}

impl fmt::Display for NavigationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab={} frame={} url={}", self.tab, self.frame, self.url)
    }
}

/// Outcome of evaluating one navigation event. Computed fresh per
/// event and never cached, so a changed instance configuration takes
/// effect on the very next navigation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RedirectDecision {
    /// Let the navigation proceed unmodified.
    NoAction,
    /// Rewrite the navigation to this target.
    Redirect(Url),
}

impl RedirectDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    pub fn target(&self) -> Option<&Url> {
        match self {
            Self::Redirect(url) => Some(url),
            Self::NoAction => None,
        }
    }
}
