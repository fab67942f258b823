pub mod engine;
pub mod errors;
pub mod listener;
pub mod navigator;

pub use engine::RedirectEngine;
pub use errors::NavigateError;
pub use listener::spawn_listener;
pub use navigator::{Navigator, NoopNavigator};
