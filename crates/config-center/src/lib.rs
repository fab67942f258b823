pub mod api;
pub mod defaults;
pub mod errors;
pub mod loader;
pub mod model;

pub use api::{ConfigStore, InMemoryConfigStore};
pub use defaults::default_config;
pub use errors::ConfigError;
pub use loader::load_config;
pub use model::{RedirectConfig, ServiceRule};

#[cfg(test)]
mod tests;
