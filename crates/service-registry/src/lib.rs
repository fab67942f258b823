pub mod model;
pub mod table;

pub use model::{ServiceDescriptor, ServiceId};
pub use table::{builtin_services, match_hostname};

#[cfg(test)]
mod tests;
