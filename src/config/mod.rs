//! Configuration loading and validation.
//!
//! Credentials and the allowed-filetype set are each loaded once from JSON
//! at startup and treated as immutable for the rest of the run.

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{AuthConfig, FiletypeSet};
pub use modes::NsfwMode;
pub use validation::validate_auth;
