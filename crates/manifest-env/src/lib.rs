//! Environment snapshot store for Manifest Manager
//!
//! Persists the per-environment placeholder values as dotenv files
//! (`.env.<name>`), preserving comments and formatting across writes.

pub mod dotenv;
pub mod error;
pub mod io;
pub mod store;

pub use dotenv::DotenvDocument;
pub use error::{Error, Result};
pub use store::EnvStore;
