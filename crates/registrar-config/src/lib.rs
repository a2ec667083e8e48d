//! # Registrar Config
//!
//! Select factory entities and their constructor arguments from TOML.
//!
//! ```toml
//! [entities.reader]
//! name = "csv"
//! args = { delimiter = ";", path = "${DATA_DIR}/blocks.csv" }
//! ```

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{EntitySpec, RegistrarConfig};
