//! # Registrar Core
//!
//! Named factories with one registry per factory type.
//!
//! ## Components
//!
//! - [`Factory`] - Register implementations by name and create them later
//! - [`Registry`] - The per-factory name table behind a factory
//! - [`Registration`] - A registered constructor stamped with its name
//! - [`registered`] - Attribute stamping a type with its registered name
//!
//! Factories are independent: registering `"csv"` on one factory never makes
//! it resolvable on another, even when both build the same product trait.

pub mod error;
pub mod factory;
pub mod registry;

pub use error::FactoryError;
pub use factory::{Construct, Factory, Registered};
pub use registrar_macros::registered;
pub use registry::{Constructor, Registration, Registry};
