//! Registry storage and registered entries.

mod base;
mod registration;

pub use base::Registry;
pub use registration::{Constructor, Registration};
