//! Factory errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("{name} not registered in {factory}")]
    NotFound { factory: &'static str, name: String },
}

impl FactoryError {
    /// Build a `NotFound` error for a lookup against factory `F`.
    pub fn not_found<F: ?Sized>(name: impl Into<String>) -> Self {
        Self::NotFound {
            factory: std::any::type_name::<F>(),
            name: name.into(),
        }
    }

    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name, .. } => name,
        }
    }
}
