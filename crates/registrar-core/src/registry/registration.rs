//! A constructor stored in a factory registry under a name.

use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::factory::Factory;

/// Shared constructor for a factory's product.
pub type Constructor<F> = Arc<
    dyn Fn(<F as Factory>::Args) -> Result<Box<<F as Factory>::Product>, <F as Factory>::Error>
        + Send
        + Sync,
>;

/// Identity of the Rust type behind a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TypeStamp {
    pub(crate) id: TypeId,
    pub(crate) name: &'static str,
}

impl TypeStamp {
    fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
}

/// An entry in a factory registry.
///
/// Carries the name it was registered under and, when registered by type,
/// the identity of that type. Cloning is cheap.
pub struct Registration<F: Factory> {
    name: Arc<str>,
    stamp: Option<TypeStamp>,
    constructor: Constructor<F>,
}

impl<F: Factory> Registration<F> {
    pub(crate) fn from_fn(name: impl Into<Arc<str>>, constructor: Constructor<F>) -> Self {
        Self {
            name: name.into(),
            stamp: None,
            constructor,
        }
    }

    pub(crate) fn of_type<T: 'static>(
        name: impl Into<Arc<str>>,
        constructor: Constructor<F>,
    ) -> Self {
        Self {
            name: name.into(),
            stamp: Some(TypeStamp::of::<T>()),
            constructor,
        }
    }

    /// The name this entry was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type name of the registered type, if registered by type.
    pub fn type_name(&self) -> Option<&'static str> {
        self.stamp.map(|stamp| stamp.name)
    }

    /// `TypeId` of the registered type, if registered by type.
    pub fn type_id(&self) -> Option<TypeId> {
        self.stamp.map(|stamp| stamp.id)
    }

    /// Check whether this entry was registered for `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id() == Some(TypeId::of::<T>())
    }

    /// Run the constructor. Its result is returned as is.
    pub fn construct(&self, args: F::Args) -> Result<Box<F::Product>, F::Error> {
        (self.constructor)(args)
    }

    pub(crate) fn stamp(&self) -> Option<TypeStamp> {
        self.stamp
    }
}

impl<F: Factory> Clone for Registration<F> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            stamp: self.stamp,
            constructor: self.constructor.clone(),
        }
    }
}

impl<F: Factory> fmt::Debug for Registration<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("factory", &type_name::<F>())
            .field("name", &self.name)
            .field("type_name", &self.type_name())
            .finish_non_exhaustive()
    }
}
