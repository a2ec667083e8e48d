//! The factory trait and its registration contracts.

use std::any::{type_name, TypeId};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::FactoryError;
use crate::registry::{Constructor, Registration, Registry};

/// A type stamped with the name it registers under.
///
/// Usually generated by `#[registered(name = "...")]`.
pub trait Registered {
    const REGISTERED_NAME: &'static str;
}

/// A type that can be built by factory `F`.
pub trait Construct<F: Factory>: 'static {
    fn construct(args: F::Args) -> Result<Box<F::Product>, F::Error>;
}

/// A named registry of implementations, owned by the implementing type.
///
/// Every implementor owns its own [`Registry`] (see [`factory_registry!`]),
/// so two factories producing the same product never share names.
///
/// # Example
///
/// ```
/// use registrar_core::{factory_registry, registered, Construct, Factory, FactoryError};
///
/// trait Codec {
///     fn level(&self) -> u8;
/// }
///
/// struct Codecs;
///
/// impl Factory for Codecs {
///     type Product = dyn Codec;
///     type Args = u8;
///     type Error = FactoryError;
///
///     factory_registry!(Codecs);
/// }
///
/// #[registered(name = "zstd")]
/// struct Zstd(u8);
///
/// impl Codec for Zstd {
///     fn level(&self) -> u8 {
///         self.0
///     }
/// }
///
/// impl Construct<Codecs> for Zstd {
///     fn construct(level: u8) -> Result<Box<dyn Codec>, FactoryError> {
///         Ok(Box::new(Zstd(level)))
///     }
/// }
///
/// Codecs::register::<Zstd>();
/// let codec = Codecs::create("zstd", 3).unwrap();
/// assert_eq!(codec.level(), 3);
/// ```
pub trait Factory: Sized + 'static {
    /// What the registered constructors build, usually a trait object.
    type Product: ?Sized;

    /// Argument bundle handed to every constructor.
    type Args;

    /// Error returned by `create`. Constructor errors pass through unchanged.
    type Error: From<FactoryError>;

    /// This factory's own registry.
    fn registry() -> &'static Registry<Self>;

    /// Names currently registered on this factory, in registry order.
    fn registered() -> Vec<String> {
        Self::registry().names()
    }

    /// Register `T` under its stamped name.
    fn register<T>() -> Registration<Self>
    where
        T: Registered + Construct<Self>,
    {
        Self::register_as::<T>(T::REGISTERED_NAME)
    }

    /// Register `T` under an explicit name.
    ///
    /// An existing entry with the same name is replaced.
    fn register_as<T>(name: impl Into<String>) -> Registration<Self>
    where
        T: Construct<Self>,
    {
        let name: String = name.into();
        let constructor: Constructor<Self> = Arc::new(<T as Construct<Self>>::construct);
        let registration = Registration::of_type::<T>(name, constructor);
        Self::registry().insert(registration.clone());
        registration
    }

    /// Register a constructor closure under a name.
    ///
    /// An existing entry with the same name is replaced.
    fn register_fn<C>(name: impl Into<String>, constructor: C) -> Registration<Self>
    where
        C: Fn(Self::Args) -> Result<Box<Self::Product>, Self::Error> + Send + Sync + 'static,
    {
        let name: String = name.into();
        let constructor: Constructor<Self> = Arc::new(constructor);
        let registration = Registration::from_fn(name, constructor);
        Self::registry().insert(registration.clone());
        registration
    }

    /// Check if a name is registered.
    fn is_registered(name: &str) -> bool {
        Self::registry().contains(name)
    }

    /// Get the registration for a name.
    fn get(name: &str) -> Result<Registration<Self>, FactoryError> {
        Self::registry().get(name).ok_or_else(|| {
            debug!(factory = type_name::<Self>(), name, "Lookup of unregistered name");
            FactoryError::not_found::<Self>(name)
        })
    }

    /// Build a new instance of the entity registered under `name`.
    fn create(name: &str, args: Self::Args) -> Result<Box<Self::Product>, Self::Error> {
        let registration = Self::get(name)?;
        trace!(factory = type_name::<Self>(), name, "Creating entity");
        registration.construct(args)
    }

    /// Name `T` was last registered under on this factory.
    fn name_of<T: 'static>() -> Option<String> {
        Self::registry().name_of(TypeId::of::<T>())
    }
}

/// Implement [`Factory::registry`] with a lazily initialised `static`.
///
/// Use inside the `impl Factory` block; the argument is the implementing type.
///
/// The type must be concrete. A `static` cannot name the type parameters of a
/// generic impl such as `impl<T> Factory for Readers<T>`, so implement the
/// factory once per instantiation instead (`factory_registry!(Readers<Csv>)`);
/// each instantiation then owns a separate registry.
#[macro_export]
macro_rules! factory_registry {
    ($factory:ty) => {
        fn registry() -> &'static $crate::Registry<$factory> {
            static REGISTRY: ::std::sync::OnceLock<$crate::Registry<$factory>> =
                ::std::sync::OnceLock::new();
            REGISTRY.get_or_init($crate::Registry::new)
        }
    };
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
