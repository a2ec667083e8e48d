//! Configuration schema definitions.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use registrar_core::Factory;

use crate::error::ConfigError;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrarConfig {
    /// Entity specs keyed by slot name.
    #[serde(default)]
    pub entities: HashMap<String, EntitySpec>,
}

impl RegistrarConfig {
    /// Get the spec configured for a slot.
    pub fn entity(&self, slot: &str) -> Result<&EntitySpec, ConfigError> {
        self.entities
            .get(slot)
            .ok_or_else(|| ConfigError::MissingEntity(slot.to_string()))
    }

    /// Create the entity configured for a slot through factory `F`.
    pub fn create<F>(&self, slot: &str) -> Result<Box<F::Product>, F::Error>
    where
        F: Factory,
        F::Args: DeserializeOwned,
        F::Error: From<ConfigError>,
    {
        self.entity(slot)?.create::<F>()
    }
}

/// A registered entity name plus the arguments for its constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec {
    pub name: String,

    #[serde(default)]
    pub args: toml::Table,
}

impl EntitySpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: toml::Table::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Deserialize `args` into a factory's argument bundle.
    pub fn args<A: DeserializeOwned>(&self) -> Result<A, ConfigError> {
        toml::Value::Table(self.args.clone())
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::InvalidArgs {
                entity: self.name.clone(),
                message: e.to_string(),
            })
    }

    /// Create this entity through factory `F`.
    ///
    /// An unregistered name is reported before the arguments are checked.
    pub fn create<F>(&self) -> Result<Box<F::Product>, F::Error>
    where
        F: Factory,
        F::Args: DeserializeOwned,
        F::Error: From<ConfigError>,
    {
        let registration = F::get(&self.name)?;
        let args = self.args::<F::Args>()?;
        registration.construct(args)
    }
}
