use crate::{ConfigStore, Error, Result};
use std::collections::HashMap;

/// Resolves individual settings from, in priority order: an environment
/// variable override, the config store, then a caller-supplied default.
///
/// The process environment is snapshotted once at construction, so repeated
/// calls with the same inputs always yield the same result for the lifetime
/// of the resolver.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    store: ConfigStore,
    env: HashMap<String, String>,
}

impl ConfigResolver {
    /// Build a resolver over the given store and the current process
    /// environment.
    pub fn new(store: ConfigStore) -> Self {
        Self::with_env(store, std::env::vars().collect())
    }

    /// Build a resolver with a synthetic environment instead of the process
    /// one.
    pub fn with_env(store: ConfigStore, env: HashMap<String, String>) -> Self {
        Self { store, env }
    }

    /// Resolve a single setting.
    ///
    /// A set environment variable short-circuits: the store is not consulted
    /// at all. With no env override and no store entry, the default is
    /// returned unchanged; with no default either, this is a hard
    /// [`Error::Unresolved`] — never an empty string.
    pub fn resolve(
        &self,
        section: &str,
        key: &str,
        env_var: Option<&str>,
        default: Option<&str>,
    ) -> Result<String> {
        if let Some(var) = env_var {
            if let Some(value) = self.env.get(var) {
                tracing::debug!("Resolved [{}] {} from ${}", section, key, var);
                return Ok(value.clone());
            }
        }

        if let Some(value) = self.store.get(section, key) {
            tracing::debug!("Resolved [{}] {} from config store", section, key);
            return Ok(value.to_string());
        }

        match default {
            Some(value) => {
                tracing::debug!("Resolved [{}] {} from default", section, key);
                Ok(value.to_string())
            }
            None => Err(Error::Unresolved {
                section: section.to_string(),
                key: key.to_string(),
            }),
        }
    }

    /// Resolve a boolean setting.
    ///
    /// `default` stands in when neither the environment nor the store has the
    /// key; a present value goes through [`parse_flag`].
    pub fn resolve_flag(
        &self,
        section: &str,
        key: &str,
        env_var: Option<&str>,
        default: bool,
    ) -> bool {
        let fallback = if default { "true" } else { "false" };
        let value = self
            .resolve(section, key, env_var, Some(fallback))
            .unwrap_or_else(|_| fallback.to_string());
        parse_flag(&value)
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }
}

/// The boolean contract of the config surface: exactly the literal `"true"`
/// is true, anything else is false.
pub fn parse_flag(raw: &str) -> bool {
    raw == "true"
}
