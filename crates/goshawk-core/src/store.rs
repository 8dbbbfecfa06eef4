use crate::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// Section/key configuration source backed by a TOML document.
///
/// Top-level tables are sections; scalar entries are settings. The store is
/// string-typed: booleans, integers and floats are coerced to their literal
/// string form, matching the `(section, key) -> string` external contract.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigStore {
    /// A store with no sections. Useful when running purely off environment
    /// variables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a TOML document into a store.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let table: toml::Table = raw.parse()?;
        let mut sections: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();

        for (name, value) in table {
            let toml::Value::Table(entries) = value else {
                tracing::warn!("config: ignoring top-level entry '{}' outside any section", name);
                continue;
            };

            let section = sections.entry(name.clone()).or_default();
            for (key, value) in entries {
                match scalar_to_string(&value) {
                    Some(text) => {
                        section.insert(key, text);
                    }
                    None => {
                        tracing::warn!("config: ignoring non-scalar value for [{}] {}", name, key);
                    }
                }
            }
        }

        Ok(Self { sections })
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Reading config file: {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Look up a setting by section and key.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }
}

fn scalar_to_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        _ => None,
    }
}
