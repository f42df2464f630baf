//! Units registry loading and unit normalization
//!
//! The registry document is a YAML file with optional top-level `units` and
//! `quantity_kinds` mappings. Entries are stored in document order; all scans
//! and tie-breaks run in that order. The registry is immutable after load.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use super::model::{QuantityKind, UnitEntry};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read units registry: {0}")]
    Read(#[from] std::io::Error),
    #[error("could not parse units registry YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("registry entry key is not a string: {0:?}")]
    KeyNotString(Value),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    units: Option<Mapping>,
    quantity_kinds: Option<Mapping>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawUnit {
    symbol: String,
    aliases: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawQuantityKind {
    label: Option<String>,
    symbol: String,
    default_unit: Option<Value>,
    uri: String,
    aliases: Option<Vec<String>>,
    tags: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct UnitsRegistry {
    units: Vec<UnitEntry>,
    quantity_kinds: Vec<QuantityKind>,
}

impl UnitsRegistry {
    /// Parse a registry document. An empty document yields empty tables.
    pub fn from_str(raw: &str) -> Result<Self, LoadError> {
        let doc = serde_yaml::from_str::<Option<RawDocument>>(raw)?.unwrap_or_default();

        let mut units = Vec::new();
        for (key, value) in doc.units.unwrap_or_default() {
            let key = entry_key(key)?;
            let raw: RawUnit = from_entry_value(value)?;
            units.push(UnitEntry {
                key,
                symbol: raw.symbol,
                aliases: raw.aliases.unwrap_or_default(),
            });
        }

        let mut quantity_kinds = Vec::new();
        for (key, value) in doc.quantity_kinds.unwrap_or_default() {
            let key = entry_key(key)?;
            let raw: RawQuantityKind = from_entry_value(value)?;
            quantity_kinds.push(QuantityKind {
                label: raw.label.unwrap_or_else(|| key.clone()),
                key,
                symbol: raw.symbol,
                default_unit: raw.default_unit.map(scalar_to_string).unwrap_or_default(),
                uri: raw.uri,
                aliases: raw.aliases.unwrap_or_default(),
                tags: raw.tags.unwrap_or_default(),
            });
        }

        log::debug!(
            "Loaded units registry: {} units, {} quantity kinds",
            units.len(),
            quantity_kinds.len()
        );
        Ok(UnitsRegistry {
            units,
            quantity_kinds,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_str(&fs::read_to_string(path)?)
    }

    pub fn units(&self) -> &[UnitEntry] {
        &self.units
    }

    pub fn quantity_kinds(&self) -> &[QuantityKind] {
        &self.quantity_kinds
    }

    pub fn unit(&self, key: &str) -> Option<&UnitEntry> {
        self.units.iter().find(|u| u.key == key)
    }

    pub fn quantity_kind(&self, key: &str) -> Option<&QuantityKind> {
        self.quantity_kinds.iter().find(|qk| qk.key == key)
    }

    /// Map a raw unit string to a canonical unit key if possible.
    ///
    /// Precedence: exact (case-sensitive) key match, then the first entry in
    /// load order with a case-insensitive symbol match, then the first with a
    /// case-insensitive alias match. Blank input maps to `None`.
    pub fn normalize_unit(&self, raw: Option<&str>) -> Option<&str> {
        let s = raw?.trim();
        if s.is_empty() {
            return None;
        }

        if let Some(unit) = self.unit(s) {
            return Some(&unit.key);
        }

        let s_lc = s.to_lowercase();
        if let Some(unit) = self
            .units
            .iter()
            .find(|u| u.symbol.to_lowercase() == s_lc)
        {
            return Some(&unit.key);
        }
        self.units
            .iter()
            .find(|u| u.aliases.iter().any(|a| a.to_lowercase() == s_lc))
            .map(|u| u.key.as_str())
    }
}

fn entry_key(key: Value) -> Result<String, LoadError> {
    match key {
        Value::String(s) => Ok(s),
        other => Err(LoadError::KeyNotString(other)),
    }
}

fn from_entry_value<T: Default + for<'de> Deserialize<'de>>(
    value: Value,
) -> Result<T, LoadError> {
    // A bare `some_key:` line gives a null entry body; treat it as all-defaults
    if value.is_null() {
        return Ok(T::default());
    }
    serde_yaml::from_value(value).map_err(Into::into)
}

// Scalars in string positions (e.g. a numeric default_unit) are kept, not
// rejected; collections have no sensible string form and coerce to empty
fn scalar_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            log::debug!("Ignoring non-scalar default_unit: {:?}", other);
            String::new()
        }
    }
}
