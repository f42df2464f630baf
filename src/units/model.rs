use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One canonical unit from the registry document.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct UnitEntry {
    pub key: String,
    pub symbol: String,
    pub aliases: Vec<String>,
}

/// One physical quantity definition.
///
/// `key` is the entry's key in the registry document and is unique within a
/// loaded registry. List fields are always present; an absent or null list in
/// the document becomes an empty one here.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct QuantityKind {
    pub key: String,
    pub label: String,
    pub symbol: String,
    pub default_unit: String,
    pub uri: String,
    pub aliases: Vec<String>,
    pub tags: Vec<String>,
}

impl QuantityKind {
    /// Plain field-mapping of the record, for embedding under
    /// `meta.quantity_kind` in a generated sensor-type block.
    pub fn to_meta(&self) -> Value {
        json!({
            "key": self.key,
            "label": self.label,
            "symbol": self.symbol,
            "default_unit": self.default_unit,
            "uri": self.uri,
            "aliases": self.aliases,
            "tags": self.tags,
        })
    }
}
