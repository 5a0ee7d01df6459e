//! Collection root, info block and variables.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Description, Extra, Item};

/// Schema id written by `pmc init` and expected by Postman for v2.1 collections.
pub const SCHEMA_V2_1: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Root document: metadata, top-level items and collection variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Info::is_empty")]
    pub info: Info,
    #[serde(default)]
    pub item: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<Vec<Variable>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// RFC 3339 timestamp of the last edit made through this tool.
    #[serde(
        default,
        rename = "updatedAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Collection {
    pub fn variables(&self) -> &[Variable] {
        self.variable.as_deref().unwrap_or_default()
    }

    /// The `variable` list, created empty when the document has none.
    pub fn variables_mut(&mut self) -> &mut Vec<Variable> {
        self.variable.get_or_insert_with(Vec::new)
    }
}

impl Info {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.description.is_none()
            && self.schema.is_none()
            && self.updated_at.is_none()
            && self.extra.is_empty()
    }
}

/// Collection-level variable (`{{key}}` substitution in Postman).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(
        default,
        deserialize_with = "super::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Variable {
    /// String variable, the only kind the Tymbl collection uses.
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(Value::String(value.into())),
            kind: Some("string".to_string()),
            description: None,
            extra: Extra::new(),
        }
    }
}
