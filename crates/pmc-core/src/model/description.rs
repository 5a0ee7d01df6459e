//! `description` members: plain text or a `{content, type}` object.

use serde::{Deserialize, Serialize};

use super::Extra;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Rich(RichDescription),
}

/// Object form, e.g. `{"content": "...", "type": "text/markdown"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Description {
    pub fn text(&self) -> &str {
        match self {
            Description::Text(text) => text,
            Description::Rich(rich) => rich.content.as_deref().unwrap_or_default(),
        }
    }

    /// Appends `paragraph` after a blank line, keeping the object form if present.
    pub fn push_paragraph(&mut self, paragraph: &str) {
        let slot = match self {
            Description::Text(text) => text,
            Description::Rich(rich) => rich.content.get_or_insert_with(String::new),
        };
        if !slot.is_empty() {
            slot.push_str("\n\n");
        }
        slot.push_str(paragraph);
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Text(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::Text(text)
    }
}
