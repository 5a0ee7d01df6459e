//! Section paths: `"AI & Utilities/AIController"` or `["AI & Utilities", "AIController"]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Path of section names from the collection root, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SectionPath(Vec<String>);

impl SectionPath {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self(
            segments
                .into_iter()
                .map(|s| {
                    let s: String = s.into();
                    s.trim().to_string()
                })
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last segment (the target section's own name).
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl FromStr for SectionPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SectionPath::new(s.split('/')))
    }
}

impl From<&str> for SectionPath {
    fn from(s: &str) -> Self {
        SectionPath::new(s.split('/'))
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl Serialize for SectionPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SectionPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Joined(String),
            Segments(Vec<String>),
        }

        let path = match Repr::deserialize(deserializer)? {
            Repr::Joined(s) => SectionPath::from(s.as_str()),
            // Array form keeps names containing '/' intact.
            Repr::Segments(v) => SectionPath::new(v),
        };
        if path.is_empty() {
            return Err(serde::de::Error::custom("section path must not be empty"));
        }
        Ok(path)
    }
}
