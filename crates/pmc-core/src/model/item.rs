//! Items of a collection: folders (sections) and request items (endpoints).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{Description, ExampleResponse, Extra, Request};

/// Entry of an `item` list. An object with a `request` member is an endpoint;
/// anything else is a section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Endpoint(Endpoint),
    Section(Section),
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let is_endpoint = value
            .as_object()
            .map(|obj| obj.contains_key("request"))
            .unwrap_or(false);
        if is_endpoint {
            serde_json::from_value(value)
                .map(Item::Endpoint)
                .map_err(serde::de::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(Item::Section)
                .map_err(serde::de::Error::custom)
        }
    }
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Endpoint(e) => &e.name,
            Item::Section(s) => &s.name,
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Item::Section(s) => Some(s),
            Item::Endpoint(_) => None,
        }
    }

    pub fn as_section_mut(&mut self) -> Option<&mut Section> {
        match self {
            Item::Section(s) => Some(s),
            Item::Endpoint(_) => None,
        }
    }

    pub fn as_endpoint(&self) -> Option<&Endpoint> {
        match self {
            Item::Endpoint(e) => Some(e),
            Item::Section(_) => None,
        }
    }

    pub fn as_endpoint_mut(&mut self) -> Option<&mut Endpoint> {
        match self {
            Item::Endpoint(e) => Some(e),
            Item::Section(_) => None,
        }
    }
}

impl From<Endpoint> for Item {
    fn from(e: Endpoint) -> Self {
        Item::Endpoint(e)
    }
}

impl From<Section> for Item {
    fn from(s: Section) -> Self {
        Item::Section(s)
    }
}

/// Named folder holding endpoints and nested sections, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default)]
    pub item: Vec<Item>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<Description>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_items<I: Into<Item>>(mut self, items: impl IntoIterator<Item = I>) -> Self {
        self.item = items.into_iter().map(Into::into).collect();
        self
    }

    /// Endpoints directly under this section (nested sections are not descended).
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.item.iter().filter_map(Item::as_endpoint)
    }

    /// First direct child section named `name`.
    pub fn child_section(&self, name: &str) -> Option<&Section> {
        self.item
            .iter()
            .filter_map(Item::as_section)
            .find(|s| s.name == name)
    }

    pub fn child_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.item
            .iter_mut()
            .filter_map(Item::as_section_mut)
            .find(|s| s.name == name)
    }

    /// First direct endpoint named `name`.
    pub fn find_endpoint(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints().find(|e| e.name == name)
    }

    pub fn find_endpoint_mut(&mut self, name: &str) -> Option<&mut Endpoint> {
        self.item
            .iter_mut()
            .filter_map(Item::as_endpoint_mut)
            .find(|e| e.name == name)
    }

    /// Endpoints in this section and every nested section.
    pub fn endpoint_count(&self) -> usize {
        self.item
            .iter()
            .map(|item| match item {
                Item::Endpoint(_) => 1,
                Item::Section(s) => s.endpoint_count(),
            })
            .sum()
    }
}

/// One request definition plus optional saved example responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(
        deserialize_with = "super::request::string_or_object",
        serialize_with = "super::request::serialize_request"
    )]
    pub request: Request,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Vec<ExampleResponse>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, request: Request) -> Self {
        Self {
            name: name.into(),
            request,
            response: None,
            extra: Extra::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_with_request_is_endpoint() {
        let json = r#"{
            "name": "Health",
            "request": {"method": "GET", "url": "{{base_url}}/api/v1/health"}
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        let e = item.as_endpoint().expect("endpoint");
        assert_eq!(e.name, "Health");
        assert_eq!(e.request.url.as_ref().unwrap().path(), ["api", "v1", "health"]);
        assert!(e.response.is_none());
    }

    #[test]
    fn item_without_request_is_section() {
        let json = r#"{"name": "Auth", "description": "Login", "item": []}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        let s = item.as_section().expect("section");
        assert_eq!(s.name, "Auth");
        assert_eq!(s.description.as_ref().map(Description::text), Some("Login"));
    }

    #[test]
    fn section_without_item_member_defaults_to_empty() {
        let item: Item = serde_json::from_str(r#"{"name": "Empty"}"#).unwrap();
        assert!(item.as_section().unwrap().item.is_empty());
    }

    #[test]
    fn lenient_postman_shapes_load_and_save_unchanged() {
        let json = serde_json::json!({
            "name": "Legacy",
            "description": {"content": "Imported from v2.0", "type": "text/markdown"},
            "item": [
                {"name": "Docs", "request": "{{base_url}}/api/v1/docs"},
                {"name": "Ping", "request": {"url": {"raw": "{{base_url}}", "host": ["{{base_url}}"]}}},
                {"name": "Draft", "request": {"method": "POST", "body": {"raw": "{}"}}},
                {"name": "Traced", "request": {"method": "GET", "header": [{"key": "X-Trace", "value": null}], "url": "u"}}
            ]
        });
        let item: Item = serde_json::from_value(json.clone()).unwrap();
        let s = item.as_section().expect("section");
        let methods: Vec<&str> = s.endpoints().map(|e| e.request.method()).collect();
        assert_eq!(methods, ["GET", "GET", "POST", "GET"]);
        assert!(s.find_endpoint("Draft").unwrap().request.url.is_none());
        assert_eq!(serde_json::to_value(&item).unwrap(), json);
    }

    #[test]
    fn malformed_endpoint_reports_error() {
        let json = r#"{"name": "Broken", "request": {"method": 5}}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn endpoint_count_descends_nested_sections() {
        let leaf = Endpoint::new("a", Request::new("GET", "{{base_url}}/a"));
        let inner = Section::new("inner").with_items(vec![leaf.clone(), leaf.clone()]);
        let outer = Section::new("outer").with_items(vec![Item::from(leaf), Item::from(inner)]);
        assert_eq!(outer.endpoint_count(), 3);
        assert_eq!(outer.endpoints().count(), 1);
        assert!(outer.child_section("inner").is_some());
    }

    #[test]
    fn empty_response_list_is_kept() {
        let json = r#"{"name": "x", "request": {"method": "GET", "url": "u"}, "response": []}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["response"], serde_json::json!([]));
    }
}
