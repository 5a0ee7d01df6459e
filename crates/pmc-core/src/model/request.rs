//! Request descriptor: method, headers, body, URL.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{Description, Extra, Url};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Postman reads an absent method as `GET`; see [`Request::method`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Vec<Header>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(
        default,
        deserialize_with = "super::url::optional_url",
        serialize_with = "super::url::serialize_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    /// Read from a plain URL string (`"request": "{{base_url}}/x"`).
    #[serde(skip)]
    string_form: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Request {
    /// Request with the method upper-cased and `raw` decomposed into URL parts.
    pub fn new(method: &str, raw_url: &str) -> Self {
        Self {
            method: Some(method.to_ascii_uppercase()),
            header: Some(Vec::new()),
            url: Some(Url::parse_raw(raw_url)),
            ..Self::default()
        }
    }

    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or("GET")
    }

    fn from_text(raw: &str) -> Self {
        Self {
            url: Some(Url::from_text(raw)),
            string_form: true,
            ..Self::default()
        }
    }

    /// The URL string this request was read from, while nothing else was added.
    fn plain_text(&self) -> Option<&str> {
        let bare = self.string_form
            && self.method.is_none()
            && self.header.is_none()
            && self.body.is_none()
            && self.description.is_none()
            && self.extra.is_empty();
        self.url.as_ref().filter(|_| bare).and_then(Url::plain_text)
    }
}

/// `request` may be a bare URL string instead of an object.
pub(super) fn string_or_object<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Request, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(raw) => Ok(Request::from_text(&raw)),
        other => serde_json::from_value(other).map_err(de::Error::custom),
    }
}

pub(super) fn optional_string_or_object<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Request>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => string_or_object(other)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

pub(super) fn serialize_request<S: Serializer>(
    request: &Request,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match request.plain_text() {
        Some(raw) => serializer.serialize_str(raw),
        None => request.serialize(serializer),
    }
}

pub(super) fn serialize_optional_request<S: Serializer>(
    request: &Option<Request>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match request {
        Some(request) => serialize_request(request, serializer),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    #[serde(
        default,
        deserialize_with = "super::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Option<String>>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(Some(value.into())),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyMode {
    Raw,
    Urlencoded,
    Formdata,
    File,
    Graphql,
}

/// Request body. Which payload member is set follows `mode`, when there is one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<BodyMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formdata: Option<Vec<FormParam>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urlencoded: Option<Vec<FormParam>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Entry of a `formdata` or `urlencoded` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormParam {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}
