//! Saved example responses attached to an endpoint.

use serde::{Deserialize, Serialize};

use super::{Extra, Header, Request};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(
        default,
        rename = "originalRequest",
        deserialize_with = "super::request::optional_string_or_object",
        serialize_with = "super::request::serialize_optional_request",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_request: Option<Request>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Vec<Header>>,
    /// Serialized body text (usually pretty-printed JSON).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl ExampleResponse {
    /// JSON example with the status text Postman shows for common codes.
    pub fn json(name: impl Into<String>, code: u16, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_request: None,
            status: status_text(code).map(str::to_string),
            code: Some(code),
            header: Some(vec![Header::new("Content-Type", "application/json")]),
            body: Some(body.into()),
            extra: Extra::new(),
        }
    }
}

fn status_text(code: u16) -> Option<&'static str> {
    Some(match code {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        500 => "Internal Server Error",
        _ => return None,
    })
}
