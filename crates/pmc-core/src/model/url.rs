//! URL decomposition into raw / host / path / query, Postman style.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{Description, Extra};

/// Object form of a request URL. Parts absent in the file stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Url {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_seq",
        skip_serializing_if = "Option::is_none"
    )]
    pub host: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_seq",
        skip_serializing_if = "Option::is_none"
    )]
    pub path: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<Param>>,
    /// Path variables (`:id` placeholders) with example values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<Vec<Param>>,
    /// Read from a plain string; written back as one while the parts still match it.
    #[serde(skip)]
    string_form: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Key/value pair used for query parameters and path variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Param {
    #[serde(default)]
    pub key: String,
    #[serde(
        default,
        deserialize_with = "super::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(Some(value.into())),
            ..Self::default()
        }
    }

    /// `None` for a bare key, an absent value or `null`.
    pub fn value(&self) -> Option<&str> {
        self.value.as_ref()?.as_deref()
    }
}

impl Url {
    /// Decomposes a raw URL such as `{{base_url}}/api/v1/companies?page=0&size=100`.
    ///
    /// Template hosts (`{{var}}`) stay a single host element; literal hosts are
    /// split on `.`. Path and query come from the text as written: no
    /// percent-decoding or dot-segment removal, which is what Postman stores.
    pub fn parse_raw(raw: &str) -> Url {
        let raw = raw.trim();
        let (without_query, query) = match raw.split_once('?') {
            Some((head, q)) => (head, Some(q)),
            None => (raw, None),
        };
        let (protocol, rest) = match without_query.split_once("://") {
            Some((p, r)) => (Some(p.to_string()), r),
            None => (None, without_query),
        };

        let mut segments = rest.split('/');
        let authority = segments.next().unwrap_or_default();
        let (host, port) = checked_host(raw).unwrap_or_else(|| split_authority(authority));
        let path: Vec<String> = segments
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Url {
            raw: Some(raw.to_string()),
            protocol,
            host: (!host.is_empty()).then_some(host),
            port,
            path: (!path.is_empty()).then_some(path),
            query: query.map(parse_query),
            ..Url::default()
        }
    }

    /// Parsed from the string form of `url`; keeps `raw` exactly as written.
    pub(super) fn from_text(raw: &str) -> Url {
        Url {
            raw: Some(raw.to_string()),
            string_form: true,
            ..Url::parse_raw(raw)
        }
    }

    /// The original string when this URL was read as one and is unchanged since.
    pub(super) fn plain_text(&self) -> Option<&str> {
        let raw = self.raw.as_deref()?;
        (self.string_form && Url::from_text(raw) == *self).then_some(raw)
    }

    pub fn host(&self) -> &[String] {
        self.host.as_deref().unwrap_or_default()
    }

    pub fn path(&self) -> &[String] {
        self.path.as_deref().unwrap_or_default()
    }

    pub fn query(&self) -> &[Param] {
        self.query.as_deref().unwrap_or_default()
    }

    /// `raw` when present, otherwise rendered from the parts.
    pub fn to_raw_string(&self) -> String {
        match &self.raw {
            Some(raw) => raw.clone(),
            None => self.render_raw(),
        }
    }

    /// Rebuilds the raw string from the parts (disabled query params omitted).
    pub fn render_raw(&self) -> String {
        let mut out = String::new();
        if let Some(protocol) = &self.protocol {
            out.push_str(protocol);
            out.push_str("://");
        }
        out.push_str(&self.host().join("."));
        if let Some(port) = &self.port {
            out.push(':');
            out.push_str(port);
        }
        for segment in self.path() {
            out.push('/');
            out.push_str(segment);
        }
        let pairs: Vec<String> = self
            .query()
            .iter()
            .filter(|p| p.disabled != Some(true))
            .map(|p| match p.value() {
                Some(v) => format!("{}={}", p.key, v),
                None => p.key.clone(),
            })
            .collect();
        if !pairs.is_empty() {
            out.push('?');
            out.push_str(&pairs.join("&"));
        }
        out
    }
}

/// Host and port of an `http(s)://` URL without template placeholders,
/// validated by the `url` crate.
fn checked_host(raw: &str) -> Option<(Vec<String>, Option<String>)> {
    if raw.contains("{{") {
        return None;
    }
    let parsed = url::Url::parse(raw).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let host = parsed
        .host_str()?
        .split('.')
        .map(str::to_string)
        .collect();
    Some((host, parsed.port().map(|p| p.to_string())))
}

fn split_authority(authority: &str) -> (Vec<String>, Option<String>) {
    if authority.is_empty() {
        return (Vec::new(), None);
    }
    if authority.contains("{{") {
        return (vec![authority.to_string()], None);
    }
    let (host, port) = match authority.rsplit_once(':') {
        Some((h, p)) if !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()) => {
            (h, Some(p.to_string()))
        }
        _ => (authority, None),
    };
    (host.split('.').map(str::to_string).collect(), port)
}

fn parse_query(query: &str) -> Vec<Param> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => Param::new(k, v),
            None => Param {
                key: pair.to_string(),
                ..Param::default()
            },
        })
        .collect()
}

/// Postman accepts `url` either as a plain string or as an object.
pub(super) fn optional_url<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Url>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(raw) => Ok(Some(Url::from_text(&raw))),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

pub(super) fn serialize_url<S: Serializer>(url: &Option<Url>, serializer: S) -> Result<S::Ok, S::Error> {
    match url {
        Some(url) => match url.plain_text() {
            Some(raw) => serializer.serialize_str(raw),
            None => url.serialize(serializer),
        },
        None => serializer.serialize_none(),
    }
}

/// `host` and `path` may be a single string instead of an array.
fn string_or_seq<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        One(String),
        Many(Vec<String>),
    }

    Ok(Option::<Repr>::deserialize(deserializer)?.map(|repr| match repr {
        Repr::One(s) => vec![s],
        Repr::Many(v) => v,
    }))
}
