//! Tree-wide example responses: attach a saved response to every endpoint
//! matching a method and URL path pattern, wherever it sits in the tree.

use serde::{Deserialize, Serialize};

use crate::model::{Collection, ExampleResponse, Request};

use super::{ApplySummary, Change};

/// `{"match": {"method": "GET", "path_contains": ["jobs", "search"]}, "response": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExampleRule {
    #[serde(rename = "match")]
    pub matcher: EndpointMatch,
    pub response: ExampleResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointMatch {
    /// Compared case-insensitively; any method when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Every entry must occur in the lower-cased, `/`-joined URL path.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_contains: Vec<String>,
}

impl EndpointMatch {
    pub fn matches(&self, request: &Request) -> bool {
        if let Some(method) = &self.method {
            if !request.method().eq_ignore_ascii_case(method) {
                return false;
            }
        }
        let path = request
            .url
            .as_ref()
            .map(|url| url.path().join("/").to_lowercase())
            .unwrap_or_default();
        self.path_contains
            .iter()
            .all(|needle| path.contains(&needle.to_lowercase()))
    }
}

/// Upserts each rule's response on every matching endpoint. The first
/// matching rule wins, so specific rules go before general ones.
pub(super) fn apply_examples(
    collection: &mut Collection,
    rules: &[ExampleRule],
    summary: &mut ApplySummary,
) {
    if rules.is_empty() {
        return;
    }
    let mut counts = vec![0usize; rules.len()];
    for endpoint in collection.endpoints_mut() {
        let Some(index) = rules
            .iter()
            .position(|rule| rule.matcher.matches(&endpoint.request))
        else {
            continue;
        };
        endpoint.upsert_response(rules[index].response.clone());
        counts[index] += 1;
    }

    for (rule, count) in rules.iter().zip(counts) {
        tracing::debug!(example = %rule.response.name, count, "example rule applied");
        if count > 0 {
            summary.push(Change::ExamplesApplied {
                name: rule.response.name.clone(),
                count,
            });
        }
    }
}
