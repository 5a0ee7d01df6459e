//! Flat, indented view of the section tree for `pmc list`.

use std::fmt;

use crate::model::{Collection, Item, Url};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Section,
    Endpoint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    /// 0 for root items.
    pub depth: usize,
    pub kind: RowKind,
    pub label: String,
    /// Raw URL of an endpoint row, when the request has one.
    pub url: Option<String>,
}

impl fmt::Display for OutlineRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.label, indent = self.depth * 2)?;
        if let Some(url) = &self.url {
            write!(f, "  {url}")?;
        }
        Ok(())
    }
}

/// Depth-first rows: sections as `name (N endpoints)`, endpoints as `METHOD name  url`.
pub fn outline(collection: &Collection) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    walk(&collection.item, 0, &mut rows);
    rows
}

fn walk(items: &[Item], depth: usize, rows: &mut Vec<OutlineRow>) {
    for item in items {
        match item {
            Item::Section(section) => {
                let count = section.endpoint_count();
                let noun = if count == 1 { "endpoint" } else { "endpoints" };
                rows.push(OutlineRow {
                    depth,
                    kind: RowKind::Section,
                    label: format!("{} ({count} {noun})", section.name),
                    url: None,
                });
                walk(&section.item, depth + 1, rows);
            }
            Item::Endpoint(endpoint) => rows.push(OutlineRow {
                depth,
                kind: RowKind::Endpoint,
                label: format!("{} {}", endpoint.request.method(), endpoint.name),
                url: endpoint.request.url.as_ref().map(Url::to_raw_string),
            }),
        }
    }
}
