//! Find-and-modify operations on the document tree.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CollectionError, Result};
use crate::model::{
    Collection, Endpoint, ExampleResponse, Item, Request, Section, SectionPath,
    Variable,
};

/// Outcome of an update-or-insert on a named list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// Placement of a new entry among its siblings:
/// `{"index": 0}`, `{"before": "Company Management"}` or `{"after": "Login"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Zero-based, clamped to the list length.
    Index(usize),
    Before(String),
    After(String),
}

impl Anchor {
    /// Insertion index in `items`; `None` when the named sibling does not exist.
    pub fn resolve(&self, items: &[Item]) -> Option<usize> {
        match self {
            Anchor::Index(index) => Some((*index).min(items.len())),
            Anchor::Before(name) => items.iter().position(|i| i.name() == name),
            Anchor::After(name) => items.iter().position(|i| i.name() == name).map(|p| p + 1),
        }
    }

    /// Like [`resolve`](Self::resolve), falling back to the end of the list.
    pub fn resolve_or_append(&self, items: &[Item]) -> usize {
        self.resolve(items).unwrap_or_else(|| {
            tracing::warn!(anchor = ?self, "anchor sibling not found, appending");
            items.len()
        })
    }
}

impl Collection {
    /// First section matching `path`, descending one name per level.
    pub fn find_section(&self, path: &SectionPath) -> Option<&Section> {
        let (first, rest) = path.segments().split_first()?;
        let mut section = self
            .item
            .iter()
            .filter_map(Item::as_section)
            .find(|s| s.name == *first)?;
        for name in rest {
            section = section.child_section(name)?;
        }
        Some(section)
    }

    pub fn find_section_mut(&mut self, path: &SectionPath) -> Option<&mut Section> {
        let (first, rest) = path.segments().split_first()?;
        let mut section = self
            .item
            .iter_mut()
            .filter_map(Item::as_section_mut)
            .find(|s| s.name == *first)?;
        for name in rest {
            section = section.child_section_mut(name)?;
        }
        Some(section)
    }

    /// Like [`find_section_mut`](Self::find_section_mut) but a miss is an error.
    pub fn require_section_mut(&mut self, path: &SectionPath) -> Result<&mut Section> {
        self.find_section_mut(path)
            .ok_or_else(|| CollectionError::SectionNotFound(path.clone()))
    }

    /// Appends whole sections to the root list, keeping their order.
    pub fn append_sections(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.item.extend(sections.into_iter().map(Item::Section));
    }

    /// Inserts a root section at `index` (clamped to the list length).
    pub fn insert_section(&mut self, index: usize, section: Section) {
        let index = index.min(self.item.len());
        self.item.insert(index, Item::Section(section));
    }

    /// Finds the section at `path`, creating missing levels on the way.
    ///
    /// New intermediate sections are appended; the leaf, if created, gets
    /// `description` and is placed at `at` (or appended). Returns the
    /// section and whether anything was created.
    pub fn ensure_section(
        &mut self,
        path: &SectionPath,
        description: Option<&str>,
        at: Option<&Anchor>,
    ) -> Result<(&mut Section, bool)> {
        let mut created = false;
        let section = ensure_in(
            &mut self.item,
            path.segments(),
            description,
            at,
            &mut created,
        )
        .ok_or_else(|| CollectionError::SectionNotFound(path.clone()))?;
        Ok((section, created))
    }

    /// Adds variables whose key is not defined yet. Returns the added keys.
    pub fn merge_variables(&mut self, variables: impl IntoIterator<Item = Variable>) -> Vec<String> {
        let mut added = Vec::new();
        for var in variables {
            let existing = self.variables_mut();
            if existing.iter().any(|v| v.key == var.key) {
                continue;
            }
            added.push(var.key.clone());
            existing.push(var);
        }
        added
    }

    /// Sets the value (and optionally the type) of a variable, appending it if absent.
    pub fn set_variable(&mut self, key: &str, value: Value, kind: Option<&str>) -> Upsert {
        let variables = self.variables_mut();
        match variables.iter_mut().find(|v| v.key == key) {
            Some(existing) => {
                existing.value = Some(value);
                if let Some(kind) = kind {
                    existing.kind = Some(kind.to_string());
                }
                Upsert::Replaced
            }
            None => {
                let mut var = Variable::string(key, "");
                var.value = Some(value);
                var.kind = Some(kind.unwrap_or("string").to_string());
                variables.push(var);
                Upsert::Inserted
            }
        }
    }

    /// Sets `info.updatedAt` to `now` (RFC 3339, seconds, `Z` suffix).
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.info.updated_at = Some(now.to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    /// Appends `note` to `info.description` as a new paragraph. Blank notes are ignored.
    pub fn append_note(&mut self, note: &str) {
        if note.trim().is_empty() {
            return;
        }
        match &mut self.info.description {
            Some(description) => description.push_paragraph(note),
            None => self.info.description = Some(note.into()),
        }
    }

    /// Total endpoints in the collection, nested sections included.
    pub fn endpoint_count(&self) -> usize {
        self.item
            .iter()
            .map(|item| match item {
                Item::Endpoint(_) => 1,
                Item::Section(s) => s.endpoint_count(),
            })
            .sum()
    }

    /// Every endpoint in the tree, depth-first in document order.
    pub fn endpoints_mut(&mut self) -> Vec<&mut Endpoint> {
        let mut out = Vec::new();
        collect_endpoints(&mut self.item, &mut out);
        out
    }
}

fn collect_endpoints<'a>(items: &'a mut [Item], out: &mut Vec<&'a mut Endpoint>) {
    for item in items {
        match item {
            Item::Endpoint(e) => out.push(e),
            Item::Section(s) => collect_endpoints(&mut s.item, out),
        }
    }
}

fn ensure_in<'a>(
    items: &'a mut Vec<Item>,
    segments: &[String],
    description: Option<&str>,
    anchor: Option<&Anchor>,
    created: &mut bool,
) -> Option<&'a mut Section> {
    let (first, rest) = segments.split_first()?;
    let exists = items
        .iter()
        .filter_map(Item::as_section)
        .any(|s| s.name == *first);
    if !exists {
        let mut section = Section::new(first.clone());
        let mut at = items.len();
        if rest.is_empty() {
            if let Some(description) = description {
                section = section.with_description(description);
            }
            at = anchor.map_or(at, |a| a.resolve_or_append(items));
        }
        tracing::debug!(section = %first, index = at, "creating section");
        items.insert(at, Item::Section(section));
        *created = true;
    }
    let section = items
        .iter_mut()
        .filter_map(Item::as_section_mut)
        .find(|s| s.name == *first)?;
    if rest.is_empty() {
        Some(section)
    } else {
        ensure_in(&mut section.item, rest, description, anchor, created)
    }
}

impl Section {
    /// Overwrites the section's item list wholesale.
    pub fn replace_endpoints(&mut self, endpoints: impl IntoIterator<Item = Endpoint>) {
        self.item = endpoints.into_iter().map(Item::Endpoint).collect();
    }

    /// Replaces the first endpoint with the same name in place, or appends.
    pub fn upsert_endpoint(&mut self, endpoint: Endpoint) -> Upsert {
        self.upsert_endpoint_at(endpoint, None)
    }

    /// Like [`upsert_endpoint`](Self::upsert_endpoint), but a new endpoint goes
    /// to `index` (clamped) instead of the end. Replacements stay in place.
    pub fn upsert_endpoint_at(&mut self, endpoint: Endpoint, index: Option<usize>) -> Upsert {
        match self.find_endpoint_mut(&endpoint.name) {
            Some(existing) => {
                *existing = endpoint;
                Upsert::Replaced
            }
            None => {
                let index = index.unwrap_or(self.item.len());
                self.insert_endpoint(index, endpoint);
                Upsert::Inserted
            }
        }
    }

    /// Appends without looking for an existing endpoint of the same name.
    pub fn append_endpoint(&mut self, endpoint: Endpoint) {
        self.item.push(Item::Endpoint(endpoint));
    }

    /// Inserts at `index` (clamped to the list length), duplicates allowed.
    pub fn insert_endpoint(&mut self, index: usize, endpoint: Endpoint) {
        let index = index.min(self.item.len());
        self.item.insert(index, Item::Endpoint(endpoint));
    }

    /// Removes every direct endpoint named `name`. Returns how many were removed.
    pub fn remove_endpoint(&mut self, name: &str) -> usize {
        let before = self.item.len();
        self.item
            .retain(|item| !matches!(item, Item::Endpoint(e) if e.name == name));
        before - self.item.len()
    }

    /// Swaps in a new request for an existing endpoint; never inserts.
    pub fn update_request(&mut self, name: &str, request: Request) -> bool {
        match self.find_endpoint_mut(name) {
            Some(existing) => {
                existing.request = request;
                true
            }
            None => false,
        }
    }
}

impl Endpoint {
    /// Replaces the example response with the same name, or appends it.
    pub fn upsert_response(&mut self, response: ExampleResponse) -> Upsert {
        let responses = self.response.get_or_insert_with(Vec::new);
        match responses.iter_mut().find(|r| r.name == response.name) {
            Some(existing) => {
                *existing = response;
                Upsert::Replaced
            }
            None => {
                responses.push(response);
                Upsert::Inserted
            }
        }
    }
}
