//! Human-readable record of what a patch changed.

use std::fmt;

use crate::model::SectionPath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    SectionCreated(SectionPath),
    /// Target section missing under the `skip` policy.
    SectionSkipped(SectionPath),
    SectionAppended(String),
    SectionInserted { name: String, index: usize },
    EndpointAdded { section: SectionPath, name: String },
    EndpointReplaced { section: SectionPath, name: String },
    EndpointRemoved { section: SectionPath, name: String },
    EndpointsReplaced { section: SectionPath, count: usize },
    /// `update` mode or a response upsert named an endpoint that does not exist.
    EndpointSkipped { section: SectionPath, name: String },
    RequestUpdated { section: SectionPath, name: String },
    ResponseAdded { section: SectionPath, endpoint: String, name: String },
    ResponseReplaced { section: SectionPath, endpoint: String, name: String },
    VariableAdded(String),
    /// An example rule matched `count` endpoints across the tree.
    ExamplesApplied { name: String, count: usize },
}

impl Change {
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Change::SectionSkipped(_) | Change::EndpointSkipped { .. }
        )
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::SectionCreated(path) => write!(f, "created section {path}"),
            Change::SectionSkipped(path) => write!(f, "skipped missing section {path}"),
            Change::SectionAppended(name) => write!(f, "appended section {name}"),
            Change::SectionInserted { name, index } => {
                write!(f, "inserted section {name} at {index}")
            }
            Change::EndpointAdded { section, name } => write!(f, "added {section} > {name}"),
            Change::EndpointReplaced { section, name } => {
                write!(f, "replaced {section} > {name}")
            }
            Change::EndpointRemoved { section, name } => write!(f, "removed {section} > {name}"),
            Change::EndpointsReplaced { section, count } => {
                write!(f, "replaced all items of {section} with {count} endpoint(s)")
            }
            Change::EndpointSkipped { section, name } => {
                write!(f, "skipped {section} > {name} (no such endpoint)")
            }
            Change::RequestUpdated { section, name } => {
                write!(f, "updated request {section} > {name}")
            }
            Change::ResponseAdded {
                section,
                endpoint,
                name,
            } => write!(f, "added example '{name}' to {section} > {endpoint}"),
            Change::ResponseReplaced {
                section,
                endpoint,
                name,
            } => write!(f, "replaced example '{name}' on {section} > {endpoint}"),
            Change::VariableAdded(key) => write!(f, "added variable {key}"),
            Change::ExamplesApplied { name, count } => {
                write!(f, "set example '{name}' on {count} endpoint(s)")
            }
        }
    }
}

/// Ordered list of changes made by one or more patches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub changes: Vec<Change>,
}

impl ApplySummary {
    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn extend(&mut self, other: ApplySummary) {
        self.changes.extend(other.changes);
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter()
    }

    /// True if at least one change touched the document (skips do not count).
    pub fn modified(&self) -> bool {
        self.changes.iter().any(|c| !c.is_skip())
    }

    pub fn skipped(&self) -> usize {
        self.changes.iter().filter(|c| c.is_skip()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lines() {
        let section = SectionPath::from("AI & Utilities/AIController");
        let added = Change::EndpointAdded {
            section: section.clone(),
            name: "Reset".to_string(),
        };
        assert_eq!(added.to_string(), "added AI & Utilities/AIController > Reset");
        assert_eq!(
            Change::EndpointsReplaced { section, count: 3 }.to_string(),
            "replaced all items of AI & Utilities/AIController with 3 endpoint(s)"
        );
        assert_eq!(
            Change::VariableAdded("keyword".to_string()).to_string(),
            "added variable keyword"
        );
        assert_eq!(
            Change::SectionInserted { name: "Company Crawler".to_string(), index: 4 }.to_string(),
            "inserted section Company Crawler at 4"
        );
        assert_eq!(
            Change::ExamplesApplied { name: "Search Results".to_string(), count: 2 }.to_string(),
            "set example 'Search Results' on 2 endpoint(s)"
        );
    }

    #[test]
    fn skips_do_not_count_as_modification() {
        let mut summary = ApplySummary::default();
        summary.push(Change::SectionSkipped(SectionPath::from("Gone")));
        assert!(!summary.is_empty());
        assert!(!summary.modified());
        assert_eq!(summary.skipped(), 1);

        summary.push(Change::SectionAppended("Health".to_string()));
        assert!(summary.modified());
    }
}
