//! Applying a patch to an in-memory collection.

use chrono::{DateTime, Utc};

use crate::config::{MissingSection, PmcConfig};
use crate::editor::Upsert;
use crate::error::{CollectionError, Result};
use crate::model::{Collection, Section};

use super::examples::apply_examples;
use super::{ApplySummary, Change, Patch, PatchMode, SectionPatch};

#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    pub missing_section: MissingSection,
    /// Timestamp written to `info.updatedAt` when the patch modifies the document.
    pub stamp: Option<DateTime<Utc>>,
}

impl ApplyOptions {
    /// Options from config; the stamp is read from the clock once, here.
    pub fn from_config(cfg: &PmcConfig) -> Self {
        Self {
            missing_section: cfg.missing_section,
            stamp: cfg.stamp(),
        }
    }
}

/// Applies `patch` to `collection` and reports every change.
///
/// On error the collection may be partially modified; callers only save
/// after a successful return.
pub fn apply_patch(
    collection: &mut Collection,
    patch: Patch,
    opts: &ApplyOptions,
) -> Result<ApplySummary> {
    let mut summary = ApplySummary::default();

    for section_patch in patch.sections {
        apply_section(collection, section_patch, opts, &mut summary)?;
    }

    for insert in patch.insert_sections {
        let index = insert.at.resolve_or_append(&collection.item);
        summary.push(Change::SectionInserted {
            name: insert.section.name.clone(),
            index,
        });
        collection.insert_section(index, insert.section);
    }

    for section in patch.append_sections {
        summary.push(Change::SectionAppended(section.name.clone()));
        collection.append_sections([section]);
    }

    apply_examples(collection, &patch.examples, &mut summary);

    for key in collection.merge_variables(patch.variables) {
        summary.push(Change::VariableAdded(key));
    }

    if summary.modified() {
        if let Some(note) = patch.note.as_deref() {
            collection.append_note(note);
        }
        if let Some(now) = opts.stamp {
            collection.touch(now);
        }
    }

    tracing::info!(
        changes = summary.changes.len(),
        skipped = summary.skipped(),
        "applied patch"
    );
    Ok(summary)
}

fn apply_section(
    collection: &mut Collection,
    patch: SectionPatch,
    opts: &ApplyOptions,
    summary: &mut ApplySummary,
) -> Result<()> {
    let SectionPatch {
        path,
        mode,
        create,
        at,
        endpoints,
        remove,
        responses,
    } = patch;

    let section: &mut Section = match create {
        Some(create) => {
            let (section, created) = collection.ensure_section(
                &path,
                create.description.as_deref(),
                create.at.as_ref(),
            )?;
            if created {
                summary.push(Change::SectionCreated(path.clone()));
            }
            section
        }
        None => match collection.find_section_mut(&path) {
            Some(section) => section,
            None => return missing(opts, summary, CollectionError::SectionNotFound(path)),
        },
    };

    for name in remove {
        let removed = section.remove_endpoint(&name);
        if removed > 0 {
            summary.push(Change::EndpointRemoved {
                section: path.clone(),
                name,
            });
        } else {
            tracing::debug!(section = %path, endpoint = %name, "nothing to remove");
        }
    }

    // New endpoints from one patch stay together, in patch order.
    let mut next = at.as_ref().map(|a| a.resolve_or_append(&section.item));

    match mode {
        PatchMode::Replace => {
            let count = endpoints.len();
            section.replace_endpoints(endpoints);
            summary.push(Change::EndpointsReplaced {
                section: path.clone(),
                count,
            });
        }
        PatchMode::Upsert => {
            for endpoint in endpoints {
                let name = endpoint.name.clone();
                let change = match section.upsert_endpoint_at(endpoint, next) {
                    Upsert::Inserted => {
                        next = next.map(|i| i + 1);
                        Change::EndpointAdded {
                            section: path.clone(),
                            name,
                        }
                    }
                    Upsert::Replaced => Change::EndpointReplaced {
                        section: path.clone(),
                        name,
                    },
                };
                summary.push(change);
            }
        }
        PatchMode::Append => {
            for endpoint in endpoints {
                summary.push(Change::EndpointAdded {
                    section: path.clone(),
                    name: endpoint.name.clone(),
                });
                match next.as_mut() {
                    Some(index) => {
                        section.insert_endpoint(*index, endpoint);
                        *index += 1;
                    }
                    None => section.append_endpoint(endpoint),
                }
            }
        }
        PatchMode::Update => {
            for endpoint in endpoints {
                let name = endpoint.name.clone();
                if section.update_request(&name, endpoint.request) {
                    summary.push(Change::RequestUpdated {
                        section: path.clone(),
                        name,
                    });
                } else {
                    tracing::warn!(section = %path, endpoint = %name, "no endpoint to update");
                    summary.push(Change::EndpointSkipped {
                        section: path.clone(),
                        name,
                    });
                }
            }
        }
    }

    for rp in responses {
        let response_name = rp.response.name.clone();
        let Some(endpoint) = section.find_endpoint_mut(&rp.endpoint) else {
            let err = CollectionError::EndpointNotFound {
                section: path.clone(),
                name: rp.endpoint,
            };
            missing(opts, summary, err)?;
            continue;
        };
        let change = match endpoint.upsert_response(rp.response) {
            Upsert::Inserted => Change::ResponseAdded {
                section: path.clone(),
                endpoint: rp.endpoint,
                name: response_name,
            },
            Upsert::Replaced => Change::ResponseReplaced {
                section: path.clone(),
                endpoint: rp.endpoint,
                name: response_name,
            },
        };
        summary.push(change);
    }

    Ok(())
}

/// Applies the missing-target policy: fail with `err`, or record a skip.
fn missing(opts: &ApplyOptions, summary: &mut ApplySummary, err: CollectionError) -> Result<()> {
    match opts.missing_section {
        MissingSection::Fail => Err(err),
        MissingSection::Skip => {
            tracing::warn!("{err}; skipping");
            let change = match err {
                CollectionError::EndpointNotFound { section, name } => {
                    Change::EndpointSkipped { section, name }
                }
                CollectionError::SectionNotFound(path) => Change::SectionSkipped(path),
                other => return Err(other),
            };
            summary.push(change);
            Ok(())
        }
    }
}
