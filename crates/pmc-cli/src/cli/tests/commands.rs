//! Tests for command handlers against collections in temp directories.

use crate::cli::commands::{run_apply, run_init, run_list, run_remove, run_set_variable, InitArgs};
use pmc_core::config::PmcConfig;
use pmc_core::editor::CollectionEditor;
use pmc_core::model::Collection;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn config() -> PmcConfig {
    PmcConfig {
        stamp_updated_at: false,
        ..PmcConfig::default()
    }
}

fn init_args() -> InitArgs {
    InitArgs {
        name: "Tymbl API".to_string(),
        description: "Tymbl API Collection".to_string(),
        base_url: "http://localhost:8080".to_string(),
        force: false,
    }
}

/// Temp dir holding a freshly initialized collection.
fn initialized() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Tymbl.postman_collection.json");
    run_init(&path, &init_args(), &config()).unwrap();
    (dir, path)
}

fn load(path: &Path) -> Collection {
    CollectionEditor::open(path).unwrap().into_collection()
}

fn write_patch(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

const AUTH_PATCH: &str = r#"{
    "note": "Added authentication endpoints",
    "sections": [
        {
            "path": "Authentication",
            "create": {},
            "endpoints": [
                { "name": "Login", "request": { "method": "POST", "url": "{{base_url}}/api/v1/auth/login" } },
                { "name": "Register", "request": { "method": "POST", "url": "{{base_url}}/api/v1/auth/register" } }
            ]
        }
    ]
}"#;

#[test]
fn init_refuses_to_overwrite_without_force() {
    let (_dir, path) = initialized();
    let err = run_init(&path, &init_args(), &config()).unwrap_err();
    assert!(format!("{err:#}").contains("use --force to overwrite"));

    let forced = InitArgs {
        name: "Replaced".to_string(),
        force: true,
        ..init_args()
    };
    run_init(&path, &forced, &config()).unwrap();
    assert_eq!(load(&path).info.name, "Replaced");
}

#[test]
fn init_writes_configured_indent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("c.json");
    let cfg = PmcConfig {
        indent: 4,
        ..config()
    };
    run_init(&path, &init_args(), &cfg).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n    \"info\""));
}

#[test]
fn apply_saves_all_patches_once() {
    let (dir, path) = initialized();
    let auth = write_patch(dir.path(), "auth.json", AUTH_PATCH);
    let health = write_patch(
        dir.path(),
        "health.json",
        r#"{ "append_sections": [ { "name": "Health", "item": [] } ] }"#,
    );

    run_apply(&path, &[auth, health], false, &config()).unwrap();

    let c = load(&path);
    assert_eq!(c.item.len(), 2);
    assert_eq!(c.item[1].name(), "Health");
    assert_eq!(c.endpoint_count(), 2);
    assert_eq!(
        c.info.description.as_ref().map(|d| d.text()),
        Some("Tymbl API Collection\n\nAdded authentication endpoints")
    );
}

#[test]
fn apply_dry_run_does_not_write() {
    let (dir, path) = initialized();
    let before = std::fs::read(&path).unwrap();
    let auth = write_patch(dir.path(), "auth.json", AUTH_PATCH);

    run_apply(&path, &[auth], true, &config()).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn apply_failure_in_later_patch_writes_nothing() {
    let (dir, path) = initialized();
    let before = std::fs::read(&path).unwrap();
    let auth = write_patch(dir.path(), "auth.json", AUTH_PATCH);
    let missing = write_patch(
        dir.path(),
        "missing.json",
        r#"{ "sections": [ { "path": "Company Crawler" } ] }"#,
    );

    let err = run_apply(&path, &[auth, missing.clone()], false, &config()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains(&format!("apply patch: {}", missing.display())));
    assert!(msg.contains("section not found: Company Crawler"));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn apply_on_missing_collection_fails() {
    let dir = tempdir().unwrap();
    let auth = write_patch(dir.path(), "auth.json", AUTH_PATCH);
    let err = run_apply(&dir.path().join("absent.json"), &[auth], false, &config()).unwrap_err();
    assert!(format!("{err:#}").contains("collection file not found"));
}

#[test]
fn remove_deletes_endpoint_and_reports_unknown_names() {
    let (dir, path) = initialized();
    let auth = write_patch(dir.path(), "auth.json", AUTH_PATCH);
    run_apply(&path, &[auth], false, &config()).unwrap();

    run_remove(&path, "Authentication", "Register", &config()).unwrap();
    let c = load(&path);
    let names: Vec<&str> = c.item[0]
        .as_section()
        .unwrap()
        .endpoints()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["Login"]);

    let err = run_remove(&path, "Authentication", "Register", &config()).unwrap_err();
    assert_eq!(err.to_string(), "endpoint not found: Authentication > Register");
    let err = run_remove(&path, "Nope", "Login", &config()).unwrap_err();
    assert_eq!(err.to_string(), "section not found: Nope");
}

#[test]
fn set_variable_adds_then_updates() {
    let (_dir, path) = initialized();
    run_set_variable(&path, "keyword", "java", None, &config()).unwrap();
    run_set_variable(&path, "token", "abc", Some("secret"), &config()).unwrap();

    let c = load(&path);
    let vars = c.variables();
    let keys: Vec<&str> = vars.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(keys, ["base_url", "token", "keyword"]);
    assert_eq!(vars[1].value, Some("abc".into()));
    assert_eq!(vars[1].kind.as_deref(), Some("secret"));
    assert_eq!(vars[2].kind.as_deref(), Some("string"));
}

#[test]
fn set_variable_stamps_when_enabled() {
    let (_dir, path) = initialized();
    let cfg = PmcConfig::default();
    run_set_variable(&path, "keyword", "java", None, &cfg).unwrap();
    let stamp = load(&path).info.updated_at.unwrap();
    assert!(stamp.ends_with('Z'));
}

#[test]
fn list_reads_collection() {
    let (_dir, path) = initialized();
    run_list(&path).unwrap();
    assert!(run_list(&path.with_file_name("absent.json")).is_err());
}
