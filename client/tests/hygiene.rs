//! Hygiene: dependency boundaries for the client crate.
//!
//! Browser-only crates stay optional and behind `hydrate`, and randomness
//! goes through `rand` rather than raw browser calls.

use std::fs;
use std::path::Path;

const BROWSER_ONLY: &[&str] = &["serde", "serde_json", "web-sys", "js-sys", "wasm-bindgen"];

fn manifest() -> String {
    fs::read_to_string("Cargo.toml").unwrap_or_default()
}

fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path_str, content));
        }
    }
}

fn dependency_line<'a>(manifest: &'a str, name: &str) -> Option<&'a str> {
    let prefix = format!("{name} =");
    manifest.lines().find(|line| line.trim_start().starts_with(&prefix))
}

#[test]
fn browser_only_dependencies_are_optional_and_hydrate_gated() {
    let manifest = manifest();
    assert!(!manifest.is_empty(), "client Cargo.toml not readable");
    let hydrate = manifest
        .split("hydrate = [")
        .nth(1)
        .and_then(|rest| rest.split(']').next())
        .unwrap_or_default();

    for name in BROWSER_ONLY {
        let line = dependency_line(&manifest, name).unwrap_or_default();
        assert!(line.contains("optional = true"), "{name} must be optional: {line:?}");
        assert!(hydrate.contains(&format!("\"dep:{name}\"")), "{name} missing from hydrate feature");
    }
}

#[test]
fn serde_is_only_used_by_the_scene_bridge() {
    let offenders: Vec<String> = source_files()
        .into_iter()
        .filter(|(path, content)| {
            !path.ends_with("scene_bridge.rs") && (content.contains("serde::") || content.contains("serde_json::"))
        })
        .map(|(path, _)| path)
        .collect();
    assert!(offenders.is_empty(), "serde outside the scene bridge: {offenders:?}");

    let util = fs::read_to_string("src/util/mod.rs").unwrap_or_default();
    assert!(util.contains("#[cfg(feature = \"hydrate\")]\npub mod scene_bridge;"));
}

#[test]
fn shuffling_goes_through_rand() {
    let offenders: Vec<String> = source_files()
        .into_iter()
        .filter(|(_, content)| content.contains("Math::random"))
        .map(|(path, _)| path)
        .collect();
    assert!(offenders.is_empty(), "raw browser randomness: {offenders:?}");
    assert!(dependency_line(&manifest(), "rand").is_some());
}
