//! Enclosing-package discovery from Cargo manifests.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<ManifestPackage>,
}

#[derive(Debug, Deserialize)]
struct ManifestPackage {
    name: Option<String>,
}

/// Find the package enclosing `dest` by walking up to the nearest
/// `Cargo.toml` carrying a `[package]` section.
///
/// Returns `None` when no manifest is found, the nearest manifest is a
/// virtual workspace root, or the manifest cannot be read; the core falls
/// back to its placeholder in that case. Dashes in the package name are
/// rewritten to underscores so the result is identifier-safe.
pub fn resolve_package_name(dest: &Path) -> Option<String> {
    let start = if dest.is_dir() { dest } else { dest.parent()? };
    for dir in start.ancestors() {
        let manifest_path = dir.join("Cargo.toml");
        if !manifest_path.is_file() {
            continue;
        }
        let content = match fs::read_to_string(&manifest_path) {
            Ok(content) => content,
            Err(error) => {
                debug!(path = %manifest_path.display(), %error, "couldn't read manifest");
                return None;
            }
        };
        let manifest: Manifest = match toml::from_str(&content) {
            Ok(manifest) => manifest,
            Err(error) => {
                debug!(path = %manifest_path.display(), %error, "couldn't parse manifest");
                return None;
            }
        };
        return manifest
            .package
            .and_then(|package| package.name)
            .map(|name| name.replace('-', "_"));
    }
    None
}
