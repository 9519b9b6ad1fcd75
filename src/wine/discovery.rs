//! Runtime discovery
//!
//! Probes the host for wine binaries and for Proton builds shipped by
//! Steam. Discovery is read-only and best-effort: anything that cannot be
//! verified is silently skipped.

use std::path::Path;

use crate::config::NamedPath;
use crate::paths::PATH_STEAM_COMMON;
use crate::shell::run_captured;
use crate::wine::pure::parse_wine_version;

/// The invoking user's home directory, empty string when unset.
pub fn home_directory() -> String {
    std::env::var("HOME").unwrap_or_default()
}

/// Version of the wine binary at `path`, None when the binary does not
/// answer `--version` with something parsable.
pub fn wine_version(path: &str) -> Option<String> {
    let output = run_captured(&format!("{} --version", path));
    if !output.stderr.is_empty() {
        return None;
    }
    parse_wine_version(&output.stdout)
}

/// Probe the host for usable wine runtimes.
///
/// Tries `whereis` first and falls back to `which` when it yields
/// nothing. Every candidate must be a regular file that reports a
/// parsable version. After that, Proton builds under Steam's
/// `steamapps/common` are appended, pointing at the wine binary inside
/// the bundle. Ids are assigned in discovery order starting at 0.
pub fn find_runtime_executables() -> Vec<NamedPath> {
    let mut found: Vec<NamedPath> = Vec::new();

    let whereis = run_captured("whereis wine").stdout;
    if !whereis.is_empty() {
        for candidate in whereis.split_whitespace().filter(|c| c.ends_with("wine")) {
            if Path::new(candidate).is_dir() {
                continue;
            }
            if let Some(version) = wine_version(candidate) {
                found.push(NamedPath {
                    id: found.len() as i32,
                    name: format!("Wine {}", version),
                    path: candidate.to_string(),
                });
            }
        }
    } else {
        let which = run_captured("which wine").stdout;
        let candidate = which.replace('\n', "");
        if !candidate.is_empty() {
            if let Some(version) = wine_version(&candidate) {
                found.push(NamedPath {
                    id: found.len() as i32,
                    name: format!("Wine {}", version),
                    path: candidate,
                });
            }
        }
    }

    for proton in find_proton_bundles() {
        found.push(NamedPath {
            id: found.len() as i32,
            name: proton.0,
            path: proton.1,
        });
    }

    println!("[lincher] discovered {} wine runtime(s)", found.len());
    found
}

/// Proton builds Steam shipped into steamapps/common, as
/// (bundle name, wine binary path) pairs sorted by name.
fn find_proton_bundles() -> Vec<(String, String)> {
    let mut bundles = Vec::new();

    let walk = walkdir::WalkDir::new(&*PATH_STEAM_COMMON)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry in walk.into_iter().flatten() {
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.contains("Proton") {
            continue;
        }
        let wine_bin = entry.path().join("dist/bin/wine");
        bundles.push((name, wine_bin.to_string_lossy().to_string()));
    }

    bundles.sort();
    bundles
}
