//! thcrap integration
//!
//! thcrap is the community patch loader that augments a game's executable
//! at launch time. The launcher only needs to know which profiles exist
//! next to the thcrap install, what per-game profiles are registered, and
//! how to pull repository/patch metadata from patch servers.

use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

/// Loader executable, relative to the thcrap install directory.
/// Passed to wine with the install directory as cwd.
pub const THCRAP_LOADER: &str = "./bin/thcrap_loader.exe";

pub struct ThcrapConfig {
    /// User profile files found under `config/` (e.g. `en.js`).
    pub profiles: Vec<String>,
    /// Contents of `config/games.js`: game name -> executable path.
    pub games: HashMap<String, String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ThcrapRepository {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub neighbors: Vec<String>,
    #[serde(default)]
    pub patches: HashMap<String, String>,
    #[serde(default)]
    pub servers: Vec<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ThcrapPatch {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub servers: Vec<String>,
    #[serde(default)]
    pub fonts: HashMap<String, bool>,
}

/// Whether the configured thcrap install actually exists on disk.
pub fn thcrap_found(thcrap_path: &str) -> bool {
    !thcrap_path.is_empty() && Path::new(thcrap_path).exists()
}

/// Read profiles and per-game registrations from a thcrap install.
///
/// Profiles are the `.js` files under `config/` except the internal
/// `config.js` and `games.js`. Returns None when the config directory is
/// missing entirely.
pub fn read_thcrap_config(thcrap_exe_path: &str) -> Option<ThcrapConfig> {
    let config_dir = Path::new(thcrap_exe_path).parent()?.join("config");
    let entries = std::fs::read_dir(&config_dir).ok()?;

    let mut profiles: Vec<String> = entries
        .flatten()
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| name.ends_with(".js"))
        .filter(|name| name != "config.js" && name != "games.js")
        .collect();
    profiles.sort();

    let games = std::fs::read_to_string(config_dir.join("games.js"))
        .ok()
        .and_then(|s| serde_json::from_str::<HashMap<String, String>>(&s).ok())
        .unwrap_or_default();

    Some(ThcrapConfig { profiles, games })
}

/// Parse every `repos/<id>/repo.js` under the thcrap install.
pub fn load_local_repositories(thcrap_exe_path: &str) -> Vec<ThcrapRepository> {
    let mut repos = Vec::new();

    let Some(parent) = Path::new(thcrap_exe_path).parent() else {
        return repos;
    };
    let repos_dir = parent.join("repos");
    let Ok(entries) = std::fs::read_dir(&repos_dir) else {
        println!("[lincher] no thcrap repos directory at {}", repos_dir.display());
        return repos;
    };

    for entry in entries.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let repo_js = entry.path().join("repo.js");
        if let Ok(contents) = std::fs::read_to_string(&repo_js) {
            match serde_json::from_str::<ThcrapRepository>(&contents) {
                Ok(repo) => repos.push(repo),
                Err(e) => println!("[lincher] skipping {}: {}", repo_js.display(), e),
            }
        }
    }

    repos
}

/// Fetch a repository descriptor (`repo.js`) from its base URL.
pub fn fetch_repository(repository_url: &str) -> Result<ThcrapRepository, Box<dyn Error>> {
    let url = format!("{}/repo.js", repository_url.trim_end_matches('/'));
    let response = reqwest::blocking::Client::new()
        .get(&url)
        .header("User-Agent", "lincher")
        .send()?;

    if !response.status().is_success() {
        return Err(format!("Failed to fetch {}: HTTP {}", url, response.status()).into());
    }

    Ok(response.json()?)
}

/// Fetch a patch descriptor across a server list, first success wins.
pub fn fetch_remote_patch(servers: &[String], patch_id: &str) -> Option<ThcrapPatch> {
    let client = reqwest::blocking::Client::new();

    for server in servers {
        let url = format!("{}/{}/patch.js", server.trim_end_matches('/'), patch_id);
        match client.get(&url).header("User-Agent", "lincher").send() {
            Ok(response) if response.status().is_success() => match response.json() {
                Ok(patch) => return Some(patch),
                Err(e) => println!("[lincher] bad patch.js from {}: {}", url, e),
            },
            Ok(response) => {
                println!("[lincher] request to {} failed: HTTP {}", url, response.status())
            }
            Err(e) => println!("[lincher] request to {} failed: {}", url, e),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn make_install(dir: &Path) -> String {
        let config = dir.join("thcrap/config");
        fs::create_dir_all(&config).unwrap();
        fs::write(config.join("en.js"), "{}").unwrap();
        fs::write(config.join("lang_ja.js"), "{}").unwrap();
        fs::write(config.join("config.js"), "{}").unwrap();
        fs::write(
            config.join("games.js"),
            r#"{"th06": "Z:\\games\\th06\\th06.exe"}"#,
        )
        .unwrap();
        fs::write(config.join("readme.txt"), "not a profile").unwrap();
        dir.join("thcrap/thcrap.exe").to_string_lossy().to_string()
    }

    // ── read_thcrap_config ──────────────────────────────────────

    #[test]
    fn profiles_exclude_internal_files() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = make_install(tmp.path());
        let config = read_thcrap_config(&exe).unwrap();
        assert_eq!(config.profiles, vec!["en.js", "lang_ja.js"]);
    }

    #[test]
    fn games_js_is_parsed_into_a_map() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = make_install(tmp.path());
        let config = read_thcrap_config(&exe).unwrap();
        assert_eq!(config.games["th06"], r"Z:\games\th06\th06.exe");
    }

    #[test]
    fn missing_config_dir_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join("thcrap/thcrap.exe");
        assert!(read_thcrap_config(&exe.to_string_lossy()).is_none());
    }

    #[test]
    fn broken_games_js_degrades_to_empty_map() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = make_install(tmp.path());
        fs::write(tmp.path().join("thcrap/config/games.js"), "not json").unwrap();
        let config = read_thcrap_config(&exe).unwrap();
        assert!(config.games.is_empty());
    }

    // ── load_local_repositories ─────────────────────────────────

    #[test]
    fn repos_are_parsed_per_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = make_install(tmp.path());
        let repos_dir = tmp.path().join("thcrap/repos/thpatch");
        fs::create_dir_all(&repos_dir).unwrap();
        fs::write(
            repos_dir.join("repo.js"),
            r#"{"id": "thpatch", "title": "Touhou Patch Center", "servers": ["https://srv.thpatch.net/"]}"#,
        )
        .unwrap();
        // a directory without repo.js is skipped
        fs::create_dir_all(tmp.path().join("thcrap/repos/empty")).unwrap();

        let repos = load_local_repositories(&exe);
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].id, "thpatch");
        assert_eq!(repos[0].servers.len(), 1);
    }

    #[test]
    fn missing_repos_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = make_install(tmp.path());
        assert!(load_local_repositories(&exe).is_empty());
    }

    // ── thcrap_found ────────────────────────────────────────────

    #[test]
    fn found_requires_existing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = make_install(tmp.path());
        assert!(!thcrap_found(&exe)); // file itself was never created
        fs::write(&exe, b"mz").unwrap();
        assert!(thcrap_found(&exe));
        assert!(!thcrap_found(""));
    }
}
