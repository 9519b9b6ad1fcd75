//! Drive mappings inside a wine prefix
//!
//! A mapping is a symlink `<prefix>/dosdevices/<letter>:` pointing at a
//! host directory. `ensure_drive_for` is idempotent: asking for the same
//! host directory twice yields the same letter and creates at most one
//! symlink.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::shell::run_captured;
use crate::wine::pure::{
    assignable_letters, normalize_host_dir, parse_drive_entries, parse_raw_device_letters,
    split_guest_path,
};

// Two simultaneous launches must not both claim the same free letter.
static DRIVE_LOCK: Mutex<()> = Mutex::new(());

/// Find or create a drive letter mapping for `host_dir` inside the given
/// wine prefix. Returns the letter, or None when the prefix has no
/// dosdevices directory, the listing fails, no letter is free, or the
/// symlink cannot be created.
pub fn ensure_drive_for(host_dir: &str, prefix: &Path) -> Option<char> {
    let _guard = DRIVE_LOCK.lock().ok()?;

    let host_dir = normalize_host_dir(host_dir);
    let dosdevices = prefix.join("dosdevices");
    if !dosdevices.exists() {
        println!("[lincher] no dosdevices directory at {}", dosdevices.display());
        return None;
    }

    let listing = run_captured(&format!("ls -l \"{}\"", dosdevices.display())).stdout;
    if listing.is_empty() {
        return None;
    }

    let mut pool = assignable_letters(&parse_raw_device_letters(&listing));

    for entry in parse_drive_entries(&listing) {
        if entry.target == host_dir {
            println!("[lincher] {} already mapped as {}:", host_dir, entry.letter);
            return Some(entry.letter);
        }
        // taken by a different mapping
        pool.retain(|l| *l != entry.letter);
    }

    let letter = *pool.first()?;
    let link = dosdevices.join(format!("{}:", letter));
    let output = run_captured(&format!("ln -sv \"{}\" \"{}\"", host_dir, link.display()));
    if output.stdout.contains(&host_dir) {
        println!("[lincher] created drive {}: -> {}", letter, host_dir);
        Some(letter)
    } else {
        println!("[lincher] failed to create drive symlink: {}", output.stderr);
        None
    }
}

/// Translate a guest-style path (`X:\dir\file.exe`) back into a host path
/// by searching the given wine prefixes in order. Returns an empty string
/// when no prefix has a matching mapping or the path has no drive letter.
pub fn resolve_host_path(guest_path: &str, prefixes: &[String]) -> String {
    let Some((letter, parts)) = split_guest_path(guest_path) else {
        println!("[lincher] no drive letter prefix in {}", guest_path);
        return String::new();
    };

    for prefix in prefixes {
        let link = Path::new(prefix).join("dosdevices").join(format!("{}:", letter));
        let mut candidate = link.clone();
        for part in &parts {
            candidate = candidate.join(part);
        }
        if !candidate.exists() {
            continue;
        }

        let listing = run_captured(&format!("ls -l \"{}\"", link.display())).stdout;
        if let Some(entry) = parse_drive_entries(&listing)
            .into_iter()
            .find(|e| e.letter == letter)
        {
            let mut resolved = PathBuf::from(entry.target);
            for part in &parts {
                resolved = resolved.join(part);
            }
            return resolved.to_string_lossy().to_string();
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::symlink;

    fn make_prefix(dir: &Path) -> PathBuf {
        let dosdevices = dir.join("pfx/dosdevices");
        fs::create_dir_all(&dosdevices).unwrap();
        symlink(dir.join("pfx/drive_c"), dosdevices.join("c:")).unwrap();
        fs::create_dir_all(dir.join("pfx/drive_c")).unwrap();
        dir.join("pfx")
    }

    // ── ensure_drive_for ────────────────────────────────────────

    #[test]
    fn creates_then_reuses_the_same_letter() {
        let tmp = tempfile::tempdir().unwrap();
        let prefix = make_prefix(tmp.path());
        let games = tmp.path().join("games");
        fs::create_dir_all(&games).unwrap();
        let games_str = games.to_string_lossy().to_string();

        let first = ensure_drive_for(&games_str, &prefix).unwrap();
        let second = ensure_drive_for(&games_str, &prefix).unwrap();
        assert_eq!(first, second);

        // exactly one new symlink next to c:
        let count = fs::read_dir(prefix.join("dosdevices")).unwrap().count();
        assert_eq!(count, 2);
    }

    #[test]
    fn trailing_slash_does_not_create_a_second_mapping() {
        let tmp = tempfile::tempdir().unwrap();
        let prefix = make_prefix(tmp.path());
        let games = tmp.path().join("games");
        fs::create_dir_all(&games).unwrap();

        let plain = ensure_drive_for(&games.to_string_lossy(), &prefix).unwrap();
        let slashed = ensure_drive_for(&format!("{}/", games.to_string_lossy()), &prefix).unwrap();
        assert_eq!(plain, slashed);
    }

    #[test]
    fn skips_letters_taken_by_other_mappings() {
        let tmp = tempfile::tempdir().unwrap();
        let prefix = make_prefix(tmp.path());
        // c: is already taken by drive_c, so the first free letter is d
        let games = tmp.path().join("games");
        fs::create_dir_all(&games).unwrap();

        let letter = ensure_drive_for(&games.to_string_lossy(), &prefix).unwrap();
        assert_eq!(letter, 'd');
    }

    #[test]
    fn missing_dosdevices_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let prefix = tmp.path().join("nope");
        assert_eq!(ensure_drive_for("/tmp", &prefix), None);
    }

    // ── resolve_host_path ───────────────────────────────────────

    #[test]
    fn resolves_through_the_second_prefix() {
        let tmp = tempfile::tempdir().unwrap();

        // prefix A has no z: mapping
        let prefix_a = tmp.path().join("a");
        fs::create_dir_all(prefix_a.join("dosdevices")).unwrap();

        // prefix B maps z: to a games dir containing foo.exe
        let games = tmp.path().join("games");
        fs::create_dir_all(&games).unwrap();
        fs::write(games.join("foo.exe"), b"mz").unwrap();
        let prefix_b = tmp.path().join("b");
        fs::create_dir_all(prefix_b.join("dosdevices")).unwrap();
        symlink(&games, prefix_b.join("dosdevices/z:")).unwrap();

        let resolved = resolve_host_path(
            r"Z:\foo.exe",
            &[
                prefix_a.to_string_lossy().to_string(),
                prefix_b.to_string_lossy().to_string(),
            ],
        );
        assert_eq!(resolved, games.join("foo.exe").to_string_lossy());
    }

    #[test]
    fn unmapped_drive_resolves_to_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let prefix = make_prefix(tmp.path());
        let resolved = resolve_host_path(
            r"Q:\foo.exe",
            &[prefix.to_string_lossy().to_string()],
        );
        assert_eq!(resolved, "");
    }

    #[test]
    fn path_without_drive_letter_resolves_to_empty() {
        assert_eq!(resolve_host_path("/home/user/foo.exe", &[]), "");
    }
}
