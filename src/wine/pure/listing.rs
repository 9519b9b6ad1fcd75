// Dosdevices listing grammar (no I/O)
//
// Drive mappings are read back from `ls -l` output rather than the raw
// directory, because wine quotes and decorates targets inconsistently
// across versions. The grammar lives here so the fragile part stays in
// one tested place.

use regex::Regex;

/// One `x: -> target` symlink from a dosdevices listing, target already
/// normalized (quotes, trailing slash and whitespace stripped).
#[derive(Clone, PartialEq, Debug)]
pub struct DriveEntry {
    pub letter: char,
    pub target: String,
}

/// Parse real drive-letter symlinks (`x: -> target`) out of an `ls -l`
/// listing. Raw disk devices (`x:: -> ...`) do not match this shape.
pub fn parse_drive_entries(listing: &str) -> Vec<DriveEntry> {
    let re = Regex::new(r"(?m)([a-z]): -> (.+)$").unwrap();
    re.captures_iter(listing)
        .map(|caps| DriveEntry {
            letter: caps.get(1).unwrap().as_str().chars().next().unwrap(),
            target: normalize_target(caps.get(2).unwrap().as_str()),
        })
        .collect()
}

/// Letters reserved by raw disk device entries (`x:: -> /dev/...`).
/// Those reserve their letter without being a path mapping.
pub fn parse_raw_device_letters(listing: &str) -> Vec<char> {
    let re = Regex::new(r"(?m)([a-z]):: -> ").unwrap();
    re.captures_iter(listing)
        .map(|caps| caps.get(1).unwrap().as_str().chars().next().unwrap())
        .collect()
}

/// The pool of letters a new mapping may claim: `c`–`z` minus every
/// letter a raw disk device holds. (`a`/`b` stay reserved for floppies,
/// as wine itself does.)
pub fn assignable_letters(raw_device_letters: &[char]) -> Vec<char> {
    ('c'..='z')
        .filter(|l| !raw_device_letters.contains(l))
        .collect()
}

/// Strip wrapping quotes, a trailing slash and trailing whitespace from a
/// symlink target as printed by `ls -l`.
fn normalize_target(target: &str) -> String {
    let trimmed = target.trim_end();
    let trimmed = trimmed.strip_prefix('\'').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('\'').unwrap_or(trimmed);
    let trimmed = if trimmed.len() > 1 {
        trimmed.strip_suffix('/').unwrap_or(trimmed)
    } else {
        trimmed
    };
    trimmed.to_string()
}

/// Strip one trailing path separator from a host directory so listing
/// targets and requested directories compare equal.
pub fn normalize_host_dir(host_dir: &str) -> String {
    if host_dir.len() > 1 {
        host_dir.strip_suffix('/').unwrap_or(host_dir).to_string()
    } else {
        host_dir.to_string()
    }
}

/// Split a guest-style absolute path (`X:\dir\file` or `X:/dir/file`)
/// into its lowercased drive letter and remaining segments.
pub fn split_guest_path(guest_path: &str) -> Option<(char, Vec<String>)> {
    let re = Regex::new(r"^([A-Za-z]):[/\\]").unwrap();
    let caps = re.captures(guest_path)?;
    let letter = caps
        .get(1)
        .unwrap()
        .as_str()
        .chars()
        .next()
        .unwrap()
        .to_ascii_lowercase();
    let rest = &guest_path[caps.get(0).unwrap().end()..];
    let parts = rest
        .split(['/', '\\'])
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect();
    Some((letter, parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "total 0\n\
        lrwxrwxrwx 1 user user 10 Jan  1 00:00 c: -> ../drive_c\n\
        lrwxrwxrwx 1 user user  1 Jan  1 00:00 d: -> '/home/user/My Games'\n\
        lrwxrwxrwx 1 user user  8 Jan  1 00:00 e:: -> /dev/sdb\n\
        lrwxrwxrwx 1 user user  1 Jan  1 00:00 z: -> /\n";

    // ── parse_drive_entries ─────────────────────────────────────

    #[test]
    fn parses_plain_and_quoted_targets() {
        let entries = parse_drive_entries(LISTING);
        assert_eq!(
            entries,
            vec![
                DriveEntry {
                    letter: 'c',
                    target: "../drive_c".to_string()
                },
                DriveEntry {
                    letter: 'd',
                    target: "/home/user/My Games".to_string()
                },
                DriveEntry {
                    letter: 'z',
                    target: "/".to_string()
                },
            ]
        );
    }

    #[test]
    fn raw_device_lines_are_not_drive_entries() {
        let entries = parse_drive_entries("lrwxrwxrwx 1 u u 8 Jan 1 00:00 e:: -> /dev/sdb\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn trailing_slash_on_target_is_stripped() {
        let entries = parse_drive_entries("h: -> /mnt/games/\n");
        assert_eq!(entries[0].target, "/mnt/games");
    }

    // ── parse_raw_device_letters / assignable_letters ───────────

    #[test]
    fn raw_device_letters_are_collected() {
        assert_eq!(parse_raw_device_letters(LISTING), vec!['e']);
    }

    #[test]
    fn assignable_pool_excludes_raw_devices() {
        let pool = assignable_letters(&['e']);
        assert_eq!(pool.len(), 23);
        assert!(!pool.contains(&'e'));
        assert!(!pool.contains(&'a'));
        assert!(!pool.contains(&'b'));
        assert_eq!(pool[0], 'c');
    }

    #[test]
    fn assignable_pool_without_raw_devices_is_c_to_z() {
        let pool = assignable_letters(&[]);
        assert_eq!(pool.first(), Some(&'c'));
        assert_eq!(pool.last(), Some(&'z'));
        assert_eq!(pool.len(), 24);
    }

    // ── normalize_host_dir ──────────────────────────────────────

    #[test]
    fn host_dir_trailing_slash_stripped() {
        assert_eq!(normalize_host_dir("/home/user/games/"), "/home/user/games");
        assert_eq!(normalize_host_dir("/home/user/games"), "/home/user/games");
        assert_eq!(normalize_host_dir("/"), "/");
    }

    // ── split_guest_path ────────────────────────────────────────

    #[test]
    fn splits_backslash_paths() {
        let (letter, parts) = split_guest_path(r"Z:\games\foo.exe").unwrap();
        assert_eq!(letter, 'z');
        assert_eq!(parts, vec!["games", "foo.exe"]);
    }

    #[test]
    fn splits_forward_slash_paths() {
        let (letter, parts) = split_guest_path("C:/th06/th06.exe").unwrap();
        assert_eq!(letter, 'c');
        assert_eq!(parts, vec!["th06", "th06.exe"]);
    }

    #[test]
    fn uppercase_letter_is_lowercased() {
        let (letter, _) = split_guest_path(r"D:\x").unwrap();
        assert_eq!(letter, 'd');
    }

    #[test]
    fn paths_without_drive_prefix_are_rejected() {
        assert!(split_guest_path("/home/user/games/foo.exe").is_none());
        assert!(split_guest_path("games/foo.exe").is_none());
        assert!(split_guest_path("").is_none());
    }
}
