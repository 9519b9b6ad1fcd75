// Wine version string grammar (no I/O)

use regex::Regex;

/// Extract the version number from `wine --version` output.
///
/// Accepts anything shaped like `wine-9.0` or `wine-8.0.2 (Staging)` and
/// returns the dotted number. Returns None for unparsable output, which
/// discovery treats as "not a wine binary".
pub fn parse_wine_version(output: &str) -> Option<String> {
    let re = Regex::new(r"wine\-([\d\.]+)").unwrap();
    re.captures(output)
        .map(|caps| caps.get(1).unwrap().as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_wine_version ──────────────────────────────────────

    #[test]
    fn plain_release() {
        assert_eq!(parse_wine_version("wine-9.0\n"), Some("9.0".to_string()));
    }

    #[test]
    fn three_component_release() {
        assert_eq!(parse_wine_version("wine-8.0.2\n"), Some("8.0.2".to_string()));
    }

    #[test]
    fn staging_suffix_is_ignored() {
        assert_eq!(
            parse_wine_version("wine-9.14 (Staging)\n"),
            Some("9.14".to_string())
        );
    }

    #[test]
    fn unrelated_output_is_rejected() {
        assert_eq!(parse_wine_version("bash: wine: command not found"), None);
        assert_eq!(parse_wine_version(""), None);
    }

    #[test]
    fn directory_listing_is_rejected() {
        // what you get when the candidate path was actually a directory
        assert_eq!(parse_wine_version("total 0\ndrwxr-xr-x 2 u u 40 ."), None);
    }
}
