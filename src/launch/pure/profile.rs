// Launch profile selection (no I/O)

use crate::config::types::{
    CustomExeLaunchProfile, ExecutableKind, GameLaunchProfile, GameSettings,
    CUSTOM_EXE_LAUNCH_PROFILES, GAME_LAUNCH_PROFILES,
};

/// The resolved way to start a game: one of the executable slots, or the
/// thcrap loader.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LaunchProfile {
    Exe(ExecutableKind),
    Thcrap,
}

impl From<GameLaunchProfile> for LaunchProfile {
    fn from(p: GameLaunchProfile) -> Self {
        match p {
            GameLaunchProfile::Jp => LaunchProfile::Exe(ExecutableKind::Jp),
            GameLaunchProfile::En => LaunchProfile::Exe(ExecutableKind::En),
            GameLaunchProfile::Thcrap => LaunchProfile::Thcrap,
        }
    }
}

impl From<CustomExeLaunchProfile> for LaunchProfile {
    fn from(p: CustomExeLaunchProfile) -> Self {
        match p {
            CustomExeLaunchProfile::Custom => LaunchProfile::Exe(ExecutableKind::Custom),
            CustomExeLaunchProfile::Thcrap => LaunchProfile::Thcrap,
        }
    }
}

/// Pick the launch profile for a game.
///
/// The user's configured default wins if and only if it is itself
/// configured; otherwise the category's fixed priority list is scanned
/// and the first configured profile wins. None means nothing to launch.
pub fn select_profile(
    settings: &GameSettings,
    thcrap_found: bool,
    is_custom_exe: bool,
) -> Option<LaunchProfile> {
    let default: Option<LaunchProfile> = if is_custom_exe {
        settings.default_custom_exe_profile.map(LaunchProfile::from)
    } else {
        settings.default_profile.map(LaunchProfile::from)
    };

    if let Some(profile) = default {
        if is_configured(settings, profile, thcrap_found, is_custom_exe) {
            return Some(profile);
        }
    }

    let candidates: Vec<LaunchProfile> = if is_custom_exe {
        CUSTOM_EXE_LAUNCH_PROFILES.iter().copied().map(LaunchProfile::from).collect()
    } else {
        GAME_LAUNCH_PROFILES.iter().copied().map(LaunchProfile::from).collect()
    };

    candidates
        .into_iter()
        .find(|p| is_configured(settings, *p, thcrap_found, is_custom_exe))
}

/// Whether a profile is selectable at all.
///
/// thcrap needs a profile name, the per-category sub-profile name and a
/// confirmed install. An executable slot just needs a non-empty path.
pub fn is_configured(
    settings: &GameSettings,
    profile: LaunchProfile,
    thcrap_found: bool,
    is_custom_exe: bool,
) -> bool {
    match profile {
        LaunchProfile::Thcrap => {
            let sub_profile = if is_custom_exe {
                &settings.thcrap_custom_exe_profile
            } else {
                &settings.thcrap_game_profile
            };
            !settings.thcrap_profile.is_empty() && !sub_profile.is_empty() && thcrap_found
        }
        LaunchProfile::Exe(kind) => !settings.slot(kind).path.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{CustomExeLaunchProfile, GameLaunchProfile};

    fn settings_with_thcrap() -> GameSettings {
        GameSettings {
            thcrap_profile: "en.js".to_string(),
            thcrap_game_profile: "th06".to_string(),
            thcrap_custom_exe_profile: "th06_custom".to_string(),
            ..GameSettings::default()
        }
    }

    // ── is_configured: thcrap truth table ───────────────────────

    #[test]
    fn thcrap_configured_when_all_three_truthy() {
        let settings = settings_with_thcrap();
        assert!(is_configured(&settings, LaunchProfile::Thcrap, true, false));
    }

    #[test]
    fn thcrap_not_configured_without_profile_name() {
        let mut settings = settings_with_thcrap();
        settings.thcrap_profile.clear();
        assert!(!is_configured(&settings, LaunchProfile::Thcrap, true, false));
    }

    #[test]
    fn thcrap_not_configured_without_sub_profile() {
        let mut settings = settings_with_thcrap();
        settings.thcrap_game_profile.clear();
        assert!(!is_configured(&settings, LaunchProfile::Thcrap, true, false));
    }

    #[test]
    fn thcrap_not_configured_when_tool_missing() {
        let settings = settings_with_thcrap();
        assert!(!is_configured(&settings, LaunchProfile::Thcrap, false, false));
    }

    #[test]
    fn thcrap_custom_exe_checks_the_custom_sub_profile() {
        let mut settings = settings_with_thcrap();
        settings.thcrap_game_profile.clear();
        // game sub-profile is empty but the custom one is set
        assert!(is_configured(&settings, LaunchProfile::Thcrap, true, true));
        settings.thcrap_custom_exe_profile.clear();
        assert!(!is_configured(&settings, LaunchProfile::Thcrap, true, true));
    }

    #[test]
    fn exe_slot_configured_iff_path_nonempty() {
        let mut settings = GameSettings::default();
        assert!(!is_configured(&settings, LaunchProfile::Exe(ExecutableKind::Jp), true, false));
        settings.jp.path = "/games/th06/th06.exe".to_string();
        assert!(is_configured(&settings, LaunchProfile::Exe(ExecutableKind::Jp), true, false));
    }

    // ── select_profile ──────────────────────────────────────────

    #[test]
    fn configured_default_beats_priority_scan() {
        let mut settings = GameSettings::default();
        settings.jp.path = "/games/th06/th06.exe".to_string();
        settings.en.path = "/games/th06/th06e.exe".to_string();
        settings.default_profile = Some(GameLaunchProfile::En);

        assert_eq!(
            select_profile(&settings, false, false),
            Some(LaunchProfile::Exe(ExecutableKind::En))
        );
    }

    #[test]
    fn unconfigured_default_falls_back_to_scan() {
        let mut settings = settings_with_thcrap();
        settings.default_profile = Some(GameLaunchProfile::En); // en path is empty
        assert_eq!(select_profile(&settings, true, false), Some(LaunchProfile::Thcrap));
    }

    #[test]
    fn scan_order_is_jp_en_thcrap() {
        let mut settings = settings_with_thcrap();
        settings.jp.path = "/a".to_string();
        settings.en.path = "/b".to_string();
        assert_eq!(
            select_profile(&settings, true, false),
            Some(LaunchProfile::Exe(ExecutableKind::Jp))
        );

        settings.jp.path.clear();
        assert_eq!(
            select_profile(&settings, true, false),
            Some(LaunchProfile::Exe(ExecutableKind::En))
        );

        settings.en.path.clear();
        assert_eq!(select_profile(&settings, true, false), Some(LaunchProfile::Thcrap));
    }

    #[test]
    fn custom_scan_order_is_custom_then_thcrap() {
        let mut settings = settings_with_thcrap();
        settings.custom.path = "/c".to_string();
        assert_eq!(
            select_profile(&settings, true, true),
            Some(LaunchProfile::Exe(ExecutableKind::Custom))
        );

        settings.custom.path.clear();
        assert_eq!(select_profile(&settings, true, true), Some(LaunchProfile::Thcrap));
    }

    #[test]
    fn custom_default_is_respected() {
        let mut settings = settings_with_thcrap();
        settings.custom.path = "/c".to_string();
        settings.default_custom_exe_profile = Some(CustomExeLaunchProfile::Thcrap);
        assert_eq!(select_profile(&settings, true, true), Some(LaunchProfile::Thcrap));
    }

    #[test]
    fn nothing_configured_selects_nothing() {
        let settings = GameSettings::default();
        assert_eq!(select_profile(&settings, true, false), None);
        assert_eq!(select_profile(&settings, true, true), None);
    }
}
