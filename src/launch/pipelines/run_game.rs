// Regular game launch pipeline

use crate::launch::operations::run_with_hooks;
use crate::launch::pure::{resolve_wine_params, select_profile, LaunchProfile};
use crate::launch::types::{LaunchOutcome, RunParams};
use crate::thcrap::THCRAP_LOADER;
use crate::window::WindowControl;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub(crate) fn dir_of(path: &str) -> PathBuf {
    match Path::new(path).parent() {
        Some(dir) if dir != Path::new("") => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

pub(crate) fn file_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Launch a game through wine, either directly or via the thcrap loader.
///
/// Profile selection decides which; a game with nothing configured is a
/// silent no-op so the UI can grey the entry out instead of erroring.
pub fn run_game(params: &RunParams, window: &dyn WindowControl) -> LaunchOutcome {
    let wine = resolve_wine_params(&params.game_settings.wine, &params.named_paths);

    let Some(profile) = select_profile(
        &params.game_settings,
        params.thcrap_found,
        params.is_custom_exe,
    ) else {
        println!("[lincher] no launch profile configured, nothing to run");
        return LaunchOutcome::NoProfile;
    };

    let mut env: HashMap<String, String> = wine.env.clone();
    let (cwd, args) = match profile {
        LaunchProfile::Thcrap => {
            let sub_profile = if params.is_custom_exe {
                &params.game_settings.thcrap_custom_exe_profile
            } else {
                &params.game_settings.thcrap_game_profile
            };
            if params.game_settings.thcrap_with_app_locale {
                env.insert("LANG".to_string(), "ja_JP.UTF-8".to_string());
            }
            (
                dir_of(&params.thcrap_path),
                vec![
                    THCRAP_LOADER.to_string(),
                    params.game_settings.thcrap_profile.clone(),
                    sub_profile.clone(),
                ],
            )
        }
        LaunchProfile::Exe(kind) => {
            let slot = params.game_settings.slot(kind);
            if slot.with_app_locale {
                env.insert("LANG".to_string(), "ja_JP.UTF-8".to_string());
            }
            (dir_of(&slot.path), vec![file_of(&slot.path)])
        }
    };

    run_with_hooks(
        &wine.command,
        &cwd,
        &args,
        &env,
        &params.commands_before,
        &params.commands_after,
        params.auto_close,
        window,
    );

    LaunchOutcome::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{GameSettings, NamedPaths};
    use crate::window::NoWindow;

    fn bare_params() -> RunParams {
        RunParams {
            game_settings: GameSettings::default(),
            named_paths: NamedPaths::default(),
            commands_before: vec![],
            commands_after: vec![],
            auto_close: false,
            thcrap_path: String::new(),
            thcrap_found: false,
            is_custom_exe: false,
        }
    }

    #[test]
    fn unconfigured_game_is_a_silent_no_profile() {
        assert_eq!(run_game(&bare_params(), &NoWindow), LaunchOutcome::NoProfile);
    }

    #[test]
    fn custom_exe_category_is_also_silent_when_empty() {
        let mut params = bare_params();
        params.is_custom_exe = true;
        assert_eq!(run_game(&params, &NoWindow), LaunchOutcome::NoProfile);
    }

    // ── path helpers ────────────────────────────────────────────

    #[test]
    fn dir_of_splits_off_the_executable() {
        assert_eq!(dir_of("/games/th06/th06.exe"), PathBuf::from("/games/th06"));
        assert_eq!(dir_of("th06.exe"), PathBuf::from("."));
        assert_eq!(dir_of(""), PathBuf::from("."));
    }

    #[test]
    fn file_of_is_the_basename() {
        assert_eq!(file_of("/games/th06/th06.exe"), "th06.exe");
        assert_eq!(file_of("th06.exe"), "th06.exe");
        assert_eq!(file_of(""), "");
    }
}
