// PC-98 launch pipeline
//
// Two Neko Project flavors are supported, detected by what sits next to
// the configured emulator binary: np21nt.ini means the Windows build run
// under wine, otherwise a native xnp21kai install is assumed. Both need
// the disk image written into the emulator config before launch; the wine
// flavor additionally needs the image's directory mapped to a drive
// letter inside the prefix.

use crate::launch::operations::{patch_disk_image_path, run_with_hooks, ConfigEncoding, PatchStatus};
use crate::launch::pipelines::run_game::{dir_of, file_of};
use crate::launch::pure::resolve_wine_params;
use crate::launch::types::{LaunchOutcome, RunPc98Params};
use crate::paths::PATH_DEFAULT_WINE_PREFIX;
use crate::window::WindowControl;
use crate::wine::discovery::home_directory;
use crate::wine::drive::ensure_drive_for;
use std::path::{Path, PathBuf};

const WINE_CONFIG: &str = "np21nt.ini";
const NATIVE_BINARY: &str = "xnp21kai";

/// Whether a configured emulator path points at a usable Neko Project
/// install: the binary must exist and be identifiable as either flavor.
pub fn check_neko_project_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    let binary = Path::new(path);
    if !binary.exists() {
        return false;
    }
    let Some(dir) = binary.parent() else {
        return false;
    };
    dir.join(WINE_CONFIG).exists()
        || binary
            .file_name()
            .map(|name| name.to_string_lossy().contains(NATIVE_BINARY))
            .unwrap_or(false)
}

fn patch_outcome(status: PatchStatus) -> Option<LaunchOutcome> {
    match status {
        PatchStatus::Ok => None,
        PatchStatus::WriteConfig => Some(LaunchOutcome::WriteConfig),
        PatchStatus::ConfigIncorrect => Some(LaunchOutcome::ConfigIncorrect),
    }
}

/// Launch a PC-98 title through Neko Project.
pub fn run_pc98_game(params: &RunPc98Params, window: &dyn WindowControl) -> LaunchOutcome {
    if !params.neko_project_path_valid {
        return LaunchOutcome::NekoPath;
    }

    let hdi_path = &params.game_settings.hdi_path;
    if hdi_path.is_empty() || !Path::new(hdi_path).exists() {
        return LaunchOutcome::HdiMissing;
    }

    let neko_dir = dir_of(&params.neko_project_path);

    if neko_dir.join(WINE_CONFIG).exists() {
        run_under_wine(params, &neko_dir, hdi_path, window)
    } else {
        run_native(params, &neko_dir, hdi_path, window)
    }
}

fn run_under_wine(
    params: &RunPc98Params,
    neko_dir: &Path,
    hdi_path: &str,
    window: &dyn WindowControl,
) -> LaunchOutcome {
    let wine = resolve_wine_params(&params.game_settings.wine, &params.named_paths);
    let prefix = wine
        .env
        .get("WINEPREFIX")
        .map(PathBuf::from)
        .unwrap_or_else(|| PATH_DEFAULT_WINE_PREFIX.clone());

    let hdi_dir = dir_of(hdi_path);
    let Some(letter) = ensure_drive_for(&hdi_dir.to_string_lossy(), &prefix) else {
        return LaunchOutcome::WinePrefix;
    };

    // the emulator runs inside the prefix, so the image path is a guest path
    let guest_path = format!("{}:\\{}", letter.to_ascii_uppercase(), file_of(hdi_path));
    let status = patch_disk_image_path(
        &neko_dir.join(WINE_CONFIG),
        &guest_path,
        ConfigEncoding::Utf16Le,
    );
    if let Some(outcome) = patch_outcome(status) {
        return outcome;
    }

    run_with_hooks(
        &wine.command,
        neko_dir,
        &[file_of(&params.neko_project_path)],
        &wine.env,
        &params.commands_before,
        &params.commands_after,
        params.auto_close,
        window,
    );

    LaunchOutcome::Ok
}

fn run_native(
    params: &RunPc98Params,
    neko_dir: &Path,
    hdi_path: &str,
    window: &dyn WindowControl,
) -> LaunchOutcome {
    let home = home_directory();
    if home.is_empty() {
        return LaunchOutcome::NekoPath;
    }

    let config = Path::new(&home).join(".config/xnp21kai/xnp21kairc");
    let status = patch_disk_image_path(&config, hdi_path, ConfigEncoding::Utf8);
    if let Some(outcome) = patch_outcome(status) {
        return outcome;
    }

    run_with_hooks(
        &format!("./{}", NATIVE_BINARY),
        neko_dir,
        &[],
        &std::collections::HashMap::new(),
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
    use std::fs;

    fn bare_params() -> RunPc98Params {
        RunPc98Params {
            game_settings: GameSettings::default(),
            named_paths: NamedPaths::default(),
            commands_before: vec![],
            commands_after: vec![],
            auto_close: false,
            neko_project_path: String::new(),
            neko_project_path_valid: true,
        }
    }

    // ── check_neko_project_path ─────────────────────────────────

    #[test]
    fn wine_install_is_detected_by_its_ini() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join("np21nt.exe");
        fs::write(&exe, b"mz").unwrap();
        assert!(!check_neko_project_path(&exe.to_string_lossy()));
        fs::write(tmp.path().join("np21nt.ini"), "").unwrap();
        assert!(check_neko_project_path(&exe.to_string_lossy()));
    }

    #[test]
    fn native_install_is_detected_by_its_binary_name() {
        let tmp = tempfile::tempdir().unwrap();
        let binary = tmp.path().join("xnp21kai");
        fs::write(&binary, b"\x7fELF").unwrap();
        assert!(check_neko_project_path(&binary.to_string_lossy()));
    }

    #[test]
    fn missing_or_empty_path_is_invalid() {
        assert!(!check_neko_project_path(""));
        assert!(!check_neko_project_path("/nonexistent/np21nt.exe"));
    }

    // ── run_pc98_game early outs ────────────────────────────────

    #[test]
    fn invalid_emulator_path_short_circuits() {
        let mut params = bare_params();
        params.neko_project_path_valid = false;
        assert_eq!(run_pc98_game(&params, &NoWindow), LaunchOutcome::NekoPath);
    }

    #[test]
    fn missing_hdi_short_circuits() {
        let mut params = bare_params();
        params.game_settings.hdi_path = "/nonexistent/th02.hdi".to_string();
        assert_eq!(run_pc98_game(&params, &NoWindow), LaunchOutcome::HdiMissing);

        params.game_settings.hdi_path.clear();
        assert_eq!(run_pc98_game(&params, &NoWindow), LaunchOutcome::HdiMissing);
    }

    #[test]
    fn wine_flavor_without_prefix_mapping_fails_cleanly() {
        let tmp = tempfile::tempdir().unwrap();
        let hdi = tmp.path().join("th02.hdi");
        fs::write(&hdi, b"hdi").unwrap();
        let exe = tmp.path().join("neko/np21nt.exe");
        fs::create_dir_all(tmp.path().join("neko")).unwrap();
        fs::write(&exe, b"mz").unwrap();
        fs::write(tmp.path().join("neko/np21nt.ini"), "").unwrap();

        let mut params = bare_params();
        params.game_settings.hdi_path = hdi.to_string_lossy().to_string();
        params.neko_project_path = exe.to_string_lossy().to_string();
        // point the launch at a prefix that does not exist
        let prefix = tmp.path().join("no-such-prefix");
        params
            .named_paths
            .wine_prefixes
            .add("broken", &prefix.to_string_lossy());
        params.game_settings.wine.wine_prefix = 0;

        assert_eq!(run_pc98_game(&params, &NoWindow), LaunchOutcome::WinePrefix);
    }
}
