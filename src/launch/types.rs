use crate::config::{GameSettings, NamedPaths, WineSelection};
use serde::{Deserialize, Serialize};

/// Result of any launch attempt. One type across all three categories so
/// callers never have to special-case the PC-98 path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LaunchOutcome {
    Ok,
    /// No selectable launch profile; deliberately not an error.
    NoProfile,
    /// The configured disk image does not exist.
    HdiMissing,
    /// Drive mapping inside the wine prefix failed.
    WinePrefix,
    /// The emulator config file could not be written.
    WriteConfig,
    /// The emulator config file has no disk image key.
    ConfigIncorrect,
    /// The emulator install path itself is invalid.
    NekoPath,
}

impl LaunchOutcome {
    /// Message for the UI, None for the silent outcomes.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            LaunchOutcome::Ok | LaunchOutcome::NoProfile => None,
            LaunchOutcome::HdiMissing => Some("The configured HDI image does not exist."),
            LaunchOutcome::WinePrefix => {
                Some("Could not map the HDI directory inside the wine prefix.")
            }
            LaunchOutcome::WriteConfig => Some("Could not write the Neko Project config file."),
            LaunchOutcome::ConfigIncorrect => {
                Some("The Neko Project config file has no HDD1FILE entry.")
            }
            LaunchOutcome::NekoPath => Some("The Neko Project install path is invalid."),
        }
    }
}

/// Parameters for launching a regular game (or a custom exe slot that
/// goes through profile selection).
#[derive(Serialize, Deserialize, Clone)]
pub struct RunParams {
    pub game_settings: GameSettings,
    pub named_paths: NamedPaths,
    /// Already filtered and ordered: global hook first, per-game second.
    pub commands_before: Vec<String>,
    pub commands_after: Vec<String>,
    pub auto_close: bool,
    pub thcrap_path: String,
    pub thcrap_found: bool,
    pub is_custom_exe: bool,
}

/// Parameters for launching a standalone custom executable (no profile
/// selection, the path is the profile).
#[derive(Serialize, Deserialize, Clone)]
pub struct RunCustomParams {
    pub path: String,
    pub with_app_locale: bool,
    pub wine: WineSelection,
    pub named_paths: NamedPaths,
    pub commands_before: Vec<String>,
    pub commands_after: Vec<String>,
    pub auto_close: bool,
}

/// Parameters for launching a PC-98 title through Neko Project.
#[derive(Serialize, Deserialize, Clone)]
pub struct RunPc98Params {
    pub game_settings: GameSettings,
    pub named_paths: NamedPaths,
    pub commands_before: Vec<String>,
    pub commands_after: Vec<String>,
    pub auto_close: bool,
    pub neko_project_path: String,
    pub neko_project_path_valid: bool,
}
