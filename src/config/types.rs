use crate::games::GameId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The three configurable executable slots a game can have.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ExecutableKind {
    Jp,
    En,
    Custom,
}

/// Launch profiles selectable for a regular game.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum GameLaunchProfile {
    Jp,
    En,
    Thcrap,
}

/// Launch profiles selectable for a custom executable.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CustomExeLaunchProfile {
    Custom,
    Thcrap,
}

/// Fixed priority order when no explicit default applies.
pub const GAME_LAUNCH_PROFILES: [GameLaunchProfile; 3] = [
    GameLaunchProfile::Jp,
    GameLaunchProfile::En,
    GameLaunchProfile::Thcrap,
];

pub const CUSTOM_EXE_LAUNCH_PROFILES: [CustomExeLaunchProfile; 2] =
    [CustomExeLaunchProfile::Custom, CustomExeLaunchProfile::Thcrap];

#[derive(Serialize, Deserialize, Clone, Default, Debug)]
pub struct ExecutableSlot {
    #[serde(default)]
    pub path: String,
    /// Force the Japanese locale for this executable.
    #[serde(default)]
    pub with_app_locale: bool,
}

/// Selected wine executable / prefix ids for one game.
/// -1 means "use the collection default".
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct WineSelection {
    #[serde(default = "sentinel")]
    pub wine_exec: i32,
    #[serde(default = "sentinel")]
    pub wine_prefix: i32,
}

fn sentinel() -> i32 {
    -1
}

impl Default for WineSelection {
    fn default() -> Self {
        WineSelection {
            wine_exec: -1,
            wine_prefix: -1,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GameSettings {
    #[serde(default)]
    pub jp: ExecutableSlot,
    #[serde(default)]
    pub en: ExecutableSlot,
    #[serde(default)]
    pub custom: ExecutableSlot,
    #[serde(default)]
    pub thcrap_profile: String,
    #[serde(default)]
    pub thcrap_game_profile: String,
    #[serde(default)]
    pub thcrap_custom_exe_profile: String,
    #[serde(default)]
    pub thcrap_with_app_locale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<GameLaunchProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_custom_exe_profile: Option<CustomExeLaunchProfile>,
    #[serde(default)]
    pub wine: WineSelection,
    /// PC-98 disk image, only meaningful for `GameId::is_pc98` titles.
    #[serde(default)]
    pub hdi_path: String,
    #[serde(default)]
    pub command_before: String,
    #[serde(default)]
    pub command_after: String,
    // Presentation-only fields, persisted for the UI
    #[serde(default)]
    pub show_banner: bool,
    #[serde(default)]
    pub use_custom_banner: bool,
    #[serde(default)]
    pub banner: String,
    #[serde(default)]
    pub use_text_color: bool,
    #[serde(default)]
    pub text_color: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            jp: ExecutableSlot::default(),
            en: ExecutableSlot::default(),
            custom: ExecutableSlot::default(),
            thcrap_profile: String::new(),
            thcrap_game_profile: String::new(),
            thcrap_custom_exe_profile: String::new(),
            thcrap_with_app_locale: false,
            default_profile: None,
            default_custom_exe_profile: None,
            wine: WineSelection::default(),
            hdi_path: String::new(),
            command_before: String::new(),
            command_after: String::new(),
            show_banner: true,
            use_custom_banner: false,
            banner: String::new(),
            use_text_color: false,
            text_color: String::new(),
        }
    }
}

impl GameSettings {
    /// Every game has exactly one slot per kind.
    pub fn slot(&self, kind: ExecutableKind) -> &ExecutableSlot {
        match kind {
            ExecutableKind::Jp => &self.jp,
            ExecutableKind::En => &self.en,
            ExecutableKind::Custom => &self.custom,
        }
    }

    pub fn slot_mut(&mut self, kind: ExecutableKind) -> &mut ExecutableSlot {
        match kind {
            ExecutableKind::Jp => &mut self.jp,
            ExecutableKind::En => &mut self.en,
            ExecutableKind::Custom => &mut self.custom,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct NamedPath {
    pub id: i32,
    pub name: String,
    pub path: String,
}

/// One collection of named paths with an independently tracked default.
/// Ids are unique within the collection and never reused while the
/// launcher runs: a new entry always gets max existing id + 1.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NamedPathList {
    #[serde(default = "sentinel")]
    pub default: i32,
    #[serde(default)]
    pub values: Vec<NamedPath>,
}

impl Default for NamedPathList {
    fn default() -> Self {
        NamedPathList {
            default: -1,
            values: Vec::new(),
        }
    }
}

impl NamedPathList {
    pub fn add(&mut self, name: &str, path: &str) -> i32 {
        let id = self.next_id();
        self.values.push(NamedPath {
            id,
            name: name.to_string(),
            path: path.to_string(),
        });
        id
    }

    fn next_id(&self) -> i32 {
        self.values.iter().map(|np| np.id + 1).max().unwrap_or(0)
    }

    pub fn remove(&mut self, id: i32) {
        self.values.retain(|np| np.id != id);
        if self.default == id {
            self.default = -1;
        }
    }

    pub fn get(&self, id: i32) -> Option<&NamedPath> {
        self.values.iter().find(|np| np.id == id)
    }

    /// Resolve an id, falling back to the collection default when the
    /// requested id is the -1 sentinel.
    pub fn resolve(&self, id: i32) -> Option<&NamedPath> {
        let effective = if id < 0 { self.default } else { id };
        if effective < 0 {
            return None;
        }
        self.get(effective)
    }
}

#[derive(Serialize, Deserialize, Clone, Default, Debug)]
pub struct NamedPaths {
    #[serde(default)]
    pub wine_execs: NamedPathList,
    #[serde(default)]
    pub wine_prefixes: NamedPathList,
}

/// The persisted launcher state. Saved after every mutation.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct LauncherConfig {
    #[serde(default)]
    pub named_paths: NamedPaths,
    /// Path to thcrap.exe, empty when thcrap is not set up.
    #[serde(default)]
    pub thcrap_path: String,
    /// Path to the Neko Project II binary for PC-98 titles.
    #[serde(default)]
    pub neko_project_path: String,
    #[serde(default)]
    pub command_before: String,
    #[serde(default)]
    pub command_after: String,
    /// Minimize on launch, close once the game exits.
    #[serde(default)]
    pub auto_close: bool,
    #[serde(default)]
    pub games: HashMap<GameId, GameSettings>,
}

impl LauncherConfig {
    pub fn game(&self, id: GameId) -> GameSettings {
        self.games.get(&id).cloned().unwrap_or_default()
    }

    pub fn game_mut(&mut self, id: GameId) -> &mut GameSettings {
        self.games.entry(id).or_default()
    }
}
