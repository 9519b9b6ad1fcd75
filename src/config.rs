pub mod operations;
pub mod types;

// Re-export types
pub use types::{
    CustomExeLaunchProfile, ExecutableKind, ExecutableSlot, GameLaunchProfile, GameSettings,
    LauncherConfig, NamedPath, NamedPathList, NamedPaths, WineSelection,
};

// Re-export operations
pub use operations::{load_cfg, save_cfg};
