//! Launch module - game launching and orchestration
//!
//! Three entry points, one per game category: regular Windows games under
//! wine, standalone custom executables, and PC-98 titles through the Neko
//! Project emulator. All of them funnel into one before/after hook runner.
//!
//! ## Module Structure
//! - `types.rs`: Parameter bundles and the launch outcome type
//! - `pure/`: Pure decision logic (profile selection, wine parameters)
//! - `operations/`: Atomic side effects (hook runner, emulator config patching)
//! - `pipelines/`: High-level orchestration (the three launch entry points)

pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

pub use operations::{patch_disk_image_path, run_with_hooks, ConfigEncoding, PatchStatus};
pub use pipelines::{
    check_neko_project_path, launchable_games, run_custom_game, run_game, run_pc98_game,
};
pub use pure::{is_configured, resolve_wine_params, select_profile, LaunchProfile, WineParams};
pub use types::{LaunchOutcome, RunCustomParams, RunParams, RunPc98Params};
