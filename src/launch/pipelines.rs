//! Launch orchestration
//!
//! One pipeline per game category. Each resolves wine parameters, picks
//! what to run, and hands off to the hook runner.

pub mod run_custom;
pub mod run_game;
pub mod run_pc98;

pub use run_custom::run_custom_game;
pub use run_game::run_game;
pub use run_pc98::{check_neko_project_path, run_pc98_game};

use crate::config::LauncherConfig;
use crate::games::{GameId, ALL_GAMES};
use crate::launch::pure::select_profile;
use crate::thcrap::thcrap_found;

/// Games that a launch attempt could actually start right now.
pub fn launchable_games(config: &LauncherConfig) -> Vec<GameId> {
    let thcrap = thcrap_found(&config.thcrap_path);
    let neko_valid = check_neko_project_path(&config.neko_project_path);

    ALL_GAMES
        .iter()
        .copied()
        .filter(|game| {
            let settings = config.game(*game);
            if game.is_pc98() {
                !settings.hdi_path.is_empty() && neko_valid
            } else {
                select_profile(&settings, thcrap, false).is_some()
            }
        })
        .collect()
}
