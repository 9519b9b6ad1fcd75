// Launch wiring between the GUI and the launch pipelines

use super::app::LincherApp;
use crate::config::operations::save_cfg;
use crate::games::GameId;
use crate::launch::{
    check_neko_project_path, launchable_games, run_custom_game, run_game, run_pc98_game,
    select_profile, LaunchOutcome, RunCustomParams, RunParams, RunPc98Params,
};
use crate::thcrap::thcrap_found;
use crate::util::msg;
use crate::window::EguiWindow;
use eframe::egui;

fn report(outcome: LaunchOutcome) {
    if let Some(text) = outcome.user_message() {
        msg("Launch Error", text);
    }
}

impl LincherApp {
    /// Global hook first, per-game hook second.
    fn hook_commands(&self, game: GameId) -> (Vec<String>, Vec<String>) {
        let settings = self.config.game(game);
        (
            vec![self.config.command_before.clone(), settings.command_before],
            vec![self.config.command_after.clone(), settings.command_after],
        )
    }

    pub fn launch_game_id(&mut self, game: GameId, ctx: &egui::Context) {
        if let Err(e) = save_cfg(&self.config) {
            println!("[lincher] failed to save settings before launch: {}", e);
        }

        let window = EguiWindow::new(ctx.clone());
        let (commands_before, commands_after) = self.hook_commands(game);

        if game.is_pc98() {
            let params = RunPc98Params {
                game_settings: self.config.game(game),
                named_paths: self.config.named_paths.clone(),
                commands_before,
                commands_after,
                auto_close: self.config.auto_close,
                neko_project_path: self.config.neko_project_path.clone(),
                neko_project_path_valid: check_neko_project_path(&self.config.neko_project_path),
            };
            self.spawn_task(&format!("Launching {}...", game.title()), move || {
                report(run_pc98_game(&params, &window));
            });
            return;
        }

        let params = RunParams {
            game_settings: self.config.game(game),
            named_paths: self.config.named_paths.clone(),
            commands_before,
            commands_after,
            auto_close: self.config.auto_close,
            thcrap_path: self.config.thcrap_path.clone(),
            thcrap_found: thcrap_found(&self.config.thcrap_path),
            is_custom_exe: false,
        };
        self.spawn_task(&format!("Launching {}...", game.title()), move || {
            report(run_game(&params, &window));
        });
    }

    /// Launch the custom executable slot of a game, with its own profile
    /// selection between the custom exe and thcrap.
    pub fn launch_custom_exe_slot(&mut self, game: GameId, ctx: &egui::Context) {
        if let Err(e) = save_cfg(&self.config) {
            println!("[lincher] failed to save settings before launch: {}", e);
        }

        let window = EguiWindow::new(ctx.clone());
        let (commands_before, commands_after) = self.hook_commands(game);
        let params = RunParams {
            game_settings: self.config.game(game),
            named_paths: self.config.named_paths.clone(),
            commands_before,
            commands_after,
            auto_close: self.config.auto_close,
            thcrap_path: self.config.thcrap_path.clone(),
            thcrap_found: thcrap_found(&self.config.thcrap_path),
            is_custom_exe: true,
        };
        self.spawn_task("Launching custom executable...", move || {
            report(run_game(&params, &window));
        });
    }

    /// Launch a one-off executable that is not tied to any game entry.
    pub fn launch_standalone_exe(&mut self, ctx: &egui::Context) {
        if self.custom_exe_path.is_empty() {
            msg("Launch Error", "No executable selected.");
            return;
        }

        let window = EguiWindow::new(ctx.clone());
        let params = RunCustomParams {
            path: self.custom_exe_path.clone(),
            with_app_locale: self.custom_exe_app_locale,
            wine: Default::default(),
            named_paths: self.config.named_paths.clone(),
            commands_before: vec![self.config.command_before.clone()],
            commands_after: vec![self.config.command_after.clone()],
            auto_close: self.config.auto_close,
        };
        self.spawn_task("Launching...", move || {
            report(run_custom_game(&params, &window));
        });
    }

    /// Whether a launch attempt for this game could do anything right now.
    pub fn game_launchable(&self, game: GameId) -> bool {
        let settings = self.config.game(game);
        if game.is_pc98() {
            return !settings.hdi_path.is_empty()
                && check_neko_project_path(&self.config.neko_project_path);
        }
        select_profile(&settings, thcrap_found(&self.config.thcrap_path), false).is_some()
    }

    /// Pick a random launchable game, uniformly.
    pub fn launch_random_game(&mut self, ctx: &egui::Context) {
        let candidates = launchable_games(&self.config);

        if candidates.is_empty() {
            msg("Launch Error", "No game is configured to launch yet.");
            return;
        }

        let game = candidates[fastrand::usize(..candidates.len())];
        println!("[lincher] random pick: {}", game.title());
        self.launch_game_id(game, ctx);
    }
}
