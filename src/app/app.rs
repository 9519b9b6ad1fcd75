// Core app structure and main update loop

use crate::config::{load_cfg, LauncherConfig};
use crate::games::{GameCategory, GameId};
use crate::thcrap::{
    load_local_repositories, read_thcrap_config, thcrap_found, ThcrapConfig, ThcrapRepository,
};

use eframe::egui;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MenuPage {
    Games,
    Settings,
}

pub struct LincherApp {
    pub config: LauncherConfig,
    pub cur_page: MenuPage,
    pub cur_category: GameCategory,
    pub selected_game: Option<GameId>,
    pub infotext: String,

    /// Profiles read from the configured thcrap install, None when thcrap
    /// is not set up.
    pub thcrap_config: Option<ThcrapConfig>,
    /// Repositories found under the thcrap install's repos/ directory.
    pub local_repos: Vec<ThcrapRepository>,
    pub repo_url: String,
    pub fetched_repo: Option<ThcrapRepository>,

    // Standalone custom exe launch state
    pub custom_exe_path: String,
    pub custom_exe_app_locale: bool,

    pub loading_msg: Option<String>,
    pub task: Option<std::thread::JoinHandle<()>>,
}

impl LincherApp {
    pub fn new() -> Self {
        let config = load_cfg();

        let (thcrap_config, local_repos) = if thcrap_found(&config.thcrap_path) {
            (
                read_thcrap_config(&config.thcrap_path),
                load_local_repositories(&config.thcrap_path),
            )
        } else {
            (None, Vec::new())
        };

        Self {
            config,
            cur_page: MenuPage::Games,
            cur_category: GameCategory::MainSeries,
            selected_game: None,
            infotext: String::new(),
            thcrap_config,
            local_repos,
            repo_url: String::new(),
            fetched_repo: None,
            custom_exe_path: String::new(),
            custom_exe_app_locale: false,
            loading_msg: None,
            task: None,
        }
    }

    pub fn spawn_task<F>(&mut self, msg: &str, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.loading_msg = Some(msg.to_string());
        self.task = Some(std::thread::spawn(f));
    }

    pub fn refresh_thcrap_config(&mut self) {
        if thcrap_found(&self.config.thcrap_path) {
            self.thcrap_config = read_thcrap_config(&self.config.thcrap_path);
            self.local_repos = load_local_repositories(&self.config.thcrap_path);
        } else {
            self.thcrap_config = None;
            self.local_repos.clear();
        }
    }
}

impl eframe::App for LincherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_nav_panel").show(ctx, |ui| {
            if self.task.is_some() {
                ui.disable();
            }
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.cur_page, MenuPage::Games, "Games");
                ui.selectable_value(&mut self.cur_page, MenuPage::Settings, "Settings");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(format!("{} Random", egui_phosphor::regular::SHUFFLE))
                        .on_hover_text("Launch a random configured game")
                        .clicked()
                    {
                        self.launch_random_game(ctx);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("info_panel").show(ctx, |ui| {
            ui.label(&self.infotext);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.task.is_some() {
                ui.disable();
            }
            match self.cur_page {
                MenuPage::Games => self.display_page_games(ui, ctx),
                MenuPage::Settings => self.display_page_settings(ui),
            }
        });

        if let Some(handle) = self.task.take() {
            if handle.is_finished() {
                let _ = handle.join();
                self.loading_msg = None;
            } else {
                self.task = Some(handle);
            }
        }
        if let Some(msg) = &self.loading_msg {
            egui::Area::new("loading".into())
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .interactable(false)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add(egui::widgets::Spinner::new().size(40.0));
                        ui.add_space(8.0);
                        ui.label(msg);
                    });
                });
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
