// Games page display functions

use super::app::LincherApp;
use crate::config::types::{
    CustomExeLaunchProfile, ExecutableKind, GameLaunchProfile, NamedPathList,
};
use crate::games::{games_in_category, GameCategory, GameId};
use crate::util::{exe_dialog, hdi_dialog};
use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

const CATEGORIES: [GameCategory; 3] = [
    GameCategory::MainSeries,
    GameCategory::Fighting,
    GameCategory::Other,
];

fn named_path_combo(ui: &mut Ui, id_salt: &str, label: &str, list: &NamedPathList, sel: &mut i32) {
    let selected_text = match list.get(*sel) {
        Some(np) => np.name.clone(),
        None => "(default)".to_string(),
    };
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id_salt)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(sel, -1, "(default)");
                for np in &list.values {
                    ui.selectable_value(sel, np.id, &np.name);
                }
            });
    });
}

impl LincherApp {
    pub fn display_page_games(&mut self, ui: &mut Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            for category in CATEGORIES {
                if ui
                    .selectable_label(self.cur_category == category, category.title())
                    .clicked()
                {
                    self.cur_category = category;
                    self.selected_game = None;
                }
            }
        });
        ui.separator();

        egui::SidePanel::left("game_list_panel")
            .resizable(false)
            .default_width(180.0)
            .show_inside(ui, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for game in games_in_category(self.cur_category) {
                        let configured = self.game_launchable(game);
                        let label = if configured {
                            RichText::new(game.short_title())
                        } else {
                            RichText::new(game.short_title()).weak()
                        };
                        if ui
                            .selectable_label(self.selected_game == Some(game), label)
                            .clicked()
                        {
                            self.selected_game = Some(game);
                        }
                    }
                });
            });

        let Some(game) = self.selected_game else {
            self.display_standalone_exe(ui, ctx);
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(4.0);
            ui.heading(game.title());
            self.display_banner(ui, game);
            ui.add_space(8.0);

            if game.is_pc98() {
                self.display_pc98_editor(ui, game);
            } else {
                self.display_windows_editor(ui, game);
            }

            ui.add_space(8.0);
            ui.separator();
            self.display_hooks_editor(ui, game);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new(format!("{} Launch", icons::PLAY)).strong())
                    .clicked()
                {
                    self.launch_game_id(game, ctx);
                }
                if !game.is_pc98()
                    && !self.config.game(game).custom.path.is_empty()
                    && ui.button("Launch custom exe").clicked()
                {
                    self.launch_custom_exe_slot(game, ctx);
                }
            });
        });
    }

    /// Shown while no game is selected: launch any exe through wine
    /// without tying it to a game entry.
    fn display_standalone_exe(&mut self, ui: &mut Ui, ctx: &egui::Context) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label("Select a game on the left to configure and launch it.");
            ui.add_space(24.0);
            ui.label(RichText::new("Or run any executable").strong());
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.custom_exe_path).desired_width(320.0),
                );
                if ui.button(format!("{} Browse", icons::FOLDER_OPEN)).clicked() {
                    if let Ok(path) = exe_dialog("Select an executable") {
                        self.custom_exe_path = path.to_string_lossy().to_string();
                    }
                }
            });
            ui.checkbox(&mut self.custom_exe_app_locale, "Japanese locale");
            if ui
                .button(RichText::new(format!("{} Launch", icons::PLAY)).strong())
                .clicked()
            {
                self.launch_standalone_exe(ctx);
            }
        });
    }

    fn display_banner(&mut self, ui: &mut Ui, game: GameId) {
        let settings = self.config.game_mut(game);
        if !settings.show_banner {
            return;
        }
        if settings.use_custom_banner && !settings.banner.is_empty() {
            ui.add(
                egui::Image::new(format!("file://{}", settings.banner))
                    .max_height(120.0)
                    .maintain_aspect_ratio(true),
            );
        }
        ui.horizontal(|ui| {
            ui.checkbox(&mut settings.use_custom_banner, "Custom banner");
            if settings.use_custom_banner {
                ui.add(egui::TextEdit::singleline(&mut settings.banner).desired_width(240.0));
                if ui.button(format!("{} Browse", icons::FOLDER_OPEN)).clicked() {
                    if let Ok(path) = crate::util::file_dialog("Select banner image") {
                        settings.banner = path.to_string_lossy().to_string();
                    }
                }
            }
        });
    }

    fn display_windows_editor(&mut self, ui: &mut Ui, game: GameId) {
        self.display_slot_row(ui, game, ExecutableKind::Jp, "Japanese exe");
        self.display_slot_row(ui, game, ExecutableKind::En, "English patched exe");
        self.display_slot_row(ui, game, ExecutableKind::Custom, "Custom exe");

        ui.add_space(8.0);
        self.display_thcrap_editor(ui, game);

        ui.add_space(8.0);
        let settings = self.config.game_mut(game);
        ui.horizontal(|ui| {
            ui.label("Default profile");
            egui::ComboBox::from_id_salt("default_profile")
                .selected_text(match settings.default_profile {
                    None => "(first configured)",
                    Some(GameLaunchProfile::Jp) => "Japanese",
                    Some(GameLaunchProfile::En) => "English",
                    Some(GameLaunchProfile::Thcrap) => "thcrap",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut settings.default_profile, None, "(first configured)");
                    ui.selectable_value(
                        &mut settings.default_profile,
                        Some(GameLaunchProfile::Jp),
                        "Japanese",
                    );
                    ui.selectable_value(
                        &mut settings.default_profile,
                        Some(GameLaunchProfile::En),
                        "English",
                    );
                    ui.selectable_value(
                        &mut settings.default_profile,
                        Some(GameLaunchProfile::Thcrap),
                        "thcrap",
                    );
                });
        });
        ui.horizontal(|ui| {
            ui.label("Default custom exe profile");
            egui::ComboBox::from_id_salt("default_custom_profile")
                .selected_text(match settings.default_custom_exe_profile {
                    None => "(first configured)",
                    Some(CustomExeLaunchProfile::Custom) => "Custom exe",
                    Some(CustomExeLaunchProfile::Thcrap) => "thcrap",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut settings.default_custom_exe_profile,
                        None,
                        "(first configured)",
                    );
                    ui.selectable_value(
                        &mut settings.default_custom_exe_profile,
                        Some(CustomExeLaunchProfile::Custom),
                        "Custom exe",
                    );
                    ui.selectable_value(
                        &mut settings.default_custom_exe_profile,
                        Some(CustomExeLaunchProfile::Thcrap),
                        "thcrap",
                    );
                });
        });

        ui.add_space(8.0);
        self.display_wine_editor(ui, game);
    }

    fn display_slot_row(&mut self, ui: &mut Ui, game: GameId, kind: ExecutableKind, label: &str) {
        let slot = self.config.game_mut(game).slot_mut(kind);
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::TextEdit::singleline(&mut slot.path).desired_width(320.0));
            if ui.button("Browse").clicked() {
                if let Ok(path) = exe_dialog(&format!("Select {}", label)) {
                    slot.path = path.to_string_lossy().to_string();
                }
            }
            ui.checkbox(&mut slot.with_app_locale, "Japanese locale");
        });
    }

    fn display_thcrap_editor(&mut self, ui: &mut Ui, game: GameId) {
        let profiles: Vec<String> = self
            .thcrap_config
            .as_ref()
            .map(|c| c.profiles.clone())
            .unwrap_or_default();
        let settings = self.config.game_mut(game);

        ui.label(RichText::new("thcrap").strong());
        if profiles.is_empty() {
            ui.label("thcrap is not set up; configure its path on the Settings page.");
        }
        ui.horizontal(|ui| {
            ui.label("Patch profile");
            egui::ComboBox::from_id_salt("thcrap_profile")
                .selected_text(if settings.thcrap_profile.is_empty() {
                    "(none)".to_string()
                } else {
                    settings.thcrap_profile.clone()
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut settings.thcrap_profile, String::new(), "(none)");
                    for profile in &profiles {
                        ui.selectable_value(
                            &mut settings.thcrap_profile,
                            profile.clone(),
                            profile,
                        );
                    }
                });
        });
        ui.horizontal(|ui| {
            ui.label("Game profile");
            let edit =
                ui.add(egui::TextEdit::singleline(&mut settings.thcrap_game_profile)
                    .hint_text(game.thcrap_name()));
            if edit.hovered() {
                self.infotext = format!(
                    "The thcrap game name, usually \"{}\" for this game.",
                    game.thcrap_name()
                );
            }
        });
        ui.horizontal(|ui| {
            ui.label("Custom exe profile");
            ui.add(
                egui::TextEdit::singleline(&mut settings.thcrap_custom_exe_profile)
                    .hint_text(format!("{}_custom", game.thcrap_name())),
            );
        });
        ui.checkbox(
            &mut settings.thcrap_with_app_locale,
            "Japanese locale for thcrap launches",
        );
    }

    fn display_wine_editor(&mut self, ui: &mut Ui, game: GameId) {
        let named_paths = self.config.named_paths.clone();
        let settings = self.config.game_mut(game);
        named_path_combo(
            ui,
            "wine_exec",
            "Wine executable",
            &named_paths.wine_execs,
            &mut settings.wine.wine_exec,
        );
        named_path_combo(
            ui,
            "wine_prefix",
            "Wine prefix",
            &named_paths.wine_prefixes,
            &mut settings.wine.wine_prefix,
        );
    }

    fn display_pc98_editor(&mut self, ui: &mut Ui, game: GameId) {
        let settings = self.config.game_mut(game);
        ui.horizontal(|ui| {
            ui.label("HDI image");
            ui.add(egui::TextEdit::singleline(&mut settings.hdi_path).desired_width(320.0));
            if ui.button("Browse").clicked() {
                if let Ok(path) = hdi_dialog() {
                    settings.hdi_path = path.to_string_lossy().to_string();
                }
            }
        });
        ui.label("Runs through Neko Project; set the emulator path on the Settings page.");

        ui.add_space(8.0);
        self.display_wine_editor(ui, game);
    }

    fn display_hooks_editor(&mut self, ui: &mut Ui, game: GameId) {
        let settings = self.config.game_mut(game);
        ui.label(RichText::new("Hook commands").strong());
        ui.horizontal(|ui| {
            ui.label("Before launch");
            ui.add(egui::TextEdit::singleline(&mut settings.command_before).desired_width(320.0));
        });
        ui.horizontal(|ui| {
            ui.label("After exit");
            ui.add(egui::TextEdit::singleline(&mut settings.command_after).desired_width(320.0));
        });
    }
}
