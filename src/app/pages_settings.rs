// Settings page display functions

use super::app::LincherApp;
use crate::config::save_cfg;
use crate::config::types::NamedPathList;
use crate::launch::check_neko_project_path;
use crate::games::ALL_GAMES;
use crate::paths::PATH_DEFAULT_WINE_PREFIX;
use crate::util::{exe_dialog, file_dialog, msg, yesno};
use crate::wine::discovery::find_runtime_executables;
use crate::wine::drive::resolve_host_path;
use eframe::egui::{self, RichText, Ui};

fn display_named_path_list(ui: &mut Ui, id_salt: &str, list: &mut NamedPathList) {
    let mut remove: Option<i32> = None;
    let mut default = list.default;
    for np in &mut list.values {
        ui.horizontal(|ui| {
            let mut is_default = default == np.id;
            if ui
                .checkbox(&mut is_default, "")
                .on_hover_text("Use as default")
                .clicked()
            {
                default = if is_default { np.id } else { -1 };
            }
            ui.add(egui::TextEdit::singleline(&mut np.name).desired_width(140.0));
            ui.add(egui::TextEdit::singleline(&mut np.path).desired_width(320.0));
            if ui.button("Remove").clicked() {
                remove = Some(np.id);
            }
        });
    }
    list.default = default;
    if let Some(id) = remove {
        list.remove(id);
    }
    if ui.button(format!("Add {}", id_salt)).clicked() {
        list.add("New entry", "");
    }
}

impl LincherApp {
    pub fn display_page_settings(&mut self, ui: &mut Ui) {
        ui.add_space(8.0);
        ui.heading("Settings");
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .auto_shrink(false)
            .max_height(ui.available_height() - 40.0)
            .show(ui, |ui| {
                self.display_settings_tools(ui);

                ui.add_space(16.0);
                ui.separator();
                ui.label(RichText::new("Wine executables").strong().size(16.0));
                ui.label("Checked entry is used when a game has no explicit selection.");
                display_named_path_list(ui, "wine executable", &mut self.config.named_paths.wine_execs);
                if ui.button("Scan for wine and Proton").clicked() {
                    self.scan_wine_runtimes();
                }

                ui.add_space(16.0);
                ui.separator();
                ui.label(RichText::new("Wine prefixes").strong().size(16.0));
                display_named_path_list(ui, "wine prefix", &mut self.config.named_paths.wine_prefixes);

                ui.add_space(16.0);
                ui.separator();
                self.display_settings_repos(ui);

                ui.add_space(16.0);
                ui.separator();
                self.display_settings_hooks(ui);
            });

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.horizontal(|ui| {
                if ui.button("Save Settings").clicked() {
                    if let Err(e) = save_cfg(&self.config) {
                        msg("Error", &format!("Couldn't save settings: {}", e));
                    }
                }
                if ui.button("Reload from disk").clicked()
                    && yesno(
                        "Reload settings?",
                        "This discards any unsaved changes. Continue?",
                    )
                {
                    self.config = crate::config::load_cfg();
                    self.refresh_thcrap_config();
                }
            });
            ui.separator();
        });
    }

    fn display_settings_tools(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Tools").strong().size(16.0));

        ui.horizontal(|ui| {
            ui.label("thcrap path");
            let edit = ui
                .add(egui::TextEdit::singleline(&mut self.config.thcrap_path).desired_width(320.0));
            if ui.button("Browse").clicked() {
                if let Ok(path) = exe_dialog("Select thcrap.exe") {
                    self.config.thcrap_path = path.to_string_lossy().to_string();
                }
            }
            if edit.changed() {
                self.refresh_thcrap_config();
            }
            match &self.thcrap_config {
                Some(config) => {
                    ui.label(format!("{} profile(s) found", config.profiles.len()));
                }
                None => {
                    ui.label(RichText::new("not found").weak());
                }
            }
        });

        if self.thcrap_config.is_some()
            && ui
                .button("Import game paths from thcrap")
                .on_hover_text(
                    "Fill empty Japanese exe slots from the games thcrap already knows about",
                )
                .clicked()
        {
            self.import_thcrap_game_paths();
        }

        ui.horizontal(|ui| {
            ui.label("Neko Project path");
            ui.add(
                egui::TextEdit::singleline(&mut self.config.neko_project_path)
                    .desired_width(320.0),
            );
            if ui.button("Browse").clicked() {
                if let Ok(path) = file_dialog("Select the Neko Project binary") {
                    self.config.neko_project_path = path.to_string_lossy().to_string();
                }
            }
            if check_neko_project_path(&self.config.neko_project_path) {
                ui.label("ok");
            } else {
                ui.label(RichText::new("not a Neko Project install").weak());
            }
        });
    }

    fn display_settings_repos(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("thcrap repositories").strong().size(16.0));

        let mut patch_lookup: Option<(Vec<String>, String)> = None;
        let mut show_repo = |ui: &mut Ui, repo: &crate::thcrap::ThcrapRepository| {
            ui.collapsing(format!("{} ({})", repo.title, repo.id), |ui| {
                if !repo.contact.is_empty() {
                    ui.label(format!("Contact: {}", repo.contact));
                }
                let mut patches: Vec<(&String, &String)> = repo.patches.iter().collect();
                patches.sort();
                for (patch_id, description) in patches {
                    if ui
                        .link(format!("{} - {}", patch_id, description))
                        .on_hover_text("Fetch patch details")
                        .clicked()
                    {
                        patch_lookup = Some((repo.servers.clone(), patch_id.clone()));
                    }
                }
            });
        };

        for repo in &self.local_repos {
            show_repo(ui, repo);
        }
        if let Some(repo) = &self.fetched_repo {
            show_repo(ui, repo);
        }
        drop(show_repo);

        if let Some((servers, patch_id)) = patch_lookup {
            self.infotext = match crate::thcrap::fetch_remote_patch(&servers, &patch_id) {
                Some(patch) if patch.dependencies.is_empty() => patch.title,
                Some(patch) => {
                    format!("{} (depends on: {})", patch.title, patch.dependencies.join(", "))
                }
                None => format!("Could not fetch patch {} from any server.", patch_id),
            };
        }

        ui.horizontal(|ui| {
            ui.label("Repository URL");
            ui.add(egui::TextEdit::singleline(&mut self.repo_url).desired_width(320.0));
            if ui.button("Fetch").clicked() {
                match crate::thcrap::fetch_repository(&self.repo_url) {
                    Ok(repo) => {
                        self.infotext =
                            format!("Fetched {} with {} patch(es).", repo.title, repo.patches.len());
                        self.fetched_repo = Some(repo);
                    }
                    Err(e) => {
                        self.infotext = format!("Fetch failed: {}", e);
                    }
                }
            }
        });
    }

    fn display_settings_hooks(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Launch behavior").strong().size(16.0));

        ui.horizontal(|ui| {
            ui.label("Command before any launch");
            ui.add(
                egui::TextEdit::singleline(&mut self.config.command_before).desired_width(320.0),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Command after any game exits");
            ui.add(egui::TextEdit::singleline(&mut self.config.command_after).desired_width(320.0));
        });

        let auto_close = ui.checkbox(
            &mut self.config.auto_close,
            "Minimize on launch, close once the game exits",
        );
        if auto_close.hovered() {
            self.infotext = "With an after-exit command configured the launcher minimizes and waits; without one it closes immediately and leaves the game running.".to_string();
        }
    }

    /// Translate the guest paths in thcrap's games.js into host paths and
    /// fill any empty Japanese exe slots with them.
    fn import_thcrap_game_paths(&mut self) {
        let Some(thcrap) = &self.thcrap_config else {
            return;
        };

        let mut prefixes: Vec<String> = self
            .config
            .named_paths
            .wine_prefixes
            .values
            .iter()
            .map(|np| np.path.clone())
            .collect();
        let default_prefix = PATH_DEFAULT_WINE_PREFIX.to_string_lossy().to_string();
        if !prefixes.contains(&default_prefix) {
            prefixes.push(default_prefix);
        }

        let mut imported = 0;
        for game in ALL_GAMES {
            let Some(guest_path) = thcrap.games.get(game.thcrap_name()) else {
                continue;
            };
            if !self.config.game(game).jp.path.is_empty() {
                continue;
            }
            let host_path = resolve_host_path(guest_path, &prefixes);
            if !host_path.is_empty() {
                self.config.game_mut(game).jp.path = host_path;
                imported += 1;
            }
        }

        self.infotext = format!("Imported {} game path(s) from thcrap.", imported);
    }

    /// Probe for wine/Proton runtimes and add any new paths to the list.
    fn scan_wine_runtimes(&mut self) {
        let execs = &mut self.config.named_paths.wine_execs;
        let mut added = 0;
        for found in find_runtime_executables() {
            if execs.values.iter().any(|np| np.path == found.path) {
                continue;
            }
            execs.add(&found.name, &found.path);
            added += 1;
        }
        self.infotext = format!("Added {} new wine runtime(s).", added);
    }
}
