mod app;
mod config;
mod games;
mod launch;
mod paths;
mod shell;
mod thcrap;
mod util;
mod window;
mod wine;

use crate::app::LincherApp;
use crate::config::load_cfg;
use crate::launch::launchable_games;
use crate::paths::PATH_LINCHER;
use crate::window::NoWindow;

fn main() -> eframe::Result {
    if std::env::args().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    std::fs::create_dir_all(&*PATH_LINCHER).expect("Failed to create settings directory");

    // Headless "feeling lucky" launch, no GUI at all.
    if std::env::args().any(|arg| arg == "--random") {
        let config = load_cfg();
        let candidates = launchable_games(&config);
        if candidates.is_empty() {
            eprintln!("[lincher] no game is configured to launch");
            std::process::exit(1);
        }
        let game = candidates[fastrand::usize(..candidates.len())];
        println!("[lincher] random pick: {}", game.title());

        let outcome = run_headless(&config, game);
        if let Some(text) = outcome.user_message() {
            eprintln!("[lincher] {}", text);
            std::process::exit(1);
        }
        std::process::exit(0);
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    println!("[lincher] Starting eframe app...");

    eframe::run_native(
        "Touhou Lincher",
        options,
        Box::new(|cc| {
            // This gives us image support:
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut fonts = eframe::egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::<LincherApp>::new(LincherApp::new()))
        }),
    )
}

fn run_headless(config: &config::LauncherConfig, game: games::GameId) -> launch::LaunchOutcome {
    let settings = config.game(game);
    let commands_before = vec![config.command_before.clone(), settings.command_before.clone()];
    let commands_after = vec![config.command_after.clone(), settings.command_after.clone()];

    if game.is_pc98() {
        let params = launch::RunPc98Params {
            game_settings: settings,
            named_paths: config.named_paths.clone(),
            commands_before,
            commands_after,
            auto_close: false,
            neko_project_path: config.neko_project_path.clone(),
            neko_project_path_valid: launch::check_neko_project_path(&config.neko_project_path),
        };
        return launch::run_pc98_game(&params, &NoWindow);
    }

    let params = launch::RunParams {
        game_settings: settings,
        named_paths: config.named_paths.clone(),
        commands_before,
        commands_after,
        auto_close: false,
        thcrap_path: config.thcrap_path.clone(),
        thcrap_found: thcrap::thcrap_found(&config.thcrap_path),
        is_custom_exe: false,
    };
    launch::run_game(&params, &NoWindow)
}

static USAGE_TEXT: &str = r#"
Usage: lincher [OPTIONS]

Options:
    --random    Launch a random configured game without opening the GUI
    --help      Show this help text
"#;
