// Standalone custom executable launch pipeline

use crate::launch::operations::run_with_hooks;
use crate::launch::pipelines::run_game::{dir_of, file_of};
use crate::launch::pure::resolve_wine_params;
use crate::launch::types::{LaunchOutcome, RunCustomParams};
use crate::window::WindowControl;

/// Launch a standalone executable through wine. Unlike [`run_game`] there
/// is no profile selection: the path itself is the profile.
///
/// [`run_game`]: crate::launch::run_game
pub fn run_custom_game(params: &RunCustomParams, window: &dyn WindowControl) -> LaunchOutcome {
    let wine = resolve_wine_params(&params.wine, &params.named_paths);

    let mut env = wine.env.clone();
    if params.with_app_locale {
        env.insert("LANG".to_string(), "ja_JP.UTF-8".to_string());
    }

    run_with_hooks(
        &wine.command,
        &dir_of(&params.path),
        &[file_of(&params.path)],
        &env,
        &params.commands_before,
        &params.commands_after,
        params.auto_close,
        window,
    );

    LaunchOutcome::Ok
}
