// Before/after hook runner

use crate::shell::{run_captured, run_spawned, spawn_detached};
use crate::window::WindowControl;
use std::collections::HashMap;
use std::path::Path;

/// Run a game with its surrounding hook commands.
///
/// Before-hooks always run first, in order. What happens next depends on
/// whether any after-hooks exist:
/// - with after-hooks the game must be waited on, so auto-close can only
///   minimize the window up front and close it once the hooks finish;
/// - without after-hooks and with auto-close on, the game is spawned
///   detached and the window closes immediately;
/// - otherwise the game is spawned and waited on.
///
/// Empty hook strings are skipped.
pub fn run_with_hooks(
    command: &str,
    cwd: &Path,
    args: &[String],
    env: &HashMap<String, String>,
    commands_before: &[String],
    commands_after: &[String],
    auto_close: bool,
    window: &dyn WindowControl,
) {
    let before: Vec<&String> = commands_before.iter().filter(|c| !c.is_empty()).collect();
    let after: Vec<&String> = commands_after.iter().filter(|c| !c.is_empty()).collect();

    for hook in before {
        run_captured(hook);
    }

    if !after.is_empty() {
        if auto_close {
            window.minimize();
        }
        log_exit(&run_spawned(command, cwd, args, env));
        for hook in after {
            run_captured(hook);
        }
        if auto_close {
            window.close();
        }
    } else if auto_close {
        spawn_detached(command, cwd, args, env);
        window.close();
    } else {
        log_exit(&run_spawned(command, cwd, args, env));
    }
}

fn log_exit(output: &crate::shell::SpawnedOutput) {
    println!("[lincher] game exited with code {:?}", output.exit_code);
    if !output.stderr.is_empty() {
        println!("[lincher] game stderr: {}", output.stderr.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::NoWindow;
    use std::fs;

    fn append_cmd(log: &Path, tag: &str) -> String {
        format!("echo {} >> {}", tag, log.display())
    }

    // ── ordering ────────────────────────────────────────────────

    #[test]
    fn hooks_run_in_order_around_the_game() {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("order.log");

        run_with_hooks(
            "sh",
            tmp.path(),
            &[
                "-c".to_string(),
                append_cmd(&log, "game"),
            ],
            &HashMap::new(),
            &[append_cmd(&log, "before1"), append_cmd(&log, "before2")],
            &[append_cmd(&log, "after")],
            false,
            &NoWindow,
        );

        let contents = fs::read_to_string(&log).unwrap();
        assert_eq!(contents, "before1\nbefore2\ngame\nafter\n");
    }

    #[test]
    fn empty_hook_strings_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("order.log");

        run_with_hooks(
            "sh",
            tmp.path(),
            &["-c".to_string(), append_cmd(&log, "game")],
            &HashMap::new(),
            &[String::new()],
            &[String::new()],
            false,
            &NoWindow,
        );

        let contents = fs::read_to_string(&log).unwrap();
        assert_eq!(contents, "game\n");
    }

    #[test]
    fn after_hooks_run_even_when_the_game_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("order.log");

        run_with_hooks(
            "false",
            tmp.path(),
            &[],
            &HashMap::new(),
            &[],
            &[append_cmd(&log, "after")],
            false,
            &NoWindow,
        );

        assert_eq!(fs::read_to_string(&log).unwrap(), "after\n");
    }
}
