//! Shell executor
//!
//! Every external command the launcher runs goes through here. Both entry
//! points convert failures into values instead of raising: callers only
//! ever branch on empty stdout or the exit code.

use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

pub struct SpawnedOutput {
    pub stdout: String,
    pub stderr: String,
    /// None when the process was killed by a signal.
    pub exit_code: Option<i32>,
}

/// Run a shell command line and capture its output.
///
/// Never fails: if the command cannot be spawned, stdout is empty and
/// stderr carries the failure description.
pub fn run_captured(command: &str) -> CapturedOutput {
    println!("[lincher] executing: {}", command);

    match Command::new("sh").arg("-c").arg(command).output() {
        Ok(output) => CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        },
        Err(e) => {
            println!("[lincher] exec error: {}", e);
            CapturedOutput {
                stdout: String::new(),
                stderr: e.to_string(),
            }
        }
    }
}

/// Spawn a process with explicit cwd, args and extra environment, and wait
/// for it to exit.
///
/// The supplied environment is merged on top of the inherited process
/// environment. Output is accumulated and returned along with the exit
/// code. Spawn failures become an empty-stdout result, never an error.
pub fn run_spawned(
    command: &str,
    cwd: &Path,
    args: &[String],
    env: &HashMap<String, String>,
) -> SpawnedOutput {
    println!(
        "[lincher] spawning: {} args: [{}] cwd: {} env: {:?}",
        command,
        args.join(" "),
        cwd.display(),
        env
    );

    let mut cmd = Command::new(command);
    cmd.args(args).current_dir(cwd);
    for (key, value) in env {
        cmd.env(key, value);
    }

    match cmd.output() {
        Ok(output) => SpawnedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
        },
        Err(e) => {
            println!("[lincher] spawn error: {}", e);
            SpawnedOutput {
                stdout: String::new(),
                stderr: e.to_string(),
                exit_code: None,
            }
        }
    }
}

/// Spawn a process without waiting for it. Used by the auto-close path
/// where the launcher window goes away immediately.
pub fn spawn_detached(command: &str, cwd: &Path, args: &[String], env: &HashMap<String, String>) {
    println!(
        "[lincher] spawning detached: {} args: [{}] cwd: {}",
        command,
        args.join(" "),
        cwd.display()
    );

    let mut cmd = Command::new(command);
    cmd.args(args).current_dir(cwd);
    for (key, value) in env {
        cmd.env(key, value);
    }

    if let Err(e) = cmd.spawn() {
        println!("[lincher] spawn error: {}", e);
    }
}
