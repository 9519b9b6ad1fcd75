//! Wine/Proton integration
//!
//! Everything the launcher knows about the compatibility layer lives here:
//! - `discovery`: probing the host for wine binaries and Steam Proton builds
//! - `drive`: dosdevices drive-letter mappings inside a wine prefix
//! - `pure`: the regex grammars for command output (version strings,
//!   drive listings), kept out of control flow on purpose
//!
//! ## Module Structure
//! - `pure/`: Pure parsing functions (no I/O)
//! - `discovery.rs`: Runtime and home directory probing
//! - `drive.rs`: Drive mapping creation and guest path resolution

pub mod discovery;
pub mod drive;
pub mod pure;

pub use discovery::{find_runtime_executables, home_directory, wine_version};
pub use drive::{ensure_drive_for, resolve_host_path};
