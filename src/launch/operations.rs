//! Atomic launch side effects

pub mod hooks;
pub mod neko_config;

pub use hooks::run_with_hooks;
pub use neko_config::{patch_disk_image_path, ConfigEncoding, PatchStatus};
