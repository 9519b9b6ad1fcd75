//! Pure decision logic (no I/O)

pub mod profile;
pub mod wine_params;

pub use profile::{is_configured, select_profile, LaunchProfile};
pub use wine_params::{resolve_wine_params, WineParams};
