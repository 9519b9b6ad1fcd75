//! Pure parsing functions (no I/O)

pub mod listing;
pub mod version;

pub use listing::{
    assignable_letters, normalize_host_dir, parse_drive_entries, parse_raw_device_letters,
    split_guest_path, DriveEntry,
};
pub use version::parse_wine_version;
