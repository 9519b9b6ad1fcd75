use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from(env::var("HOME").unwrap()));

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

/// Settings directory, created on startup if missing.
pub static PATH_LINCHER: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".touhou-lincher"));

pub static PATH_SETTINGS: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_LINCHER.join("settings.json"));

pub static PATH_STEAM: LazyLock<PathBuf> = LazyLock::new(|| {
    // steamlocate knows about non-default install locations
    if let Ok(steam_dir) = steamlocate::SteamDir::locate() {
        return steam_dir.path().to_path_buf();
    }

    if PATH_LOCAL_SHARE.join("Steam").exists() {
        PATH_LOCAL_SHARE.join("Steam")
    } else if PATH_HOME.join(".steam/steam").exists() {
        // Follow the symlink at ~/.steam/steam
        PATH_HOME.join(".steam/steam")
    } else if PATH_HOME
        .join(".var/app/com.valvesoftware.Steam/.local/share/Steam")
        .exists()
    {
        // Flatpak Steam
        PATH_HOME.join(".var/app/com.valvesoftware.Steam/.local/share/Steam")
    } else {
        PATH_LOCAL_SHARE.join("Steam")
    }
});

/// Where Steam ships Proton builds, scanned by wine discovery.
pub static PATH_STEAM_COMMON: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_STEAM.join("steamapps/common"));

/// Fallback prefix when a launch has no prefix configured at all.
pub static PATH_DEFAULT_WINE_PREFIX: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_HOME.join(".wine"));
