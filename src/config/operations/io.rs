use crate::config::types::LauncherConfig;
use crate::paths::{PATH_LINCHER, PATH_SETTINGS};

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

pub fn load_cfg() -> LauncherConfig {
    if let Ok(file) = File::open(&*PATH_SETTINGS) {
        if let Ok(config) = serde_json::from_reader::<_, LauncherConfig>(BufReader::new(file)) {
            return config;
        }
        println!("[lincher] settings file unreadable, starting from defaults");
    }

    LauncherConfig::default()
}

pub fn save_cfg(config: &LauncherConfig) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&*PATH_LINCHER)?;
    let file = File::create(&*PATH_SETTINGS)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
