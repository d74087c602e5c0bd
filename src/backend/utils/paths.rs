//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the application data directory.
const APP_DIR: &str = "JewelryCalc";

/// Config file inside the application directory.
const CONFIG_FILE: &str = "config.json";

/// Get the base application directory (`JewelryCalc`).
#[inline]
pub fn get_app_dir() -> Result<PathBuf> {
    let dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| {
                PathBuf::from(home)
                    .join("Library/Application Support")
                    .join(APP_DIR)
            })
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(format!(".{APP_DIR}")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(dir)
}

/// Get the config file path, falling back to the working directory.
pub fn get_config_path() -> PathBuf {
    get_app_dir()
        .unwrap_or_else(|_| PathBuf::from(APP_DIR))
        .join(CONFIG_FILE)
}
