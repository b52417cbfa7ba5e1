pub mod config;

pub use config::ConfigStorage;

use std::path::PathBuf;

use crate::Error;

pub fn get_config_dir() -> crate::Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("rapidticket"))
        .ok_or_else(|| Error::Config("Could not find config directory".to_string()))
}

pub fn init_config_dir() -> crate::Result<PathBuf> {
    let config_dir = get_config_dir()?;
    std::fs::create_dir_all(&config_dir)?;
    Ok(config_dir)
}
