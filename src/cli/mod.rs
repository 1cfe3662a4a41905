pub mod check;
pub mod file;
pub mod init;
pub mod schema;

use crate::models::CheckConfig;
use crate::Result;
use std::env;
use std::path::Path;

/// Load the config from an explicit path, or from the working directory
pub fn load_config(config_path: Option<&Path>) -> Result<CheckConfig> {
    match config_path {
        Some(path) => CheckConfig::load_from(path),
        None => CheckConfig::load(&env::current_dir()?),
    }
}
