use std::env;
use std::path::{Path, PathBuf};

use crate::constants::envvars;

// Runs before the logger is set up (LOG_LEVEL may come from a .env file),
// so the caller is handed the loaded paths to report.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = vec![];
    if let Ok(local_dotenv) = dotenv::dotenv() {
        loaded.push(local_dotenv);
    }
    // Also load $PESTIBORSO_CONFIG_DIR/.env if exists
    if let Ok(config_dir) = env::var(envvars::CONFIG_DIR) {
        let config_dir_dotenv = Path::new(&config_dir).join(".env");
        if dotenv::from_path(&config_dir_dotenv).is_ok() {
            loaded.push(config_dir_dotenv);
        }
    }
    loaded
}
