mod config;

pub use config::{config_check, config_get, config_show};
