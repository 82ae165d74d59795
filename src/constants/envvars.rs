pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const CONFIG_DIR: &str = "PESTIBORSO_CONFIG_DIR";

pub const USER_AGENT: &str = "PESTIBORSO_USER_AGENT";
pub const UPDATE_INTERVAL_MS: &str = "PESTIBORSO_UPDATE_INTERVAL_MS";

pub const PRIMARY_HOST: &str = "PESTIBORSO_PRIMARY_HOST";
pub const PRIMARY_PATH: &str = "PESTIBORSO_PRIMARY_PATH";
pub const PRIMARY_API_KEY: &str = "PESTIBORSO_PRIMARY_API_KEY";

pub const SECONDARY_HOST: &str = "PESTIBORSO_SECONDARY_HOST";
pub const SECONDARY_PATH: &str = "PESTIBORSO_SECONDARY_PATH";
pub const SECONDARY_API_KEY: &str = "PESTIBORSO_SECONDARY_API_KEY";

pub const NETWORK_SSID: &str = "PESTIBORSO_NETWORK_SSID";
pub const NETWORK_PASSWORD: &str = "PESTIBORSO_NETWORK_PASSWORD";

pub const LIGHT_PIN: &str = "PESTIBORSO_LIGHT_PIN";
pub const HUMIDITY_PIN: &str = "PESTIBORSO_HUMIDITY_PIN";

pub const ALL: [&str; 12] = [
    USER_AGENT,
    UPDATE_INTERVAL_MS,
    PRIMARY_HOST,
    PRIMARY_PATH,
    PRIMARY_API_KEY,
    SECONDARY_HOST,
    SECONDARY_PATH,
    SECONDARY_API_KEY,
    NETWORK_SSID,
    NETWORK_PASSWORD,
    LIGHT_PIN,
    HUMIDITY_PIN,
];
