pub const USER_AGENT: &str = "user_agent";
pub const UPDATE_INTERVAL_MS: &str = "update_interval_ms";
pub const PRIMARY_HOST: &str = "primary_host";
pub const PRIMARY_PATH: &str = "primary_path";
pub const PRIMARY_API_KEY: &str = "primary_api_key";
pub const SECONDARY_HOST: &str = "secondary_host";
pub const SECONDARY_PATH: &str = "secondary_path";
pub const SECONDARY_API_KEY: &str = "secondary_api_key";
pub const NETWORK_SSID: &str = "network_ssid";
pub const NETWORK_PASSWORD: &str = "network_password";
pub const LIGHT_PIN: &str = "light_pin";
pub const HUMIDITY_PIN: &str = "humidity_pin";

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

// Masked by `config-show` unless revealed
pub const SECRETS: [&str; 3] = [PRIMARY_API_KEY, SECONDARY_API_KEY, NETWORK_PASSWORD];
