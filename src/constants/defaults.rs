use std::time::Duration;

pub const USER_AGENT: &str = "pestiborso sensor";
// Time between successive read/upload cycles
pub const UPDATE_INTERVAL_MS: u64 = 10000;
pub const UPDATE_INTERVAL: Duration = Duration::from_millis(UPDATE_INTERVAL_MS);

// Primary feed (cosm)
pub const PRIMARY_HOST: &str = "api.cosm.com";
pub const PRIMARY_PATH: &str = "/v2/feeds/yourfeedid.csv";
pub const PRIMARY_API_KEY: &str = "yourapikey";

// Secondary relay server
pub const SECONDARY_HOST: &str = "yourserverhost";
pub const SECONDARY_PATH: &str = "/feed/";
pub const SECONDARY_API_KEY: &str = "yourotherapikey";

// Wireless network
pub const NETWORK_SSID: &str = "ssid";
pub const NETWORK_PASSWORD: &str = "pass1234";

pub const LIGHT_PIN: u8 = 0;
pub const HUMIDITY_PIN: u8 = 1;

pub const LOG_LEVEL: &str = "info";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_interval_is_positive() {
        assert!(UPDATE_INTERVAL_MS > 0);
        assert_eq!(UPDATE_INTERVAL.as_millis(), 10_000);
    }

    #[test]
    fn sensor_pins_are_distinct() {
        assert_ne!(LIGHT_PIN, HUMIDITY_PIN);
    }
}
