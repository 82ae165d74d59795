use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Serialize, Serializer};
use url::{Position, Url};

use crate::constants::{defaults, envvars, keys};

mod error;

pub use error::ConfigError;

const REDACTED: &str = "********";

/// Remote HTTP resource that readings are sent to
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub host: String,
    pub path: String,
    pub api_key: String,
}

impl Endpoint {
    pub fn url(&self) -> Result<Url, ConfigError> {
        let url = format!("http://{}{}", self.host, self.path);
        Url::parse(&url).map_err(|source| ConfigError::InvalidUrl { url, source })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkCredentials {
    pub ssid: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SensorPins {
    pub light: u8,
    pub humidity: u8,
}

/// Effective configuration of the sensor node.
///
/// `Config::default()` is the compiled-in constant table; `from_env()` layers
/// `PESTIBORSO_*` environment variables on top of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Config {
    pub user_agent: String,
    #[serde(rename = "update_interval_ms", serialize_with = "serialize_millis")]
    pub update_interval: Duration,
    pub primary: Endpoint,
    pub secondary: Endpoint,
    pub network: NetworkCredentials,
    pub pins: SensorPins,
}

fn serialize_millis<S>(interval: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(interval.as_millis() as u64)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_agent: defaults::USER_AGENT.to_string(),
            update_interval: defaults::UPDATE_INTERVAL,
            primary: Endpoint {
                host: defaults::PRIMARY_HOST.to_string(),
                path: defaults::PRIMARY_PATH.to_string(),
                api_key: defaults::PRIMARY_API_KEY.to_string(),
            },
            secondary: Endpoint {
                host: defaults::SECONDARY_HOST.to_string(),
                path: defaults::SECONDARY_PATH.to_string(),
                api_key: defaults::SECONDARY_API_KEY.to_string(),
            },
            network: NetworkCredentials {
                ssid: defaults::NETWORK_SSID.to_string(),
                password: defaults::NETWORK_PASSWORD.to_string(),
            },
            pins: SensorPins {
                light: defaults::LIGHT_PIN,
                humidity: defaults::HUMIDITY_PIN,
            },
        }
    }
}

type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn override_value(lookup: Lookup, var: &'static str, target: &mut String) {
    if let Some(value) = lookup(var) {
        log::debug!("Using {var}={value:?}");
        *target = value;
    }
}

fn override_secret(lookup: Lookup, var: &'static str, target: &mut String) {
    if let Some(value) = lookup(var) {
        log::debug!("Using {var} (secret)");
        *target = value;
    }
}

fn override_number<T>(
    lookup: Lookup,
    var: &'static str,
    target: &mut T,
) -> Result<(), ConfigError>
where
    T: FromStr<Err = std::num::ParseIntError> + std::fmt::Display,
{
    if let Some(value) = lookup(var) {
        *target = value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidNumber { var, value, source })?;
        log::debug!("Using {var}={target}");
    }
    Ok(())
}

fn check_not_empty(key: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue(key));
    }
    Ok(())
}

fn check_endpoint(
    endpoint: &Endpoint,
    host_key: &'static str,
    path_key: &'static str,
) -> Result<(), ConfigError> {
    check_not_empty(host_key, &endpoint.host)?;
    if !endpoint.path.starts_with('/') {
        return Err(ConfigError::InvalidPath {
            key: path_key,
            path: endpoint.path.clone(),
        });
    }
    let url = endpoint.url()?;
    // Userinfo, query or fragment characters in the host move parts of the
    // descriptor elsewhere in the URL
    let authority = &url[Position::BeforeHost..Position::AfterPort];
    if !url.username().is_empty() || !authority.eq_ignore_ascii_case(&endpoint.host) {
        return Err(ConfigError::InvalidHost {
            key: host_key,
            host: endpoint.host.clone(),
        });
    }
    if url.path() != endpoint.path {
        return Err(ConfigError::InvalidPath {
            key: path_key,
            path: endpoint.path.clone(),
        });
    }
    Ok(())
}

fn redact(secret: &mut String) {
    if !secret.is_empty() {
        *secret = REDACTED.to_string();
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from the defaults, replacing every value whose
    /// override variable `lookup` resolves.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup: Lookup = &lookup;
        let mut config = Config::default();

        override_value(lookup, envvars::USER_AGENT, &mut config.user_agent);
        let mut interval_ms = defaults::UPDATE_INTERVAL_MS;
        override_number(lookup, envvars::UPDATE_INTERVAL_MS, &mut interval_ms)?;
        config.update_interval = Duration::from_millis(interval_ms);

        override_value(lookup, envvars::PRIMARY_HOST, &mut config.primary.host);
        override_value(lookup, envvars::PRIMARY_PATH, &mut config.primary.path);
        override_secret(lookup, envvars::PRIMARY_API_KEY, &mut config.primary.api_key);

        override_value(lookup, envvars::SECONDARY_HOST, &mut config.secondary.host);
        override_value(lookup, envvars::SECONDARY_PATH, &mut config.secondary.path);
        override_secret(lookup, envvars::SECONDARY_API_KEY, &mut config.secondary.api_key);

        override_value(lookup, envvars::NETWORK_SSID, &mut config.network.ssid);
        override_secret(lookup, envvars::NETWORK_PASSWORD, &mut config.network.password);

        override_number(lookup, envvars::LIGHT_PIN, &mut config.pins.light)?;
        override_number(lookup, envvars::HUMIDITY_PIN, &mut config.pins.humidity)?;

        Ok(config)
    }

    /// Returns the first problem found, if any.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_not_empty(keys::USER_AGENT, &self.user_agent)?;
        if self.update_interval.is_zero() {
            return Err(ConfigError::ZeroUpdateInterval);
        }
        check_endpoint(&self.primary, keys::PRIMARY_HOST, keys::PRIMARY_PATH)?;
        check_endpoint(&self.secondary, keys::SECONDARY_HOST, keys::SECONDARY_PATH)?;
        check_not_empty(keys::NETWORK_SSID, &self.network.ssid)?;
        if self.pins.light == self.pins.humidity {
            return Err(ConfigError::PinConflict(self.pins.light));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            keys::USER_AGENT => self.user_agent.clone(),
            keys::UPDATE_INTERVAL_MS => self.update_interval.as_millis().to_string(),
            keys::PRIMARY_HOST => self.primary.host.clone(),
            keys::PRIMARY_PATH => self.primary.path.clone(),
            keys::PRIMARY_API_KEY => self.primary.api_key.clone(),
            keys::SECONDARY_HOST => self.secondary.host.clone(),
            keys::SECONDARY_PATH => self.secondary.path.clone(),
            keys::SECONDARY_API_KEY => self.secondary.api_key.clone(),
            keys::NETWORK_SSID => self.network.ssid.clone(),
            keys::NETWORK_PASSWORD => self.network.password.clone(),
            keys::LIGHT_PIN => self.pins.light.to_string(),
            keys::HUMIDITY_PIN => self.pins.humidity.to_string(),
            _ => return None,
        };
        Some(value)
    }

    fn secret_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            keys::PRIMARY_API_KEY => Some(&mut self.primary.api_key),
            keys::SECONDARY_API_KEY => Some(&mut self.secondary.api_key),
            keys::NETWORK_PASSWORD => Some(&mut self.network.password),
            _ => None,
        }
    }

    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        for key in keys::SECRETS {
            if let Some(secret) = config.secret_mut(key) {
                redact(secret);
            }
        }
        config
    }
}
