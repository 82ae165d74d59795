use env_logger::Env;

use crate::constants::{defaults, envvars};

/// Initialize the logger, filtered by the LOG_LEVEL env var (default "info").
///
/// Logs go to stderr so that command output on stdout stays clean.
pub fn init_logging() {
    let env = Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL);
    env_logger::Builder::from_env(env).init();
}
