use anyhow::{Result, anyhow};

use crate::argsets::{ConfigGetArgs, ConfigShowArgs};
use pestiborso::config::Config;

pub fn config_show(args: ConfigShowArgs) -> Result<()> {
    let config = Config::from_env()?;
    let config = if args.reveal { config } else { config.redacted() };
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn config_get(args: ConfigGetArgs) -> Result<()> {
    let config = Config::from_env()?;
    let value = config
        .get(&args.key)
        .ok_or_else(|| anyhow!("Unknown config key '{}'", &args.key))?;
    print!("{value}");
    Ok(())
}

pub fn config_check() -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;
    log::info!(
        "Configuration OK: uploading every {:.1}s to {} and {}",
        config.update_interval.as_secs_f32(),
        config.primary.url()?,
        config.secondary.url()?
    );
    Ok(())
}
