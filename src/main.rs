mod argsets;
mod command;

use anyhow::{Result, anyhow};

use pestiborso::helpers::{init_logging, load_dotenv};

const CMD_CONFIG_SHOW: &str = "config-show";
const CMD_CONFIG_GET: &str = "config-get";
const CMD_CONFIG_CHECK: &str = "config-check";

const ARG_REVEAL: &str = "--reveal";

fn main() -> Result<()> {
    let dotenv_files = load_dotenv();
    init_logging();
    for path in dotenv_files {
        log::debug!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_CONFIG_SHOW) => command::config_show(argsets::ConfigShowArgs {
            reveal: args.contains(ARG_REVEAL),
        }),
        Some(CMD_CONFIG_GET) => command::config_get(argsets::ConfigGetArgs {
            key: args.free_from_str()?,
        }),
        Some(CMD_CONFIG_CHECK) => command::config_check(),
        _ => Err(anyhow!(
            "Subcommand must be one of 'config-show', 'config-get', 'config-check'"
        )),
    }
}
