mod argsets;
mod command;

use anyhow::{anyhow, Result};
use env_logger::Env;

use mu::constants::{defaults, envvars};
use mu::helpers::load_dotenv;

const CMD_LOOKUP: &str = "lookup";
const CMD_NORMALIZE_UNIT: &str = "normalize-unit";
const CMD_DESCRIBE: &str = "describe";

fn main() -> Result<()> {
    load_dotenv();
    env_logger::Builder::from_env(
        Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_LOOKUP) => command::lookup(argsets::LookupArgs {
            unit: args.opt_value_from_str("--unit")?,
            limit: args.opt_value_from_str("--limit")?,
            query: args.free_from_str()?,
        }),
        Some(CMD_NORMALIZE_UNIT) => command::normalize_unit(argsets::NormalizeUnitArgs {
            raw: args.free_from_str()?,
        }),
        Some(CMD_DESCRIBE) => command::describe(argsets::DescribeArgs {
            json: args.contains("--json"),
            key: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of 'lookup', 'normalize-unit', 'describe'"
        )),
    }
}
