use anyhow::{anyhow, Result};

use mu::units::get_registry;

use crate::argsets::NormalizeUnitArgs;

pub fn normalize_unit(args: NormalizeUnitArgs) -> Result<()> {
    let registry = get_registry(None)?;
    let key = registry
        .normalize_unit(Some(&args.raw))
        .ok_or_else(|| anyhow!("No canonical unit found for '{}'", args.raw))?;
    println!("{key}");
    Ok(())
}
