use anyhow::{anyhow, Result};

use mu::units::get_registry;

use crate::argsets::DescribeArgs;

/// Print one quantity-kind record as the plain field-mapping that the source
/// generator embeds under `meta.quantity_kind`.
pub fn describe(args: DescribeArgs) -> Result<()> {
    let registry = get_registry(None)?;
    let qk = registry
        .quantity_kind(&args.key)
        .ok_or_else(|| anyhow!("No quantity kind '{}' in registry", args.key))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&qk.to_meta())?);
    } else {
        print!("{}", serde_yaml::to_string(qk)?);
    }
    Ok(())
}
