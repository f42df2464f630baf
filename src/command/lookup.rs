use anyhow::{anyhow, Result};

use mu::constants::defaults;
use mu::units::get_registry;

use crate::argsets::LookupArgs;

pub fn lookup(args: LookupArgs) -> Result<()> {
    let registry = get_registry(None)?;
    let limit = args.limit.unwrap_or(defaults::LOOKUP_LIMIT);
    let matches = registry.lookup_quantity_kinds(&args.query, args.unit.as_deref(), limit);

    if matches.is_empty() {
        println!("No quantity kinds matched '{}'", args.query);
        return Ok(());
    }

    for (idx, (key, score)) in matches.iter().enumerate() {
        let qk = registry
            .quantity_kind(key)
            .ok_or_else(|| anyhow!("No quantity kind '{key}' in registry"))?;
        println!(
            "{:>3}. {}  {} [{}]  unit={}  score={}",
            idx + 1,
            qk.key,
            qk.label,
            qk.symbol,
            qk.default_unit,
            score
        );
    }
    Ok(())
}
