use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::helpers::base_path;

use super::registry::{LoadError, UnitsRegistry};

static REGISTRY: OnceCell<(PathBuf, UnitsRegistry)> = OnceCell::new();

/// Process-wide units registry, loaded on first successful call.
///
/// With no path the document location from [`base_path::units_file`] is used.
/// The first path to load successfully wins for the remainder of the process;
/// a later call with a different path gets the already-loaded registry back
/// and a warning is logged.
pub fn get_registry(path: Option<&Path>) -> Result<&'static UnitsRegistry, LoadError> {
    let requested = path
        .map(Path::to_path_buf)
        .unwrap_or_else(base_path::units_file);

    let (loaded_from, registry) = REGISTRY.get_or_try_init(|| {
        let registry = UnitsRegistry::load(&requested)?;
        log::info!("Loaded units registry from {}", requested.display());
        Ok::<_, LoadError>((requested.clone(), registry))
    })?;

    if *loaded_from != requested {
        log::warn!(
            "Units registry already loaded from {}; ignoring {}",
            loaded_from.display(),
            requested.display()
        );
    }
    Ok(registry)
}
