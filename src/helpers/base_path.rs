use std::{env, path::PathBuf};

use once_cell::sync::Lazy;

use crate::constants::{defaults, envvars};

pub static ROOT_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if let Ok(mu_root_dir) = env::var(envvars::ROOT_DIR) {
        return mu_root_dir.into();
    }
    if let Ok(snap_dir) = env::var(envvars::SNAP) {
        return snap_dir.into();
    }
    PathBuf::from(".")
});

/// Location of the units registry document.
///
/// `MU_UNITS_FILE` overrides the full path; otherwise the document lives at
/// its default location under the root dir. Resolved per call so the
/// override can be set after startup (e.g. by tests).
pub fn units_file() -> PathBuf {
    if let Ok(units_file) = env::var(envvars::UNITS_FILE) {
        return units_file.into();
    }
    ROOT_DIR.join(defaults::UNITS_FILE)
}
