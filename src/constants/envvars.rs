pub const LOG_LEVEL: &str = "LOGGING_LEVEL";

pub const ROOT_DIR: &str = "MU_ROOT_DIR";
pub const UNITS_FILE: &str = "MU_UNITS_FILE";

pub const SNAP: &str = "SNAP";
pub const SNAP_COMMON: &str = "SNAP_COMMON";
