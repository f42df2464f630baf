pub const LOG_LEVEL: &str = "INFO";

// Registry document location, relative to the root dir
pub const UNITS_FILE: &str = "resources/units.yaml";

pub const LOOKUP_LIMIT: usize = 10;
