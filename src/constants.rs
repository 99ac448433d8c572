//! Composer Constants
//!
//! Centralized numeric constants for memory validation and model
//! classification. `ComposerConfig` can override them from a TOML file.

/// Smallest accepted memory size in megabytes (inclusive)
pub const MIN_MEMORY_SIZE: i64 = 2048;

/// Largest accepted memory size in megabytes (inclusive)
pub const MAX_MEMORY_SIZE: i64 = 8_388_608;

/// Memory values must be exact multiples of this granularity
pub const MEMORY_SIZE_MULTIPLE: i64 = 1024;

/// Minimum memory for the High Density Server category
pub const HIGH_DENSITY_THRESHOLD: i64 = 524_288;

/// Minimum memory for the 4U Rack Server category
pub const RACK_SERVER_THRESHOLD: i64 = 131_072;

/// Minimum memory for the basic server categories (Tower, Mainframe)
pub const BASIC_SERVER_THRESHOLD: i64 = 2048;
