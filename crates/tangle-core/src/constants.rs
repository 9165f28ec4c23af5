//! Global constants used throughout the tangle codebase
//!
//! This module contains compile-time constants that are shared across
//! multiple modules to ensure consistency and avoid magic numbers.

/// Weight given to an edge created without an explicit weight
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Initial node slot capacity of a fresh store
///
/// Slots grow on demand; this only avoids early reallocations for
/// small graphs built in tight loops.
pub const DEFAULT_NODE_CAPACITY: usize = 64;

/// Initial edge slot capacity of a fresh store
pub const DEFAULT_EDGE_CAPACITY: usize = 128;

/// Generation assigned to a slot the first time it is filled
pub const FIRST_GENERATION: u32 = 1;

/// Environment variable overriding the configured log level
pub const ENV_LOG_LEVEL: &str = "TANGLE_LOG_LEVEL";

/// Environment variable overriding the configured merge strategy
pub const ENV_MERGE_STRATEGY: &str = "TANGLE_MERGE_STRATEGY";

/// Default configuration file looked up by [`crate::core::Config::load`]
pub const DEFAULT_CONFIG_FILE: &str = "tangle.toml";

/// Prefix of every prometheus metric exported by this crate
pub const METRIC_PREFIX: &str = "tangle";
