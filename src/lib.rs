//! Tangle - scripted construction of mutable graphs
//!
//! Builds graphs from JSON operation scripts on top of `tangle-core` and
//! reports the resulting graphs, nodes and edges.
#![warn(missing_docs)]

/// Script format
pub mod script;

/// Script interpreter
pub mod runner;

pub use runner::{Report, Runner};
pub use script::{Script, Step};

use anyhow::Context;
use tangle_core::Config;

/// Load the configuration for a CLI invocation.
///
/// An explicit `path` must exist and parse. Without one, `tangle.toml` in
/// the working directory is used if present. Environment overrides apply
/// in both cases.
pub fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let mut config = Config::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path))?;
            config.apply_env_overrides()?;
            Ok(config)
        }
        None => Config::load().context("Failed to load default configuration"),
    }
}

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
