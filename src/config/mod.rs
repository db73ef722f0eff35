//! Configuration handling for mailsift
//!
//! Configuration is a TOML file with kebab-case keys. Every key has a
//! default, so running without a config file is fully supported.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{
    Config, DiscoveryConfig, OutputConfig, StrategyConfig, UserAgentConfig,
};
pub use validation::validate;
