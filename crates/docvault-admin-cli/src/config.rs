//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;
use docvault_admin::config::{DEFAULT_COMPONENT_ROOT, LICENSE_KEY_ENV};
use docvault_admin::{AdminConfig, ModelName};

/// DocVault admin options exporter command line arguments.
#[derive(Debug, Parser)]
#[command(name = "docvault-admin")]
#[command(about = "Export DocVault admin panel options as JSON")]
#[command(version)]
pub struct Args {
    /// License key for the relation feature.
    #[arg(long, env = LICENSE_KEY_ENV, hide_env_values = true)]
    pub license_key: Option<String>,

    /// Directory holding the custom component sources.
    #[arg(long, default_value = DEFAULT_COMPONENT_ROOT)]
    pub component_root: PathBuf,

    /// Client handle attached to every resource.
    #[arg(long, default_value = "prisma")]
    pub client: String,

    /// Print only the descriptor of this model.
    #[arg(short, long)]
    pub model: Option<ModelName>,

    /// Print compact JSON instead of pretty-printed JSON.
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl From<&Args> for AdminConfig {
    fn from(args: &Args) -> Self {
        let config = AdminConfig::new().with_component_root(args.component_root.clone());
        match &args.license_key {
            Some(key) => config.with_license_key(key.clone()),
            None => config,
        }
    }
}
