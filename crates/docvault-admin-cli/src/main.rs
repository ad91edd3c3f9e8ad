//! DocVault admin options exporter.
//!
//! Builds the admin panel options and writes them to stdout as JSON.

mod config;

use std::io::{self, Write};

use clap::Parser;
use docvault_admin::{Admin, AdminConfig, CatalogResolver, ClientHandle};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("docvault_admin={}", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AdminConfig::from(&args);
    if config.license_key.is_none() {
        info!("No relation license key configured");
    }

    let resolver = CatalogResolver::with_all_models(ClientHandle::new(Value::String(
        args.client.clone(),
    )));
    let admin = Admin::new(resolver, &config);

    let output = match args.model {
        Some(model) => serde_json::to_value(admin.resource(model)?)?,
        None => serde_json::to_value(admin.admin_options()?)?,
    };

    let mut stdout = io::stdout().lock();
    if args.compact {
        serde_json::to_writer(&mut stdout, &output)?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, &output)?;
    }
    writeln!(stdout)?;

    Ok(())
}
