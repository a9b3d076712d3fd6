mod domain;
mod clients;

mod app_system;
mod catalog;
mod config;
mod feature_flags;
mod http;
mod pricing;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod order_actor;
mod product_actor;

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::middleware::TrailingSlash;
use actix_web::web::Data;
use actix_web::{middleware, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};

use crate::app_system::{seed_catalog, setup_tracing, OrderSystem};
use crate::config::Overrides;
use crate::feature_flags::{FeatureFlag, FlagStore};

/// Small shop API whose pricing and catalog rules are switched by feature flags.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// TOML configuration file (defaults to ./shop.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    host: Option<String>,
    #[arg(short, long)]
    port: Option<u16>,
    /// Enable a feature flag, e.g. --enable PremiumPricing
    #[arg(long, value_name = "FLAG")]
    enable: Vec<FeatureFlag>,
    /// Disable a feature flag
    #[arg(long, value_name = "FLAG")]
    disable: Vec<FeatureFlag>,
    /// Start with an empty catalog
    #[arg(long)]
    no_seed: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            enable: self.enable.clone(),
            disable: self.disable.clone(),
            no_seed: self.no_seed,
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();
    let overrides = cli.overrides();
    let config = config::resolve(cli.config.as_deref(), &overrides).context("Failed to load configuration")?;

    let flags = Arc::new(FlagStore::new());
    flags.apply(&config.flag_states());
    for (flag, enabled) in flags.snapshot() {
        info!(flag = %flag, enabled, "Feature flag");
    }

    let system = OrderSystem::new(flags.clone());
    if config.seed_catalog {
        let count = seed_catalog(&system.product_client)
            .await
            .context("Failed to seed the catalog")?;
        info!(count, "Catalog seeded");
    }

    #[cfg(unix)]
    let _reload = match app_system::spawn_flag_reload(cli.config.clone(), overrides, flags.clone()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "SIGHUP flag reload unavailable");
            None
        }
    };

    let state = Data::new(system.app_state());
    let address = config.bind_address();
    info!(host = %address.0, port = address.1, "Starting HTTP server");

    let served = HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::new(TrailingSlash::Trim))
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(http::configure)
    })
    .bind(address)
    .context("Failed to bind HTTP listener")?
    .run()
    .await;

    if let Err(e) = &served {
        error!(error = %e, "HTTP server stopped with an error");
    }

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    served.context("HTTP server failed")?;

    info!("Application completed successfully");
    Ok(())
}
