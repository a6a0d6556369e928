//! University Catalog Service
//!
//! A read-only HTTP JSON API over an in-memory list of universities, built
//! with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ middleware ──▶ handlers ──▶ QueryEngine ──▶ Arc<Dataset>
//!                     (request id,   (http/*)     (catalog)       (immutable)
//!                      trace, cors,      │
//!                      limits)           ▼
//!     Client Response ◀──────────── response envelope
//! ```

use clap::Parser;
use std::path::PathBuf;

use university_catalog::config::{load_config, validate_config, ConfigError, ServiceConfig};
use university_catalog::lifecycle::startup;
use university_catalog::observability::logging;

#[derive(Parser)]
#[command(name = "university-catalog")]
#[command(about = "Read-only HTTP API for the university catalog", version)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on; overrides the configured bind port.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

fn load(args: &Args) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => {
            let config = ServiceConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            config
        }
    };

    if let Some(port) = args.port {
        config.listener.bind_address = override_port(&config.listener.bind_address, port);
    }
    Ok(config)
}

/// Replace the port in `host:port`, keeping the host.
fn override_port(bind_address: &str, port: u16) -> String {
    let host = bind_address
        .rsplit_once(':')
        .map(|(host, _)| host)
        .unwrap_or("0.0.0.0");
    format!("{host}:{port}")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load(&args)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("university-catalog v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_port() {
        assert_eq!(override_port("0.0.0.0:8080", 3000), "0.0.0.0:3000");
        assert_eq!(override_port("[::1]:8080", 3000), "[::1]:3000");
        assert_eq!(override_port("garbage", 3000), "0.0.0.0:3000");
    }

    #[test]
    fn test_args_parse() {
        let argv = ["university-catalog", "-c", "catalog.toml", "-p", "9000"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("catalog.toml")));
        assert_eq!(args.port, Some(9000));
    }
}
