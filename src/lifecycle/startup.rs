//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Dataset is built and validated before the listener binds
//! - Listener starts last (traffic only when ready)

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::catalog::{Dataset, DatasetError};
use crate::config::{DatasetConfig, ServiceConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("invalid address {address}: {source}")]
    Address {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("server I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the dataset named in config, or the built-in seed.
pub fn load_dataset(config: &DatasetConfig) -> Result<Dataset, DatasetError> {
    let dataset = match &config.path {
        Some(path) => Dataset::from_path(path)?,
        None => Dataset::seed()?,
    };
    tracing::info!(
        universities = dataset.len(),
        source = %config
            .path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in seed".to_string()),
        "Dataset loaded"
    );
    Ok(dataset)
}

fn parse_addr(address: &str) -> Result<SocketAddr, StartupError> {
    address.parse().map_err(|source| StartupError::Address {
        address: address.to_string(),
        source,
    })
}

/// Bring the service up and serve until SIGINT/SIGTERM.
///
/// Logging must already be initialized.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    let dataset = Arc::new(load_dataset(&config.dataset)?);

    if config.observability.metrics_enabled {
        metrics::init_metrics(parse_addr(&config.observability.metrics_address)?)?;
        metrics::record_dataset_size(dataset.len());
    }

    let listener = TcpListener::bind(parse_addr(&config.listener.bind_address)?).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, dataset);
    let server_shutdown = shutdown.subscribe();

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        signal_shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_dataset_defaults_to_seed() {
        let dataset = load_dataset(&DatasetConfig::default()).unwrap();
        assert_eq!(dataset.len(), 7);
    }

    #[test]
    fn test_load_dataset_from_file() {
        let path = std::env::temp_dir().join(format!(
            "university-catalog-{}-dataset.json",
            std::process::id()
        ));
        std::fs::write(&path, "[]").unwrap();

        let dataset = load_dataset(&DatasetConfig {
            path: Some(path.clone()),
        })
        .unwrap();
        assert!(dataset.is_empty());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_bad_address() {
        let err = parse_addr("not-an-address").unwrap_err();
        assert!(err.to_string().starts_with("invalid address not-an-address"));
    }
}
