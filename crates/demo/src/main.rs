//! Demo entry point.

use std::process::ExitCode;

use demo::config::{Config, LogFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    let config = Config::from_env();

    // 1. Initialize tracing
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init(),
    }

    // 2. Install the Prometheus recorder when a snapshot was requested
    let metrics_handle = if config.print_metrics {
        match metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, "failed to install Prometheus recorder");
                None
            }
        }
    } else {
        None
    };

    // 3. Run the scenarios
    tracing::debug!(?config, "starting demo");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = demo::run(&config, &mut out) {
        tracing::error!(error = %err, "failed to write demo output");
        return ExitCode::FAILURE;
    }

    if let Some(handle) = metrics_handle {
        println!("{}", handle.render());
    }

    ExitCode::SUCCESS
}
