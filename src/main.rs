//! VitalMesh - Client for the VitalMesh clinic workflow backend

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitalmesh=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting VitalMesh client v{}", env!("CARGO_PKG_VERSION"));

    // Run CLI
    vitalmesh::cli::run()?;

    Ok(())
}
