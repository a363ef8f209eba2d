//! Factory pattern demonstration.
//!
//! Builds one product per factory entry point and logs a human-readable
//! rendering of each result.
//!
//! Run with: cargo run --bin factory-demo

use computer_factory::factories::ComputerFactory;
use computer_factory::{FactoryError, TypeTier};
use tracing::info;

fn main() -> Result<(), FactoryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let server = ComputerFactory::get_computer("SERVER", "2 GB", "50 GB", "2.4 GHz")?;
    info!("{}", server);

    let pc = ComputerFactory::get_computer("PC", "16 GB", "1 TB", "2.9 GHz")?;
    info!("{}", pc);

    let cluster = ComputerFactory::create_computer(
        TypeTier::Extended,
        "MULTI_NODE_CLUSTER",
        "16 GB",
        "1 TB",
        "2.9 GHz",
        Some(16),
    )?;
    if let Some(cluster) = cluster {
        info!("{}", cluster);
    }

    Ok(())
}
