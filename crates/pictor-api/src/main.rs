use pictor_api::setup::{initialize_app, start_server};
use pictor_api::telemetry::init_telemetry;
use pictor_core::Config;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_telemetry();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, storage, routes)
    let (_state, router) = initialize_app(config.clone()).await?;

    // Start the server
    start_server(&config, router).await?;

    Ok(())
}
