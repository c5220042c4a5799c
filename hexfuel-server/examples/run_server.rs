//! Example to run the HEXFUEL server standalone
//!
//! Run with: cargo run -p hexfuel-server --example run_server

use hexfuel_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting HEXFUEL server on port {}", config.port);
    println!("Static files from: {}", config.static_dir);
    println!("Open http://localhost:{}/index.html", config.port);

    run_server(config).await
}
