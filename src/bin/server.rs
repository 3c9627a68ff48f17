//! NestKV Server Binary
//!
//! Starts the TCP server for NestKV.

use std::sync::Arc;

use clap::Parser;
use nestkv::network::Server;
use nestkv::{Config, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// NestKV Server
#[derive(Parser, Debug)]
#[command(name = "nestkv-server")]
#[command(about = "In-memory transactional key-value store")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:4000")]
    listen: String,

    /// Maximum concurrent connections
    #[arg(short, long, default_value = "1024")]
    max_connections: usize,

    /// Connection read timeout in milliseconds (0 disables)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Connection write timeout in milliseconds (0 disables)
    #[arg(long, default_value = "0")]
    write_timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nestkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("NestKV Server v{}", nestkv::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .max_connections(args.max_connections)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .build();

    let store = Arc::new(Store::new());

    // Bind and serve
    let server = match Server::bind(config, store) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to bind listener: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("server stopped");
}
