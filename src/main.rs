use docstore::server::router::build_router;
use docstore::store::registry::Registry;
use docstore::store::snapshot::RegistrySnapshot;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:3000".parse()?;
    let mut data_dir = PathBuf::from(".");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data-dir" => {
                data_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--data-dir <path>]", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    std::fs::create_dir_all(&data_dir)?;

    tracing::info!("Data directory: {}", data_dir.display());

    // The registry starts empty on every boot; durable tables come back
    // once the creation calls are replayed.
    let registry = Arc::new(Registry::new(data_dir.clone()));
    let snapshot = Arc::new(RegistrySnapshot::new(&data_dir));

    let app = build_router(registry, snapshot);

    tracing::info!("Store listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
