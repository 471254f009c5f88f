use gateway::router::create_router;
use gateway::state::AppState;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use store::{JournalConfig, TransactionStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting transaction analytics gateway");

    let data_dir = env::var("TXE_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let bind_addr = env::var("TXE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    // Replay the journal before accepting traffic
    let config = JournalConfig::new(&data_dir);
    let store = tokio::task::spawn_blocking(move || TransactionStore::open(config)).await??;
    tracing::info!(records = store.len(), data_dir = %data_dir, "transaction store ready");

    let state = AppState::new(Arc::new(store));
    let app = create_router(state);

    let addr: SocketAddr = bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
