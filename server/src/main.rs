use tokio::net::TcpListener;
use todo_server::config::{init_tracing, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    init_tracing();

    let config = ServerConfig::default();
    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "todo server listening");
    todo_server::run(listener).await
}
