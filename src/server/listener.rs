use crate::app::Router;
use crate::config::Config;
use crate::http::connection::Connection;
use tokio::net::TcpListener;
use tracing::info;

/// Binds the configured address and serves until the task is dropped.
pub async fn run(cfg: &Config, router: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    serve(listener, router).await
}

/// Accept loop over an already-bound listener.
///
/// Each accepted socket gets its own task and its own `Router` handle; the
/// task wrapper is where connection-level failures are logged. Connections
/// never affect one another.
pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let router = router.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
