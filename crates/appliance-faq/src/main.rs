mod config;
mod error;
mod server;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use server::ApplianceFaqServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries MCP JSON-RPC, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting appliance-faq MCP server");

    let config = Config::from_env()?;
    info!(
        listen_addr = config.listen_addr.as_deref().unwrap_or("stdio"),
        max_results = config.max_results,
        default_limit = config.default_limit,
        "configuration loaded"
    );

    let repo = faq_core::catalog::catalog();
    let stats = repo.stats();
    info!(
        articles = stats.articles,
        categories = stats.categories,
        "faq catalog loaded"
    );

    let listen_addr = config.listen_addr.clone();
    let server = ApplianceFaqServer::new(repo, config);

    if let Some(addr) = listen_addr {
        let listener = TcpListener::bind(&addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            // each connection gets its own feedback session
            let server = server.fresh_session();
            tokio::spawn(async move {
                info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
