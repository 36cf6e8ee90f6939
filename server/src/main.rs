use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use items_server::{logging, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let config = Config::parse();
    logging::init(&config)?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");
    items_server::run(listener)
        .await
        .wrap_err("server error")
}
