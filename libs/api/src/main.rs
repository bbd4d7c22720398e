use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::serve;
use tokio::net::TcpListener;
use util::load_env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let secrets = load_env()?;
    let config = secrets
        .get("CONFIG")
        .and_then(|config| config.as_str())
        .context("CONFIG was not found in Secrets.toml")?;
    let config_name = &format!("Config{}.toml", config);

    let router = serve(config_name).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    Ok(axum::serve(listener, router).await?)
}
