use shuttle_runtime::{Error, SecretStore, Secrets};

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = secret_store.get("CONFIG").unwrap_or_default();
    let config_name = format!("Config{}.toml", config);

    let router = api::serve(&config_name)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    Ok(router.into())
}
