//! PasteView server entrypoint.

use pasteview::{AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pasteview=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    if config.allow_public_access {
        tracing::warn!("Public access enabled - server will accept requests from any origin");
    }

    let state = AppState::from_config(config)?;
    tracing::info!(
        "Loaded {} languages in {} groups",
        state.languages.len(),
        state.languages.groups().len()
    );

    pasteview_server::run(state).await?;
    Ok(())
}
