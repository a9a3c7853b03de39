use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::domain::error::Result;
use crate::infrastructure::config::AppConfig;

pub async fn run() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    if let Ok(path) = dotenvy::dotenv() {
        info!(path = %path.display(), "Loaded .env file");
    }

    let config = AppConfig::load().map_err(|err| {
        error!(error = %err, "Refusing to start the translation service");
        err
    })?;

    let state = crate::infrastructure::bootstrap::setup(&config)?;
    let server = crate::interfaces::http::start_server(state, config.bind_address())?;

    info!(
        "Translator available at http://{}:{}",
        config.host, config.port
    );

    server.await?;
    Ok(())
}
