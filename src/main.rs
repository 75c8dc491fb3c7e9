use anyhow::{Context, Result};
use measles_rubella_dashboard::config::Settings;
use measles_rubella_dashboard::infrastructure::init_tracing;
use measles_rubella_dashboard::Application;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load configuration")?;
    init_tracing(&settings.logging);

    info!("Starting measles and rubella dashboard");

    let app = Application::from_settings(settings).context("Failed to prepare dashboard")?;
    app.run().await?;

    Ok(())
}
