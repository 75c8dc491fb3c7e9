use crate::config::Settings;
use crate::domain::context::DashboardContext;
use crate::infrastructure::load_dataset;
use crate::server::DashboardService;
use crate::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    context: Arc<DashboardContext>,
}

impl Application {
    /// Load the dataset and precompute every aggregate
    ///
    /// Schema and data errors surface here, before the server binds.
    #[instrument(skip(settings), fields(dataset = %settings.dataset.path.display()))]
    pub fn from_settings(settings: Settings) -> Result<Self> {
        info!(
            environment = %settings.application.environment,
            source_url = %settings.dataset.source_url,
            "Loading case dataset"
        );
        let table = load_dataset(&settings.dataset.path)?;
        let context = Arc::new(DashboardContext::build(&table)?);
        info!(
            records = context.record_count(),
            first_year = %context.year_bounds().min(),
            last_year = %context.year_bounds().max(),
            "Dashboard context ready"
        );

        Ok(Self { settings, context })
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let address = self.settings.bind_address();
        let listener = TcpListener::bind(&address).await?;
        info!(
            address = %address,
            environment = %self.settings.application.environment,
            "Starting measles and rubella dashboard"
        );

        let router = DashboardService::new(self.context, &self.settings.sessions).into_router();
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn context(&self) -> &DashboardContext {
        &self.context
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
