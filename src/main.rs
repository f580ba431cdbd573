//! SwipeTile - Trackpad-Swipe Window Tiler for macOS
//!
//! Application entry point: permission checks, service wiring, and the
//! signal-driven run loop.

use std::sync::Arc;

use clap::Parser;
use swipetile::{
    cli::SwipeTileCli,
    config::ConfigLoader,
    logging::{init_logging, LogConfig},
    macos::{
        accessibility::{AccessibilityProvider, InMemoryAccessibilityProvider},
        display::{DisplayProvider, InMemoryDisplayProvider},
        event_source::{ChannelEventSource, EventSource},
        permissions,
    },
    models::Settings,
    services::TilingOrchestrator,
    Result, SwipeTileError,
};
use tokio::{signal, sync::broadcast};
use tracing::{debug, error, info, warn};

/// Application wiring and lifecycle
struct SwipeTileApp {
    orchestrator: Arc<TilingOrchestrator>,
    event_source: Arc<dyn EventSource>,
    shutdown_tx: broadcast::Sender<()>,
}

impl SwipeTileApp {
    /// Initialize services against the default providers. These are the
    /// in-memory implementations, suitable for tests and for the current
    /// stubbed entry point; the platform-backed providers slot in behind the
    /// same traits.
    async fn new(settings: Settings) -> Result<Self> {
        Self::check_permissions()?;

        let accessibility: Arc<dyn AccessibilityProvider> =
            Arc::new(InMemoryAccessibilityProvider::new());
        let displays: Arc<dyn DisplayProvider> = Arc::new(InMemoryDisplayProvider::single_display());
        let event_source: Arc<dyn EventSource> = Arc::new(ChannelEventSource::new());

        let orchestrator = Arc::new(TilingOrchestrator::new(accessibility, displays, settings));
        debug!("Core services initialized");

        let (shutdown_tx, _) = broadcast::channel(1);

        Ok(Self {
            orchestrator,
            event_source,
            shutdown_tx,
        })
    }

    /// Run until a shutdown signal arrives.
    async fn run(&mut self) -> Result<()> {
        let shutdown_tx = self.shutdown_tx.clone();
        tokio::spawn(async move {
            if let Err(err) = Self::wait_for_signals(shutdown_tx).await {
                error!("Failed to set up signal handlers: {err}");
            }
        });

        let events = self.event_source.start()?;
        info!("SwipeTile is ready for window management");

        self.orchestrator
            .clone()
            .run(events, self.shutdown_tx.subscribe())
            .await?;

        info!("SwipeTile shutdown complete");
        Ok(())
    }

    fn check_permissions() -> Result<()> {
        info!("Checking macOS permissions...");

        if !permissions::is_accessibility_permission_granted()? {
            warn!("Accessibility permission not granted, prompting");
            if !permissions::prompt_accessibility_permission()? {
                return Err(SwipeTileError::PermissionDenied(
                    "Accessibility permission is required to move windows. \
                     Enable SwipeTile under System Settings > Privacy & Security > Accessibility."
                        .to_string(),
                )
                .into());
            }
        }

        if !permissions::is_input_monitoring_permission_granted()? {
            warn!("Input Monitoring permission not granted, prompting");
            if !permissions::prompt_input_monitoring_permission()? {
                return Err(SwipeTileError::PermissionDenied(
                    "Input Monitoring permission is required for the gesture event tap. \
                     Enable SwipeTile under System Settings > Privacy & Security > Input Monitoring."
                        .to_string(),
                )
                .into());
            }
        }

        info!("All required permissions verified");
        Ok(())
    }

    async fn wait_for_signals(shutdown_tx: broadcast::Sender<()>) -> Result<()> {
        #[cfg(unix)]
        {
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
            tokio::select! {
                res = signal::ctrl_c() => {
                    match res {
                        Ok(_) => info!("Received SIGINT (Ctrl+C)"),
                        Err(err) => warn!("Failed to listen for Ctrl+C: {err}"),
                    }
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM");
                }
            }
        }

        #[cfg(not(unix))]
        {
            match signal::ctrl_c().await {
                Ok(_) => info!("Received Ctrl+C"),
                Err(err) => warn!("Failed to listen for Ctrl+C: {err}"),
            }
        }

        if shutdown_tx.send(()).is_err() {
            warn!("Failed to send shutdown signal - no receivers");
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = SwipeTileCli::parse();

    // Subcommands print plain output and exit before logging starts.
    if !cli.execute()? {
        return Ok(());
    }

    let log_config = LogConfig::from_env();
    init_logging(&log_config).map_err(|err| {
        SwipeTileError::ConfigurationError(format!("Failed to initialize logging: {err}"))
    })?;

    info!(
        "SwipeTile - Trackpad-Swipe Window Tiler v{}",
        env!("CARGO_PKG_VERSION")
    );

    let settings = ConfigLoader::load_or_default(cli.config.as_deref())?;
    debug!(?settings, "Settings loaded");

    let mut app = SwipeTileApp::new(settings).await?;
    if let Err(err) = app.run().await {
        error!("Application error: {err}");
        std::process::exit(1);
    }

    Ok(())
}
