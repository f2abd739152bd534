use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geomaps::{
    config::Config,
    handlers,
    libraries::AnnularPointSampler,
    services::{
        InMemoryMapSurface, LocationSource, ProximityTracker, SimulatedWalkSource,
        TracingNotifier,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geomaps=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;
    let settings = config.settings().context("Invalid map configuration")?;

    info!(
        "Starting geomaps (radius {}m, {} pins)",
        settings.radius.meters(),
        settings.pin_count
    );

    if config.simulate_walk {
        let walk = SimulatedWalkSource::new(settings.default_center);
        let tracker_settings = settings.clone();

        tokio::spawn(async move {
            info!("Starting simulated walk from {:?}", walk.start);

            let mut tracker = ProximityTracker::with_sampler(
                tracker_settings,
                InMemoryMapSurface::default(),
                TracingNotifier,
                AnnularPointSampler::with_rng(StdRng::from_entropy()),
            );
            let subscription = walk.watch_position();
            let view = tracker.run(subscription).await;

            if !view.initialized {
                error!("Simulated walk ended before any position was received");
            }
        });
    }

    let app = handlers::router(settings);

    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .context("Invalid listen address")?;
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    info!("Shutting down...");
    Ok(())
}
