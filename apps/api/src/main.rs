use axum_helpers::{JwtAuth, shutdown_signal};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{InMemoryProductRepository, ProductService};
use domain_users::{InMemoryUserRepository, UserService};
use tower_http::trace::TraceLayer;
use tracing::info;

mod api;
mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // Stores are constructed once here and handed into the services; all
    // state is process-lifetime only, so a restart empties them.
    let user_service = UserService::new(InMemoryUserRepository::new());
    let product_service = ProductService::new(InMemoryProductRepository::new());
    let jwt_auth = JwtAuth::new(&config.jwt);

    let app = api::routes(user_service, product_service, jwt_auth)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.server.address()).await?;
    info!("Listening on {}", config.server.address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API shutdown complete");
    Ok(())
}
