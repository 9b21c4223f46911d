pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod random;
pub mod routes;

use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Extension, Router};
use lambda_http::{run, Error};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, Runtime};
use crate::middleware::no_cache_middleware;
use crate::random::{SharedRandom, ThreadRandom};
use crate::routes::{health, simple1, simple5};

pub fn create_app(random: SharedRandom) -> Router {
    let probes = Router::new()
        .route("/test/simple1/:id", get(simple1::handler))
        .route("/test/simple5", get(simple5::handler))
        .route_layer(from_fn(no_cache_middleware));

    Router::new()
        .merge(probes)
        .route("/health", get(health::health))
        .layer(Extension(random))
}

pub async fn run_app(config: Config) -> Result<(), Error> {
    logging::init_logger(config.log_level);
    info!(
        environment = %config.environment,
        runtime = ?config.runtime,
        "starting nocache-probe"
    );

    let app = create_app(Arc::new(ThreadRandom));

    match config.runtime {
        Runtime::Lambda => run(app).await,
        Runtime::Local => {
            let listener = TcpListener::bind(config.bind_addr)
                .await
                .map_err(error::AppError::from)?;
            info!(addr = %config.bind_addr, "listening");
            axum::serve(listener, app)
                .await
                .map_err(error::AppError::from)?;
            Ok(())
        }
    }
}
