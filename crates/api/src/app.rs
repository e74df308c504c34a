use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use shared::jwt::{JwtError, TokenIssuer};
use shared::password::{CredentialHasher, PasswordError};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, require_user_auth, trace_id};
use crate::routes::{auth, devices, groups, health, telemetry, users};
use crate::services::telemetry::{TelemetryClient, TelemetryError};

/// Shared, immutable per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub tokens: TokenIssuer,
    pub hasher: CredentialHasher,
    /// Present only when telemetry is enabled
    pub telemetry: Option<TelemetryClient>,
}

/// Failures while assembling [`AppState`] from configuration.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid token configuration: {0}")]
    Tokens(#[from] JwtError),

    #[error("Invalid password hashing configuration: {0}")]
    Hasher(#[from] PasswordError),

    #[error("Failed to build telemetry client: {0}")]
    Telemetry(#[from] TelemetryError),
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Result<Self, StartupError> {
        let tokens = TokenIssuer::new(
            &config.auth.jwt_secret,
            config.auth.token_ttl_secs,
            config.auth.leeway_secs,
        )?;
        let hasher = CredentialHasher::new(config.auth.hashing_params())?;
        let telemetry = if config.telemetry.enabled {
            Some(TelemetryClient::new(config.telemetry.clone())?)
        } else {
            None
        };

        Ok(Self {
            pool,
            config: Arc::new(config),
            tokens,
            hasher,
            telemetry,
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Bearer token required; identity bound before the handler runs
    let protected_routes = Router::new()
        .route("/group", get(groups::list_groups).post(groups::create_group))
        .route("/group/", get(groups::list_groups).post(groups::create_group))
        .route(
            "/device",
            get(devices::list_devices).post(devices::create_device),
        )
        .route(
            "/device/",
            get(devices::list_devices).post(devices::create_device),
        )
        .route("/device/:device_id", get(devices::get_device))
        .route("/user", get(users::get_profile).put(users::update_profile))
        .route("/user/", get(users::get_profile).put(users::update_profile))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_auth,
        ));

    let mut public_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::ready))
        .route("/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    if state.telemetry.is_some() {
        public_routes = public_routes.route("/data/temp", post(telemetry::record_temperature));
    }

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
