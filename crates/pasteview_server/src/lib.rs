//! HTTP server wiring for PasteView (language catalog and form helpers).

/// HTTP error mapping for API handlers.
pub mod error;
/// HTTP handlers for catalog and form endpoints.
pub mod handlers;

pub use pasteview_core::{config, languages, AppError, Config, LanguageCatalog, DEFAULT_PORT};

use axum::{http::header, routing::get, Router};
use hyper::HeaderMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub languages: Arc<LanguageCatalog>,
}

impl AppState {
    pub fn new(config: Config, languages: LanguageCatalog) -> Self {
        Self {
            config: Arc::new(config),
            languages: Arc::new(languages),
        }
    }

    /// Build state, loading the catalog named by `config.languages_path`.
    ///
    /// # Errors
    /// Returns the catalog load error when the configured file is unusable.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let languages = LanguageCatalog::load(config.languages_path.as_deref())?;
        Ok(Self::new(config, languages))
    }
}

fn security_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, header::HeaderValue::from_static("DENY"));
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        header::HeaderValue::from_static(
            "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'; frame-ancestors 'none'; base-uri 'self'; form-action 'self'",
        ),
    );
    headers
}

fn cors_layer(allow_public_access: bool, cors_port: u16) -> CorsLayer {
    let methods = [axum::http::Method::GET];
    if allow_public_access {
        return CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any);
    }
    let origins: Vec<header::HeaderValue> = [
        format!("http://localhost:{}", cors_port),
        format!("http://127.0.0.1:{}", cors_port),
    ]
    .iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Create the application router with all routes and middleware.
///
/// Public access follows `state.config.allow_public_access`.
pub fn create_app(state: AppState) -> Router {
    let cors_port = state.config.port;
    create_app_with_cors_port(state, cors_port)
}

fn create_app_with_cors_port(state: AppState, cors_port: u16) -> Router {
    let cors = cors_layer(state.config.allow_public_access, cors_port);
    let mut router = Router::new()
        .route("/languages.json", get(handlers::languages::list_languages))
        .route("/api/language/:name", get(handlers::languages::get_language))
        .route("/api/page-config", get(handlers::page::page_config))
        .route(
            "/api/expiration/:value",
            get(handlers::expiration::parse_expiration),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        );

    for (name, value) in security_headers().iter() {
        router = router.layer(SetResponseHeaderLayer::overriding(
            name.clone(),
            value.clone(),
        ));
    }
    router
}

/// Resolve the listener address from the `BIND` override and security policy.
///
/// Invalid `BIND` values fall back to `127.0.0.1:<port>`; non-loopback
/// addresses are forced to loopback unless public access is allowed.
pub fn resolve_bind_address(config: &Config) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], config.port));
    let requested = match std::env::var("BIND") {
        Ok(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        Err(_) => default_bind,
    };

    if config.allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

fn listener_cors_port(listener: &tokio::net::TcpListener, fallback_port: u16) -> u16 {
    listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(fallback_port)
}

/// Run the Axum server until `shutdown_signal` resolves.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let cors_port = listener_cors_port(&listener, state.config.port);
    let app = create_app_with_cors_port(state, cors_port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

async fn ctrl_c_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

/// Bind the configured address and serve until ctrl-c.
///
/// # Errors
/// Returns bind and serve I/O errors.
pub async fn run(state: AppState) -> Result<(), std::io::Error> {
    let addr = resolve_bind_address(&state.config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("PasteView listening on http://{}", listener.local_addr()?);
    serve_router(listener, state, ctrl_c_signal()).await
}
