mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::qr_codes::{routes as qr_routes, QrCodeService};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = build_runtime(worker_threads)?;

    runtime.block_on(async_main(worker_threads))
}

/// Multi-threaded runtime; QR encoding runs on the blocking pool
fn build_runtime(worker_threads: usize) -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!(
        "Configuration loaded: output_dir={}, default_fill_color={}, default_back_color={}",
        config.qr.output_dir.display(),
        config.qr.default_fill_color,
        config.qr.default_back_color
    );

    let qr_service = Arc::new(QrCodeService::new(&config.qr));
    let app = build_router(&config, qr_service);

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Assemble the application router with docs, health check and HTTP layers
fn build_router(config: &Config, qr_service: Arc<QrCodeService>) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    Router::new()
        .merge(swagger)
        .merge(qr_routes::routes(
            qr_service,
            config.app.max_request_body_size,
        ))
        .merge(health_route)
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(
                    config.app.cors_allowed_origins.clone(),
                )),
        )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppConfig, QrConfig, SwaggerConfig};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn test_config(dir: &std::path::Path) -> Config {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins: vec!["*".to_string()],
                max_request_body_size: 64 * 1024,
            },
            qr: QrConfig::new(dir, "black", "white").unwrap(),
            swagger: SwaggerConfig {
                title: "Test".to_string(),
                version: "0.0.0".to_string(),
                description: "Test docs".to_string(),
            },
        }
    }

    fn create_test_server(dir: &std::path::Path) -> TestServer {
        let config = test_config(dir);
        let service = Arc::new(QrCodeService::new(&config.qr));
        TestServer::new(build_router(&config, service)).unwrap()
    }

    #[test]
    fn test_runtime_serves_blocking_work_alongside_requests() {
        let runtime = build_runtime(1).unwrap();
        let tmp = TempDir::new().unwrap();

        let status = runtime.block_on(async {
            let handles: Vec<_> = (0..4)
                .map(|i| tokio::task::spawn_blocking(move || i * 2))
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                assert_eq!(handle.await.unwrap(), i * 2);
            }

            let server = create_test_server(tmp.path());
            server
                .post("/generate_qr/")
                .json(&json!({"url": "https://example.com"}))
                .await
                .status_code()
        });

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_check() {
        let tmp = TempDir::new().unwrap();
        let server = create_test_server(tmp.path());

        server.get("/health").await.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_route_carries_request_id() {
        let tmp = TempDir::new().unwrap();
        let server = create_test_server(tmp.path());

        let response = server
            .post("/generate_qr/")
            .json(&json!({"url": "https://example.com"}))
            .await;

        response.assert_status(StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_openapi_json_uses_configured_info() {
        let tmp = TempDir::new().unwrap();
        let server = create_test_server(tmp.path());

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["info"]["title"], "Test");
    }

    #[tokio::test]
    async fn test_body_over_limit_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let server = create_test_server(tmp.path());
        let url = format!("https://example.com/{}", "a".repeat(70 * 1024));

        let response = server
            .post("/generate_qr/")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    }
}
