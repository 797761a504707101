pub mod handlers;
pub mod shared;
pub mod usecases;

use shared::app_state::AppState;
use shared::config;
use shared::llm::{GeminiConfig, GeminiProvider};
use std::sync::Arc;
use usecases::u101_compose_reply::ReplyExecutor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::extract::DefaultBodyLimit;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::{ServeDir, ServeFile};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,reqwest=warn,hyper=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Format a byte count with thousands separators
    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        for (i, ch) in s.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push('.');
            }
            result.push(ch);
        }
        result.chars().rev().collect()
    }

    // Request logging middleware
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use chrono::Local;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let status = response.status().as_u16();
        let size = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok())
            .map(format_number)
            .unwrap_or_else(|| "-".to_string());

        // cyan for 200, yellow for everything else
        let color_code = if status == 200 { "36" } else { "33" };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
            color_code,
            Local::now().format("%H:%M:%S"),
            start.elapsed().as_millis(),
            size,
            status,
            method,
            uri.path()
        );

        response
    }

    let config = config::load_config()?;

    let api_key = config::resolve_api_key(&config.gemini);
    if api_key.is_none() {
        tracing::warn!(
            "No API key found in {} or {}; reply generation will fail until one is set",
            config.gemini.api_key_env,
            config::FALLBACK_API_KEY_ENV
        );
    }

    let provider = GeminiProvider::new(GeminiConfig::from_settings(&config.gemini, api_key))?;
    let state = AppState::new(ReplyExecutor::new(Arc::new(provider)));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let static_dir = config::get_static_dir(&config);
    let frontend = ServeDir::new(&static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    let app = Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/logs", post(handlers::logs::create))
        // UseCase u101: Compose customer reply
        .route(
            "/api/u101/reply/generate",
            post(handlers::usecases::u101_generate_reply),
        )
        .fallback_service(frontend)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_mb * 1024 * 1024))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    shared::logger::log("startup", &format!("Server listening on http://{}", addr));
    tracing::info!("Serving frontend from {}", static_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}
