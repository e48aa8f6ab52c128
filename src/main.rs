use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use docgen::config::{Config, ServerConfig};
use docgen::middleware::{ErrorHandler, RequestId};
use docgen::modules::{health, rendering};
use docgen::rendering::RenderService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn cors(server: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .max_age(3600);

    if server.allows_any_origin() {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(&server.client_url)
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env()
        .and_then(|config| config.validate().map(|_| config))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    // Initialize tracing; RUST_LOG overrides LOG_LEVEL
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.app.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DocGen render server");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let render_service = RenderService::from_config(&config.renderer)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    tracing::info!(
        browser = %config.renderer.browser_path,
        max_concurrent = config.renderer.max_concurrent_renders,
        timeout_secs = config.renderer.timeout_secs,
        signature = render_service.default_signature().is_some(),
        "Renderer initialized"
    );

    let render_service = web::Data::new(render_service);
    let server_config = config.server.clone();
    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(cors(&server_config))
            .wrap(RequestId)
            .app_data(render_service.clone())
            .configure(health::configure)
            .configure(rendering::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
