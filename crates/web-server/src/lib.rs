use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use axum_extra::routing::RouterExt;
use configuration::{Settings, UploadSettings};
use core_types::Item;
use database::NoteRepository;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod error;
pub mod extract;
pub mod handlers;
pub mod items;
pub mod middleware;
pub mod upload;

/// The shared application state that all handlers can access.
pub struct AppState {
    /// Note storage. Each call acquires and releases its own handle.
    pub notes: Arc<dyn NoteRepository>,
    pub items: Vec<Item>,
    pub uploads: UploadSettings,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteRepository>, settings: &Settings) -> Self {
        Self {
            notes,
            items: Item::catalog(),
            uploads: settings.uploads.clone(),
            static_dir: settings.static_files.dir.clone(),
        }
    }
}

/// Builds the application router with every route and middleware layer.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());
    let body_limit = state.uploads.max_body_bytes;
    let static_files = ServeDir::new(&state.static_dir);

    // --- DEFINE THE APPLICATION ROUTES ---
    Router::new()
        .route("/api/healthchecker", get(handlers::health_checker))
        .route("/api/healthcheck", post(handlers::health_check_echo))
        .route("/api/note/new", get(handlers::read_new_notes))
        .route("/api/notes", get(handlers::list_notes))
        .typed_get(handlers::get_note)
        .route("/notes", post(handlers::create_note))
        .typed_get(items::echo_item)
        .typed_get(items::get_item)
        .route("/items", post(items::create_item))
        .route("/items/", post(items::create_item))
        .route("/upload_file/", post(upload::upload_file))
        .nest_service("/static", static_files)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(axum::middleware::map_response(middleware::method_not_allowed_as_json))
        .layer(cors)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::add_process_time_header))
}

/// The main function to configure and run the web server.
///
/// Tracing must already be initialised by the caller.
pub async fn run_server(settings: &Settings, notes: Arc<dyn NoteRepository>) -> anyhow::Result<()> {
    let addr = settings.server.socket_addr()?;
    let app_state = Arc::new(AppState::new(notes, settings));
    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received.");
}
