use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::env;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cashops_backend::{handlers, jobs, services::providers::ProviderService, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cashops_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Connect to database
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let providers = ProviderService::from_env();
    let state = AppState {
        db: db.clone(),
        providers: providers.clone(),
    };

    // Nightly position sweep
    jobs::daily_position_sync::start_daily_position_job(db, providers).await;

    // Build router
    let app = Router::new()
        .route("/", get(hello_cashops))
        .route(
            "/api/cash-requests",
            post(handlers::cash_request::submit_cash_request)
                .get(handlers::cash_request::list_cash_requests),
        )
        .route(
            "/api/cash-requests/{id}/approve",
            post(handlers::cash_request::approve_cash_request),
        )
        .route(
            "/api/cash-requests/{id}/reject",
            post(handlers::cash_request::reject_cash_request),
        )
        .route(
            "/api/deliveries/{id}/verify",
            post(handlers::cash_request::verify_cash_delivery),
        )
        .route(
            "/api/eod-reports",
            post(handlers::eod_report::submit_eod_report)
                .get(handlers::eod_report::list_eod_reports),
        )
        .route(
            "/api/eod-reports/{id}",
            get(handlers::eod_report::get_eod_report),
        )
        .route(
            "/api/daily-position/calculate",
            post(handlers::daily_position::calculate_daily_position),
        )
        .route(
            "/api/daily-position",
            get(handlers::daily_position::get_daily_position),
        )
        .route("/api/locations", get(handlers::location::list_locations))
        .route(
            "/api/locations/{id}/limits",
            get(handlers::location::get_location_limits)
                .put(handlers::location::update_location_limits),
        )
        .route(
            "/api/emergency-access",
            post(handlers::emergency_access::request_emergency_access),
        )
        .route(
            "/api/emergency-access/pending",
            get(handlers::emergency_access::list_pending_emergency_requests),
        )
        .route(
            "/api/emergency-access/{id}/review",
            post(handlers::emergency_access::review_emergency_request),
        )
        .route(
            "/api/settings",
            get(handlers::settings::get_settings).put(handlers::settings::update_settings),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

async fn hello_cashops() -> &'static str {
    "CashOps backend is up"
}
