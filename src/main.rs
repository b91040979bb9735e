use std::sync::{Arc, Mutex};

use axum::routing::{get, post, put};
use axum::Router;
use rusqlite::Connection;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use wrenchly::auth;
use wrenchly::config::AppConfig;
use wrenchly::db::{self, queries};
use wrenchly::handlers;
use wrenchly::models::Role;
use wrenchly::services::push::bridge::BridgePushProvider;
use wrenchly::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    seed_admin(&conn, &config)?;

    if config.push_bridge_url.is_empty() {
        tracing::info!("push bridge not configured, notifications stay in-app");
    } else {
        tracing::info!("using push bridge at {}", config.push_bridge_url);
    }
    let push = BridgePushProvider::new(
        config.push_bridge_url.clone(),
        config.push_bridge_secret.clone(),
    );

    let (events_tx, _) = broadcast::channel(256);

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        push: Box::new(push),
        events_tx,
    });

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route(
            "/api/customer/mechanics",
            get(handlers::customer::list_mechanics),
        )
        .route(
            "/api/customer/mechanics/city/:city",
            get(handlers::customer::mechanics_by_city),
        )
        .route(
            "/api/customer/mechanics/pincode/:pincode",
            get(handlers::customer::mechanics_by_pincode),
        )
        .route(
            "/api/customer/mechanics/search",
            get(handlers::customer::search_mechanics),
        )
        .route(
            "/api/customer/mechanics/:id",
            get(handlers::customer::get_mechanic),
        )
        .route(
            "/api/customer/bookings",
            post(handlers::customer::create_booking).get(handlers::customer::list_bookings),
        )
        .route(
            "/api/customer/bookings/:id",
            get(handlers::customer::get_booking),
        )
        .route(
            "/api/customer/bookings/:id/cancel",
            put(handlers::customer::cancel_booking),
        )
        .route(
            "/api/mechanic/profile",
            post(handlers::mechanic::create_profile)
                .put(handlers::mechanic::update_profile)
                .get(handlers::mechanic::get_profile),
        )
        .route(
            "/api/mechanic/availability",
            put(handlers::mechanic::toggle_availability),
        )
        .route(
            "/api/mechanic/bookings",
            get(handlers::mechanic::list_bookings),
        )
        .route(
            "/api/mechanic/bookings/pending",
            get(handlers::mechanic::pending_bookings),
        )
        .route(
            "/api/mechanic/bookings/:id/accept",
            put(handlers::mechanic::accept_booking),
        )
        .route(
            "/api/mechanic/bookings/:id/reject",
            put(handlers::mechanic::reject_booking),
        )
        .route(
            "/api/mechanic/bookings/:id/complete",
            put(handlers::mechanic::complete_booking),
        )
        .route("/api/notifications", get(handlers::notifications::list))
        .route(
            "/api/notifications/unread",
            get(handlers::notifications::list_unread),
        )
        .route(
            "/api/notifications/unread/count",
            get(handlers::notifications::unread_count),
        )
        .route(
            "/api/notifications/:id/read",
            put(handlers::notifications::mark_read),
        )
        .route(
            "/api/notifications/read-all",
            put(handlers::notifications::mark_all_read),
        )
        .route(
            "/api/notifications/events",
            get(handlers::notifications::events_stream),
        )
        .route("/api/admin/users", get(handlers::admin::list_users))
        .route(
            "/api/admin/users/:id/deactivate",
            put(handlers::admin::deactivate_user),
        )
        .route(
            "/api/admin/users/:id/activate",
            put(handlers::admin::activate_user),
        )
        .route("/api/admin/mechanics", get(handlers::admin::list_mechanics))
        .route(
            "/api/admin/mechanics/:id/verify",
            put(handlers::admin::verify_mechanic),
        )
        .route("/api/admin/bookings", get(handlers::admin::list_bookings))
        .route("/api/admin/dashboard", get(handlers::admin::dashboard))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the admin account named in the environment if it does not
/// exist yet. Admins cannot register through the API.
fn seed_admin(conn: &Connection, config: &AppConfig) -> anyhow::Result<()> {
    if config.admin_username.is_empty() || config.admin_password.is_empty() {
        return Ok(());
    }
    if queries::username_exists(conn, &config.admin_username)? {
        return Ok(());
    }

    let password_hash = auth::hash_password(&config.admin_password)?;
    queries::create_user(
        conn,
        &queries::NewUser {
            username: config.admin_username.clone(),
            email: config.admin_email.clone(),
            password_hash,
            role: Role::Admin,
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            phone: None,
            city: None,
            pincode: None,
        },
    )?;

    tracing::info!(username = %config.admin_username, "seeded admin account");
    Ok(())
}
