use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::auth::{authenticate, require_role};
use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, Mechanic, Role, User};
use crate::services::mechanic;
use crate::state::AppState;

// GET /api/admin/users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<User>>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Admin)?;

    let users = {
        let db = state.db.lock().unwrap();
        queries::list_users(&db)?
    };
    Ok(Json(users))
}

// PUT /api/admin/users/:id/deactivate
pub async fn deactivate_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Admin)?;

    let updated = {
        let db = state.db.lock().unwrap();
        queries::set_user_active(&db, id, false)?
    };
    if !updated {
        return Err(AppError::NotFound("user not found".to_string()));
    }

    tracing::info!(user_id = id, admin_id = auth.id, "user deactivated");

    Ok(Json(serde_json::json!({ "ok": true })))
}

// PUT /api/admin/users/:id/activate
pub async fn activate_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Admin)?;

    let updated = {
        let db = state.db.lock().unwrap();
        queries::set_user_active(&db, id, true)?
    };
    if !updated {
        return Err(AppError::NotFound("user not found".to_string()));
    }

    tracing::info!(user_id = id, admin_id = auth.id, "user activated");

    Ok(Json(serde_json::json!({ "ok": true })))
}

// GET /api/admin/mechanics
pub async fn list_mechanics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Mechanic>>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Admin)?;

    let mechanics = {
        let db = state.db.lock().unwrap();
        queries::list_mechanics(&db)?
    };
    Ok(Json(mechanics))
}

// PUT /api/admin/mechanics/:id/verify
pub async fn verify_mechanic(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Mechanic>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Admin)?;

    let verified = {
        let db = state.db.lock().unwrap();
        mechanic::verify(&db, id)?
    };

    tracing::info!(mechanic_id = id, admin_id = auth.id, "mechanic verified");

    Ok(Json(verified))
}

// GET /api/admin/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Admin)?;

    let bookings = {
        let db = state.db.lock().unwrap();
        queries::list_bookings(&db)?
    };
    Ok(Json(bookings))
}

// GET /api/admin/dashboard
#[derive(Serialize)]
pub struct DashboardResponse {
    total_users: i64,
    total_customers: i64,
    total_mechanics: i64,
    verified_mechanics: i64,
    available_mechanics: i64,
    total_bookings: i64,
    pending_bookings: i64,
    accepted_bookings: i64,
    rejected_bookings: i64,
    in_progress_bookings: i64,
    completed_bookings: i64,
    cancelled_bookings: i64,
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Admin)?;

    let stats = {
        let db = state.db.lock().unwrap();
        queries::get_dashboard_stats(&db)?
    };

    Ok(Json(DashboardResponse {
        total_users: stats.total_users,
        total_customers: stats.total_customers,
        total_mechanics: stats.total_mechanics,
        verified_mechanics: stats.verified_mechanics,
        available_mechanics: stats.available_mechanics,
        total_bookings: stats.total_bookings,
        pending_bookings: stats.pending_bookings,
        accepted_bookings: stats.accepted_bookings,
        rejected_bookings: stats.rejected_bookings,
        in_progress_bookings: stats.in_progress_bookings,
        completed_bookings: stats.completed_bookings,
        cancelled_bookings: stats.cancelled_bookings,
    }))
}
