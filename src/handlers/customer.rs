use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::auth::{authenticate, require_role};
use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingAction, Mechanic, Role};
use crate::services::booking::{self, BookingRequest};
use crate::state::AppState;

// GET /api/customer/mechanics
pub async fn list_mechanics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Mechanic>>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Customer)?;

    let mechanics = {
        let db = state.db.lock().unwrap();
        queries::search_available_mechanics(&db, None, None, None)?
    };
    Ok(Json(mechanics))
}

// GET /api/customer/mechanics/city/:city
pub async fn mechanics_by_city(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(city): Path<String>,
) -> Result<Json<Vec<Mechanic>>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Customer)?;

    let mechanics = {
        let db = state.db.lock().unwrap();
        queries::search_available_mechanics(&db, Some(&city), None, None)?
    };
    Ok(Json(mechanics))
}

// GET /api/customer/mechanics/pincode/:pincode
pub async fn mechanics_by_pincode(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(pincode): Path<String>,
) -> Result<Json<Vec<Mechanic>>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Customer)?;

    let mechanics = {
        let db = state.db.lock().unwrap();
        queries::search_available_mechanics(&db, None, Some(&pincode), None)?
    };
    Ok(Json(mechanics))
}

// GET /api/customer/mechanics/search?skill=
#[derive(Deserialize)]
pub struct SkillQuery {
    pub skill: Option<String>,
}

pub async fn search_mechanics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SkillQuery>,
) -> Result<Json<Vec<Mechanic>>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Customer)?;

    let skill = query.skill.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let mechanics = {
        let db = state.db.lock().unwrap();
        queries::search_available_mechanics(&db, None, None, skill)?
    };
    Ok(Json(mechanics))
}

// GET /api/customer/mechanics/:id
pub async fn get_mechanic(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Mechanic>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Customer)?;

    let mechanic = {
        let db = state.db.lock().unwrap();
        queries::get_mechanic(&db, id)?
    };
    let mechanic = mechanic.ok_or_else(|| AppError::NotFound("mechanic not found".to_string()))?;
    Ok(Json(mechanic))
}

// POST /api/customer/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<BookingRequest>,
) -> Result<Json<Booking>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Customer)?;

    let booking = booking::create_booking(&state, auth.id, &body).await?;

    tracing::info!(
        booking_id = booking.id,
        customer_id = auth.id,
        mechanic_id = booking.mechanic_id,
        "booking created"
    );

    Ok(Json(booking))
}

// GET /api/customer/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Customer)?;

    let bookings = {
        let db = state.db.lock().unwrap();
        queries::bookings_for_customer(&db, auth.id)?
    };
    Ok(Json(bookings))
}

// GET /api/customer/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Customer)?;

    let booking = {
        let db = state.db.lock().unwrap();
        booking::get_for_actor(&db, id, &auth)?
    };
    Ok(Json(booking))
}

// PUT /api/customer/bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Customer)?;

    let booking = booking::transition(&state, id, &auth, BookingAction::Cancel).await?;
    Ok(Json(booking))
}
