use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::auth::{authenticate, require_role};
use crate::db::queries::{self, MechanicProfile};
use crate::errors::AppError;
use crate::models::{Booking, BookingAction, Mechanic, Role};
use crate::services::{booking, mechanic};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProfileRequest {
    pub skills: String,
    pub city: String,
    pub pincode: String,
    pub address: String,
    pub hourly_rate: f64,
}

impl ProfileRequest {
    fn into_profile(self) -> MechanicProfile {
        MechanicProfile {
            skills: self.skills,
            city: self.city,
            pincode: self.pincode,
            address: self.address,
            hourly_rate: self.hourly_rate,
        }
    }
}

// POST /api/mechanic/profile
pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ProfileRequest>,
) -> Result<Json<Mechanic>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Mechanic)?;

    let created = {
        let db = state.db.lock().unwrap();
        mechanic::create_profile(&db, auth.id, &body.into_profile())?
    };

    tracing::info!(mechanic_id = created.id, user_id = auth.id, "mechanic profile created");

    Ok(Json(created))
}

// PUT /api/mechanic/profile
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ProfileRequest>,
) -> Result<Json<Mechanic>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Mechanic)?;

    let updated = {
        let db = state.db.lock().unwrap();
        mechanic::update_profile(&db, auth.id, &body.into_profile())?
    };
    Ok(Json(updated))
}

// GET /api/mechanic/profile
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Mechanic>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Mechanic)?;

    let profile = {
        let db = state.db.lock().unwrap();
        mechanic::profile_for_user(&db, auth.id)?
    };
    Ok(Json(profile))
}

// PUT /api/mechanic/availability
pub async fn toggle_availability(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Mechanic>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Mechanic)?;

    let updated = {
        let db = state.db.lock().unwrap();
        mechanic::toggle_availability(&db, auth.id)?
    };

    tracing::info!(
        mechanic_id = updated.id,
        is_available = updated.is_available,
        "availability toggled"
    );

    Ok(Json(updated))
}

// GET /api/mechanic/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Mechanic)?;

    let bookings = {
        let db = state.db.lock().unwrap();
        let profile = mechanic::profile_for_user(&db, auth.id)?;
        queries::bookings_for_mechanic(&db, profile.id)?
    };
    Ok(Json(bookings))
}

// GET /api/mechanic/bookings/pending
pub async fn pending_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Mechanic)?;

    let bookings = {
        let db = state.db.lock().unwrap();
        let profile = mechanic::profile_for_user(&db, auth.id)?;
        queries::pending_bookings_for_mechanic(&db, profile.id)?
    };
    Ok(Json(bookings))
}

// PUT /api/mechanic/bookings/:id/accept
pub async fn accept_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Mechanic)?;

    let booking = booking::transition(&state, id, &auth, BookingAction::Accept).await?;
    Ok(Json(booking))
}

// PUT /api/mechanic/bookings/:id/reject
pub async fn reject_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Mechanic)?;

    let booking = booking::transition(&state, id, &auth, BookingAction::Reject).await?;
    Ok(Json(booking))
}

// PUT /api/mechanic/bookings/:id/complete
pub async fn complete_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    let auth = authenticate(&state, &headers)?;
    require_role(&auth, Role::Mechanic)?;

    let booking = booking::transition(&state, id, &auth, BookingAction::Complete).await?;
    Ok(Json(booking))
}
