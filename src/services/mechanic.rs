use rusqlite::Connection;

use crate::db::queries::{self, MechanicProfile};
use crate::errors::AppError;
use crate::models::{Mechanic, Role};

/// One profile per mechanic account. The user row must already exist
/// and carry the mechanic role; admins verify the profile afterwards.
pub fn create_profile(
    conn: &Connection,
    user_id: i64,
    profile: &MechanicProfile,
) -> Result<Mechanic, AppError> {
    validate_profile(profile)?;

    let user = queries::get_user(conn, user_id)?
        .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

    if user.role != Role::Mechanic {
        return Err(AppError::InvalidState(
            "only mechanic accounts can create a profile".to_string(),
        ));
    }

    if queries::get_mechanic_by_user(conn, user_id)?.is_some() {
        return Err(AppError::Conflict(
            "mechanic profile already exists".to_string(),
        ));
    }

    let id = queries::create_mechanic(conn, user_id, profile)?;
    queries::get_mechanic(conn, id)?
        .ok_or_else(|| AppError::Internal("mechanic profile missing after insert".to_string()))
}

pub fn update_profile(
    conn: &Connection,
    user_id: i64,
    profile: &MechanicProfile,
) -> Result<Mechanic, AppError> {
    validate_profile(profile)?;

    if !queries::update_mechanic(conn, user_id, profile)? {
        return Err(AppError::NotFound(
            "mechanic profile not found".to_string(),
        ));
    }
    profile_for_user(conn, user_id)
}

pub fn profile_for_user(conn: &Connection, user_id: i64) -> Result<Mechanic, AppError> {
    queries::get_mechanic_by_user(conn, user_id)?
        .ok_or_else(|| AppError::NotFound("mechanic profile not found".to_string()))
}

fn validate_profile(profile: &MechanicProfile) -> Result<(), AppError> {
    if profile.skills.trim().is_empty() {
        return Err(AppError::Validation("skills are required".to_string()));
    }
    if profile.hourly_rate <= 0.0 {
        return Err(AppError::Validation(
            "hourly_rate must be positive".to_string(),
        ));
    }
    Ok(())
}

pub fn toggle_availability(conn: &Connection, user_id: i64) -> Result<Mechanic, AppError> {
    let current = profile_for_user(conn, user_id)?;
    queries::set_mechanic_availability(conn, user_id, !current.is_available)?;
    profile_for_user(conn, user_id)
}

/// Admin action; the only writer of is_verified.
pub fn verify(conn: &Connection, mechanic_id: i64) -> Result<Mechanic, AppError> {
    if !queries::set_mechanic_verified(conn, mechanic_id)? {
        return Err(AppError::NotFound("mechanic not found".to_string()));
    }
    queries::get_mechanic(conn, mechanic_id)?
        .ok_or_else(|| AppError::NotFound("mechanic not found".to_string()))
}
