use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use rusqlite::Connection;
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingAction, BookingStatus, Mechanic, NotificationKind};
use crate::services::notification;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub mechanic_id: i64,
    pub service_description: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub preferred_date: NaiveDateTime,
    pub estimated_duration: Option<i64>,
    pub notes: Option<String>,
}

/// Capability check: may `actor` apply `action` to this booking at all?
/// Accept, reject and complete belong to the assigned mechanic; cancel to
/// the owning customer. Status is not consulted here; that is the state
/// machine's job.
pub fn can_perform(
    actor: &AuthUser,
    booking: &Booking,
    mechanic: &Mechanic,
    action: BookingAction,
) -> bool {
    match action {
        BookingAction::Accept | BookingAction::Reject | BookingAction::Complete => {
            mechanic.user_id == actor.id
        }
        BookingAction::Cancel => booking.customer_id == actor.id,
    }
}

/// Create a pending booking against a verified, available mechanic and
/// notify the mechanic. Cost is locked in at creation from the mechanic's
/// current hourly rate when a duration estimate is given.
pub async fn create_booking(
    state: &Arc<AppState>,
    customer_id: i64,
    req: &BookingRequest,
) -> Result<Booking, AppError> {
    if req.service_description.trim().is_empty() {
        return Err(AppError::Validation(
            "service_description is required".to_string(),
        ));
    }
    if matches!(req.estimated_duration, Some(h) if h <= 0) {
        return Err(AppError::Validation(
            "estimated_duration must be positive".to_string(),
        ));
    }

    let (booking, customer_name, mechanic_user_id) = {
        let db = state.db.lock().unwrap();

        let customer = queries::get_user(&db, customer_id)?
            .ok_or_else(|| AppError::NotFound("customer not found".to_string()))?;
        let mechanic = queries::get_mechanic(&db, req.mechanic_id)?
            .ok_or_else(|| AppError::NotFound("mechanic not found".to_string()))?;

        if !mechanic.is_verified {
            return Err(AppError::InvalidState(
                "mechanic is not verified".to_string(),
            ));
        }
        if !mechanic.is_available {
            return Err(AppError::InvalidState(
                "mechanic is not available".to_string(),
            ));
        }

        let now = Utc::now().naive_utc();
        let total_cost = req
            .estimated_duration
            .map(|hours| mechanic.hourly_rate * hours as f64);

        let mut booking = Booking {
            id: 0,
            customer_id,
            mechanic_id: mechanic.id,
            service_description: req.service_description.trim().to_string(),
            address: req.address.clone(),
            city: req.city.clone(),
            pincode: req.pincode.clone(),
            preferred_date: req.preferred_date,
            status: BookingStatus::Pending,
            estimated_duration: req.estimated_duration,
            total_cost,
            notes: req.notes.clone(),
            created_at: now,
            updated_at: now,
            accepted_at: None,
            completed_at: None,
        };
        booking.id = queries::create_booking(&db, &booking)?;

        (booking, customer.full_name(), mechanic.user_id)
    };

    notification::notify(
        state,
        mechanic_user_id,
        NotificationKind::BookingRequest,
        "New Booking Request",
        &format!("New booking request from {customer_name}"),
        Some(booking.id),
    )
    .await;

    Ok(booking)
}

/// Apply a status-changing action. Ordering of failures is fixed:
/// missing booking, then capability, then state machine. The row update,
/// timestamp stamps and the completion job counter all commit in one
/// transaction; the counterparty notification goes out after commit.
pub async fn transition(
    state: &Arc<AppState>,
    booking_id: i64,
    actor: &AuthUser,
    action: BookingAction,
) -> Result<Booking, AppError> {
    let (booking, customer, mechanic_user) = {
        let mut db = state.db.lock().unwrap();
        let tx = db.transaction()?;

        let booking = queries::get_booking(&tx, booking_id)?
            .ok_or_else(|| AppError::NotFound("booking not found".to_string()))?;
        let mechanic = queries::get_mechanic(&tx, booking.mechanic_id)?
            .ok_or_else(|| AppError::NotFound("mechanic not found".to_string()))?;

        if !can_perform(actor, &booking, &mechanic, action) {
            return Err(AppError::Forbidden(
                "not a party allowed to perform this action".to_string(),
            ));
        }
        if !action.allowed_from(booking.status) {
            return Err(AppError::InvalidState(format!(
                "cannot {} a booking in status {}",
                action.as_str(),
                booking.status.as_str()
            )));
        }

        if !queries::update_booking_status(&tx, booking_id, booking.status, action.target())? {
            return Err(AppError::InvalidState(
                "booking status changed under us".to_string(),
            ));
        }
        if action == BookingAction::Complete {
            queries::increment_mechanic_jobs(&tx, mechanic.id)?;
        }

        let customer = queries::get_user(&tx, booking.customer_id)?
            .ok_or_else(|| AppError::NotFound("customer not found".to_string()))?;
        let mechanic_user = queries::get_user(&tx, mechanic.user_id)?
            .ok_or_else(|| AppError::NotFound("mechanic user not found".to_string()))?;

        tx.commit()?;

        let booking = queries::get_booking(&db, booking_id)?
            .ok_or_else(|| AppError::NotFound("booking not found".to_string()))?;

        (booking, customer, mechanic_user)
    };

    let (recipient, kind, title, message) = match action {
        BookingAction::Accept => (
            customer.id,
            NotificationKind::BookingAccepted,
            "Booking Accepted",
            format!("{} accepted your booking", mechanic_user.full_name()),
        ),
        BookingAction::Reject => (
            customer.id,
            NotificationKind::BookingRejected,
            "Booking Rejected",
            format!("{} rejected your booking", mechanic_user.full_name()),
        ),
        BookingAction::Complete => (
            customer.id,
            NotificationKind::BookingCompleted,
            "Booking Completed",
            format!("{} marked your booking as completed", mechanic_user.full_name()),
        ),
        BookingAction::Cancel => (
            mechanic_user.id,
            NotificationKind::BookingCancelled,
            "Booking Cancelled",
            format!("{} cancelled the booking", customer.full_name()),
        ),
    };

    notification::notify(state, recipient, kind, title, &message, Some(booking.id)).await;

    Ok(booking)
}

/// Booking by id, visible only to its two parties. Outsiders get the
/// same NotFound as a missing row.
pub fn get_for_actor(
    conn: &Connection,
    booking_id: i64,
    actor: &AuthUser,
) -> Result<Booking, AppError> {
    let booking = queries::get_booking(conn, booking_id)?
        .ok_or_else(|| AppError::NotFound("booking not found".to_string()))?;

    if booking.customer_id == actor.id {
        return Ok(booking);
    }
    if let Some(mechanic) = queries::get_mechanic_by_user(conn, actor.id)? {
        if mechanic.id == booking.mechanic_id {
            return Ok(booking);
        }
    }

    Err(AppError::NotFound("booking not found".to_string()))
}
