use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: i64,
    pub customer_id: i64,
    pub mechanic_id: i64,
    pub service_description: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub preferred_date: NaiveDateTime,
    pub status: BookingStatus,
    pub estimated_duration: Option<i64>,
    pub total_cost: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub accepted_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    // Stored rows may carry this value but no action produces it.
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Rejected => "rejected",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "accepted" => BookingStatus::Accepted,
            "rejected" => BookingStatus::Rejected,
            "in_progress" => BookingStatus::InProgress,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}

/// The four status-changing actions a party to a booking may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Accept,
    Reject,
    Complete,
    Cancel,
}

impl BookingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingAction::Accept => "accept",
            BookingAction::Reject => "reject",
            BookingAction::Complete => "complete",
            BookingAction::Cancel => "cancel",
        }
    }

    pub fn target(&self) -> BookingStatus {
        match self {
            BookingAction::Accept => BookingStatus::Accepted,
            BookingAction::Reject => BookingStatus::Rejected,
            BookingAction::Complete => BookingStatus::Completed,
            BookingAction::Cancel => BookingStatus::Cancelled,
        }
    }

    /// Accept, reject and cancel act on a pending booking; complete acts
    /// on an accepted one. Everything else is a dead end.
    pub fn allowed_from(&self, status: BookingStatus) -> bool {
        matches!(
            (self, status),
            (BookingAction::Accept, BookingStatus::Pending)
                | (BookingAction::Reject, BookingStatus::Pending)
                | (BookingAction::Cancel, BookingStatus::Pending)
                | (BookingAction::Complete, BookingStatus::Accepted)
        )
    }
}
