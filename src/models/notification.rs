use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub booking_id: Option<i64>,
    pub is_read: bool,
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    BookingRequest,
    BookingAccepted,
    BookingRejected,
    BookingCompleted,
    BookingCancelled,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::BookingRequest => "booking_request",
            NotificationKind::BookingAccepted => "booking_accepted",
            NotificationKind::BookingRejected => "booking_rejected",
            NotificationKind::BookingCompleted => "booking_completed",
            NotificationKind::BookingCancelled => "booking_cancelled",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "booking_accepted" => NotificationKind::BookingAccepted,
            "booking_rejected" => NotificationKind::BookingRejected,
            "booking_completed" => NotificationKind::BookingCompleted,
            "booking_cancelled" => NotificationKind::BookingCancelled,
            _ => NotificationKind::BookingRequest,
        }
    }
}
