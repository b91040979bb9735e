use chrono::NaiveDateTime;
use serde::Serialize;

/// Service-provider profile attached one-to-one to a user with the
/// mechanic role. `is_verified` is flipped only by admin action;
/// `total_jobs` only by booking completion.
#[derive(Debug, Clone, Serialize)]
pub struct Mechanic {
    pub id: i64,
    pub user_id: i64,
    pub skills: String,
    pub city: String,
    pub pincode: String,
    pub address: String,
    pub hourly_rate: f64,
    pub is_available: bool,
    pub is_verified: bool,
    pub rating: f64,
    pub total_jobs: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

