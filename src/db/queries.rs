use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Booking, BookingStatus, Mechanic, Notification, NotificationKind, Role, User};

// ── Users ──

pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

pub fn create_user(conn: &Connection, user: &NewUser) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO users (username, email, password_hash, role, first_name, last_name, phone, city, pincode)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user.username,
            user.email,
            user.password_hash,
            user.role.as_str(),
            user.first_name,
            user.last_name,
            user.phone,
            user.city,
            user.pincode,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_user(conn: &Connection, id: i64) -> anyhow::Result<Option<User>> {
    let result = conn.query_row(
        "SELECT id, username, email, password_hash, role, first_name, last_name, phone, city, pincode, is_active, created_at, updated_at
         FROM users WHERE id = ?1",
        params![id],
        |row| Ok(parse_user_row(row)),
    );

    match result {
        Ok(user) => Ok(Some(user?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_user_by_username(conn: &Connection, username: &str) -> anyhow::Result<Option<User>> {
    let result = conn.query_row(
        "SELECT id, username, email, password_hash, role, first_name, last_name, phone, city, pincode, is_active, created_at, updated_at
         FROM users WHERE username = ?1",
        params![username],
        |row| Ok(parse_user_row(row)),
    );

    match result {
        Ok(user) => Ok(Some(user?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn username_exists(conn: &Connection, username: &str) -> anyhow::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE username = ?1",
        params![username],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn email_exists(conn: &Connection, email: &str) -> anyhow::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE email = ?1",
        params![email],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn list_users(conn: &Connection) -> anyhow::Result<Vec<User>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, email, password_hash, role, first_name, last_name, phone, city, pincode, is_active, created_at, updated_at
         FROM users ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| Ok(parse_user_row(row)))?;

    let mut users = vec![];
    for row in rows {
        users.push(row??);
    }
    Ok(users)
}

pub fn set_user_active(conn: &Connection, id: i64, active: bool) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE users SET is_active = ?1, updated_at = datetime('now') WHERE id = ?2",
        params![active as i32, id],
    )?;
    Ok(count > 0)
}

fn parse_user_row(row: &rusqlite::Row) -> anyhow::Result<User> {
    let role_str: String = row.get(4)?;
    let created_at_str: String = row.get(11)?;
    let updated_at_str: String = row.get(12)?;

    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        role: Role::parse(&role_str),
        first_name: row.get(5)?,
        last_name: row.get(6)?,
        phone: row.get(7)?,
        city: row.get(8)?,
        pincode: row.get(9)?,
        is_active: row.get::<_, i32>(10)? != 0,
        created_at,
        updated_at,
    })
}

// ── Mechanics ──

pub struct MechanicProfile {
    pub skills: String,
    pub city: String,
    pub pincode: String,
    pub address: String,
    pub hourly_rate: f64,
}

pub fn create_mechanic(
    conn: &Connection,
    user_id: i64,
    profile: &MechanicProfile,
) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO mechanics (user_id, skills, city, pincode, address, hourly_rate)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            user_id,
            profile.skills,
            profile.city,
            profile.pincode,
            profile.address,
            profile.hourly_rate,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_mechanic(conn: &Connection, id: i64) -> anyhow::Result<Option<Mechanic>> {
    let result = conn.query_row(
        "SELECT id, user_id, skills, city, pincode, address, hourly_rate, is_available, is_verified, rating, total_jobs, created_at, updated_at
         FROM mechanics WHERE id = ?1",
        params![id],
        |row| Ok(parse_mechanic_row(row)),
    );

    match result {
        Ok(mechanic) => Ok(Some(mechanic?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_mechanic_by_user(conn: &Connection, user_id: i64) -> anyhow::Result<Option<Mechanic>> {
    let result = conn.query_row(
        "SELECT id, user_id, skills, city, pincode, address, hourly_rate, is_available, is_verified, rating, total_jobs, created_at, updated_at
         FROM mechanics WHERE user_id = ?1",
        params![user_id],
        |row| Ok(parse_mechanic_row(row)),
    );

    match result {
        Ok(mechanic) => Ok(Some(mechanic?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn update_mechanic(
    conn: &Connection,
    user_id: i64,
    profile: &MechanicProfile,
) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE mechanics SET skills = ?1, city = ?2, pincode = ?3, address = ?4, hourly_rate = ?5, updated_at = datetime('now')
         WHERE user_id = ?6",
        params![
            profile.skills,
            profile.city,
            profile.pincode,
            profile.address,
            profile.hourly_rate,
            user_id,
        ],
    )?;
    Ok(count > 0)
}

pub fn set_mechanic_availability(
    conn: &Connection,
    user_id: i64,
    available: bool,
) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE mechanics SET is_available = ?1, updated_at = datetime('now') WHERE user_id = ?2",
        params![available as i32, user_id],
    )?;
    Ok(count > 0)
}

pub fn set_mechanic_verified(conn: &Connection, id: i64) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE mechanics SET is_verified = 1, updated_at = datetime('now') WHERE id = ?1",
        params![id],
    )?;
    Ok(count > 0)
}

pub fn increment_mechanic_jobs(conn: &Connection, id: i64) -> anyhow::Result<()> {
    conn.execute(
        "UPDATE mechanics SET total_jobs = total_jobs + 1, updated_at = datetime('now') WHERE id = ?1",
        params![id],
    )?;
    Ok(())
}

pub fn list_mechanics(conn: &Connection) -> anyhow::Result<Vec<Mechanic>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, skills, city, pincode, address, hourly_rate, is_available, is_verified, rating, total_jobs, created_at, updated_at
         FROM mechanics ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| Ok(parse_mechanic_row(row)))?;

    let mut mechanics = vec![];
    for row in rows {
        mechanics.push(row??);
    }
    Ok(mechanics)
}

/// Customer-facing directory search. Only verified mechanics who have not
/// toggled themselves away are listed; filters stack onto that base.
pub fn search_available_mechanics(
    conn: &Connection,
    city: Option<&str>,
    pincode: Option<&str>,
    skill: Option<&str>,
) -> anyhow::Result<Vec<Mechanic>> {
    let mut sql = String::from(
        "SELECT id, user_id, skills, city, pincode, address, hourly_rate, is_available, is_verified, rating, total_jobs, created_at, updated_at
         FROM mechanics WHERE is_available = 1 AND is_verified = 1",
    );
    let mut params_vec: Vec<Box<dyn rusqlite::types::ToSql>> = vec![];

    if let Some(city) = city {
        params_vec.push(Box::new(city.to_string()));
        sql.push_str(&format!(" AND city = ?{}", params_vec.len()));
    }
    if let Some(pincode) = pincode {
        params_vec.push(Box::new(pincode.to_string()));
        sql.push_str(&format!(" AND pincode = ?{}", params_vec.len()));
    }
    if let Some(skill) = skill {
        params_vec.push(Box::new(format!("%{skill}%")));
        sql.push_str(&format!(" AND skills LIKE ?{}", params_vec.len()));
    }
    sql.push_str(" ORDER BY rating DESC, total_jobs DESC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let params_refs: Vec<&dyn rusqlite::types::ToSql> =
        params_vec.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(params_refs.as_slice(), |row| Ok(parse_mechanic_row(row)))?;

    let mut mechanics = vec![];
    for row in rows {
        mechanics.push(row??);
    }
    Ok(mechanics)
}

fn parse_mechanic_row(row: &rusqlite::Row) -> anyhow::Result<Mechanic> {
    let created_at_str: String = row.get(11)?;
    let updated_at_str: String = row.get(12)?;

    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Mechanic {
        id: row.get(0)?,
        user_id: row.get(1)?,
        skills: row.get(2)?,
        city: row.get(3)?,
        pincode: row.get(4)?,
        address: row.get(5)?,
        hourly_rate: row.get(6)?,
        is_available: row.get::<_, i32>(7)? != 0,
        is_verified: row.get::<_, i32>(8)? != 0,
        rating: row.get(9)?,
        total_jobs: row.get(10)?,
        created_at,
        updated_at,
    })
}

// ── Bookings ──

pub fn create_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<i64> {
    let preferred_date = booking.preferred_date.format("%Y-%m-%d %H:%M:%S").to_string();
    let created_at = booking.created_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let updated_at = booking.updated_at.format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO bookings (customer_id, mechanic_id, service_description, address, city, pincode, preferred_date, status, estimated_duration, total_cost, notes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            booking.customer_id,
            booking.mechanic_id,
            booking.service_description,
            booking.address,
            booking.city,
            booking.pincode,
            preferred_date,
            booking.status.as_str(),
            booking.estimated_duration,
            booking.total_cost,
            booking.notes,
            created_at,
            updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_booking(conn: &Connection, id: i64) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, customer_id, mechanic_id, service_description, address, city, pincode, preferred_date, status, estimated_duration, total_cost, notes, created_at, updated_at, accepted_at, completed_at
         FROM bookings WHERE id = ?1",
        params![id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn bookings_for_customer(conn: &Connection, customer_id: i64) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, customer_id, mechanic_id, service_description, address, city, pincode, preferred_date, status, estimated_duration, total_cost, notes, created_at, updated_at, accepted_at, completed_at
         FROM bookings WHERE customer_id = ?1 ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![customer_id], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn bookings_for_mechanic(conn: &Connection, mechanic_id: i64) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, customer_id, mechanic_id, service_description, address, city, pincode, preferred_date, status, estimated_duration, total_cost, notes, created_at, updated_at, accepted_at, completed_at
         FROM bookings WHERE mechanic_id = ?1 ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![mechanic_id], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn pending_bookings_for_mechanic(
    conn: &Connection,
    mechanic_id: i64,
) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, customer_id, mechanic_id, service_description, address, city, pincode, preferred_date, status, estimated_duration, total_cost, notes, created_at, updated_at, accepted_at, completed_at
         FROM bookings WHERE mechanic_id = ?1 AND status = 'pending' ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![mechanic_id], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn list_bookings(conn: &Connection) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, customer_id, mechanic_id, service_description, address, city, pincode, preferred_date, status, estimated_duration, total_cost, notes, created_at, updated_at, accepted_at, completed_at
         FROM bookings ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map([], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

/// Compare-and-set on status. Returns false when the row is missing or its
/// status no longer matches `expected`, i.e. a concurrent transition won.
pub fn update_booking_status(
    conn: &Connection,
    id: i64,
    expected: BookingStatus,
    new_status: BookingStatus,
) -> anyhow::Result<bool> {
    let now = Utc::now()
        .naive_utc()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    let sql = match new_status {
        BookingStatus::Accepted => {
            "UPDATE bookings SET status = ?1, updated_at = ?2, accepted_at = ?2 WHERE id = ?3 AND status = ?4"
        }
        BookingStatus::Completed => {
            "UPDATE bookings SET status = ?1, updated_at = ?2, completed_at = ?2 WHERE id = ?3 AND status = ?4"
        }
        _ => "UPDATE bookings SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4",
    };

    let count = conn.execute(
        sql,
        params![new_status.as_str(), now, id, expected.as_str()],
    )?;
    Ok(count > 0)
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let preferred_date_str: String = row.get(7)?;
    let status_str: String = row.get(8)?;
    let created_at_str: String = row.get(12)?;
    let updated_at_str: String = row.get(13)?;
    let accepted_at_str: Option<String> = row.get(14)?;
    let completed_at_str: Option<String> = row.get(15)?;

    let preferred_date = NaiveDateTime::parse_from_str(&preferred_date_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let accepted_at = accepted_at_str
        .and_then(|s| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").ok());
    let completed_at = completed_at_str
        .and_then(|s| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").ok());

    Ok(Booking {
        id: row.get(0)?,
        customer_id: row.get(1)?,
        mechanic_id: row.get(2)?,
        service_description: row.get(3)?,
        address: row.get(4)?,
        city: row.get(5)?,
        pincode: row.get(6)?,
        preferred_date,
        status: BookingStatus::parse(&status_str),
        estimated_duration: row.get(9)?,
        total_cost: row.get(10)?,
        notes: row.get(11)?,
        created_at,
        updated_at,
        accepted_at,
        completed_at,
    })
}

// ── Notifications ──

pub fn insert_notification(
    conn: &Connection,
    user_id: i64,
    title: &str,
    message: &str,
    kind: &NotificationKind,
    booking_id: Option<i64>,
) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO notifications (user_id, title, message, kind, booking_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, title, message, kind.as_str(), booking_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_notification(conn: &Connection, id: i64) -> anyhow::Result<Option<Notification>> {
    let result = conn.query_row(
        "SELECT id, user_id, title, message, kind, booking_id, is_read, created_at
         FROM notifications WHERE id = ?1",
        params![id],
        |row| {
            let kind_str: String = row.get(4)?;
            Ok(Notification {
                id: row.get(0)?,
                user_id: row.get(1)?,
                title: row.get(2)?,
                message: row.get(3)?,
                kind: NotificationKind::parse(&kind_str),
                booking_id: row.get(5)?,
                is_read: row.get::<_, i32>(6)? != 0,
                created_at: row.get(7)?,
            })
        },
    );

    match result {
        Ok(notification) => Ok(Some(notification)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn notifications_for_user(conn: &Connection, user_id: i64) -> anyhow::Result<Vec<Notification>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, title, message, kind, booking_id, is_read, created_at
         FROM notifications WHERE user_id = ?1 ORDER BY id DESC",
    )?;

    let rows = stmt.query_map(params![user_id], |row| {
        let kind_str: String = row.get(4)?;
        Ok(Notification {
            id: row.get(0)?,
            user_id: row.get(1)?,
            title: row.get(2)?,
            message: row.get(3)?,
            kind: NotificationKind::parse(&kind_str),
            booking_id: row.get(5)?,
            is_read: row.get::<_, i32>(6)? != 0,
            created_at: row.get(7)?,
        })
    })?;

    let mut notifications = vec![];
    for row in rows {
        notifications.push(row?);
    }
    Ok(notifications)
}

pub fn unread_notifications_for_user(
    conn: &Connection,
    user_id: i64,
) -> anyhow::Result<Vec<Notification>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, title, message, kind, booking_id, is_read, created_at
         FROM notifications WHERE user_id = ?1 AND is_read = 0 ORDER BY id DESC",
    )?;

    let rows = stmt.query_map(params![user_id], |row| {
        let kind_str: String = row.get(4)?;
        Ok(Notification {
            id: row.get(0)?,
            user_id: row.get(1)?,
            title: row.get(2)?,
            message: row.get(3)?,
            kind: NotificationKind::parse(&kind_str),
            booking_id: row.get(5)?,
            is_read: row.get::<_, i32>(6)? != 0,
            created_at: row.get(7)?,
        })
    })?;

    let mut notifications = vec![];
    for row in rows {
        notifications.push(row?);
    }
    Ok(notifications)
}

pub fn unread_notification_count(conn: &Connection, user_id: i64) -> anyhow::Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM notifications WHERE user_id = ?1 AND is_read = 0",
        params![user_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn mark_notification_read(conn: &Connection, id: i64) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE notifications SET is_read = 1 WHERE id = ?1",
        params![id],
    )?;
    Ok(count > 0)
}

pub fn mark_all_notifications_read(conn: &Connection, user_id: i64) -> anyhow::Result<usize> {
    let count = conn.execute(
        "UPDATE notifications SET is_read = 1 WHERE user_id = ?1 AND is_read = 0",
        params![user_id],
    )?;
    Ok(count)
}

// ── Dashboard ──

pub struct DashboardStats {
    pub total_users: i64,
    pub total_customers: i64,
    pub total_mechanics: i64,
    pub verified_mechanics: i64,
    pub available_mechanics: i64,
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub accepted_bookings: i64,
    pub rejected_bookings: i64,
    pub in_progress_bookings: i64,
    pub completed_bookings: i64,
    pub cancelled_bookings: i64,
}

pub fn get_dashboard_stats(conn: &Connection) -> anyhow::Result<DashboardStats> {
    let total_users: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .unwrap_or(0);

    let total_mechanics: i64 = conn
        .query_row("SELECT COUNT(*) FROM mechanics", [], |row| row.get(0))
        .unwrap_or(0);

    let verified_mechanics: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM mechanics WHERE is_verified = 1",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    let available_mechanics: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM mechanics WHERE is_available = 1",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    let total_bookings: i64 = conn
        .query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))
        .unwrap_or(0);

    Ok(DashboardStats {
        total_users,
        total_customers: count_users_with_role(conn, "customer"),
        total_mechanics,
        verified_mechanics,
        available_mechanics,
        total_bookings,
        pending_bookings: count_bookings_with_status(conn, "pending"),
        accepted_bookings: count_bookings_with_status(conn, "accepted"),
        rejected_bookings: count_bookings_with_status(conn, "rejected"),
        in_progress_bookings: count_bookings_with_status(conn, "in_progress"),
        completed_bookings: count_bookings_with_status(conn, "completed"),
        cancelled_bookings: count_bookings_with_status(conn, "cancelled"),
    })
}

fn count_users_with_role(conn: &Connection, role: &str) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM users WHERE role = ?1",
        params![role],
        |row| row.get(0),
    )
    .unwrap_or(0)
}

fn count_bookings_with_status(conn: &Connection, status: &str) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM bookings WHERE status = ?1",
        params![status],
        |row| row.get(0),
    )
    .unwrap_or(0)
}
