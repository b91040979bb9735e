use std::sync::Arc;

use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Notification, NotificationKind};
use crate::state::AppState;

/// Persist a notification for `recipient`, then fan it out: once to the
/// in-process broadcast channel for SSE subscribers and once to the push
/// bridge. Delivery is best effort: a failed send is logged and the
/// stored row stands.
pub async fn notify(
    state: &Arc<AppState>,
    recipient: i64,
    kind: NotificationKind,
    title: &str,
    message: &str,
    booking_id: Option<i64>,
) {
    let inserted = {
        let db = state.db.lock().unwrap();
        queries::insert_notification(&db, recipient, title, message, &kind, booking_id)
    };

    let id = match inserted {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, user_id = recipient, "failed to persist notification");
            return;
        }
    };

    let notification = Notification {
        id,
        user_id: recipient,
        title: title.to_string(),
        message: message.to_string(),
        kind,
        booking_id,
        is_read: false,
        created_at: chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
    };

    // Broadcast to SSE subscribers; ignore if no receivers
    let _ = state.events_tx.send(notification.clone());

    if let Err(e) = state.push.push(&notification).await {
        tracing::error!(error = %e, user_id = recipient, "push delivery failed");
    }
}

/// Flip a single notification to read. Only the recipient may do so.
pub fn mark_read(
    conn: &Connection,
    notification_id: i64,
    actor_id: i64,
) -> Result<Notification, AppError> {
    let notification = queries::get_notification(conn, notification_id)?
        .ok_or_else(|| AppError::NotFound("notification not found".to_string()))?;

    if notification.user_id != actor_id {
        return Err(AppError::Forbidden(
            "not the recipient of this notification".to_string(),
        ));
    }

    queries::mark_notification_read(conn, notification_id)?;

    Ok(Notification {
        is_read: true,
        ..notification
    })
}
