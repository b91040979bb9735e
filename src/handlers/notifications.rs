use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::sse::{Event, Sse};
use axum::Json;
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::auth::{authenticate, authenticate_token};
use crate::db::queries;
use crate::errors::AppError;
use crate::models::Notification;
use crate::services::notification;
use crate::state::AppState;

// GET /api/notifications
pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Notification>>, AppError> {
    let auth = authenticate(&state, &headers)?;

    let notifications = {
        let db = state.db.lock().unwrap();
        queries::notifications_for_user(&db, auth.id)?
    };
    Ok(Json(notifications))
}

// GET /api/notifications/unread
pub async fn list_unread(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Notification>>, AppError> {
    let auth = authenticate(&state, &headers)?;

    let notifications = {
        let db = state.db.lock().unwrap();
        queries::unread_notifications_for_user(&db, auth.id)?
    };
    Ok(Json(notifications))
}

// GET /api/notifications/unread/count
pub async fn unread_count(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let auth = authenticate(&state, &headers)?;

    let count = {
        let db = state.db.lock().unwrap();
        queries::unread_notification_count(&db, auth.id)?
    };
    Ok(Json(serde_json::json!({ "count": count })))
}

// PUT /api/notifications/:id/read
pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Notification>, AppError> {
    let auth = authenticate(&state, &headers)?;

    let updated = {
        let db = state.db.lock().unwrap();
        notification::mark_read(&db, id, auth.id)?
    };
    Ok(Json(updated))
}

// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let auth = authenticate(&state, &headers)?;

    let updated = {
        let db = state.db.lock().unwrap();
        queries::mark_all_notifications_read(&db, auth.id)?
    };
    Ok(Json(serde_json::json!({ "updated": updated })))
}

// GET /api/notifications/events (SSE stream)
#[derive(Deserialize)]
pub struct SseQuery {
    pub token: Option<String>,
}

pub async fn events_stream(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SseQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>, AppError> {
    // Auth via query param (EventSource can't set headers)
    let token = query.token.as_deref().unwrap_or("");
    let auth = authenticate_token(&state, token)?;
    let user_id = auth.id;

    let rx = state.events_tx.subscribe();

    let live_stream = BroadcastStream::new(rx).filter_map(move |result| match result {
        Ok(notification) if notification.user_id == user_id => {
            let data = serde_json::to_string(&notification).unwrap_or_default();
            Some(Ok::<_, Infallible>(
                Event::default().data(data).event("notification"),
            ))
        }
        Ok(_) => None,
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(_)) => None,
    });

    let keepalive_stream = tokio_stream::StreamExt::map(
        tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(Duration::from_secs(30))),
        |_| Ok(Event::default().comment("keepalive")),
    );

    let merged = StreamExt::merge(live_stream, keepalive_stream);

    Ok(Sse::new(merged))
}
