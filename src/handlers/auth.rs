use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{hash_password, issue_token, verify_password};
use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Role, User};
use crate::state::AppState;

// POST /api/auth/register
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let username = body.username.trim().to_string();
    let email = body.email.trim().to_string();

    if username.is_empty() {
        return Err(AppError::Validation("username is required".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("a valid email is required".to_string()));
    }
    if body.password.len() < 6 {
        return Err(AppError::Validation(
            "password must be at least 6 characters".to_string(),
        ));
    }
    if body.first_name.trim().is_empty() || body.last_name.trim().is_empty() {
        return Err(AppError::Validation(
            "first_name and last_name are required".to_string(),
        ));
    }

    let role = match body
        .role
        .as_deref()
        .unwrap_or("customer")
        .to_lowercase()
        .as_str()
    {
        "customer" => Role::Customer,
        "mechanic" => Role::Mechanic,
        "admin" => {
            return Err(AppError::Validation(
                "admin accounts cannot be self-registered".to_string(),
            ))
        }
        _ => {
            return Err(AppError::Validation(
                "role must be customer or mechanic".to_string(),
            ))
        }
    };

    let password_hash = hash_password(&body.password)?;

    let user = {
        let db = state.db.lock().unwrap();

        if queries::username_exists(&db, &username)? {
            return Err(AppError::Conflict("username already taken".to_string()));
        }
        if queries::email_exists(&db, &email)? {
            return Err(AppError::Conflict("email already registered".to_string()));
        }

        let id = queries::create_user(
            &db,
            &queries::NewUser {
                username,
                email,
                password_hash,
                role,
                first_name: body.first_name.trim().to_string(),
                last_name: body.last_name.trim().to_string(),
                phone: body.phone,
                city: body.city,
                pincode: body.pincode,
            },
        )?;

        queries::get_user(&db, id)?
            .ok_or_else(|| AppError::Internal("user missing after insert".to_string()))?
    };

    tracing::info!(user_id = user.id, role = user.role.as_str(), "registered new user");

    let token = issue_token(&state.config, &user)?;
    Ok(Json(AuthResponse { token, user }))
}

// POST /api/auth/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = {
        let db = state.db.lock().unwrap();
        queries::get_user_by_username(&db, body.username.trim())?
    };

    // Same response for unknown username and bad password
    let user = user.ok_or(AppError::Unauthorized)?;
    if !verify_password(&body.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }
    if !user.is_active {
        return Err(AppError::Forbidden("account is deactivated".to_string()));
    }

    let token = issue_token(&state.config, &user)?;
    Ok(Json(AuthResponse { token, user }))
}
