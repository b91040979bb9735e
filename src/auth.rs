use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::http::HeaderMap;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Role, User};
use crate::state::AppState;

/// Token payload. `sub` is the user id. The role claim is advisory;
/// every authenticated request re-reads the user row, so deactivation
/// takes effect before the token expires.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Identity threaded through handlers and services. Who is acting is
/// always passed explicitly, never read from ambient context.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i64,
    pub role: Role,
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub fn issue_token(config: &AppConfig, user: &User) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user.id,
        role: user.role.as_str().to_string(),
        iat: now,
        exp: now + config.jwt_expiry_hours * 3600,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
}

pub fn decode_token(secret: &str, token: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized)?;
    Ok(data.claims)
}

/// Resolves the bearer token in the Authorization header to a live user.
pub fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AuthUser, AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token.is_empty() {
        return Err(AppError::Unauthorized);
    }

    authenticate_token(state, token)
}

/// Same check for callers that carry the token outside the headers
/// (the SSE route takes it as a query parameter).
pub fn authenticate_token(state: &AppState, token: &str) -> Result<AuthUser, AppError> {
    let claims = decode_token(&state.config.jwt_secret, token)?;

    let user = {
        let db = state.db.lock().unwrap();
        queries::get_user(&db, claims.sub)?
    };
    let user = user.ok_or(AppError::Unauthorized)?;

    if !user.is_active {
        return Err(AppError::Forbidden("account is deactivated".to_string()));
    }

    Ok(AuthUser {
        id: user.id,
        role: user.role,
    })
}

pub fn require_role(auth: &AuthUser, role: Role) -> Result<(), AppError> {
    if auth.role != role {
        return Err(AppError::Forbidden(format!(
            "{} role required",
            role.as_str()
        )));
    }
    Ok(())
}
