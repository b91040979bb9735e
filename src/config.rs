use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub push_bridge_url: String,
    pub push_bridge_secret: String,
    pub admin_username: String,
    pub admin_password: String,
    pub admin_email: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "wrenchly.db".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "changeme".to_string()),
            jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
            push_bridge_url: env::var("PUSH_BRIDGE_URL").unwrap_or_default(),
            push_bridge_secret: env::var("PUSH_BRIDGE_SECRET").unwrap_or_default(),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_default(),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_default(),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@wrenchly.local".to_string()),
        }
    }
}
