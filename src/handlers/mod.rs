pub mod admin;
pub mod auth;
pub mod customer;
pub mod health;
pub mod mechanic;
pub mod notifications;
