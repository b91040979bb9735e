pub mod booking;
pub mod mechanic;
pub mod notification;
pub mod push;
