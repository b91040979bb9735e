pub mod booking;
pub mod mechanic;
pub mod notification;
pub mod user;

pub use booking::{Booking, BookingAction, BookingStatus};
pub use mechanic::Mechanic;
pub use notification::{Notification, NotificationKind};
pub use user::{Role, User};
