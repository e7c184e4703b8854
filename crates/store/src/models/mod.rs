mod booking;
mod notification;
mod trailer;

pub use booking::{Booking, BookingStatus};
pub use notification::{Notification, NotificationPriority, NotificationType};
pub use trailer::{GpsCoordinates, Trailer, TrailerStatus};
