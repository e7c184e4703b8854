pub mod booking;
pub mod error;
pub mod id;
pub mod notification;
pub mod requests;
pub mod trailer;

pub use booking::BookingService;
pub use error::{ServiceError, ServiceResult};
pub use notification::NotificationService;
pub use trailer::TrailerService;

use std::sync::Arc;

use trailex_config::Settings;

/// The three service contracts wired over one data directory, which is
/// everything the hosting layer needs from this core.
pub struct Services {
    pub trailers: Arc<TrailerService>,
    pub bookings: Arc<BookingService>,
    pub notifications: Arc<NotificationService>,
}

impl Services {
    pub fn new(settings: &Settings) -> Self {
        let trailers = Arc::new(TrailerService::new(settings));
        let notifications = Arc::new(NotificationService::new(settings));
        let bookings = Arc::new(BookingService::new(
            settings,
            Arc::clone(&trailers),
            Arc::clone(&notifications),
        ));

        Self {
            trailers,
            bookings,
            notifications,
        }
    }
}
