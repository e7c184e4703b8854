use std::sync::Arc;

use chrono::{DateTime, Utc};
use tempfile::TempDir;

use trailex_config::{FeeSettings, Settings, StorageSettings};
use trailex_services::requests::CreateBookingRequest;
use trailex_services::{BookingService, NotificationService, Services, TrailerService};

/// The three services over their own temporary data directory.
///
/// Each test gets a fresh directory for isolation; `spawn` seeds the default
/// data set, `spawn_empty` leaves the collections absent.
pub struct TestSystem {
    pub trailers: Arc<TrailerService>,
    pub bookings: Arc<BookingService>,
    pub notifications: Arc<NotificationService>,
    pub settings: Settings,
    // Held so the data directory outlives the services.
    _data_dir: TempDir,
}

impl TestSystem {
    pub async fn spawn() -> Self {
        let system = Self::spawn_empty().await;
        system.trailers.reset().await.expect("Failed to seed trailers");
        system.bookings.reset().await.expect("Failed to seed bookings");
        system
            .notifications
            .reset()
            .await
            .expect("Failed to seed notifications");
        system
    }

    pub async fn spawn_empty() -> Self {
        init_tracing();

        let data_dir = TempDir::new().expect("Failed to create temp data dir");
        let settings = Settings {
            storage: StorageSettings {
                data_dir: data_dir.path().to_path_buf(),
            },
            fees: FeeSettings {
                insurance: 50.0,
                excess_per_hour: 100.0,
            },
        };

        let services = Services::new(&settings);

        Self {
            trailers: services.trailers,
            bookings: services.bookings,
            notifications: services.notifications,
            settings,
            _data_dir: data_dir,
        }
    }
}

/// A create request for the given trailer with sensible test defaults.
pub fn booking_request(trailer_id: &str, return_time: DateTime<Utc>) -> CreateBookingRequest {
    CreateBookingRequest {
        customer_id: "CUST042".to_string(),
        customer_name: "Anna Jensen".to_string(),
        customer_email: "anna.jensen@example.com".to_string(),
        trailer_id: trailer_id.to_string(),
        booking_time: Utc::now(),
        return_time,
        has_insurance: false,
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
