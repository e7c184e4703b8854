use std::sync::Arc;

use chrono::{Duration, NaiveTime, Utc};
use tracing::{error, info, warn};

use trailex_config::Settings;
use trailex_store::JsonCollection;
use trailex_store::models::{
    Booking, BookingStatus, Notification, NotificationPriority, NotificationType, TrailerStatus,
};

use crate::error::{ServiceError, ServiceResult};
use crate::id;
use crate::notification::NotificationService;
use crate::requests::{CreateBookingRequest, ReturnTrailerRequest};
use crate::trailer::TrailerService;

pub struct BookingService {
    bookings: JsonCollection<Booking>,
    trailers: Arc<TrailerService>,
    notifications: Arc<NotificationService>,
    insurance_fee: f64,
    excess_fee_per_hour: f64,
}

impl BookingService {
    pub fn new(
        settings: &Settings,
        trailers: Arc<TrailerService>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            bookings: JsonCollection::open(&settings.storage.data_dir),
            trailers,
            notifications,
            insurance_fee: settings.fees.insurance,
            excess_fee_per_hour: settings.fees.excess_per_hour,
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Booking>> {
        Ok(self.bookings.find_all().await?)
    }

    pub async fn get_by_customer(&self, customer_id: &str) -> ServiceResult<Vec<Booking>> {
        let mut bookings: Vec<_> = self
            .bookings
            .find_all()
            .await?
            .into_iter()
            .filter(|booking| booking.customer_id == customer_id)
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    pub async fn get_by_id(&self, booking_id: &str) -> ServiceResult<Option<Booking>> {
        Ok(self.bookings.find_by_id(booking_id).await?)
    }

    pub async fn create_booking(&self, request: CreateBookingRequest) -> ServiceResult<Booking> {
        let trailer = self
            .trailers
            .get_by_id(&request.trailer_id)
            .await?
            .ok_or(ServiceError::NotFound("Trailer"))?;

        if trailer.status != TrailerStatus::Available {
            return Err(ServiceError::InvalidState("Trailer is not available"));
        }

        let insurance_fee = if request.has_insurance {
            self.insurance_fee
        } else {
            0.0
        };
        let booking = Booking {
            id: id::generate("BOOK"),
            customer_id: request.customer_id.clone(),
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            trailer_id: request.trailer_id.clone(),
            location_name: trailer.location_name.clone(),
            trailer_number: trailer.trailer_number,
            booking_time: request.booking_time,
            return_time: request.return_time,
            actual_return_time: None,
            status: BookingStatus::Active,
            has_insurance: request.has_insurance,
            insurance_fee,
            excess_fee: 0.0,
            total_cost: insurance_fee,
            created_at: Utc::now(),
        };

        self.bookings.insert_one(&booking).await?;

        // The persisted booking is the source of truth; the trailer flip and
        // the confirmation message must not undo it.
        if let Err(err) = self
            .trailers
            .update_status(&request.trailer_id, TrailerStatus::Booked)
            .await
        {
            error!(
                error = %err,
                trailer_id = %request.trailer_id,
                "failed to mark trailer as booked"
            );
        }

        let confirmation = Notification {
            id: id::generate("NOTIF"),
            customer_id: request.customer_id,
            kind: NotificationType::BookingConfirmation,
            title: "Booking Confirmed".to_string(),
            message: format!(
                "Your trailer booking for {} - Trailer #{} has been confirmed. \
                 Please return by {} to avoid excess fees.",
                trailer.location_name,
                trailer.trailer_number,
                request.return_time.format("%H:%M"),
            ),
            timestamp: Utc::now(),
            is_read: false,
            priority: NotificationPriority::High,
        };
        if let Err(err) = self.notifications.create(confirmation).await {
            error!(
                error = %err,
                booking_id = %booking.id,
                "failed to send booking confirmation"
            );
        }

        info!(
            booking_id = %booking.id,
            trailer_id = %booking.trailer_id,
            "created booking"
        );
        Ok(booking)
    }

    pub async fn return_trailer(&self, request: ReturnTrailerRequest) -> ServiceResult<Booking> {
        let mut booking = self
            .bookings
            .find_by_id(&request.booking_id)
            .await?
            .ok_or(ServiceError::NotFound("Booking"))?;

        if booking.status != BookingStatus::Active {
            return Err(ServiceError::InvalidState("Booking is not active"));
        }

        booking.actual_return_time = Some(request.return_time);
        booking.status = BookingStatus::Completed;

        if booking.is_late() {
            let lateness = booking.lateness_duration(request.return_time);
            let late_hours = lateness.num_seconds() as f64 / 3600.0;
            // Every started hour is billed in full.
            booking.excess_fee = late_hours.ceil() * self.excess_fee_per_hour;
            booking.total_cost += booking.excess_fee;

            let notice = Notification {
                id: id::generate("NOTIF"),
                customer_id: booking.customer_id.clone(),
                kind: NotificationType::LateFee,
                title: "Late Return Fee Applied".to_string(),
                message: format!(
                    "Your trailer was returned {:.1} hours late. An excess fee of {:.2} DKK \
                     has been applied. Please contact Customer Service for payment.",
                    late_hours, booking.excess_fee,
                ),
                timestamp: Utc::now(),
                is_read: false,
                priority: NotificationPriority::High,
            };
            if let Err(err) = self.notifications.create(notice).await {
                error!(
                    error = %err,
                    booking_id = %booking.id,
                    "failed to send late fee notice"
                );
            }
        } else {
            let confirmation = Notification {
                id: id::generate("NOTIF"),
                customer_id: booking.customer_id.clone(),
                kind: NotificationType::ReturnConfirmation,
                title: "Trailer Returned Successfully".to_string(),
                message: format!(
                    "Thank you for returning your trailer on time! Total cost: {:.2} DKK.",
                    booking.total_cost,
                ),
                timestamp: Utc::now(),
                is_read: false,
                priority: NotificationPriority::Medium,
            };
            if let Err(err) = self.notifications.create(confirmation).await {
                error!(
                    error = %err,
                    booking_id = %booking.id,
                    "failed to send return confirmation"
                );
            }
        }

        let stored = self
            .bookings
            .update_by_id(&booking.id, |existing| *existing = booking.clone())
            .await?;
        if !stored {
            warn!(
                booking_id = %booking.id,
                "booking disappeared before the return could be persisted"
            );
        }

        if let Err(err) = self
            .trailers
            .update_status(&booking.trailer_id, TrailerStatus::Available)
            .await
        {
            error!(
                error = %err,
                trailer_id = %booking.trailer_id,
                "failed to release trailer"
            );
        }

        info!(
            booking_id = %booking.id,
            excess_fee = booking.excess_fee,
            "returned trailer"
        );
        Ok(booking)
    }

    pub async fn reset(&self) -> ServiceResult<()> {
        let midnight = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
        let defaults = vec![Booking {
            id: "BOOK001".to_string(),
            customer_id: "CUST001".to_string(),
            customer_name: "John Doe".to_string(),
            customer_email: "john.doe@email.com".to_string(),
            trailer_id: "LOC001-001".to_string(),
            location_name: "Jem og Fix Nørrebro".to_string(),
            trailer_number: 1,
            booking_time: midnight + Duration::hours(14),
            return_time: midnight + Duration::hours(23) + Duration::minutes(59),
            actual_return_time: None,
            status: BookingStatus::Active,
            has_insurance: true,
            insurance_fee: 50.0,
            excess_fee: 0.0,
            total_cost: 50.0,
            created_at: midnight + Duration::hours(13) + Duration::minutes(45),
        }];

        self.bookings.replace_all(&defaults).await?;
        info!("reset bookings data to default");
        Ok(())
    }
}
