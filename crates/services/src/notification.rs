use chrono::{Duration, NaiveTime, Utc};
use tracing::info;

use trailex_config::Settings;
use trailex_store::JsonCollection;
use trailex_store::models::{Notification, NotificationPriority, NotificationType};

use crate::error::ServiceResult;

pub struct NotificationService {
    notifications: JsonCollection<Notification>,
}

impl NotificationService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            notifications: JsonCollection::open(&settings.storage.data_dir),
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Notification>> {
        Ok(self.notifications.find_all().await?)
    }

    pub async fn get_by_customer(&self, customer_id: &str) -> ServiceResult<Vec<Notification>> {
        let mut notifications: Vec<_> = self
            .notifications
            .find_all()
            .await?
            .into_iter()
            .filter(|notification| notification.customer_id == customer_id)
            .collect();
        notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(notifications)
    }

    /// Appends the record as supplied (id and timestamp come from the
    /// caller) and returns it unchanged.
    pub async fn create(&self, notification: Notification) -> ServiceResult<Notification> {
        self.notifications.insert_one(&notification).await?;
        info!(
            notification_id = %notification.id,
            customer_id = %notification.customer_id,
            "created notification"
        );
        Ok(notification)
    }

    /// Absent ids are a silent no-op.
    pub async fn mark_as_read(&self, notification_id: &str) -> ServiceResult<bool> {
        let updated = self
            .notifications
            .update_by_id(notification_id, |notification| notification.is_read = true)
            .await?;

        if updated {
            info!(%notification_id, "marked notification as read");
        }
        Ok(updated)
    }

    pub async fn reset(&self) -> ServiceResult<()> {
        let midnight = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
        let defaults = vec![
            Notification {
                id: "NOTIF001".to_string(),
                customer_id: "CUST001".to_string(),
                kind: NotificationType::BookingConfirmation,
                title: "Booking Confirmed".to_string(),
                message: "Your trailer booking for Jem og Fix Nørrebro - Trailer #1 has been \
                          confirmed. Please return by 23:59 to avoid excess fees."
                    .to_string(),
                timestamp: midnight + Duration::hours(13) + Duration::minutes(45),
                is_read: false,
                priority: NotificationPriority::High,
            },
            Notification {
                id: "NOTIF002".to_string(),
                customer_id: "CUST001".to_string(),
                kind: NotificationType::BookingReminder,
                title: "Return Reminder".to_string(),
                message: "Remember to return your trailer by 23:59 tonight to avoid excess fees."
                    .to_string(),
                timestamp: midnight + Duration::hours(20),
                is_read: false,
                priority: NotificationPriority::Medium,
            },
        ];

        self.notifications.replace_all(&defaults).await?;
        info!("reset notifications data to default");
        Ok(())
    }
}
