use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Document;

/// A customer-facing message tied to a booking lifecycle event.
///
/// Created once, mutated only to flip the read flag, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Notification {
    pub id: String,
    pub customer_id: String,
    #[serde(rename = "Type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub priority: NotificationPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    BookingConfirmation,
    BookingReminder,
    ReturnConfirmation,
    LateFee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationPriority {
    High,
    Medium,
    Low,
}

impl Document for Notification {
    const COLLECTION: &'static str = "notifications";

    fn id(&self) -> &str {
        &self.id
    }
}
