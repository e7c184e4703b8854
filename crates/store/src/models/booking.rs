use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Document;

/// A reservation of one trailer by one customer for a time window.
///
/// Location name and trailer number are denormalized copies captured at
/// booking time. `total_cost` only ever grows: the insurance fee at
/// creation, the excess fee at return.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Booking {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub trailer_id: String,
    pub location_name: String,
    pub trailer_number: i32,
    pub booking_time: DateTime<Utc>,
    pub return_time: DateTime<Utc>,
    pub actual_return_time: Option<DateTime<Utc>>,
    pub status: BookingStatus,
    pub has_insurance: bool,
    pub insurance_fee: f64,
    pub excess_fee: f64,
    pub total_cost: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Active,
    Completed,
    Cancelled,
}

impl Booking {
    /// A recorded return that happened after the scheduled return time.
    pub fn is_late(&self) -> bool {
        matches!(self.actual_return_time, Some(actual) if actual > self.return_time)
    }

    /// Still out past the scheduled return time, nothing recorded yet.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.actual_return_time.is_none() && now > self.return_time
    }

    /// How far past the scheduled return time this booking ran, for either a
    /// recorded late return or an overdue one. Zero otherwise.
    pub fn lateness_duration(&self, now: DateTime<Utc>) -> Duration {
        match self.actual_return_time {
            Some(actual) if actual > self.return_time => actual - self.return_time,
            None if now > self.return_time => now - self.return_time,
            _ => Duration::zero(),
        }
    }
}

impl Document for Booking {
    const COLLECTION: &'static str = "bookings";

    fn id(&self) -> &str {
        &self.id
    }
}
