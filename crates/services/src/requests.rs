use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub trailer_id: String,
    pub booking_time: DateTime<Utc>,
    pub return_time: DateTime<Utc>,
    #[serde(default)]
    pub has_insurance: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReturnTrailerRequest {
    pub booking_id: String,
    pub return_time: DateTime<Utc>,
}
