use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Document;

/// A rentable physical unit tracked by location and status.
///
/// Seeded by a reset, mutated only via status updates, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trailer {
    pub id: String,
    pub location_id: String,
    pub trailer_number: i32,
    pub location_name: String,
    pub address: String,
    pub status: TrailerStatus,
    pub last_maintenance: DateTime<Utc>,
    #[serde(rename = "GPS")]
    pub gps: GpsCoordinates,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailerStatus {
    Available,
    Booked,
    Maintenance,
}

impl Document for Trailer {
    const COLLECTION: &'static str = "trailers";

    fn id(&self) -> &str {
        &self.id
    }
}
