use chrono::{Duration, Utc};
use tracing::{info, warn};

use trailex_config::Settings;
use trailex_store::JsonCollection;
use trailex_store::models::{GpsCoordinates, Trailer, TrailerStatus};

use crate::error::ServiceResult;

pub struct TrailerService {
    trailers: JsonCollection<Trailer>,
}

impl TrailerService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            trailers: JsonCollection::open(&settings.storage.data_dir),
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Trailer>> {
        Ok(self.trailers.find_all().await?)
    }

    pub async fn get_by_id(&self, trailer_id: &str) -> ServiceResult<Option<Trailer>> {
        Ok(self.trailers.find_by_id(trailer_id).await?)
    }

    pub async fn get_available(&self) -> ServiceResult<Vec<Trailer>> {
        let trailers = self.trailers.find_all().await?;
        Ok(trailers
            .into_iter()
            .filter(|trailer| trailer.status == TrailerStatus::Available)
            .collect())
    }

    /// Absent ids are a logged no-op, not an error: callers treat the flip
    /// as best-effort.
    pub async fn update_status(
        &self,
        trailer_id: &str,
        status: TrailerStatus,
    ) -> ServiceResult<bool> {
        let updated = self
            .trailers
            .update_by_id(trailer_id, |trailer| trailer.status = status)
            .await?;

        if updated {
            info!(%trailer_id, ?status, "updated trailer status");
        } else {
            warn!(%trailer_id, "trailer not found, status unchanged");
        }
        Ok(updated)
    }

    pub async fn reset(&self) -> ServiceResult<()> {
        let now = Utc::now();
        let defaults = vec![
            Trailer {
                id: "LOC001-001".to_string(),
                location_id: "LOC001".to_string(),
                trailer_number: 1,
                location_name: "Jem og Fix Nørrebro".to_string(),
                address: "Nørrebrogade 123, Copenhagen".to_string(),
                status: TrailerStatus::Available,
                last_maintenance: now - Duration::days(14),
                gps: GpsCoordinates {
                    latitude: 55.6868,
                    longitude: 12.5606,
                },
            },
            Trailer {
                id: "LOC001-002".to_string(),
                location_id: "LOC001".to_string(),
                trailer_number: 2,
                location_name: "Jem og Fix Nørrebro".to_string(),
                address: "Nørrebrogade 123, Copenhagen".to_string(),
                status: TrailerStatus::Available,
                last_maintenance: now - Duration::days(14),
                gps: GpsCoordinates {
                    latitude: 55.6868,
                    longitude: 12.5606,
                },
            },
            Trailer {
                id: "LOC002-001".to_string(),
                location_id: "LOC002".to_string(),
                trailer_number: 1,
                location_name: "Fog Østerbro".to_string(),
                address: "Østerbrogade 456, Copenhagen".to_string(),
                status: TrailerStatus::Available,
                last_maintenance: now - Duration::days(17),
                gps: GpsCoordinates {
                    latitude: 55.7008,
                    longitude: 12.5751,
                },
            },
        ];

        self.trailers.replace_all(&defaults).await?;
        info!("reset trailers data to default");
        Ok(())
    }
}
