use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub storage: StorageSettings,
    pub fees: FeeSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    /// Content root for the collection files (`trailers.json`,
    /// `bookings.json`, `notifications.json`).
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeeSettings {
    /// Flat insurance fee in DKK, charged once at booking time.
    pub insurance: f64,
    /// Excess fee in DKK per started hour past the scheduled return time.
    pub excess_per_hour: f64,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix("TRAILEX"),
            )
            .set_default("storage.data_dir", "data")?
            .set_default("fees.insurance", 50.0)?
            .set_default("fees.excess_per_hour", 100.0)?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::load().expect("Failed to load default settings")
    }
}
