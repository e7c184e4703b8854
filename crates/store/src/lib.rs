pub mod collection;
pub mod error;
pub mod models;

pub use collection::{Document, JsonCollection};
pub use error::{StoreError, StoreResult};
