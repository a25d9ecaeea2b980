// SQLite event store
// Persists canonical records as-is; typed payloads stay serialized

mod db;
mod error;
mod queries;
mod schema;
mod store;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
pub use store::{EventStore, ScanFilter};
