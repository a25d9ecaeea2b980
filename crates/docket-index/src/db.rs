use docket_types::CanonicalRecord;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

use crate::queries::events;
use crate::schema;
use crate::store::{EventStore, ScanFilter};
use crate::Result;

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the store at `db_path`, creating parent directories
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %db_path.display(), "opening event store");
        let conn = Connection::open(db_path)?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    // Event operations
    pub fn insert_or_replace_event(&self, record: &CanonicalRecord) -> Result<()> {
        events::insert_or_replace(&self.conn, record)
    }

    pub fn get_event(&self, id: &str) -> Result<Option<CanonicalRecord>> {
        events::get_by_id(&self.conn, id)
    }

    pub fn list_events(&self, time_prefix: Option<&str>) -> Result<Vec<CanonicalRecord>> {
        events::list(&self.conn, time_prefix)
    }

    pub fn count_events(&self) -> Result<usize> {
        events::count(&self.conn)
    }

    /// Remove records past their retention (`expire_at <= now_epoch_secs`)
    pub fn purge_expired(&self, now_epoch_secs: i64) -> Result<usize> {
        let deleted = events::delete_expired(&self.conn, now_epoch_secs)?;
        debug!(deleted, now_epoch_secs, "purged expired events");
        Ok(deleted)
    }

    pub fn vacuum(&self) -> Result<()> {
        self.conn.execute("VACUUM", [])?;
        Ok(())
    }
}

impl EventStore for Database {
    fn put(&self, record: &CanonicalRecord) -> Result<()> {
        self.insert_or_replace_event(record)
    }

    fn scan(&self, filter: &ScanFilter) -> Result<Vec<CanonicalRecord>> {
        self.list_events(filter.time_prefix.as_deref())
    }
}
