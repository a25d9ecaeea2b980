use rusqlite::Connection;

use crate::{Error, Result};

// Schema version (stored in PRAGMA user_version)
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Table layout
//
// One row per notification id. Columns mirror the canonical record field for
// field; `resources` is a JSON array string and `time` is RFC 3339 UTC with
// fixed nanosecond precision so that text order is time order and a date
// string is a valid prefix filter.
//
// There is no migration path: a database written with another schema
// version is refused rather than rewritten.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != 0 && current_version != SCHEMA_VERSION {
        return Err(Error::Query(format!(
            "unsupported schema version {} (expected {})",
            current_version, SCHEMA_VERSION
        )));
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id TEXT PRIMARY KEY,
            detail_type TEXT NOT NULL,
            source TEXT NOT NULL,
            account TEXT NOT NULL,
            time TEXT NOT NULL,
            region TEXT NOT NULL,
            resources TEXT NOT NULL,
            event_payload TEXT NOT NULL,
            raw_payload TEXT NOT NULL,
            expire_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_time ON events(time);
        CREATE INDEX IF NOT EXISTS idx_events_expire_at ON events(expire_at);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_sets_version() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let version: i32 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
    }

    #[test]
    fn test_other_version_is_refused() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("PRAGMA user_version = 7", []).unwrap();

        let err = init_schema(&conn).unwrap_err();
        assert!(err.to_string().contains("unsupported schema version 7"));
    }
}
