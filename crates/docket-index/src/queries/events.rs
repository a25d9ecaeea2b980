use chrono::{DateTime, SecondsFormat, Utc};
use docket_types::CanonicalRecord;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::borrow::Cow;
use tracing::warn;

use crate::Result;

const SELECT_COLUMNS: &str = r#"
    SELECT id, detail_type, source, account, time, region, resources,
           event_payload, raw_payload, expire_at
    FROM events
"#;

/// Text form of `time` used in the `time` column
///
/// Fixed nanosecond precision keeps lexicographic order equal to time order.
pub fn time_key(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Insert a record, replacing any existing row with the same id
pub fn insert_or_replace(conn: &Connection, record: &CanonicalRecord) -> Result<()> {
    let resources = serde_json::to_string(&record.resources)?;

    conn.execute(
        r#"
        INSERT INTO events (id, detail_type, source, account, time, region, resources,
                            event_payload, raw_payload, expire_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        ON CONFLICT(id) DO UPDATE SET
            detail_type = ?2,
            source = ?3,
            account = ?4,
            time = ?5,
            region = ?6,
            resources = ?7,
            event_payload = ?8,
            raw_payload = ?9,
            expire_at = ?10
        "#,
        params![
            &record.id,
            &record.detail_type,
            &record.source,
            &record.account_id,
            time_key(&record.time),
            &record.region,
            resources,
            &record.event_payload,
            &record.raw_payload,
            record.expire_at
        ],
    )?;

    Ok(())
}

pub fn get_by_id(conn: &Connection, id: &str) -> Result<Option<CanonicalRecord>> {
    let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
    let record = conn.query_row(&sql, [id], row_to_record).optional()?;

    Ok(record)
}

/// Records whose `time` text starts with `prefix`, or every record
///
/// A complete RFC 3339 timestamp (as shown in the timeline) is first rewritten
/// into the stored form, so it matches its own event. Ordered by time, then id.
pub fn list(conn: &Connection, time_prefix: Option<&str>) -> Result<Vec<CanonicalRecord>> {
    match time_prefix {
        Some(prefix) => {
            let prefix = stored_prefix(prefix);
            // substr comparison instead of LIKE: no wildcards, case-sensitive
            let sql = format!(
                "{} WHERE substr(time, 1, length(?1)) = ?1 ORDER BY time ASC, id ASC",
                SELECT_COLUMNS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([&*prefix], row_to_record)?;
            collect_readable(rows)
        }
        None => {
            let sql = format!("{} ORDER BY time ASC, id ASC", SELECT_COLUMNS);
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], row_to_record)?;
            collect_readable(rows)
        }
    }
}

fn stored_prefix(prefix: &str) -> Cow<'_, str> {
    match DateTime::parse_from_rfc3339(prefix) {
        Ok(time) => Cow::Owned(time_key(&time.with_timezone(&Utc))),
        Err(_) => Cow::Borrowed(prefix),
    }
}

/// Keep every row that reads back; a row with an unreadable column is skipped
fn collect_readable(
    rows: impl Iterator<Item = rusqlite::Result<CanonicalRecord>>,
) -> Result<Vec<CanonicalRecord>> {
    let mut records = Vec::new();
    for row in rows {
        match row {
            Ok(record) => records.push(record),
            Err(rusqlite::Error::FromSqlConversionFailure(column, _, err)) => {
                warn!(column, error = %err, "skipping unreadable event row");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(records)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Delete rows whose `expire_at` is at or before `now_epoch_secs`
pub fn delete_expired(conn: &Connection, now_epoch_secs: i64) -> Result<usize> {
    let deleted = conn.execute(
        "DELETE FROM events WHERE expire_at <= ?1",
        params![now_epoch_secs],
    )?;

    Ok(deleted)
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<CanonicalRecord> {
    let time_text: String = row.get(4)?;
    let time = DateTime::parse_from_rfc3339(&time_text)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    let resources_text: String = row.get(6)?;
    let resources: Vec<String> = serde_json::from_str(&resources_text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

    Ok(CanonicalRecord {
        id: row.get(0)?,
        detail_type: row.get(1)?,
        source: row.get(2)?,
        account_id: row.get(3)?,
        time,
        region: row.get(5)?,
        resources,
        event_payload: row.get(7)?,
        raw_payload: row.get(8)?,
        expire_at: row.get(9)?,
    })
}
