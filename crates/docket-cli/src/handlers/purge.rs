use anyhow::Result;
use chrono::{DateTime, Utc};
use docket_index::Database;

pub fn handle(db: &Database, now: DateTime<Utc>) -> Result<()> {
    let deleted = db.purge_expired(now.timestamp())?;
    if deleted > 0 {
        db.vacuum()?;
    }
    println!("Purged {} expired events", deleted);
    Ok(())
}
