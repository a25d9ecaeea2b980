use anyhow::{Context, Result, bail};
use docket_index::EventStore;
use docket_ingest::Normalizer;
use docket_types::CanonicalRecord;
use std::io::Read;
use tracing::info;

pub const STDIN_MARKER: &str = "-";

/// Ingest each input as its own invocation
///
/// A failing input does not stop the ones after it; the command fails once all
/// inputs were attempted.
pub fn handle(store: &impl EventStore, normalizer: &Normalizer, inputs: &[String]) -> Result<()> {
    let stdin_only = [STDIN_MARKER.to_string()];
    let inputs = if inputs.is_empty() { &stdin_only[..] } else { inputs };

    let mut failed = 0;
    for input in inputs {
        match ingest_one(store, normalizer, input) {
            Ok(record) => {
                info!(id = %record.id, detail_type = %record.detail_type, "stored event");
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}: {:#}", display_name(input), e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} notifications failed to ingest", failed, inputs.len());
    }

    Ok(())
}

fn ingest_one(
    store: &impl EventStore,
    normalizer: &Normalizer,
    input: &str,
) -> Result<CanonicalRecord> {
    let content = read_input(input)?;
    let record = normalizer
        .normalize_json(&content)
        .context("Failed to normalize notification")?;
    store.put(&record).context("Failed to store event")?;
    Ok(record)
}

fn read_input(input: &str) -> Result<String> {
    if input == STDIN_MARKER {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
}

fn display_name(input: &str) -> &str {
    if input == STDIN_MARKER { "<stdin>" } else { input }
}
