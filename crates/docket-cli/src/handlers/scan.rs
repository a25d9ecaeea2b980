use crate::presentation::{FormatOptions, JsonView, Renderer, TimelineView, TsvView};
use crate::types::OutputFormat;
use anyhow::Result;
use docket_index::{EventStore, ScanFilter};
use tracing::{debug, info};

pub fn handle(
    store: &impl EventStore,
    filter: &ScanFilter,
    format: OutputFormat,
    options: &FormatOptions,
) -> Result<()> {
    debug!(?filter, "scanning event store");
    let records = store.scan(filter)?;

    if records.is_empty() {
        info!("No data in table");
        return Ok(());
    }

    let lines = Renderer::new().render(&records);

    match format {
        OutputFormat::Plain => print!(
            "{}",
            TimelineView {
                lines: &lines,
                options,
            }
        ),
        OutputFormat::Tsv => print!("{}", TsvView { lines: &lines }),
        OutputFormat::Json => {
            let view = JsonView {
                records: &records,
                lines: &lines,
            };
            println!("{}", view.to_json()?);
        }
    }

    Ok(())
}
