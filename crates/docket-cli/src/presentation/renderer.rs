use docket_types::CanonicalRecord;

use super::formatters::VariantFormatters;

/// Turns scanned records into display rows, one per record, in input order
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    formatters: VariantFormatters,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, records: &[CanonicalRecord]) -> Vec<String> {
        records
            .iter()
            .map(|record| self.formatters.format_record(record))
            .collect()
    }
}
