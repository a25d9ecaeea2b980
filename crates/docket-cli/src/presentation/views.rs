use docket_types::CanonicalRecord;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;

use super::FormatOptions;

pub const TIMELINE_HEADER: &str = "Number\tDate\tEvent Type\tARN\tDetail Type\tEvent Id";

const CELL_PADDING: usize = 4;

fn numbered(lines: &[String]) -> impl Iterator<Item = String> + '_ {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{}\t{}", index, line))
}

// ============================================================================
// Timeline View
// ============================================================================

/// Aligned table of rendered rows under the fixed header
///
/// Every cell except the last one of a row is padded to its column width plus
/// four spaces. Columns that are empty in every row take no space.
pub struct TimelineView<'a> {
    pub lines: &'a [String],
    pub options: &'a FormatOptions,
}

impl<'a> TimelineView<'a> {
    fn column_widths(rows: &[Vec<&str>]) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in rows {
            // The trailing cell of a row is not part of any column
            let Some((_, cells)) = row.split_last() else {
                continue;
            };
            for (col, cell) in cells.iter().enumerate() {
                let width = cell.chars().count();
                if col >= widths.len() {
                    widths.push(width);
                } else if width > widths[col] {
                    widths[col] = width;
                }
            }
        }
        widths
    }

    fn layout(row: &[&str], widths: &[usize]) -> String {
        let mut out = String::new();
        let last = row.len().saturating_sub(1);
        for (col, cell) in row.iter().enumerate() {
            out.push_str(cell);
            if col == last {
                break;
            }
            let width = widths.get(col).copied().unwrap_or(0);
            if width == 0 {
                continue;
            }
            let fill = width - cell.chars().count() + CELL_PADDING;
            out.extend(std::iter::repeat_n(' ', fill));
        }
        out.trim_end().to_string()
    }
}

impl<'a> fmt::Display for TimelineView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return Ok(());
        }

        let body: Vec<String> = numbered(self.lines).collect();
        let mut rows: Vec<Vec<&str>> = Vec::with_capacity(body.len() + 1);
        rows.push(TIMELINE_HEADER.split('\t').collect());
        rows.extend(body.iter().map(|line| line.split('\t').collect()));

        let widths = Self::column_widths(&rows);

        for (index, row) in rows.iter().enumerate() {
            let text = Self::layout(row, &widths);
            if index == 0 && self.options.enable_color {
                writeln!(f, "{}", text.bold())?;
            } else {
                writeln!(f, "{}", text)?;
            }
        }

        Ok(())
    }
}

// ============================================================================
// TSV View
// ============================================================================

/// Header and numbered rows, raw tab-separated
pub struct TsvView<'a> {
    pub lines: &'a [String],
}

impl<'a> fmt::Display for TsvView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return Ok(());
        }

        writeln!(f, "{}", TIMELINE_HEADER)?;
        for line in numbered(self.lines) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// ============================================================================
// JSON View
// ============================================================================

#[derive(Serialize)]
struct SummarizedRecord<'a> {
    #[serde(flatten)]
    record: &'a CanonicalRecord,
    summary: &'a str,
}

/// Stored records with their rendered row attached as `summary`
pub struct JsonView<'a> {
    pub records: &'a [CanonicalRecord],
    pub lines: &'a [String],
}

impl<'a> JsonView<'a> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        let items: Vec<SummarizedRecord<'_>> = self
            .records
            .iter()
            .zip(self.lines)
            .map(|(record, line)| SummarizedRecord {
                record,
                summary: line,
            })
            .collect();
        serde_json::to_string_pretty(&items)
    }
}
