use crate::models::DisplayRecord;
use anyhow::{Context, Result};
use tabled::settings::object::Segment;
use tabled::settings::{Alignment, Modify, Style};
use tabled::Table;

/// Render the rows as a centered, outlined table
pub fn render_table(records: &[DisplayRecord]) -> String {
    Table::new(records)
        .with(Style::modern())
        .with(Modify::new(Segment::all()).with(Alignment::center()))
        .to_string()
}

pub fn render_json(records: &[DisplayRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize fixtures")
}
