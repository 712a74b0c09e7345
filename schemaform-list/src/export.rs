use std::io;

use chrono::{DateTime, TimeZone, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use schemaform_model::{EntityMetadata, EntityRecord, ForeignKeyOptions};
use tracing::{debug, warn};

use crate::display::get_display_value_for_entity_field;

/// CSV text for `entities` restricted to `visible_columns`.
///
/// The header row is the columns' display names (falling back to the field
/// name) joined by commas. Data cells are always double-quoted with inner
/// quotes doubled. Rows are separated by `\n` with no trailing newline.
/// Empty when there are no entities or no columns.
pub fn build_csv_content(
    entities: &[EntityRecord],
    visible_columns: &[String],
    metadata: Option<&EntityMetadata>,
    foreign_key_options: &ForeignKeyOptions,
) -> String {
    if entities.is_empty() || visible_columns.is_empty() {
        return String::new();
    }

    let header = visible_columns
        .iter()
        .map(|column| {
            metadata
                .and_then(|m| m.field(column))
                .map(|f| f.display_name.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(column)
        })
        .collect::<Vec<_>>()
        .join(",");

    let rows = entities.iter().map(|entity| {
        visible_columns
            .iter()
            .map(|column| get_display_value_for_entity_field(Some(entity), column, foreign_key_options))
            .collect::<Vec<_>>()
    });

    match encode_rows(rows) {
        Ok(body) => {
            debug!(rows = entities.len(), columns = visible_columns.len(), "Built CSV export");
            format!("{header}\n{body}")
        }
        Err(e) => {
            warn!(error = %e, "Failed to encode CSV rows");
            String::new()
        }
    }
}

fn encode_rows(rows: impl Iterator<Item = Vec<String>>) -> csv::Result<String> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);

    for row in rows {
        wtr.write_record(&row)?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// `{entity_type}_export_{YYYY-MM-DD}.csv`, dated in UTC.
pub fn build_csv_filename<Tz: TimeZone>(entity_type: &str, export_date: &DateTime<Tz>) -> String {
    let date = export_date.with_timezone(&Utc).format("%Y-%m-%d");
    format!("{entity_type}_export_{date}.csv")
}
