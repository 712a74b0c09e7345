//! Commands behind the `schemaform` binary.
//!
//! Each command renders its output to a `String` so it can be tested
//! without a terminal; `main.rs` only parses arguments and prints.

use std::collections::BTreeMap;
use std::io::Read as _;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, Utc};
use schemaform_form::validate_form_data_against_metadata;
use schemaform_list::{
    SortDirection, apply_filters_and_sorting, build_csv_content, build_csv_filename,
    build_default_visible_column_names, extract_items_from_result_data,
};
use schemaform_model::{EntityMetadata, EntityRecord, ForeignKeyOptions, ResultData};
use schemaform_registry::{EngineConfig, EntityMetadataRegistry};
use tracing::{debug, info};

/// Output of a command plus whether it should exit successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self { output, success: true }
    }
}

/// Options for `export`.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Columns to export; empty means the schema's default columns.
    pub columns: Vec<String>,
    pub filters: BTreeMap<String, String>,
    pub sort_column: Option<String>,
    pub descending: bool,
    /// Foreign-key field to the JSON text of its candidate records.
    pub lookups: BTreeMap<String, String>,
}

/// A loaded registry together with the configuration it came from.
#[derive(Debug, Clone)]
pub struct Workbench {
    registry: EntityMetadataRegistry,
    config: EngineConfig,
}

impl Workbench {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let registry = EntityMetadataRegistry::from_config(&config.registry)
            .context("Failed to build entity registry")?;
        Ok(Self { registry, config })
    }

    pub fn registry(&self) -> &EntityMetadataRegistry {
        &self.registry
    }

    fn metadata(&self, entity_type: &str) -> Result<&EntityMetadata> {
        self.registry
            .get_entity_metadata(entity_type)
            .ok_or_else(|| anyhow!("Unknown entity type: {entity_type}"))
    }

    /// One `entity_type<TAB>display name` line per registered entity.
    pub fn entities(&self) -> String {
        self.registry
            .iter()
            .map(|(entity_type, meta)| format!("{entity_type}\t{}\n", meta.display_name))
            .collect()
    }

    /// The entity schema as pretty JSON.
    pub fn describe(&self, entity_type: &str) -> Result<String> {
        let meta = self.metadata(entity_type)?;
        serde_json::to_string_pretty(meta).context("Failed to serialize schema")
    }

    /// Entity types pointing at `entity_type`, by foreign key or as a sub-entity parent.
    pub fn related(&self, entity_type: &str) -> Result<String> {
        self.metadata(entity_type)?;
        let referrers = self
            .registry
            .get_entities_with_foreign_key_to(entity_type)
            .into_iter()
            .map(|referrer| format!("foreign_key\t{referrer}\n"));
        let parents = self
            .registry
            .get_entities_with_sub_entity_of(entity_type)
            .into_iter()
            .map(|parent| format!("sub_entity\t{parent}\n"));
        Ok(referrers.chain(parents).collect())
    }

    /// Validates one JSON record. Unsuccessful when any field fails.
    pub fn validate(&self, entity_type: &str, record_json: &str) -> Result<Outcome> {
        let meta = self.metadata(entity_type)?;
        let record: EntityRecord =
            serde_json::from_str(record_json).context("Record must be a JSON object")?;

        let result = validate_form_data_against_metadata(&record, meta);
        if result.is_valid {
            return Ok(Outcome::ok("valid\n".to_owned()));
        }

        let output: String = result
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}\n"))
            .collect();
        info!(entity_type, errors = result.errors.len(), "Record failed validation");
        Ok(Outcome { output, success: false })
    }

    /// Filters, sorts and renders records as CSV.
    pub fn export(&self, entity_type: &str, records_json: &str, options: &ExportOptions) -> Result<String> {
        let meta = self.metadata(entity_type)?;
        let records = parse_records(records_json)?;
        let lookups = parse_lookups(&options.lookups)?;

        let columns = if options.columns.is_empty() {
            build_default_visible_column_names(&meta.fields, self.config.list.max_visible_columns)
        } else {
            options.columns.clone()
        };
        let direction = if options.descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };

        let rows = apply_filters_and_sorting(
            &records,
            &options.filters,
            options.sort_column.as_deref().unwrap_or_default(),
            direction,
            Some(meta),
            &lookups,
        );
        debug!(entity_type, input = records.len(), exported = rows.len(), "Exporting records");
        Ok(build_csv_content(&rows, &columns, Some(meta), &lookups))
    }

    /// Suggested file name for an export taken at `now`.
    pub fn export_filename(&self, entity_type: &str, now: &DateTime<Utc>) -> Result<String> {
        self.metadata(entity_type)?;
        Ok(build_csv_filename(entity_type, now))
    }
}

/// Records from a JSON array or a `{items, total_count}` page.
pub fn parse_records(json: &str) -> Result<Vec<EntityRecord>> {
    let data: ResultData = serde_json::from_str(json).context("Records must be JSON")?;
    if let ResultData::Other(_) = data {
        bail!("Expected a JSON array of records or an {{items, total_count}} page");
    }
    Ok(extract_items_from_result_data(Some(&data)))
}

fn parse_lookups(lookups: &BTreeMap<String, String>) -> Result<ForeignKeyOptions> {
    lookups
        .iter()
        .map(|(field, json)| {
            parse_records(json)
                .with_context(|| format!("Invalid lookup records for {field}"))
                .map(|records| (field.clone(), records))
        })
        .collect()
}

/// Splits `key=value`. The value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.to_owned(), value.to_owned()))
}

/// Contents of `source`, or standard input when `source` is `-`.
pub fn read_input(source: &Path) -> Result<String> {
    if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read standard input")?;
        return Ok(buf);
    }
    std::fs::read_to_string(source).with_context(|| format!("Failed to read {}", source.display()))
}
