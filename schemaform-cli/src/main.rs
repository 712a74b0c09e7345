//! `schemaform` command-line tool.
//!
//! Inspects the entity registry, validates records against their schema,
//! and exports record lists as CSV.
//!
//! Usage:
//!   schemaform entities
//!   schemaform describe team
//!   schemaform validate player player.json
//!   schemaform export player players.json --filter team_id=t1 --sort last_name

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use schemaform_cli::{ExportOptions, Workbench, parse_key_val, read_input};
use schemaform_registry::EngineConfig;
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "schemaform")]
#[command(about = "Schema-driven entity forms and lists")]
struct Args {
    /// Path to the engine config file
    #[arg(short, long, default_value = "schemaform.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered entity types
    Entities,
    /// Print an entity schema as JSON
    Describe { entity_type: String },
    /// Entity types that reference an entity type
    Related { entity_type: String },
    /// Validate one JSON record (`-` reads stdin)
    Validate { entity_type: String, record: PathBuf },
    /// Filter, sort and print records as CSV (`-` reads stdin)
    Export {
        entity_type: String,
        records: PathBuf,

        /// Comma-separated columns; defaults to the schema's list columns
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Column filter, repeatable
        #[arg(long = "filter", value_name = "FIELD=TEXT", value_parser = parse_key_val)]
        filters: Vec<(String, String)>,

        /// Column to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Records to resolve a foreign-key column against, repeatable
        #[arg(long = "lookup", value_name = "FIELD=PATH", value_parser = parse_key_val)]
        lookups: Vec<(String, String)>,

        /// Print the suggested export file name instead of the CSV
        #[arg(long)]
        filename: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let config = EngineConfig::load_from(&args.config);
    let bench = Workbench::new(config)?;

    match args.command {
        Command::Entities => print!("{}", bench.entities()),
        Command::Describe { entity_type } => println!("{}", bench.describe(&entity_type)?),
        Command::Related { entity_type } => print!("{}", bench.related(&entity_type)?),
        Command::Validate { entity_type, record } => {
            let outcome = bench.validate(&entity_type, &read_input(&record)?)?;
            print!("{}", outcome.output);
            return Ok(outcome.success);
        }
        Command::Export {
            entity_type,
            records,
            columns,
            filters,
            sort,
            desc,
            lookups,
            filename,
        } => {
            if filename {
                println!("{}", bench.export_filename(&entity_type, &Utc::now())?);
                return Ok(true);
            }
            let lookups = lookups
                .into_iter()
                .map(|(field, path)| read_input(Path::new(&path)).map(|json| (field, json)))
                .collect::<Result<BTreeMap<_, _>>>()?;
            let options = ExportOptions {
                columns,
                filters: filters.into_iter().collect(),
                sort_column: sort,
                descending: desc,
                lookups,
            };
            let csv = bench.export(&entity_type, &read_input(&records)?, &options)?;
            println!("{csv}");
        }
    }
    Ok(true)
}
