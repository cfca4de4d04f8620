//! Space output formatter

use chrono::{DateTime, Utc};
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, print_json};
use crate::cli::OutputFormat;
use crate::management::SpaceEntry;

/// Fixed column headers for the space table
pub const SPACE_HEADER: [&str; 5] = ["Name", "Cluster", "Sleeping", "Status", "Age"];

/// Flattened, display-only projection of one space
#[derive(Debug, Clone, Serialize)]
pub struct SpaceRow {
    pub name: String,
    pub cluster: String,
    pub sleeping: String,
    pub status: String,
    pub age: String,
}

impl SpaceRow {
    /// Build a row from a space entry against one reference instant
    pub fn new(entry: &SpaceEntry, now: DateTime<Utc>) -> Self {
        Self {
            name: entry.space.name.clone(),
            cluster: entry.cluster.clone(),
            sleeping: entry.sleeping_cell(now),
            status: entry.phase().to_string(),
            age: entry.age_cell(now),
        }
    }
}

/// Output spaces in the specified format
pub fn output_spaces(rows: &[SpaceRow], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => output_table(rows, no_header),
        OutputFormat::Csv => output_csv(rows, no_header),
        OutputFormat::Json => print_json(&rows),
    }
}

fn output_table(rows: &[SpaceRow], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(SPACE_HEADER.to_vec());
    }

    for row in rows {
        table.add_row(vec![
            &row.name,
            &row.cluster,
            &row.sleeping,
            &row.status,
            &row.age,
        ]);
    }

    println!("{}", table);
}

fn output_csv(rows: &[SpaceRow], no_header: bool) {
    if !no_header {
        println!("name,cluster,sleeping,status,age");
    }
    for row in rows {
        println!(
            "{},{},{},{},{}",
            escape_csv(&row.name),
            escape_csv(&row.cluster),
            escape_csv(&row.sleeping),
            escape_csv(&row.status),
            escape_csv(&row.age)
        );
    }
}
