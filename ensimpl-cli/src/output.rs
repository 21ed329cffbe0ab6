//! Rendering of command results as tables, delimited text or JSON

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bordered table
    #[default]
    Pretty,
    /// Tab-delimited with a header line
    Tab,
    Csv,
    Json,
}

/// Render display rows; `json` is used instead when JSON output is requested
pub fn render<R, J>(rows: Vec<R>, json: &J, format: OutputFormat) -> Result<String>
where
    R: Tabled + Serialize,
    J: Serialize + ?Sized,
{
    match format {
        OutputFormat::Pretty => Ok(Table::new(rows).with(Style::rounded()).to_string()),
        OutputFormat::Tab => delimited(&rows, b'\t'),
        OutputFormat::Csv => delimited(&rows, b','),
        OutputFormat::Json => serde_json::to_string_pretty(json).context("Failed to serialize JSON output"),
    }
}

/// Render and print to stdout
pub fn emit<R, J>(rows: Vec<R>, json: &J, format: OutputFormat) -> Result<()>
where
    R: Tabled + Serialize,
    J: Serialize + ?Sized,
{
    let content = render(rows, json, format)?;
    if content.ends_with('\n') {
        print!("{}", content);
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn delimited<R: Serialize>(rows: &[R], delimiter: u8) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row).context("Failed to write delimited row")?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow!("Failed to flush delimited output: {}", e))?;
    String::from_utf8(bytes).context("Delimited output is not valid UTF-8")
}

/// `None` renders as an empty cell
pub fn cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}
