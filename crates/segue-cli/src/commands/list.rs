//! List command: print every stored transition in id order.

use anyhow::Result;

use segue_core::TransitionRecord;
use segue_engine::SegueEngine;

/// Output format for the transition listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown format: {}. Use 'table' or 'json'", s),
        }
    }
}

/// Execute the list command.
pub fn execute(engine: &SegueEngine, format: OutputFormat) -> Result<()> {
    let records = engine.records()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No transitions stored yet.");
                return Ok(());
            }
            print_table(&records);
        }
    }
    Ok(())
}

const HEADERS: [&str; 6] = ["ID", "From Artist", "From Title", "To Artist", "To Title", "Note"];

fn print_table(records: &[TransitionRecord]) {
    let rows: Vec<[String; 6]> = records.iter().map(row).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    print_row(&HEADERS.map(String::from), &widths);
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in &rows {
        print_row(row, &widths);
    }
}

fn row(record: &TransitionRecord) -> [String; 6] {
    [
        record.id.to_string(),
        record.from.artist.clone(),
        record.from.title.clone(),
        record.to.artist.clone(),
        record.to.title.clone(),
        record.note.clone().unwrap_or_default(),
    ]
}

fn print_row(cells: &[String; 6], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}
