//! Interactive terminal session.
//!
//! The line-oriented counterpart of the original entry form: a menu loop
//! over one in-memory [`RoomLedger`]. Every action delegates to the same
//! logic layer the headless subcommands use; this module only prompts,
//! echoes, and renders.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::export::{PdfExporter, TableExporter, TableSnapshot, XlsxExporter};
use crate::ledger::RoomLedger;
use crate::models::{RoomInput, RoomType};

/// Runs the menu loop until the user quits or stdin closes.
pub fn run_session(ledger: &mut RoomLedger, config: &Config) -> Result<()> {
    println!("{} - residential wire gauge estimator", APP_NAME);
    println!("Estimates only; a certified electrician must design the real installation.");

    loop {
        println!();
        println!(
            "[a]dd room  [l]ist  [x] export spreadsheet  [p] export document  [c]lear  [q]uit"
        );
        let Some(choice) = prompt("> ")? else {
            // stdin closed
            return Ok(());
        };

        match choice.to_lowercase().as_str() {
            "a" | "add" => add_room(ledger)?,
            "l" | "list" => list_rooms(ledger),
            "x" | "xlsx" => export(ledger, config, &XlsxExporter, "xlsx")?,
            "p" | "pdf" => export(ledger, config, &PdfExporter, "pdf")?,
            "c" | "clear" => {
                ledger.clear();
                println!("Ledger cleared.");
            }
            "q" | "quit" | "exit" => return Ok(()),
            "" => {}
            other => println!("Unknown option '{other}'."),
        }
    }
}

/// Prompts for the four form fields and appends one entry.
///
/// A rejected entry leaves the ledger untouched and returns to the menu;
/// the user can retry.
fn add_room(ledger: &mut RoomLedger) -> Result<()> {
    let Some(name) = prompt("Room name: ")? else {
        return Ok(());
    };
    let Some(width) = prompt("Width (m): ")? else {
        return Ok(());
    };
    let Some(length) = prompt("Length (m): ")? else {
        return Ok(());
    };

    println!("Room types:");
    for (index, room_type) in RoomType::ALL.iter().enumerate() {
        println!("  {}. {}", index + 1, room_type.label());
    }
    let Some(type_choice) = prompt("Room type (number or label): ")? else {
        return Ok(());
    };
    let room_type = resolve_room_type(&type_choice);

    let input = RoomInput {
        name,
        width,
        length,
        room_type,
    };

    match ledger.add(&input) {
        Ok(entry) => {
            println!(
                "Added '{}' ({}): lighting {}, outlets {}, specific {}",
                entry.name,
                entry.formatted_area(),
                entry.gauges.lighting,
                entry.gauges.outlets,
                entry.gauges.specific
            );
        }
        Err(e) => println!("Entry rejected: {e}"),
    }

    Ok(())
}

/// A catalog index ("5") becomes its label; anything else is kept as a
/// free-form label, matching the original form's editable dropdown.
fn resolve_room_type(choice: &str) -> String {
    let trimmed = choice.trim();
    if let Ok(index) = trimmed.parse::<usize>() {
        if (1..=RoomType::ALL.len()).contains(&index) {
            return RoomType::ALL[index - 1].label().to_string();
        }
    }
    trimmed.to_string()
}

fn list_rooms(ledger: &RoomLedger) {
    let snapshot = ledger.snapshot();
    if snapshot.is_empty() {
        println!("No rooms added yet.");
        return;
    }
    print!("{}", render_snapshot(&snapshot));
}

/// Renders the snapshot as an aligned text table.
fn render_snapshot(snapshot: &TableSnapshot) -> String {
    let mut widths: Vec<usize> = snapshot
        .columns
        .iter()
        .map(|c| c.chars().count())
        .collect();
    for row in &snapshot.rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &widths, snapshot.columns.iter().copied());
    let total: usize = widths.iter().map(|w| w + 2).sum::<usize>() + widths.len() + 1;
    output.push_str(&"-".repeat(total));
    output.push('\n');
    for row in &snapshot.rows {
        push_row(&mut output, &widths, row.iter().map(String::as_str));
    }
    output
}

fn push_row<'a>(output: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    output.push('|');
    for (width, cell) in widths.iter().zip(cells) {
        let padding = width - cell.chars().count();
        output.push(' ');
        output.push_str(cell);
        output.push_str(&" ".repeat(padding + 1));
        output.push('|');
    }
    output.push('\n');
}

/// Exports the ledger through `exporter`, prompting for the output path.
///
/// Both the empty-ledger warning and a failed write are reported and
/// swallowed: the session (and the ledger) always survives an export.
fn export(
    ledger: &RoomLedger,
    config: &Config,
    exporter: &dyn TableExporter,
    extension: &str,
) -> Result<()> {
    let snapshot = ledger.snapshot();
    if snapshot.is_empty() {
        println!("Warning: there is no data to export. Add at least one room first.");
        return Ok(());
    }

    let default_path = default_export_path(config, extension);
    let answer = prompt(&format!("Output path [{}]: ", default_path.display()))?;
    let path = match answer {
        Some(text) if !text.trim().is_empty() => PathBuf::from(text.trim()),
        Some(_) => default_path,
        None => return Ok(()),
    };

    match exporter.export(&snapshot, &path) {
        Ok(()) => println!(
            "✓ Saved {} with {} row{} to: {}",
            exporter.format_name(),
            snapshot.rows.len(),
            if snapshot.rows.len() == 1 { "" } else { "s" },
            path.display()
        ),
        Err(e) => println!("Export failed: {e:#}"),
    }

    Ok(())
}

fn default_export_path(config: &Config, extension: &str) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    config
        .output_dir()
        .join(format!("dimensionamento_{date}.{extension}"))
}

/// Prints `label`, reads one line. `None` means stdin was closed.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
