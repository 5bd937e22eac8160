//! Save slot inspection commands.

use super::{CliError, OutputFormat};
use folioquest::{SaveRecord, SaveSlot};
use std::path::PathBuf;

/// Execute `save show`.
///
/// # Errors
///
/// Returns an error if the slot exists but cannot be read or decoded.
pub(crate) fn show(path: PathBuf, format: OutputFormat) -> Result<(), CliError> {
    let slot = SaveSlot::new(path);
    if !slot.exists() {
        println!("No save at {}", slot.path().display());
        return Ok(());
    }
    let record = slot
        .read_record()
        .map_err(|e| CliError::new(format!("{e} ({})", slot.path().display())))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Text => print!("{}", format_text(&slot, &record)),
    }
    Ok(())
}

/// Execute `save clear`.
///
/// # Errors
///
/// Never fails today; the signature matches the other commands.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn clear(path: PathBuf) -> Result<(), CliError> {
    let slot = SaveSlot::new(path);
    if slot.clear() {
        println!("Cleared {}", slot.path().display());
    } else {
        println!("Nothing to clear at {}", slot.path().display());
    }
    Ok(())
}

fn format_text(slot: &SaveSlot, record: &SaveRecord) -> String {
    let visited: Vec<&str> = record.visited_cards.iter().map(|c| c.as_str()).collect();
    let mut out = String::new();
    out.push_str(&format!("Save slot: {}\n", slot.path().display()));
    out.push_str(&format!(
        "  Position:  ({:.1}, {:.1})\n",
        record.player_x, record.player_y
    ));
    out.push_str(&format!("  Character: {}\n", record.current_character));
    out.push_str(&format!(
        "  Visited:   {} [{}]\n",
        visited.len(),
        visited.join(", ")
    ));
    out.push_str(&format!(
        "  Audio:     {}\n",
        if record.audio_enabled { "on" } else { "muted" }
    ));
    out.push_str(&format!("  Language:  {}\n", record.language.name()));
    out.push_str(&format!("  Timestamp: {}\n", record.timestamp));
    out
}
