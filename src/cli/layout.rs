//! Layout command implementation - print the card grid for a canvas width.

use super::{CliError, OutputFormat};
use folioquest::content::Language;
use folioquest::scene::{canvas_size, compute_card_layout, spawn_point};
use folioquest::{Rect, Size};
use serde::Serialize;

/// JSON-serializable card placement.
#[derive(Debug, Serialize)]
struct JsonCard {
    /// Card identifier.
    id: &'static str,
    /// Card title in the chosen language.
    title: &'static str,
    /// Placement in world pixels.
    rect: Rect,
}

/// JSON-serializable layout.
#[derive(Debug, Serialize)]
struct JsonLayout {
    /// Canvas size after applying the minimums.
    canvas: Size,
    /// Default entity position.
    spawn: folioquest::Point,
    /// Cards in fixed order.
    cards: Vec<JsonCard>,
}

/// Execute the layout command.
///
/// # Errors
///
/// Returns an error if the width is not positive or JSON encoding fails.
pub(crate) fn execute(
    width: f64,
    height: f64,
    language: Language,
    format: OutputFormat,
) -> Result<(), CliError> {
    if width <= 0.0 || height <= 0.0 {
        return Err(CliError::new("viewport size must be positive"));
    }
    let canvas = canvas_size(Size::new(width, height));
    let cards = compute_card_layout(canvas.width, language);
    let spawn = spawn_point(&cards);

    match format {
        OutputFormat::Json => {
            let layout = JsonLayout {
                canvas,
                spawn,
                cards: cards
                    .iter()
                    .map(|c| JsonCard {
                        id: c.id.as_str(),
                        title: c.title,
                        rect: c.rect,
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        OutputFormat::Text => {
            println!("Canvas {:.0} x {:.0} ({language})", canvas.width, canvas.height);
            println!("Spawn  ({:.0}, {:.0})", spawn.x, spawn.y);
            for card in &cards {
                println!(
                    "  {:<10} x={:>6.0} y={:>5.0} w={:.0} h={:.0}  {}",
                    card.id.as_str(),
                    card.rect.x,
                    card.rect.y,
                    card.rect.w,
                    card.rect.h,
                    card.title
                );
            }
        }
    }
    Ok(())
}
