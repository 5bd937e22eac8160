//! Card grid placement and canvas sizing.

#![allow(clippy::cast_precision_loss)] // Grid indices are single digits

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    CARD_HEIGHT, CARD_SPACING, CARD_WIDTH, CARDS_PER_ROW, PLAYER_HEIGHT, PLAYER_WIDTH,
    TITLE_HEIGHT, TITLE_SPACING,
};
use crate::content::{self, Language, Section};
use crate::geometry::{Point, Rect, Size};

/// The six résumé sections, in fixed declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardId {
    /// Who I am.
    Profile,
    /// Work history.
    Experience,
    /// Languages and tools.
    Skills,
    /// Side projects.
    Projects,
    /// Schooling.
    Education,
    /// How to reach me.
    Contact,
}

impl CardId {
    /// Every card, in layout and hit-test priority order.
    pub const ALL: [CardId; 6] = [
        CardId::Profile,
        CardId::Experience,
        CardId::Skills,
        CardId::Projects,
        CardId::Education,
        CardId::Contact,
    ];

    /// Lowercase identifier, as stored in save files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardId::Profile => "profile",
            CardId::Experience => "experience",
            CardId::Skills => "skills",
            CardId::Projects => "projects",
            CardId::Education => "education",
            CardId::Contact => "contact",
        }
    }

    /// Translated section backing this card.
    #[must_use]
    pub fn section(self, language: Language) -> &'static Section {
        let p = content::portfolio(language);
        match self {
            CardId::Profile => &p.profile,
            CardId::Experience => &p.experience,
            CardId::Skills => &p.skills,
            CardId::Projects => &p.projects,
            CardId::Education => &p.education,
            CardId::Contact => &p.contact,
        }
    }

    /// Card height; some sections use a shorter box.
    #[must_use]
    pub fn height(self) -> f64 {
        match self {
            CardId::Profile | CardId::Projects => CARD_HEIGHT,
            CardId::Experience | CardId::Skills | CardId::Education => CARD_HEIGHT - 20.0,
            CardId::Contact => CARD_HEIGHT - 40.0,
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed card: geometry plus the text drawn on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Which section this is.
    pub id: CardId,
    /// Placement in world pixels.
    pub rect: Rect,
    /// Title drawn at the top.
    pub title: &'static str,
    /// Wrapped summary lines.
    pub lines: Vec<String>,
    /// Icon glyph.
    pub icon: &'static str,
}

/// Total width of the card grid.
pub const GRID_WIDTH: f64 =
    CARDS_PER_ROW as f64 * CARD_WIDTH + (CARDS_PER_ROW as f64 - 1.0) * CARD_SPACING;

/// Smallest canvas width that keeps the grid and the spawn slot on-canvas.
pub const MIN_CANVAS_WIDTH: f64 =
    GRID_WIDTH + 2.0 * (CARD_SPACING + PLAYER_WIDTH + CARD_SPACING);

/// Smallest canvas height that fits the banner and three card rows.
pub const MIN_CANVAS_HEIGHT: f64 =
    TITLE_HEIGHT + TITLE_SPACING + (CARD_HEIGHT + CARD_SPACING) * 3.0 + CARD_SPACING;

/// Canvas size for a viewport: at least the viewport, at least the grid.
#[must_use]
pub fn canvas_size(viewport: Size) -> Size {
    Size::new(
        viewport.width.max(MIN_CANVAS_WIDTH),
        viewport.height.max(MIN_CANVAS_HEIGHT),
    )
}

/// Lay out the six cards on a canvas `canvas_width` pixels wide.
///
/// Two columns, filled left-to-right then top-to-bottom, horizontally
/// centered, starting below the title banner. The returned order is
/// [`CardId::ALL`].
#[must_use]
pub fn compute_card_layout(canvas_width: f64, language: Language) -> Vec<Card> {
    let start_x = (canvas_width - GRID_WIDTH) / 2.0;
    let start_y = TITLE_HEIGHT + TITLE_SPACING;

    CardId::ALL
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let col = (i % CARDS_PER_ROW) as f64;
            let row = (i / CARDS_PER_ROW) as f64;
            let section = id.section(language);
            Card {
                id,
                rect: Rect::new(
                    start_x + col * (CARD_WIDTH + CARD_SPACING),
                    start_y + row * (CARD_HEIGHT + CARD_SPACING),
                    CARD_WIDTH,
                    id.height(),
                ),
                title: section.title,
                lines: content::preview_lines(section.summary),
                icon: section.icon,
            }
        })
        .collect()
}

/// Where entities appear by default: one spacing to the right of the contact
/// card, vertically centered on it.
///
/// Uses the last card when `cards` holds no contact card, and the origin when
/// it is empty.
#[must_use]
pub fn spawn_point(cards: &[Card]) -> Point {
    cards
        .iter()
        .find(|c| c.id == CardId::Contact)
        .or_else(|| cards.last())
        .map_or_else(Point::default, |anchor| {
            Point::new(
                anchor.rect.right() + CARD_SPACING,
                anchor.rect.y + anchor.rect.h / 2.0 - PLAYER_HEIGHT / 2.0,
            )
        })
}
