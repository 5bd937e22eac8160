//! Static, translated content: UI strings and portfolio sections.
//!
//! Everything here is read-only data keyed by [`Language`]. The scene asks for
//! a bundle when it lays out cards or opens a dialog and never mutates it.

mod en;
mod es;
mod it;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::PREVIEW_WRAP;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Italian (the default).
    #[default]
    It,
    /// English.
    En,
    /// Spanish.
    Es,
}

impl Language {
    /// Every language, in menu order.
    pub const ALL: [Language; 3] = [Language::It, Language::En, Language::Es];

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Native display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Language::It => "Italiano",
            Language::En => "English",
            Language::Es => "Español",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language '{}' (expected it, en or es)", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "it" => Ok(Language::It),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Interface strings for one language.
#[derive(Debug, Clone, Copy)]
pub struct UiStrings {
    /// Start screen title.
    pub title: &'static str,
    /// Title banner drawn above the card grid.
    pub banner: &'static str,
    /// "Explore" main-menu entry.
    pub explore: &'static str,
    /// "Quit" main-menu entry.
    pub quit: &'static str,
    /// Language picker heading.
    pub language: &'static str,
    /// Farewell line printed after quitting.
    pub goodbye: &'static str,
    /// Hint drawn on the active card.
    pub read_details: &'static str,
    /// Hint drawn above the NPC.
    pub talk: &'static str,
    /// Footer while a dialog is still revealing.
    pub skip: &'static str,
    /// Footer for choice selection.
    pub select: &'static str,
    /// Footer for choice confirmation.
    pub confirm: &'static str,
    /// Footer once a dialog can be closed.
    pub close: &'static str,
    /// Save action label.
    pub save: &'static str,
    /// Character switch label.
    pub character: &'static str,
    /// NPC greeting.
    pub npc_greeting: &'static [&'static str],
    /// NPC choice options; index 0 is the affirmative.
    pub npc_options: [&'static str; 2],
    /// Toast after saving.
    pub saved: &'static [&'static str],
    /// Toast after loading.
    pub journey_continues: &'static [&'static str],
}

/// One portfolio section: the card preview plus the full dialog text.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Card title.
    pub title: &'static str,
    /// Icon glyph drawn next to the dialog title.
    pub icon: &'static str,
    /// Short summary, wrapped into preview lines on the card.
    pub summary: &'static str,
    /// Full dialog body.
    pub details: &'static [&'static str],
}

/// All six sections for one language, in fixed card order.
#[derive(Debug, Clone, Copy)]
pub struct Portfolio {
    /// Profile section.
    pub profile: Section,
    /// Work experience.
    pub experience: Section,
    /// Skills.
    pub skills: Section,
    /// Projects.
    pub projects: Section,
    /// Education.
    pub education: Section,
    /// Contact details.
    pub contact: Section,
}

/// Interface strings for `language`.
#[must_use]
pub fn ui(language: Language) -> &'static UiStrings {
    match language {
        Language::It => &it::UI,
        Language::En => &en::UI,
        Language::Es => &es::UI,
    }
}

/// Portfolio sections for `language`.
#[must_use]
pub fn portfolio(language: Language) -> &'static Portfolio {
    match language {
        Language::It => &it::PORTFOLIO,
        Language::En => &en::PORTFOLIO,
        Language::Es => &es::PORTFOLIO,
    }
}

/// Greedy word wrap of a card summary into preview lines.
///
/// A word longer than the width gets its own line rather than being split.
#[must_use]
pub fn preview_lines(summary: &str) -> Vec<String> {
    wrap(summary, PREVIEW_WRAP)
}

/// Greedy word wrap at `width` characters.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed =
            current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
