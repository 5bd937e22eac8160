//! Dialog text reveal and option selection.
//!
//! [`Typewriter`] reveals text one character per [`TYPEWRITER_CHAR_DELAY`],
//! line by line; an empty line still costs one step. [`ChoiceDialog`] adds a
//! wrap-around option cursor that only moves once the text is fully shown.

use std::time::Duration;

use crate::constants::TYPEWRITER_CHAR_DELAY;

/// Timer-driven character reveal over a list of lines.
#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<String>,
    /// Index of the line being revealed.
    line: usize,
    /// Characters of `line` already visible.
    chars: usize,
    carry: Duration,
    delay: Duration,
}

impl Typewriter {
    /// Start revealing `lines` at the default speed.
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self::with_delay(lines, TYPEWRITER_CHAR_DELAY)
    }

    /// Start revealing `lines`, one character per `delay`.
    #[must_use]
    pub fn with_delay(lines: Vec<String>, delay: Duration) -> Self {
        Self {
            lines,
            line: 0,
            chars: 0,
            carry: Duration::ZERO,
            delay,
        }
    }

    /// Full text being revealed.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether every character is visible.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.line >= self.lines.len()
    }

    /// Advance the reveal by `dt` of wall time.
    pub fn advance(&mut self, dt: Duration) {
        if self.is_complete() {
            return;
        }
        if self.delay.is_zero() {
            self.fast_forward();
            return;
        }
        self.carry += dt;
        while !self.is_complete() && self.carry >= self.delay {
            self.carry -= self.delay;
            self.step();
        }
    }

    fn step(&mut self) {
        let len = self.lines[self.line].chars().count();
        self.chars += 1;
        if self.chars >= len {
            self.line += 1;
            self.chars = 0;
        }
    }

    /// Reveal everything immediately.
    pub fn fast_forward(&mut self) {
        self.line = self.lines.len();
        self.chars = 0;
        self.carry = Duration::ZERO;
    }

    /// The lines as currently shown; the line in progress is truncated and
    /// lines not yet reached are omitted.
    #[must_use]
    pub fn visible(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .lines
            .iter()
            .take(self.line)
            .map(String::as_str)
            .collect();
        if let Some(current) = self.lines.get(self.line)
            && self.chars > 0
        {
            let end = current
                .char_indices()
                .nth(self.chars)
                .map_or(current.len(), |(i, _)| i);
            out.push(&current[..end]);
        }
        out
    }
}

/// A dialog whose text ends in a list of options.
#[derive(Debug, Clone)]
pub struct ChoiceDialog {
    reveal: Typewriter,
    options: Vec<String>,
    selected: usize,
}

impl ChoiceDialog {
    /// Create a dialog over `lines` offering `options`; the first option
    /// starts selected.
    #[must_use]
    pub fn new(lines: Vec<String>, options: Vec<String>) -> Self {
        Self {
            reveal: Typewriter::new(lines),
            options,
            selected: 0,
        }
    }

    /// Text reveal state.
    #[must_use]
    pub fn reveal(&self) -> &Typewriter {
        &self.reveal
    }

    /// Mutable text reveal state.
    pub fn reveal_mut(&mut self) -> &mut Typewriter {
        &mut self.reveal
    }

    /// Option labels.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the highlighted option.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the cursor up with wrap-around. Returns whether it moved.
    pub fn select_previous(&mut self) -> bool {
        if !self.reveal.is_complete() || self.options.is_empty() {
            return false;
        }
        self.selected = if self.selected == 0 {
            self.options.len() - 1
        } else {
            self.selected - 1
        };
        true
    }

    /// Move the cursor down with wrap-around. Returns whether it moved.
    pub fn select_next(&mut self) -> bool {
        if !self.reveal.is_complete() || self.options.is_empty() {
            return false;
        }
        self.selected = (self.selected + 1) % self.options.len();
        true
    }
}
