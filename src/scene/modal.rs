//! The exclusive session mode.

use std::time::Duration;

use crate::constants::{LOAD_TOAST_DURATION, SAVE_TOAST_DURATION};
use crate::dialog::{ChoiceDialog, Typewriter};

use super::layout::CardId;

/// Exactly one of these is active at a time. Anything but
/// [`Modal::Exploring`] freezes the player.
#[derive(Debug, Clone, Default)]
pub enum Modal {
    /// Free movement.
    #[default]
    Exploring,
    /// A card's detail dialog.
    CardOpen {
        /// Card being read.
        card: CardId,
        /// Detail text reveal.
        reveal: Typewriter,
    },
    /// The NPC offering to swap characters.
    NpcChoice {
        /// Greeting and YES/NO options.
        dialog: ChoiceDialog,
    },
    /// "File saved" notice.
    SaveToast {
        /// Time left on screen.
        remaining: Duration,
    },
    /// "Your journey continues" notice shown after loading a save.
    LoadToast {
        /// Time left on screen.
        remaining: Duration,
    },
}

/// Payload-free discriminant of [`Modal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    /// See [`Modal::Exploring`].
    Exploring,
    /// See [`Modal::CardOpen`].
    CardOpen,
    /// See [`Modal::NpcChoice`].
    NpcChoice,
    /// See [`Modal::SaveToast`].
    SaveToast,
    /// See [`Modal::LoadToast`].
    LoadToast,
}

impl Modal {
    /// Fresh save toast.
    #[must_use]
    pub fn save_toast() -> Self {
        Modal::SaveToast {
            remaining: SAVE_TOAST_DURATION,
        }
    }

    /// Fresh load toast.
    #[must_use]
    pub fn load_toast() -> Self {
        Modal::LoadToast {
            remaining: LOAD_TOAST_DURATION,
        }
    }

    /// Discriminant.
    #[must_use]
    pub fn kind(&self) -> ModalKind {
        match self {
            Modal::Exploring => ModalKind::Exploring,
            Modal::CardOpen { .. } => ModalKind::CardOpen,
            Modal::NpcChoice { .. } => ModalKind::NpcChoice,
            Modal::SaveToast { .. } => ModalKind::SaveToast,
            Modal::LoadToast { .. } => ModalKind::LoadToast,
        }
    }

    /// Whether the player may move.
    #[must_use]
    pub fn is_exploring(&self) -> bool {
        matches!(self, Modal::Exploring)
    }

    /// Text reveal of whichever dialog is open.
    #[must_use]
    pub fn reveal(&self) -> Option<&Typewriter> {
        match self {
            Modal::CardOpen { reveal, .. } => Some(reveal),
            Modal::NpcChoice { dialog } => Some(dialog.reveal()),
            _ => None,
        }
    }

    /// Run timers for `dt`: dialog text keeps revealing and toasts count
    /// down. An expired toast falls back to exploring; returns `true` when
    /// that happened.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self {
            Modal::CardOpen { reveal, .. } => reveal.advance(dt),
            Modal::NpcChoice { dialog } => dialog.reveal_mut().advance(dt),
            Modal::SaveToast { remaining } | Modal::LoadToast { remaining } => {
                *remaining = remaining.saturating_sub(dt);
                if remaining.is_zero() {
                    *self = Modal::Exploring;
                    return true;
                }
            }
            Modal::Exploring => {}
        }
        false
    }
}
