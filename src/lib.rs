// Allow unwrap and exact float comparisons in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]
//! Folio Quest: a portfolio you explore as a tiny top-down RPG.
//!
//! The library holds the deterministic core: card layout, entity movement,
//! collision, the modal dialog state machine, the follow camera and save/load
//! reconciliation. The `folioquest` binary hosts it in a terminal.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Terminal front-end (cli::play)    │
//! ├──────────────────┬──────────────────┤
//! │    StartMenu     │      Scene       │
//! │                  │ layout · entity  │
//! │                  │ interaction      │
//! │                  │ modal · camera   │
//! │                  │ events           │
//! ├──────────────────┴──────────────────┤
//! │  Audio · SaveSlot · content tables  │
//! └─────────────────────────────────────┘
//! ```
//!
//! All coordinates are world pixels; a front-end decides how many pixels a
//! terminal cell covers.

pub mod audio;
pub mod constants;
pub mod content;
pub mod dialog;
pub mod error;
pub mod geometry;
pub mod input;
pub mod menu;
pub mod persistence;
pub mod scene;

pub use audio::{Audio, Sound, SoundBackend};
pub use content::Language;
pub use error::{StorageError, StorageResult};
pub use geometry::{Point, Rect, Size, circular_interact, rect_overlap};
pub use input::{HeldKeys, Key};
pub use menu::{MenuOutcome, StartMenu};
pub use persistence::{SaveRecord, SaveSlot};
pub use scene::{Card, CardId, Character, Entity, Interaction, Modal, ModalKind, Scene};
