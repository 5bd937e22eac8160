//! Sound effect capability.
//!
//! One [`Audio`] instance is created at session start and lent by reference to
//! every consumer (menu, scene, front-end). Playback is fire-and-forget: a
//! backend failure is logged at debug level and otherwise ignored.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

/// Sound effects the game can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Cursor moved in a menu or choice dialog.
    MenuSelect,
    /// Menu entry confirmed.
    MenuConfirm,
    /// Quit chosen from the main menu.
    MenuQuit,
    /// A card dialog opened.
    CardOpen,
    /// A card dialog closed.
    CardClose,
    /// The NPC started talking.
    NpcSpeak,
    /// The game was saved.
    Save,
}

/// Something that can actually emit a sound.
pub trait SoundBackend {
    /// Emit `sound`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device refused the sound.
    fn emit(&self, sound: Sound) -> io::Result<()>;
}

/// Backend that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundBackend for Silent {
    fn emit(&self, _sound: Sound) -> io::Result<()> {
        Ok(())
    }
}

/// Backend that rings the terminal bell for the louder effects.
///
/// Cursor movement stays quiet; a bell per arrow press is unbearable.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl SoundBackend for TerminalBell {
    fn emit(&self, sound: Sound) -> io::Result<()> {
        if matches!(sound, Sound::MenuSelect) {
            return Ok(());
        }
        let mut out = io::stdout();
        out.write_all(b"\x07")?;
        out.flush()
    }
}

/// Backend that remembers what was played; used by tests and tooling.
#[derive(Debug, Default)]
pub struct Recorder {
    played: RefCell<Vec<Sound>>,
}

impl Recorder {
    /// Sounds emitted so far, oldest first.
    #[must_use]
    pub fn played(&self) -> Vec<Sound> {
        self.played.borrow().clone()
    }
}

impl SoundBackend for Recorder {
    fn emit(&self, sound: Sound) -> io::Result<()> {
        self.played.borrow_mut().push(sound);
        Ok(())
    }
}

impl<B: SoundBackend + ?Sized> SoundBackend for Rc<B> {
    fn emit(&self, sound: Sound) -> io::Result<()> {
        (**self).emit(sound)
    }
}

/// The shared audio capability: a mute flag in front of a backend.
pub struct Audio {
    enabled: Cell<bool>,
    backend: Box<dyn SoundBackend>,
}

impl fmt::Debug for Audio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Audio")
            .field("enabled", &self.enabled.get())
            .finish_non_exhaustive()
    }
}

impl Audio {
    /// Wrap `backend`, initially enabled.
    #[must_use]
    pub fn new(backend: Box<dyn SoundBackend>) -> Self {
        Self {
            enabled: Cell::new(true),
            backend,
        }
    }

    /// Audio that never makes a sound.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(Box::new(Silent))
    }

    /// Play `sound` if enabled. Never fails.
    pub fn play(&self, sound: Sound) {
        if !self.enabled.get() {
            return;
        }
        if let Err(e) = self.backend.emit(sound) {
            log::debug!("sound {sound:?} not played: {e}");
        }
    }

    /// Enable or mute all effects.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
        log::debug!("audio {}", if enabled { "enabled" } else { "muted" });
    }

    /// Whether effects are currently audible.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Flip the mute flag.
    pub fn toggle(&self) {
        self.set_enabled(!self.enabled.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl SoundBackend for Broken {
        fn emit(&self, _sound: Sound) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "blocked autoplay"))
        }
    }

    #[test]
    fn test_muted_audio_plays_nothing() {
        let rec = Rc::new(Recorder::default());
        let audio = Audio::new(Box::new(Rc::clone(&rec)));

        audio.play(Sound::CardOpen);
        audio.set_enabled(false);
        audio.play(Sound::CardClose);
        assert!(!audio.is_enabled());

        assert_eq!(rec.played(), vec![Sound::CardOpen]);
    }

    #[test]
    fn test_backend_failure_is_swallowed() {
        let audio = Audio::new(Box::new(Broken));
        audio.play(Sound::Save);
        assert!(audio.is_enabled());
    }

    #[test]
    fn test_toggle_flips_state() {
        let audio = Audio::silent();
        audio.toggle();
        assert!(!audio.is_enabled());
        audio.toggle();
        assert!(audio.is_enabled());
    }
}
