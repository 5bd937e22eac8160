//! Start screen: pick a language, then explore or quit.

use crate::audio::{Audio, Sound};
use crate::content::Language;
use crate::input::Key;

/// Which list the start screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Language picker.
    Language,
    /// Explore / Quit.
    Main,
}

/// What the start screen decided after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Stay on the start screen.
    Stay,
    /// Mount the exploration scene in this language.
    Explore(Language),
    /// Leave the game.
    Quit,
}

/// Start screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartMenu {
    mode: MenuMode,
    language: usize,
    main: usize,
}

impl Default for StartMenu {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl StartMenu {
    /// Start on the language picker with `preselected` highlighted.
    #[must_use]
    pub fn new(preselected: Language) -> Self {
        let language = Language::ALL
            .iter()
            .position(|l| *l == preselected)
            .unwrap_or(0);
        Self {
            mode: MenuMode::Language,
            language,
            main: 0,
        }
    }

    /// Current list.
    #[must_use]
    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    /// Highlighted language.
    #[must_use]
    pub fn language(&self) -> Language {
        Language::ALL[self.language]
    }

    /// Highlighted main-menu entry (0 = explore, 1 = quit).
    #[must_use]
    pub fn main_selection(&self) -> usize {
        self.main
    }

    /// Feed a key press.
    pub fn handle_key(&mut self, key: Key, audio: &Audio) -> MenuOutcome {
        if key == Key::Mute {
            audio.toggle();
            return MenuOutcome::Stay;
        }
        match self.mode {
            MenuMode::Language => self.handle_language(key, audio),
            MenuMode::Main => self.handle_main(key, audio),
        }
    }

    fn handle_language(&mut self, key: Key, audio: &Audio) -> MenuOutcome {
        let count = Language::ALL.len();
        match key {
            Key::Up => {
                self.language = (self.language + count - 1) % count;
                audio.play(Sound::MenuSelect);
            }
            Key::Down => {
                self.language = (self.language + 1) % count;
                audio.play(Sound::MenuSelect);
            }
            Key::Confirm => {
                audio.play(Sound::MenuConfirm);
                self.mode = MenuMode::Main;
            }
            _ => {}
        }
        MenuOutcome::Stay
    }

    fn handle_main(&mut self, key: Key, audio: &Audio) -> MenuOutcome {
        match key {
            Key::Up => {
                self.main = 0;
                audio.play(Sound::MenuSelect);
            }
            Key::Down => {
                self.main = 1;
                audio.play(Sound::MenuSelect);
            }
            Key::Confirm => {
                if self.main == 0 {
                    audio.play(Sound::MenuConfirm);
                    return MenuOutcome::Explore(self.language());
                }
                audio.play(Sound::MenuQuit);
                return MenuOutcome::Quit;
            }
            Key::Cancel => self.mode = MenuMode::Language,
            _ => {}
        }
        MenuOutcome::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Recorder;
    use std::rc::Rc;

    #[test]
    fn test_language_selection_wraps() {
        let audio = Audio::silent();
        let mut menu = StartMenu::default();
        assert_eq!(menu.language(), Language::It);

        menu.handle_key(Key::Up, &audio);
        assert_eq!(menu.language(), Language::Es);
        menu.handle_key(Key::Down, &audio);
        menu.handle_key(Key::Down, &audio);
        assert_eq!(menu.language(), Language::En);
    }

    #[test]
    fn test_explore_flow() {
        let rec = Rc::new(Recorder::default());
        let audio = Audio::new(Box::new(Rc::clone(&rec)));
        let mut menu = StartMenu::new(Language::En);

        assert_eq!(menu.handle_key(Key::Confirm, &audio), MenuOutcome::Stay);
        assert_eq!(menu.mode(), MenuMode::Main);
        assert_eq!(
            menu.handle_key(Key::Confirm, &audio),
            MenuOutcome::Explore(Language::En)
        );
        assert_eq!(rec.played(), vec![Sound::MenuConfirm, Sound::MenuConfirm]);
    }

    #[test]
    fn test_quit_and_back() {
        let audio = Audio::silent();
        let mut menu = StartMenu::default();
        menu.handle_key(Key::Confirm, &audio);
        menu.handle_key(Key::Down, &audio);
        assert_eq!(menu.main_selection(), 1);

        menu.handle_key(Key::Cancel, &audio);
        assert_eq!(menu.mode(), MenuMode::Language);

        menu.handle_key(Key::Confirm, &audio);
        assert_eq!(menu.handle_key(Key::Confirm, &audio), MenuOutcome::Quit);
    }

    #[test]
    fn test_mute_toggles_shared_audio() {
        let audio = Audio::silent();
        let mut menu = StartMenu::default();
        menu.handle_key(Key::Mute, &audio);
        assert!(!audio.is_enabled());
    }
}
