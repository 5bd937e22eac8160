//! Play command implementation - the interactive terminal game.

// The config is handed over once per session
#![allow(clippy::needless_pass_by_value)]

use super::keys::{Input, map_key};
use super::{CliError, view};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        KeyboardEnhancementFlags, MouseButton, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use folioquest::audio::{Silent, TerminalBell};
use folioquest::content::{self, Language};
use folioquest::menu::{MenuOutcome, StartMenu};
use folioquest::persistence::{SaveRecord, now_millis};
use folioquest::{Audio, HeldKeys, Key, SaveSlot, Scene, Size};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Position};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long a key counts as held after its last press when the terminal does
/// not report releases. Must outlast the keyboard's auto-repeat delay.
const HOLD_WINDOW: Duration = Duration::from_millis(550);

/// Resolved settings for one play session.
// One bool per command-line switch
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub(crate) struct PlayConfig {
    /// Language forced from the command line.
    pub(crate) language: Option<Language>,
    /// Save slot file.
    pub(crate) save_file: PathBuf,
    /// Target frames per second.
    pub(crate) fps: u32,
    /// Start muted.
    pub(crate) mute: bool,
    /// Use the terminal bell for sound effects.
    pub(crate) bell: bool,
    /// Go straight to the scene.
    pub(crate) skip_menu: bool,
    /// Ignore the existing save.
    pub(crate) fresh: bool,
    /// World pixels covered by one terminal column.
    pub(crate) cell_width: f64,
    /// World pixels covered by one terminal row.
    pub(crate) cell_height: f64,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            language: None,
            save_file: PathBuf::from(folioquest::persistence::SAVE_FILE_NAME),
            fps: 60,
            mute: false,
            bell: true,
            skip_menu: false,
            fresh: false,
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

/// Which screen is showing.
pub(super) enum Screen {
    /// Language and main menu.
    Menu(StartMenu),
    /// The exploration scene.
    Explore(Box<Scene>),
}

/// Everything the loop and the renderer share.
pub(super) struct App {
    pub(super) screen: Screen,
    pub(super) audio: Audio,
    pub(super) cell: Size,
    slot: SaveSlot,
    saved: Option<SaveRecord>,
    keys: HeldKeys,
    started: Instant,
    mute: bool,
    goodbye: Option<Language>,
    quit: bool,
}

impl App {
    fn new(config: &PlayConfig, releases: bool) -> Self {
        let audio = if config.bell {
            Audio::new(Box::new(TerminalBell))
        } else {
            Audio::new(Box::new(Silent))
        };
        if config.mute {
            audio.set_enabled(false);
        }

        let slot = SaveSlot::new(config.save_file.clone());
        let saved = if config.fresh { None } else { slot.load() };
        let preselected = config
            .language
            .or_else(|| saved.as_ref().map(|s| s.language))
            .unwrap_or_default();

        Self {
            screen: Screen::Menu(StartMenu::new(preselected)),
            audio,
            cell: Size::new(config.cell_width, config.cell_height),
            slot,
            saved,
            keys: if releases {
                HeldKeys::new()
            } else {
                HeldKeys::with_hold(HOLD_WINDOW)
            },
            started: Instant::now(),
            mute: config.mute,
            goodbye: None,
            quit: false,
        }
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn explore(&mut self, language: Language, viewport: Size) {
        let scene = Scene::mount(viewport, language, self.saved.take(), &self.audio);
        if self.mute {
            self.audio.set_enabled(false);
        }
        self.keys.clear();
        self.screen = Screen::Explore(Box::new(scene));
    }

    fn handle_key(&mut self, event: &KeyEvent, viewport: Size) {
        let Some(input) = map_key(event) else {
            return;
        };
        let key = match input {
            Input::Quit => {
                self.leave();
                return;
            }
            Input::Game(key) => key,
        };

        if event.kind == KeyEventKind::Release {
            self.keys.release(key);
            return;
        }
        if key.is_direction() {
            self.keys.press(key, self.now());
        }
        if event.kind == KeyEventKind::Repeat && !key.is_direction() {
            return;
        }

        match &mut self.screen {
            Screen::Menu(menu) => match menu.handle_key(key, &self.audio) {
                MenuOutcome::Stay => {}
                MenuOutcome::Explore(language) => self.explore(language, viewport),
                MenuOutcome::Quit => {
                    self.goodbye = Some(menu.language());
                    self.quit = true;
                }
            },
            Screen::Explore(scene) => {
                if key == Key::Save {
                    scene.save(&self.slot, &self.audio, now_millis());
                } else {
                    scene.handle_key(key, &self.audio);
                }
            }
        }
    }

    fn leave(&mut self) {
        let language = match &mut self.screen {
            Screen::Menu(menu) => menu.language(),
            Screen::Explore(scene) => {
                scene.teardown();
                scene.language()
            }
        };
        self.keys.clear();
        self.goodbye = Some(language);
        self.quit = true;
    }

    fn click(&mut self, at: Position, frame: ratatui::layout::Rect) {
        let Screen::Explore(scene) = &mut self.screen else {
            return;
        };
        if !view::dialog_area(frame).contains(at) {
            scene.dismiss_overlay(&self.audio);
        }
    }

    fn tick(&mut self, dt: Duration) {
        let now = self.now();
        self.keys.expire(now);
        if let Screen::Explore(scene) = &mut self.screen {
            scene.tick(&self.keys, dt);
        }
    }
}

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub(crate) fn execute(config: PlayConfig) -> Result<(), CliError> {
    if config.fps == 0 {
        return Err(CliError::new("--fps must be at least 1"));
    }
    if config.cell_width <= 0.0 || config.cell_height <= 0.0 {
        return Err(CliError::new("cell size must be positive"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let releases = supports_keyboard_enhancement().unwrap_or(false);
    if releases {
        execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::info!("terminal key release events: {releases}");

    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(&config, releases);
    if config.skip_menu {
        let language = config
            .language
            .or_else(|| app.saved.as_ref().map(|s| s.language))
            .unwrap_or_default();
        let viewport = viewport_of(&terminal, app.cell)?;
        app.explore(language, viewport);
    }

    let result = run_loop(&mut terminal, &mut app, config.fps);

    // Restore terminal
    if releases {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor().map_err(|e| CliError::new(e.to_string()))?;

    result?;
    if let Some(language) = app.goodbye {
        println!("{}", content::ui(language).goodbye);
    }
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    fps: u32,
) -> Result<(), CliError> {
    let frame = Duration::from_secs(1) / fps;
    let mut last = Instant::now();

    while !app.quit {
        terminal
            .draw(|f| view::draw(f, app))
            .map_err(|e| CliError::new(e.to_string()))?;

        let deadline = last + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    let viewport = viewport_of(terminal, app.cell)?;
                    app.handle_key(&key, viewport);
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        let area = frame_area(terminal)?;
                        app.click(Position::new(mouse.column, mouse.row), area);
                    }
                }
                Event::Resize(..) => {
                    let viewport = viewport_of(terminal, app.cell)?;
                    if let Screen::Explore(scene) = &mut app.screen {
                        scene.resize(viewport);
                    }
                }
                _ => {}
            }
            if app.quit {
                return Ok(());
            }
        }

        let now = Instant::now();
        app.tick(now - last);
        last = now;
    }
    Ok(())
}

fn frame_area(
    terminal: &Terminal<CrosstermBackend<Stdout>>,
) -> Result<ratatui::layout::Rect, CliError> {
    let size = terminal.size().map_err(|e| CliError::new(e.to_string()))?;
    Ok(ratatui::layout::Rect::new(0, 0, size.width, size.height))
}

/// Size of the world view in world pixels.
fn viewport_of(
    terminal: &Terminal<CrosstermBackend<Stdout>>,
    cell: Size,
) -> Result<Size, CliError> {
    let world = view::world_area(frame_area(terminal)?);
    Ok(Size::new(
        f64::from(world.width) * cell.width,
        f64::from(world.height) * cell.height,
    ))
}
