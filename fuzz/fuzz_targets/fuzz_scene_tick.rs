#![no_main]

//! Scene loop fuzzer.
//!
//! Mounts a scene (optionally from an arbitrary save), then feeds it a
//! sequence of held-key ticks, single key presses and resizes. After every
//! step the player must be on the canvas, and no tick may move the player
//! while an overlay is open.

use std::time::Duration;

use arbitrary::Arbitrary;
use folioquest::scene::CardId;
use folioquest::{Audio, Character, HeldKeys, Key, Language, SaveRecord, Scene, Size};
use libfuzzer_sys::fuzz_target;

const KEYS: [Key; 9] = [
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Confirm,
    Key::Skip,
    Key::Cancel,
    Key::Mute,
    Key::SwitchCharacter,
];

#[derive(Arbitrary, Debug)]
enum FuzzStep {
    /// Hold the keys whose bits are set for `ms` milliseconds.
    Hold { mask: u16, ms: u8 },
    /// Press one key.
    Press(u8),
    /// Resize the viewport.
    Resize { width: u16, height: u16 },
}

#[derive(Arbitrary, Debug)]
struct SavedState {
    x: f64,
    y: f64,
    sans: bool,
    visited: u8,
    audio: bool,
}

#[derive(Arbitrary, Debug)]
struct SceneInput {
    width: u16,
    height: u16,
    language: u8,
    save: Option<SavedState>,
    steps: Vec<FuzzStep>,
}

fuzz_target!(|input: SceneInput| {
    let language = Language::ALL[usize::from(input.language) % Language::ALL.len()];
    let save = input.save.map(|s| SaveRecord {
        player_x: s.x,
        player_y: s.y,
        current_character: if s.sans { Character::Sans } else { Character::Frisk },
        visited_cards: CardId::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| s.visited & (1 << i) != 0)
            .map(|(_, &id)| id)
            .collect(),
        audio_enabled: s.audio,
        language,
        timestamp: 0,
    });

    let audio = Audio::silent();
    let viewport = Size::new(f64::from(input.width), f64::from(input.height));
    let mut scene = Scene::mount(viewport, language, save, &audio);

    for step in input.steps.into_iter().take(500) {
        match step {
            FuzzStep::Hold { mask, ms } => {
                let mut held = HeldKeys::new();
                for (i, &k) in KEYS.iter().enumerate() {
                    if mask & (1 << i) != 0 {
                        held.press(k, Duration::ZERO);
                    }
                }
                let before = scene.player().position();
                scene.tick(&held, Duration::from_millis(u64::from(ms)));
                if !scene.modal().is_exploring() {
                    assert_eq!(scene.player().position(), before);
                }
            }
            FuzzStep::Press(k) => {
                scene.handle_key(KEYS[usize::from(k) % KEYS.len()], &audio);
            }
            FuzzStep::Resize { width, height } => {
                scene.resize(Size::new(f64::from(width), f64::from(height)));
            }
        }

        let p = scene.player();
        let canvas = scene.canvas();
        assert!(p.x >= 0.0 && p.x + p.w <= canvas.width, "x out of bounds: {p:?}");
        assert!(p.y >= 0.0 && p.y + p.h <= canvas.height, "y out of bounds: {p:?}");
        assert!(scene.visited().len() <= CardId::ALL.len());
    }
});
