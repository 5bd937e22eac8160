//! The exploration scene.
//!
//! A [`Scene`] owns everything that lives between mount and teardown: the card
//! layout, both entities, the interaction state, the modal state machine, the
//! camera and the scene's event bus. It is a deterministic step function:
//! [`Scene::tick`] advances it by `dt` given the held keys, and
//! [`Scene::handle_key`] feeds discrete key presses. It never does I/O except
//! through the [`SaveSlot`] passed to [`Scene::save`].
//!
//! ```
//! use std::time::Duration;
//! use folioquest::audio::Audio;
//! use folioquest::content::Language;
//! use folioquest::geometry::Size;
//! use folioquest::input::{HeldKeys, Key};
//! use folioquest::scene::Scene;
//!
//! let audio = Audio::silent();
//! let mut scene = Scene::mount(Size::new(1280.0, 720.0), Language::En, None, &audio);
//! let start = scene.player().x;
//!
//! let mut keys = HeldKeys::new();
//! keys.press(Key::Right, Duration::ZERO);
//! scene.tick(&keys, Duration::from_millis(16));
//! assert_eq!(scene.player().x, start + 2.0);
//! ```

use std::collections::BTreeSet;
use std::time::Duration;

mod camera;
mod entity;
mod events;
mod interaction;
mod layout;
mod modal;

pub use camera::Camera;
pub use entity::{Character, Entity, Facing};
pub use events::{EventBus, EventKind, SceneEvent, Subscription};
pub use interaction::{Interaction, resolve_interaction};
pub use layout::{
    Card, CardId, GRID_WIDTH, MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH, canvas_size,
    compute_card_layout, spawn_point,
};
pub use modal::{Modal, ModalKind};

use crate::audio::{Audio, Sound};
use crate::content::{self, Language};
use crate::dialog::{ChoiceDialog, Typewriter};
use crate::geometry::{Point, Size};
use crate::input::{HeldKeys, Key};
use crate::persistence::{SaveRecord, SaveSlot};

/// One mounted exploration session.
#[derive(Debug)]
pub struct Scene {
    language: Language,
    viewport: Size,
    canvas: Size,
    cards: Vec<Card>,
    spawn: Point,
    player: Entity,
    npc: Entity,
    character: Character,
    visited: BTreeSet<CardId>,
    interaction: Interaction,
    modal: Modal,
    camera: Camera,
    bus: EventBus,
    subscription: Option<Subscription>,
    player_shown: bool,
    clock: Duration,
}

impl Scene {
    /// Build the scene for a `viewport` (world pixels) in `language`.
    ///
    /// With a save the player resumes at its saved position and character,
    /// the visited set and audio preference are restored and the load toast
    /// opens. A save taken on the spawn slot keeps the player hidden there
    /// while the NPC is visible, so the slot never shows two sprites. The NPC always starts on the spawn point, never on the saved
    /// player position. Without a save both entities start on the spawn
    /// point as the primary character.
    #[must_use]
    pub fn mount(
        viewport: Size,
        language: Language,
        save: Option<SaveRecord>,
        audio: &Audio,
    ) -> Self {
        let canvas = canvas_size(viewport);
        let cards = compute_card_layout(canvas.width, language);
        let spawn = spawn_point(&cards);

        let mut bus = EventBus::new();
        let subscription = bus.subscribe(&[
            EventKind::OpenCard,
            EventKind::InteractNpc,
            EventKind::CharacterSwitch,
        ]);

        let mut scene = Self {
            language,
            viewport,
            canvas,
            cards,
            spawn,
            player: Entity::at(spawn),
            npc: Entity::at(spawn),
            character: Character::Frisk,
            visited: BTreeSet::new(),
            interaction: Interaction::default(),
            modal: Modal::Exploring,
            camera: Camera::new(),
            bus,
            subscription: Some(subscription),
            player_shown: false,
            clock: Duration::ZERO,
        };

        match save {
            Some(record) => {
                log::info!(
                    "resuming as {} at ({}, {}) with {} visited cards",
                    record.current_character,
                    record.player_x,
                    record.player_y,
                    record.visited_cards.len()
                );
                scene
                    .player
                    .place(Point::new(record.player_x, record.player_y));
                scene.player.clamp_to(canvas);
                scene.character = record.current_character;
                scene.visited = record.visited_cards;
                // A player saved on the shared spawn slot stays hidden behind
                // the NPC, exactly as on a fresh start.
                scene.player_shown =
                    scene.player.position() != spawn || !scene.npc_visible();
                scene.modal = Modal::load_toast();
                audio.set_enabled(record.audio_enabled);
            }
            None => log::info!("new game at ({}, {})", spawn.x, spawn.y),
        }

        scene
            .camera
            .center_on(&scene.player.rect(), viewport, canvas);
        scene.refresh_interaction();
        scene
    }

    /// Advance the scene by `dt` with `keys` held.
    ///
    /// Dialog text and toast timers always run, as does the NPC's idle
    /// animation. Movement only happens while exploring; the camera only
    /// follows when the player actually moved.
    pub fn tick(&mut self, keys: &HeldKeys, dt: Duration) {
        if !self.is_mounted() {
            return;
        }
        self.clock += dt;

        let previous = self.modal.kind();
        if self.modal.advance(dt) {
            log::debug!("{previous:?} expired");
        }

        if self.character.other().is_animated() {
            self.npc.advance_animation();
        }
        if !self.modal.is_exploring() {
            return;
        }

        if self.character.is_animated() {
            self.player.advance_animation();
        }

        let before = self.player.position();
        self.player.apply_input(keys);
        self.player.clamp_to(self.canvas);
        let moved = self.player.position() != before;
        if moved {
            self.player_shown = true;
        }

        self.refresh_interaction();

        if moved {
            self.camera.follow_player(
                &self.player.rect(),
                self.viewport,
                self.canvas,
                self.clock,
            );
        }
    }

    /// Feed a discrete key press. Returns whether the scene used it.
    ///
    /// [`Key::Save`] is not handled here; call [`Scene::save`] with the slot.
    pub fn handle_key(&mut self, key: Key, audio: &Audio) -> bool {
        if !self.is_mounted() {
            return false;
        }
        if key == Key::Mute {
            audio.toggle();
            return true;
        }
        match self.modal.kind() {
            ModalKind::Exploring => self.explore_key(key, audio),
            ModalKind::CardOpen => self.card_key(key, audio),
            ModalKind::NpcChoice => self.npc_key(key, audio),
            ModalKind::SaveToast | ModalKind::LoadToast => false,
        }
    }

    fn explore_key(&mut self, key: Key, audio: &Audio) -> bool {
        match key {
            Key::Confirm => {
                self.refresh_interaction();
                let event = if self.character == Character::Frisk
                    && self.interaction.npc_interactable
                {
                    SceneEvent::InteractNpc
                } else if let Some(card) = self.interaction.active_card {
                    SceneEvent::OpenCard(card)
                } else {
                    return false;
                };
                self.bus.publish(event);
                self.dispatch(audio);
                true
            }
            Key::SwitchCharacter => {
                self.set_character(self.character.other(), audio);
                true
            }
            _ => false,
        }
    }

    fn card_key(&mut self, key: Key, audio: &Audio) -> bool {
        let Modal::CardOpen { reveal, .. } = &mut self.modal else {
            return false;
        };
        match key {
            Key::Confirm | Key::Skip | Key::Cancel if !reveal.is_complete() => {
                reveal.fast_forward();
                true
            }
            Key::Confirm | Key::Cancel => {
                self.close_card(audio);
                true
            }
            _ => false,
        }
    }

    fn npc_key(&mut self, key: Key, audio: &Audio) -> bool {
        let Modal::NpcChoice { dialog } = &mut self.modal else {
            return false;
        };
        if !dialog.reveal().is_complete() {
            if matches!(key, Key::Confirm | Key::Skip) {
                dialog.reveal_mut().fast_forward();
                return true;
            }
            return false;
        }
        match key {
            Key::Up => {
                if dialog.select_previous() {
                    audio.play(Sound::MenuSelect);
                }
                true
            }
            Key::Down => {
                if dialog.select_next() {
                    audio.play(Sound::MenuSelect);
                }
                true
            }
            Key::Confirm => {
                let accepted = dialog.selected() == 0;
                audio.play(Sound::MenuConfirm);
                self.modal = Modal::Exploring;
                log::debug!("npc dialog closed, swap accepted: {accepted}");
                if accepted {
                    self.set_character(self.character.other(), audio);
                }
                true
            }
            Key::Cancel => {
                self.modal = Modal::Exploring;
                log::debug!("npc dialog dismissed");
                true
            }
            _ => false,
        }
    }

    /// Apply every event queued on the scene's own subscription.
    fn dispatch(&mut self, audio: &Audio) {
        let Some(sub) = self.subscription else {
            return;
        };
        for event in self.bus.drain(sub) {
            match event {
                SceneEvent::OpenCard(card) => self.open_card(card, audio),
                SceneEvent::InteractNpc => self.open_npc_dialog(audio),
                SceneEvent::CharacterSwitch(character) => {
                    self.npc = Entity::at(self.spawn);
                    log::debug!("playing as {character}, npc back on spawn");
                    self.refresh_interaction();
                }
            }
        }
    }

    fn open_card(&mut self, card: CardId, audio: &Audio) {
        if !self.modal.is_exploring() {
            return;
        }
        if self.visited.insert(card) {
            log::debug!("first visit to {card}");
        }
        let details = card
            .section(self.language)
            .details
            .iter()
            .map(|line| (*line).to_string())
            .collect();
        self.modal = Modal::CardOpen {
            card,
            reveal: Typewriter::new(details),
        };
        audio.play(Sound::CardOpen);
    }

    fn open_npc_dialog(&mut self, audio: &Audio) {
        if !self.modal.is_exploring() {
            return;
        }
        let ui = content::ui(self.language);
        let lines = ui.npc_greeting.iter().map(|l| (*l).to_string()).collect();
        let options = ui.npc_options.iter().map(|o| (*o).to_string()).collect();
        self.modal = Modal::NpcChoice {
            dialog: ChoiceDialog::new(lines, options),
        };
        audio.play(Sound::NpcSpeak);
    }

    fn close_card(&mut self, audio: &Audio) {
        self.modal = Modal::Exploring;
        audio.play(Sound::CardClose);
    }

    fn refresh_interaction(&mut self) {
        self.interaction =
            resolve_interaction(&self.player, &self.npc, self.character, &self.cards);
    }

    /// Close a fully revealed card dialog, as a click on the backdrop does.
    /// Returns whether it closed.
    pub fn dismiss_overlay(&mut self, audio: &Audio) -> bool {
        match &self.modal {
            Modal::CardOpen { reveal, .. } if reveal.is_complete() => {
                self.close_card(audio);
                true
            }
            _ => false,
        }
    }

    /// Switch the controlled character. The NPC moves back to the spawn
    /// point whenever the character actually changes.
    pub fn set_character(&mut self, character: Character, audio: &Audio) {
        if character == self.character || !self.is_mounted() {
            return;
        }
        self.character = character;
        self.player.frame = 0;
        self.player.anim_ticks = 0;
        self.player_shown = true;
        self.bus.publish(SceneEvent::CharacterSwitch(character));
        self.dispatch(audio);
    }

    /// Change the UI language; card text is rebuilt, geometry is not.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.cards = compute_card_layout(self.canvas.width, language);
    }

    /// React to a new viewport size.
    ///
    /// The canvas, card grid and spawn point are recomputed, and both
    /// entities are scaled by the change in canvas size, then clamped.
    pub fn resize(&mut self, viewport: Size) {
        let old = self.canvas;
        let canvas = canvas_size(viewport);
        let sx = canvas.width / old.width;
        let sy = canvas.height / old.height;

        self.viewport = viewport;
        self.canvas = canvas;
        self.cards = compute_card_layout(canvas.width, self.language);
        self.spawn = spawn_point(&self.cards);
        self.player.rescale(sx, sy, canvas);
        self.npc.rescale(sx, sy, canvas);
        self.camera.clamp(viewport, canvas);
        self.refresh_interaction();
        log::debug!(
            "resized canvas to {}x{} (scale {sx:.3}, {sy:.3})",
            canvas.width,
            canvas.height
        );
    }

    /// Snapshot the session for saving.
    #[must_use]
    pub fn snapshot(&self, audio: &Audio, timestamp: u64) -> SaveRecord {
        SaveRecord {
            player_x: self.player.x,
            player_y: self.player.y,
            current_character: self.character,
            visited_cards: self.visited.clone(),
            audio_enabled: audio.is_enabled(),
            language: self.language,
            timestamp,
        }
    }

    /// Persist a snapshot into `slot` and show the save toast.
    ///
    /// Only allowed while exploring. Returns whether the record was written.
    pub fn save(&mut self, slot: &SaveSlot, audio: &Audio, timestamp: u64) -> bool {
        if !self.is_mounted() || !self.modal.is_exploring() {
            return false;
        }
        if !slot.save(&self.snapshot(audio, timestamp)) {
            return false;
        }
        self.modal = Modal::save_toast();
        audio.play(Sound::Save);
        true
    }

    /// Release the scene's subscriptions. Later ticks and keys do nothing.
    pub fn teardown(&mut self) {
        if let Some(sub) = self.subscription.take() {
            self.bus.unsubscribe(sub);
        }
        self.bus.teardown();
        log::debug!("scene torn down");
    }

    /// Whether [`Scene::teardown`] has not run yet.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Active language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// The controlled entity.
    #[must_use]
    pub fn player(&self) -> &Entity {
        &self.player
    }

    /// The other character.
    #[must_use]
    pub fn npc(&self) -> &Entity {
        &self.npc
    }

    /// Which character the player controls.
    #[must_use]
    pub fn character(&self) -> Character {
        self.character
    }

    /// Whether the NPC is on screen; it only appears to the primary character.
    #[must_use]
    pub fn npc_visible(&self) -> bool {
        self.character == Character::Frisk
    }

    /// Whether the player sprite is drawn yet.
    ///
    /// On a fresh game the player shares the spawn slot with the NPC and
    /// stays hidden until it first moves.
    #[must_use]
    pub fn player_shown(&self) -> bool {
        self.player_shown
    }

    /// Cards opened at least once.
    #[must_use]
    pub fn visited(&self) -> &BTreeSet<CardId> {
        &self.visited
    }

    /// Interaction state as of the last tick.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Current modal state.
    #[must_use]
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Camera state.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Laid-out cards in fixed order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Canvas size in world pixels.
    #[must_use]
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Viewport size in world pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Default entity position.
    #[must_use]
    pub fn spawn(&self) -> Point {
        self.spawn
    }

    /// Total time ticked since mount.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Recorder;
    use std::rc::Rc;

    const VIEW: Size = Size::new(1280.0, 720.0);

    fn keys(held: &[Key]) -> HeldKeys {
        let mut k = HeldKeys::new();
        for &key in held {
            k.press(key, Duration::ZERO);
        }
        k
    }

    fn walk_to(scene: &mut Scene, target: Point) {
        // Direct placement for tests: teleport, then tick once without keys.
        scene.player.place(target);
        scene.tick(&HeldKeys::new(), Duration::from_millis(16));
    }

    #[test]
    fn test_fresh_mount_spawns_both_on_spawn() {
        let audio = Audio::silent();
        let scene = Scene::mount(VIEW, Language::It, None, &audio);
        assert_eq!(scene.player().position(), scene.spawn());
        assert_eq!(scene.npc().position(), scene.spawn());
        assert_eq!(scene.character(), Character::Frisk);
        assert!(scene.modal().is_exploring());
        assert!(!scene.player_shown());
    }

    #[test]
    fn test_moving_reveals_player() {
        let audio = Audio::silent();
        let mut scene = Scene::mount(VIEW, Language::It, None, &audio);
        scene.tick(&keys(&[Key::Left]), Duration::from_millis(16));
        assert!(scene.player_shown());
    }

    #[test]
    fn test_open_card_marks_visited_and_plays() {
        let rec = Rc::new(Recorder::default());
        let audio = Audio::new(Box::new(Rc::clone(&rec)));
        let mut scene = Scene::mount(VIEW, Language::En, None, &audio);
        scene.set_character(Character::Sans, &audio);
        let profile = scene.cards()[0].rect;
        walk_to(&mut scene, Point::new(profile.x + 10.0, profile.y + 10.0));
        assert_eq!(scene.interaction().active_card, Some(CardId::Profile));

        assert!(scene.handle_key(Key::Confirm, &audio));
        assert_eq!(scene.modal().kind(), ModalKind::CardOpen);
        assert!(scene.visited().contains(&CardId::Profile));
        assert_eq!(rec.played(), vec![Sound::CardOpen]);
    }

    #[test]
    fn test_card_confirm_fast_forwards_before_closing() {
        let audio = Audio::silent();
        let mut scene = Scene::mount(VIEW, Language::En, None, &audio);
        scene.set_character(Character::Sans, &audio);
        let skills = scene.cards()[2].rect;
        walk_to(&mut scene, Point::new(skills.x, skills.y));
        scene.handle_key(Key::Confirm, &audio);

        assert!(!scene.dismiss_overlay(&audio));
        scene.handle_key(Key::Cancel, &audio);
        assert_eq!(scene.modal().kind(), ModalKind::CardOpen);
        assert!(scene.modal().reveal().unwrap().is_complete());

        scene.handle_key(Key::Skip, &audio);
        assert_eq!(scene.modal().kind(), ModalKind::CardOpen);
        assert!(scene.dismiss_overlay(&audio));
        assert!(scene.modal().is_exploring());
    }

    #[test]
    fn test_npc_accept_flips_character() {
        let audio = Audio::silent();
        let mut scene = Scene::mount(VIEW, Language::En, None, &audio);
        scene.tick(&HeldKeys::new(), Duration::from_millis(16));
        assert!(scene.interaction().npc_interactable);

        scene.handle_key(Key::Confirm, &audio);
        assert_eq!(scene.modal().kind(), ModalKind::NpcChoice);
        // Up/Down are ignored while the greeting is still typing.
        scene.handle_key(Key::Down, &audio);
        scene.handle_key(Key::Confirm, &audio);
        scene.handle_key(Key::Confirm, &audio);
        assert!(scene.modal().is_exploring());
        assert_eq!(scene.character(), Character::Sans);
        assert_eq!(scene.npc().position(), scene.spawn());
    }

    #[test]
    fn test_npc_decline_and_cancel_keep_character() {
        let audio = Audio::silent();
        let mut scene = Scene::mount(VIEW, Language::En, None, &audio);
        scene.handle_key(Key::Confirm, &audio);
        scene.handle_key(Key::Skip, &audio);
        scene.handle_key(Key::Down, &audio);
        scene.handle_key(Key::Confirm, &audio);
        assert_eq!(scene.character(), Character::Frisk);

        scene.handle_key(Key::Confirm, &audio);
        // Cancel is ignored mid-reveal, then closes.
        assert!(!scene.handle_key(Key::Cancel, &audio));
        scene.handle_key(Key::Skip, &audio);
        assert!(scene.handle_key(Key::Cancel, &audio));
        assert!(scene.modal().is_exploring());
        assert_eq!(scene.character(), Character::Frisk);
    }

    #[test]
    fn test_switch_key_relocates_npc() {
        let audio = Audio::silent();
        let mut scene = Scene::mount(VIEW, Language::En, None, &audio);
        scene.npc.place(Point::new(5.0, 5.0));
        assert!(scene.handle_key(Key::SwitchCharacter, &audio));
        assert_eq!(scene.character(), Character::Sans);
        assert_eq!(scene.npc().position(), scene.spawn());
        assert!(!scene.npc_visible());
    }

    #[test]
    fn test_toasts_swallow_keys_and_expire() {
        let audio = Audio::silent();
        let dir = tempfile::tempdir().unwrap();
        let slot = SaveSlot::new(dir.path().join("save.json"));
        let mut scene = Scene::mount(VIEW, Language::En, None, &audio);

        assert!(scene.save(&slot, &audio, 42));
        assert_eq!(scene.modal().kind(), ModalKind::SaveToast);
        assert!(!scene.handle_key(Key::Confirm, &audio));
        assert!(!scene.save(&slot, &audio, 43));

        scene.tick(&HeldKeys::new(), Duration::from_millis(1500));
        assert!(scene.modal().is_exploring());
        assert_eq!(slot.load().unwrap().timestamp, 42);
    }

    #[test]
    fn test_mute_works_in_any_mode() {
        let audio = Audio::silent();
        let mut scene = Scene::mount(VIEW, Language::En, None, &audio);
        scene.handle_key(Key::Confirm, &audio);
        assert_eq!(scene.modal().kind(), ModalKind::NpcChoice);
        assert!(scene.handle_key(Key::Mute, &audio));
        assert!(!audio.is_enabled());
    }

    #[test]
    fn test_frozen_outside_exploring() {
        let audio = Audio::silent();
        let mut scene = Scene::mount(VIEW, Language::En, None, &audio);
        scene.handle_key(Key::Confirm, &audio);
        let before = scene.player().position();
        let npc_ticks = scene.npc().anim_ticks;
        scene.tick(&keys(&[Key::Up, Key::Left]), Duration::from_millis(16));
        assert_eq!(scene.player().position(), before);
        assert_eq!(scene.npc().anim_ticks, npc_ticks + 1);
    }

    #[test]
    fn test_resize_rescales_and_clamps() {
        let audio = Audio::silent();
        let mut scene = Scene::mount(Size::new(2000.0, 1000.0), Language::En, None, &audio);
        walk_to(&mut scene, Point::new(1900.0, 900.0));
        scene.resize(Size::new(1000.0, 500.0));

        let canvas = scene.canvas();
        assert!((canvas.width - MIN_CANVAS_WIDTH).abs() < f64::EPSILON);
        assert!((canvas.height - MIN_CANVAS_HEIGHT).abs() < f64::EPSILON);
        let p = scene.player();
        assert!(p.x + p.w <= canvas.width);
        assert!(p.y + p.h <= canvas.height);
        assert_eq!(scene.spawn(), spawn_point(scene.cards()));
    }

    #[test]
    fn test_language_change_keeps_geometry() {
        let audio = Audio::silent();
        let mut scene = Scene::mount(VIEW, Language::It, None, &audio);
        let rects: Vec<_> = scene.cards().iter().map(|c| c.rect).collect();
        let title = scene.cards()[1].title;
        scene.set_language(Language::En);
        let after: Vec<_> = scene.cards().iter().map(|c| c.rect).collect();
        assert_eq!(rects, after);
        assert_ne!(title, scene.cards()[1].title);
    }

    #[test]
    fn test_teardown_stops_the_scene() {
        let audio = Audio::silent();
        let mut scene = Scene::mount(VIEW, Language::En, None, &audio);
        scene.teardown();
        assert!(!scene.is_mounted());
        let before = scene.player().position();
        scene.tick(&keys(&[Key::Right]), Duration::from_millis(16));
        assert_eq!(scene.player().position(), before);
        assert!(!scene.handle_key(Key::Confirm, &audio));
        assert_eq!(scene.clock(), Duration::ZERO);
    }
}
