//! Property-based tests for collision, layout and the scene loop.
//!
//! Run with: cargo test --release prop_scene

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use proptest::prelude::*;

use folioquest::constants::{CARD_COLLISION_PADDING, NPC_INTERACTION_DISTANCE};
use folioquest::scene::{CardId, MIN_CANVAS_WIDTH, canvas_size, compute_card_layout};
use folioquest::{
    Audio, HeldKeys, Key, Language, Rect, Scene, Size, circular_interact, rect_overlap,
};

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn key() -> impl Strategy<Value = Key> {
    prop::sample::select(vec![
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Confirm,
        Key::Skip,
        Key::Cancel,
        Key::Mute,
        Key::SwitchCharacter,
    ])
}

#[derive(Debug, Clone)]
enum Step {
    Hold(Vec<Key>, u64),
    Press(Key),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (prop::collection::vec(key(), 0..3), 1u64..40).prop_map(|(k, ms)| Step::Hold(k, ms)),
        1 => key().prop_map(Step::Press),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// The padded card test agrees with the interval definition.
    #[test]
    fn prop_rect_overlap_matches_intervals(
        px in -500.0f64..1500.0,
        py in -500.0f64..1500.0,
        cx in 0.0f64..1000.0,
        cy in 0.0f64..1000.0,
    ) {
        let player = Rect::new(px, py, 32.0, 48.0);
        let card = Rect::new(cx, cy, 350.0, 220.0);
        let p = CARD_COLLISION_PADDING;
        let expected = px < cx + 350.0 + p
            && px + 32.0 > cx - p
            && py < cy + 220.0 + p
            && py + 48.0 > cy - p;
        prop_assert_eq!(rect_overlap(&player, &card, p), expected);
    }

    /// Exactly the interaction radius away is out of range; one pixel closer is in.
    #[test]
    fn prop_npc_radius_is_strict(
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        horizontal in any::<bool>(),
    ) {
        let player = Rect::new(x, y, 32.0, 48.0);
        let r = NPC_INTERACTION_DISTANCE;
        let (at_edge, inside) = if horizontal {
            (Rect::new(x + r, y, 32.0, 48.0), Rect::new(x + r - 1.0, y, 32.0, 48.0))
        } else {
            (Rect::new(x, y + r, 32.0, 48.0), Rect::new(x, y + r - 1.0, 32.0, 48.0))
        };
        prop_assert!(!circular_interact(&player, &at_edge, r));
        prop_assert!(circular_interact(&player, &inside, r));
    }

    /// Cards stay on the canvas and never overlap one another.
    #[test]
    fn prop_layout_fits_canvas(
        width in 0.0f64..4000.0,
        height in 0.0f64..3000.0,
        lang in language(),
    ) {
        let canvas = canvas_size(Size::new(width, height));
        prop_assert!(canvas.width >= MIN_CANVAS_WIDTH);

        let cards = compute_card_layout(canvas.width, lang);
        prop_assert_eq!(cards.len(), CardId::ALL.len());
        for (i, a) in cards.iter().enumerate() {
            prop_assert!(a.rect.x >= 0.0);
            prop_assert!(a.rect.right() <= canvas.width);
            prop_assert!(a.rect.bottom() <= canvas.height);
            for b in &cards[i + 1..] {
                prop_assert!(!a.rect.intersects(&b.rect), "{:?} overlaps {:?}", a.id, b.id);
            }
        }
    }

    /// Random play never leaves the canvas, and overlays freeze the player.
    #[test]
    fn prop_scene_play_stays_in_bounds(
        width in 300.0f64..2000.0,
        height in 200.0f64..1200.0,
        steps in prop::collection::vec(step(), 1..200),
    ) {
        let audio = Audio::silent();
        let mut scene = Scene::mount(Size::new(width, height), Language::En, None, &audio);

        for s in steps {
            match s {
                Step::Hold(keys, ms) => {
                    let mut held = HeldKeys::new();
                    for k in keys {
                        held.press(k, Duration::ZERO);
                    }
                    let before = scene.player().position();
                    scene.tick(&held, Duration::from_millis(ms));
                    if !scene.modal().is_exploring() {
                        prop_assert_eq!(scene.player().position(), before);
                    }
                }
                Step::Press(k) => {
                    scene.handle_key(k, &audio);
                }
            }

            let p = scene.player();
            let canvas = scene.canvas();
            prop_assert!(p.x >= 0.0 && p.x + p.w <= canvas.width);
            prop_assert!(p.y >= 0.0 && p.y + p.h <= canvas.height);
            prop_assert!(scene.visited().len() <= CardId::ALL.len());
        }
    }

    /// Opening the same card any number of times records it once.
    #[test]
    fn prop_visited_is_idempotent(opens in 1usize..10) {
        let audio = Audio::silent();
        let mut scene = Scene::mount(Size::new(1280.0, 720.0), Language::It, None, &audio);
        // Sans has no NPC to talk to, so Confirm always targets a card.
        scene.set_character(folioquest::Character::Sans, &audio);
        let profile = scene.cards()[0].rect;
        let (tx, ty) = (profile.x + 21.0, profile.y + 20.0);
        for _ in 0..2000 {
            let p = scene.player().position();
            let mut held = HeldKeys::new();
            if p.x > tx {
                held.press(Key::Left, Duration::ZERO);
            }
            if p.y > ty {
                held.press(Key::Up, Duration::ZERO);
            }
            if !held.any_direction() {
                break;
            }
            scene.tick(&held, Duration::from_millis(16));
        }
        prop_assert_eq!(scene.interaction().active_card, Some(CardId::Profile));
        prop_assert!(rect_overlap(&scene.player().rect(), &profile, CARD_COLLISION_PADDING));

        for _ in 0..opens {
            prop_assert!(scene.handle_key(Key::Confirm, &audio));
            scene.handle_key(Key::Skip, &audio);
            prop_assert!(scene.handle_key(Key::Confirm, &audio));
            prop_assert!(scene.modal().is_exploring());
        }
        prop_assert_eq!(scene.visited().len(), 1);
        prop_assert!(scene.visited().contains(&CardId::Profile));
    }
}
