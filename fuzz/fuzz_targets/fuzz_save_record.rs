#![no_main]

//! Save file decoding fuzzer.
//!
//! Any bytes either fail to decode or yield a record that mounts a scene
//! with the player on the canvas.

use folioquest::{Audio, Language, SaveRecord, Scene, Size};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(record) = serde_json::from_slice::<SaveRecord>(data) else {
        return;
    };
    let audio = Audio::silent();
    let scene = Scene::mount(Size::new(1280.0, 720.0), Language::En, Some(record), &audio);
    let p = scene.player();
    let canvas = scene.canvas();
    assert!(p.x >= 0.0 && p.x + p.w <= canvas.width);
    assert!(p.y >= 0.0 && p.y + p.h <= canvas.height);
});
