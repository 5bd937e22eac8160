//! Benchmarks for the per-frame hot path.
//!
//! One `tick` runs input, clamping, hit tests and the camera follow; the
//! layout pass runs on every resize.

#![allow(missing_docs)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use folioquest::scene::compute_card_layout;
use folioquest::{Audio, HeldKeys, Key, Language, Scene, Size};

const FRAME: Duration = Duration::from_millis(16);

fn held(keys: &[Key]) -> HeldKeys {
    let mut held = HeldKeys::new();
    for &k in keys {
        held.press(k, Duration::ZERO);
    }
    held
}

fn bench_idle_tick(c: &mut Criterion) {
    let audio = Audio::silent();
    let mut scene = Scene::mount(Size::new(1280.0, 720.0), Language::En, None, &audio);
    let idle = HeldKeys::new();

    c.bench_function("tick_idle", |b| {
        b.iter(|| scene.tick(black_box(&idle), black_box(FRAME)));
    });
}

fn bench_walking_tick(c: &mut Criterion) {
    let audio = Audio::silent();
    let mut scene = Scene::mount(Size::new(640.0, 360.0), Language::En, None, &audio);
    let left = held(&[Key::Left, Key::Up]);
    let right = held(&[Key::Right, Key::Down]);

    // Bounce across the grid so hit tests and the camera both do work.
    c.bench_function("tick_walking", |b| {
        let mut n = 0u32;
        b.iter(|| {
            let keys = if (n / 300) % 2 == 0 { &left } else { &right };
            scene.tick(black_box(keys), black_box(FRAME));
            n = n.wrapping_add(1);
        });
    });
}

fn bench_layout(c: &mut Criterion) {
    c.bench_function("compute_card_layout", |b| {
        b.iter(|| compute_card_layout(black_box(1280.0), black_box(Language::It)));
    });
}

fn bench_resize(c: &mut Criterion) {
    let audio = Audio::silent();
    let mut scene = Scene::mount(Size::new(1280.0, 720.0), Language::Es, None, &audio);
    let sizes = [Size::new(1280.0, 720.0), Size::new(1920.0, 1080.0)];

    c.bench_function("resize", |b| {
        let mut i = 0usize;
        b.iter(|| {
            scene.resize(black_box(sizes[i % 2]));
            i += 1;
        });
    });
}

criterion_group!(benches, bench_idle_tick, bench_walking_tick, bench_layout, bench_resize);
criterion_main!(benches);
