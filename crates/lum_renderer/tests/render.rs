//! End-to-end checks: scene description in, radiance buffer out.

use lum_core::scene_from_str;
use lum_math::Color;
use lum_renderer::{render, RenderConfig, Renderer, SerialBackend};

const EMITTER_SCENE: &str = r#"{
    "camera": { "position": [0, 0, 5], "forward": [0, 0, -1],
                "up": [0, 1, 0], "width": 24, "height": 24 },
    "materials": [ { "name": "light", "emission": [3, 1.5, 0.5] } ],
    "spheres": [ { "material": "light", "center": [0, 0, 0], "radius": 1 } ]
}"#;

const FLOOR_SCENE: &str = r#"{
    "camera": { "position": [0, 1, 0], "forward": [0, -1, 0],
                "up": [0, 0, -1], "width": 10, "height": 10 },
    "materials": [ { "name": "grey", "diffuse": [0.5, 0.25, 1] } ],
    "triangles": [ { "material": "grey", "vertices": [[-4, 0, 4], [4, 0, 4], [0, 0, -4]] } ]
}"#;

#[test]
fn emitter_visible_at_center_only() {
    let scene = scene_from_str(EMITTER_SCENE).unwrap();
    let image = render(&scene, 1).unwrap();

    assert_eq!(image.as_slice().len(), 24 * 24 * 3);

    // Emission (3, 1.5, 0.5) clamps to (1, 1, 0.5)
    let center = image.pixel(12, 12);
    assert!((center - Color::new(1.0, 1.0, 0.5)).length() < 1e-6);

    for (x, y) in [(0, 0), (23, 0), (0, 23), (23, 23), (12, 0)] {
        assert_eq!(image.pixel(x, y), Color::ZERO, "pixel ({}, {})", x, y);
    }

    // Deterministic across runs
    assert_eq!(image, render(&scene, 1).unwrap());
}

#[test]
fn floor_receives_only_fill_light() {
    let scene = scene_from_str(FLOOR_SCENE).unwrap();
    let config = RenderConfig::default().with_max_depth(1).with_samples(2);
    let image = Renderer::new(config)
        .with_backend(SerialBackend)
        .render(&scene)
        .unwrap();

    let expected = Color::new(0.5, 0.25, 1.0) * 0.05;
    for pixel in image.pixels() {
        assert!((Color::from_array(*pixel) - expected).length() < 1e-6);
    }
}

#[test]
fn bright_emitters_stay_in_range() {
    let text = EMITTER_SCENE.replace("[3, 1.5, 0.5]", "[5000, 80, 2]");
    let scene = scene_from_str(&text).unwrap();
    let image = render(&scene, 4).unwrap();

    assert!(image.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
    assert_eq!(image.non_finite_count(), 0);
}
