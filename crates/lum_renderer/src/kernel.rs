//! Path tracing kernel.
//!
//! Free functions over a read-only `Scene` and `RenderConfig`. All mutable
//! state (generator, path stack) is passed in explicitly and belongs to a
//! single lane.

use std::f32::consts::TAU;

use lum_core::Scene;
use lum_math::{change_basis, Color, Ray, Vec3};

use crate::camera::primary_ray;
use crate::config::RenderConfig;
use crate::intersect::intersect_with;
use crate::partition::Partition;
use crate::random::Lcg;
use crate::stack::{PathSegment, PathStack};

/// Cosine-weighted direction in the hemisphere around `normal`.
///
/// The local frame is built from the mirrored incoming direction and the
/// normal; `u1` sets the elevation and `u2` the azimuth. A ray arriving
/// exactly along the normal gives a degenerate frame and a NaN direction,
/// which the next intersection test treats as a miss.
pub fn scatter(incoming: Vec3, normal: Vec3, u1: f32, u2: f32) -> Vec3 {
    let n = normal.normalize();
    let ex = (-incoming).cross(n).normalize();
    let ez = ex.cross(n);

    let c = (1.0 - u1).sqrt();
    let local = Vec3::new(c * (TAU * u2).cos(), u1.sqrt(), c * (TAU * u2).sin());

    change_basis(local, ex, n, ez)
}

/// Trace one sample starting from `primary` and return its radiance.
pub fn trace_sample(
    scene: &Scene,
    config: &RenderConfig,
    primary: Ray,
    rng: &mut Lcg,
    stack: &mut PathStack,
) -> Color {
    let mut radiance = Color::ZERO;

    stack.clear();
    stack.push(PathSegment {
        ray: primary,
        weight: Color::ONE,
        depth: config.max_depth,
    });

    while let Some(segment) = stack.pop() {
        if segment.depth == 0 {
            continue;
        }

        let hit = intersect_with(
            &segment.ray,
            scene.triangles(),
            scene.spheres(),
            config.sphere_term,
        );
        let Some(material) = hit.material.and_then(|id| scene.material(id)) else {
            continue;
        };
        if !(hit.distance < config.max_distance) {
            continue;
        }

        let hit_point = segment.ray.at(hit.distance);

        // Counted on every hit, even when the emitter also scatters
        if material.is_emissive() {
            radiance += segment.weight * material.emission;
        }

        if material.is_diffuse() {
            let u1 = rng.next_f32();
            let u2 = rng.next_f32();
            stack.push(PathSegment {
                ray: Ray::new(hit_point, scatter(segment.ray.direction, hit.normal, u1, u2)),
                weight: segment.weight * material.diffuse,
                depth: segment.depth - 1,
            });
        }

        if segment.depth == 1 {
            radiance += config.ambient_fill.contribution(segment.weight, material.diffuse);
        }
    }

    radiance
}

/// Average all samples of pixel `pixel` and clamp each channel to `[0, 1]`.
///
/// The generator is seeded once from the pixel index and carried across
/// the pixel's samples. NaN channels pass through the clamp unchanged.
pub fn render_pixel(
    scene: &Scene,
    config: &RenderConfig,
    pixel: usize,
    stack: &mut PathStack,
) -> Color {
    let width = scene.width() as usize;
    let mut rng = Lcg::for_pixel(pixel as u32);
    let mut sum = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let x = (pixel % width) as f32 - 0.5 + rng.next_f32();
        let y = (pixel / width) as f32 - 0.5 + rng.next_f32();
        let ray = primary_ray(scene.camera(), x, y);
        sum += trace_sample(scene, config, ray, &mut rng, stack);
    }

    let average = sum / config.samples_per_pixel as f32;
    Color::from_array(average.to_array().map(|c| c.clamp(0.0, 1.0)))
}

/// Render every pixel owned by `lane`, in stride order.
pub fn render_lane(
    scene: &Scene,
    config: &RenderConfig,
    partition: &Partition,
    lane: usize,
) -> Vec<Color> {
    let mut stack = PathStack::with_capacity(config.stack_capacity);
    let pixels: Vec<Color> = partition
        .lane_pixels(lane)
        .map(|pixel| render_pixel(scene, config, pixel, &mut stack))
        .collect();

    log::trace!("Lane {} finished {} pixels", lane, pixels.len());
    pixels
}
