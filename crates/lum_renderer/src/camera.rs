//! Primary ray generation.

use lum_core::Camera;
use lum_math::Ray;

/// Ray through image-plane position `(x, y)`, in pixel units.
///
/// `(0, 0)` is the top-left corner; the image spans `[-1, 1]` along both
/// the camera's right and up axes at unit distance along `forward`.
pub fn primary_ray(camera: &Camera, x: f32, y: f32) -> Ray {
    let xa = 2.0 * x / camera.width as f32 - 1.0;
    let ya = -(2.0 * y / camera.height as f32 - 1.0);
    let direction = (camera.up * ya + camera.right() * xa + camera.forward).normalize();

    Ray::new(camera.position, direction)
}
