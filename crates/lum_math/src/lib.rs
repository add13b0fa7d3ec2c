//! Vector and color math for lumen.
//!
//! Everything runs in `f32`; glam is re-exported so downstream crates
//! share one vector type.

// Re-export glam for convenience
pub use glam::*;

mod geometry;
mod ray;

pub use geometry::{change_basis, triangle_area};
pub use ray::Ray;

/// RGB color, one `f32` per channel. Channels are unbounded until the
/// final clamp at image write.
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_componentwise() {
        let weight = Color::new(1.0, 0.5, 0.25);
        let diffuse = Color::new(0.5, 0.5, 2.0);
        assert_eq!(weight * diffuse, Color::new(0.5, 0.25, 0.5));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec3::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }
}
