//! Render configuration.

use crate::error::{RenderError, RenderResult};
use crate::intersect::SphereTerm;
use lum_math::Color;

/// Default lane count.
pub const DEFAULT_LANES: usize = 2000;

/// Default path stack capacity.
pub const DEFAULT_STACK_CAPACITY: usize = 100;

/// Hits at or beyond this distance count as misses.
pub const DEFAULT_MAX_DISTANCE: f32 = 0x100000 as f32;

/// Flat fill light added at the last permitted bounce.
///
/// Not derived from any light source: it brightens surfaces that the
/// sampler reaches on its final bounce by `weight * diffuse * strength`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientFill {
    pub enabled: bool,
    pub strength: f32,
}

impl AmbientFill {
    pub const DISABLED: AmbientFill = AmbientFill {
        enabled: false,
        strength: 0.0,
    };

    /// Contribution for a segment carrying `weight` that hit `diffuse`.
    #[inline]
    pub fn contribution(&self, weight: Color, diffuse: Color) -> Color {
        if self.enabled {
            weight * diffuse * self.strength
        } else {
            Color::ZERO
        }
    }
}

impl Default for AmbientFill {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 0.05,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples traced per pixel
    pub samples_per_pixel: u32,
    /// Diffuse bounces allowed per path
    pub max_depth: u32,
    /// Fixed capacity of each lane's path stack
    pub stack_capacity: usize,
    /// Number of independent lanes pixels are strided across
    pub lanes: usize,
    /// Hit distance cutoff
    pub max_distance: f32,
    /// Fill light at the last bounce
    pub ambient_fill: AmbientFill,
    /// Sphere discriminant convention
    pub sphere_term: SphereTerm,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 1,
            max_depth: 3,
            stack_capacity: DEFAULT_STACK_CAPACITY,
            lanes: DEFAULT_LANES,
            max_distance: DEFAULT_MAX_DISTANCE,
            ambient_fill: AmbientFill::default(),
            sphere_term: SphereTerm::default(),
        }
    }
}

impl RenderConfig {
    /// Set samples per pixel.
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples_per_pixel = samples;
        self
    }

    /// Set maximum bounce depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the path stack capacity.
    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }

    /// Set the lane count.
    pub fn with_lanes(mut self, lanes: usize) -> Self {
        self.lanes = lanes;
        self
    }

    /// Set the ambient fill term.
    pub fn with_ambient_fill(mut self, fill: AmbientFill) -> Self {
        self.ambient_fill = fill;
        self
    }

    /// Set the sphere discriminant convention.
    pub fn with_sphere_term(mut self, term: SphereTerm) -> Self {
        self.sphere_term = term;
        self
    }

    /// Stack depth the kernel can reach: one live segment per remaining
    /// bounce, and always room for the primary segment.
    pub fn required_stack_depth(&self) -> usize {
        (self.max_depth as usize).max(1)
    }

    /// Reject configurations the kernel cannot run.
    pub fn validate(&self) -> RenderResult<()> {
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples_per_pixel must be at least 1".into(),
            ));
        }
        if self.lanes == 0 {
            return Err(RenderError::InvalidConfig("lanes must be at least 1".into()));
        }
        let required = self.required_stack_depth();
        if self.stack_capacity < required {
            return Err(RenderError::StackCapacity {
                capacity: self.stack_capacity,
                required,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.stack_capacity, 100);
        assert_eq!(config.max_distance, 1048576.0);
        assert_eq!(config.ambient_fill.strength, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_stack_capacity_error() {
        let config = RenderConfig::default()
            .with_max_depth(8)
            .with_stack_capacity(4);
        match config.validate() {
            Err(RenderError::StackCapacity { capacity, required }) => {
                assert_eq!(capacity, 4);
                assert_eq!(required, 8);
            }
            other => panic!("expected StackCapacity, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_capacity_rejected_even_at_depth_zero() {
        let config = RenderConfig::default()
            .with_max_depth(0)
            .with_stack_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(RenderError::StackCapacity { required: 1, .. })
        ));
    }

    #[test]
    fn test_zero_samples_and_lanes() {
        assert!(matches!(
            RenderConfig::default().with_samples(0).validate(),
            Err(RenderError::InvalidConfig(_))
        ));
        assert!(matches!(
            RenderConfig::default().with_lanes(0).validate(),
            Err(RenderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_ambient_fill_contribution() {
        let weight = Color::new(1.0, 0.5, 0.0);
        let diffuse = Color::new(0.8, 0.8, 0.8);
        let fill = AmbientFill::default().contribution(weight, diffuse);
        assert!((fill - Color::new(0.04, 0.02, 0.0)).length() < 1e-6);
        assert_eq!(AmbientFill::DISABLED.contribution(weight, diffuse), Color::ZERO);
    }
}
