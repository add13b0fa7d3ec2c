//! lumen renderer - CPU path tracing kernel.
//!
//! A Monte Carlo path tracer over triangles and spheres:
//! - Linear-scan nearest-hit queries
//! - Cosine-weighted diffuse bounces driven by an explicit path stack
//! - Per-pixel deterministic LCG, so images do not depend on scheduling
//! - Pixels strided across independent lanes, run by a pluggable backend
//!
//! # Example
//!
//! ```
//! use lum_core::{Camera, Material, Scene};
//! use lum_math::{Color, Vec3};
//! use lum_renderer::{RenderConfig, Renderer, SerialBackend};
//!
//! let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::Y, 16, 16);
//! let mut scene = Scene::new(camera);
//! let light = scene.add_material(Material::emitter(Color::splat(2.0)));
//! scene.add_sphere(light, Vec3::ZERO, 1.0);
//!
//! let image = Renderer::new(RenderConfig::default().with_lanes(4))
//!     .with_backend(SerialBackend)
//!     .render(&scene)
//!     .unwrap();
//! assert_eq!(image.pixel(8, 8), Color::ONE);
//! ```

mod backend;
mod camera;
mod config;
mod error;
mod intersect;
mod kernel;
mod output;
mod partition;
mod random;
mod renderer;
mod stack;

pub use backend::{ExecutionBackend, LaneFn, RayonBackend, SerialBackend};
pub use camera::primary_ray;
pub use config::{
    AmbientFill, RenderConfig, DEFAULT_LANES, DEFAULT_MAX_DISTANCE, DEFAULT_STACK_CAPACITY,
};
pub use error::{RenderError, RenderResult};
pub use intersect::{intersect, intersect_with, Hit, SphereTerm, AREA_EPSILON, HIT_EPSILON};
pub use kernel::{render_lane, render_pixel, scatter, trace_sample};
pub use output::RadianceBuffer;
pub use partition::Partition;
pub use random::{hash, Lcg};
pub use renderer::{render, Renderer};
pub use stack::{PathSegment, PathStack};
