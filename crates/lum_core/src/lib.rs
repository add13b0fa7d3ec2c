//! lumen core - Scene model for the path tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Material`, `Triangle`, `Sphere`, `Camera`
//! - **Validation**: `Scene::validate` rejects scenes the kernel cannot trace
//! - **Scene files**: JSON scene description loading
//!
//! # Example
//!
//! ```
//! use lum_core::{Camera, Material, Scene};
//! use lum_math::{Color, Vec3};
//!
//! let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::Y, 64, 64);
//! let mut scene = Scene::new(camera);
//! let light = scene.add_material(Material::emitter(Color::splat(4.0)));
//! scene.add_sphere(light, Vec3::ZERO, 1.0);
//! assert!(scene.validate().is_ok());
//! ```

pub mod description;
mod error;
pub mod scene;

// Re-export commonly used types
pub use description::{load_scene, scene_from_str, LoadError, LoadResult};
pub use error::{SceneError, SceneResult};
pub use scene::{Camera, Material, MaterialId, Scene, Sphere, Triangle};
