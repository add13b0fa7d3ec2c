//! JSON scene description loading.
//!
//! A scene file names its materials once and references them by name from
//! triangles and spheres:
//!
//! ```json
//! {
//!   "camera": { "position": [0, 0.3, 1.5], "forward": [0, 0, -1],
//!               "up": [0, 1, 0], "width": 300, "height": 300 },
//!   "materials": [ { "name": "light", "emission": [8, 8, 4] } ],
//!   "spheres": [ { "material": "light", "center": [0, 0.2, 0.4], "radius": 0.02 } ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use lum_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::error::SceneError;
use crate::scene::{Camera, Material, MaterialId, Scene};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Material defined twice: {0}")]
    DuplicateMaterial(String),

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct SceneDescription {
    camera: CameraDescription,
    #[serde(default)]
    materials: Vec<MaterialDescription>,
    #[serde(default)]
    triangles: Vec<TriangleDescription>,
    #[serde(default)]
    spheres: Vec<SphereDescription>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct CameraDescription {
    position: [f32; 3],
    forward: [f32; 3],
    up: [f32; 3],
    width: u32,
    height: u32,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct MaterialDescription {
    name: String,
    #[serde(default)]
    diffuse: [f32; 3],
    #[serde(default)]
    specular: [f32; 3],
    #[serde(default)]
    transmission: [f32; 3],
    #[serde(default)]
    emission: [f32; 3],
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TriangleDescription {
    material: String,
    vertices: [[f32; 3]; 3],
    normal: Option<[f32; 3]>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct SphereDescription {
    material: String,
    center: [f32; 3],
    radius: f32,
}

/// Load and validate a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    scene_from_str(&text)
}

/// Build and validate a scene from JSON text.
pub fn scene_from_str(text: &str) -> LoadResult<Scene> {
    let desc: SceneDescription = serde_json::from_str(text)?;
    build_scene(desc)
}

fn build_scene(desc: SceneDescription) -> LoadResult<Scene> {
    let cam = desc.camera;
    let mut scene = Scene::new(Camera::new(
        Vec3::from_array(cam.position),
        Vec3::from_array(cam.forward),
        Vec3::from_array(cam.up),
        cam.width,
        cam.height,
    ));

    let mut by_name: HashMap<String, MaterialId> = HashMap::new();
    for mat in desc.materials {
        let id = scene.add_material(Material {
            diffuse: Vec3::from_array(mat.diffuse),
            specular: Vec3::from_array(mat.specular),
            transmission: Vec3::from_array(mat.transmission),
            emission: Vec3::from_array(mat.emission),
        });
        if by_name.insert(mat.name.clone(), id).is_some() {
            return Err(LoadError::DuplicateMaterial(mat.name));
        }
    }

    let lookup = |name: &str| {
        by_name
            .get(name)
            .copied()
            .ok_or_else(|| LoadError::UnknownMaterial(name.to_string()))
    };

    for tri in &desc.triangles {
        let material = lookup(&tri.material)?;
        let [a, b, c] = tri.vertices;
        scene.add_triangle(
            material,
            [Vec3::from_array(a), Vec3::from_array(b), Vec3::from_array(c)],
            tri.normal.map(Vec3::from_array),
        );
    }

    for sphere in &desc.spheres {
        let material = lookup(&sphere.material)?;
        scene.add_sphere(material, Vec3::from_array(sphere.center), sphere.radius);
    }

    scene.validate()?;

    log::info!(
        "Loaded scene: {} triangles, {} spheres, {} materials",
        scene.triangles().len(),
        scene.spheres().len(),
        scene.materials().len()
    );

    Ok(scene)
}
