//! Scene model for the path tracer.
//!
//! A `Scene` is assembled once, validated, and then only read while a
//! render runs. Triangles carry their derived plane data so the kernel
//! never recomputes it per ray.

use lum_math::{Color, Vec3};

use crate::error::{SceneError, SceneResult};

/// Surface description.
///
/// Only `diffuse` and `emission` drive the sampler; `specular` and
/// `transmission` are carried through from scene files untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse reflectance (RGB, 0-1)
    pub diffuse: Color,

    /// Specular reflectance (unused by the sampler)
    pub specular: Color,

    /// Transmission color (unused by the sampler)
    pub transmission: Color,

    /// Emitted radiance, may exceed 1
    pub emission: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Color::ZERO,
            specular: Color::ZERO,
            transmission: Color::ZERO,
            emission: Color::ZERO,
        }
    }
}

impl Material {
    /// A purely diffuse material.
    pub fn diffuse(diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Default::default()
        }
    }

    /// A pure emitter that does not scatter.
    pub fn emitter(emission: Color) -> Self {
        Self {
            emission,
            ..Default::default()
        }
    }

    /// Check if any emission channel is positive.
    pub fn is_emissive(&self) -> bool {
        self.emission.max_element() > 0.0
    }

    /// Check if any diffuse channel is positive.
    pub fn is_diffuse(&self) -> bool {
        self.diffuse.max_element() > 0.0
    }
}

/// Handle to a material slot in a `Scene`.
///
/// Every `Scene::add_material` call mints a new slot, so two structurally
/// equal materials registered separately stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(u32);

impl MaterialId {
    /// Wrap a raw slot index.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Slot index into `Scene::materials`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A triangle with its precomputed supporting plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    /// Unit plane normal
    pub normal: Vec3,
    /// Plane constant, `-(normal . a)`
    pub d: f32,
    pub material: MaterialId,
}

impl Triangle {
    /// Build a triangle, deriving the normal from the winding when none is
    /// supplied. A supplied normal is normalized.
    pub fn new(vertices: [Vec3; 3], normal: Option<Vec3>, material: MaterialId) -> Self {
        let [a, b, c] = vertices;
        let normal = normal.unwrap_or_else(|| (b - a).cross(c - a)).normalize();
        let d = -normal.dot(a);

        Self {
            a,
            b,
            c,
            normal,
            d,
            material,
        }
    }
}

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// Pinhole camera.
///
/// `forward` and `up` are expected to be an orthonormal pair; the image
/// plane spans `[-1, 1]` along `right` and `up` at unit distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub width: u32,
    pub height: u32,
}

impl Camera {
    /// Create a camera.
    pub fn new(position: Vec3, forward: Vec3, up: Vec3, width: u32, height: u32) -> Self {
        Self {
            position,
            forward,
            up,
            width,
            height,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Right axis of the image plane, `forward x up`.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up)
    }
}

/// Everything a render reads: geometry, materials and the camera.
#[derive(Clone, Debug)]
pub struct Scene {
    camera: Camera,
    triangles: Vec<Triangle>,
    spheres: Vec<Sphere>,
    materials: Vec<Material>,
}

impl Scene {
    /// Create an empty scene viewed through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            triangles: Vec::new(),
            spheres: Vec::new(),
            materials: Vec::new(),
        }
    }

    /// Register a material and return its slot handle.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId::from_index(self.materials.len() - 1)
    }

    /// Append a triangle. The normal is derived from the vertex winding
    /// when `normal` is `None`.
    pub fn add_triangle(
        &mut self,
        material: MaterialId,
        vertices: [Vec3; 3],
        normal: Option<Vec3>,
    ) {
        self.triangles.push(Triangle::new(vertices, normal, material));
    }

    /// Append a sphere.
    pub fn add_sphere(&mut self, material: MaterialId, center: Vec3, radius: f32) {
        self.spheres.push(Sphere::new(center, radius, material));
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Look up a material by handle.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.index())
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.camera.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.camera.height
    }

    /// Total pixel count, `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.camera.width as usize * self.camera.height as usize
    }

    /// Check every invariant the kernel relies on.
    pub fn validate(&self) -> SceneResult<()> {
        let (width, height) = (self.camera.width, self.camera.height);
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidDimensions { width, height });
        }

        let count = self.materials.len();
        let check_material = |id: MaterialId| {
            if id.index() < count {
                Ok(())
            } else {
                Err(SceneError::MaterialOutOfRange {
                    index: id.index(),
                    count,
                })
            }
        };

        for (i, tri) in self.triangles.iter().enumerate() {
            check_material(tri.material)?;
            let len = tri.normal.length();
            if !len.is_finite() || len == 0.0 {
                return Err(SceneError::DegenerateNormal { triangle: i });
            }
        }

        for (i, sphere) in self.spheres.iter().enumerate() {
            check_material(sphere.material)?;
            // NaN radius fails this comparison too
            if !(sphere.radius > 0.0) {
                return Err(SceneError::NonPositiveRadius {
                    sphere: i,
                    radius: sphere.radius,
                });
            }
        }

        log::debug!(
            "Scene validated: {} triangles, {} spheres, {} materials, {}x{}",
            self.triangles.len(),
            self.spheres.len(),
            count,
            width,
            height
        );

        Ok(())
    }
}
