//! Nearest-hit queries against the full object set.
//!
//! A linear scan over every triangle, then every sphere. Candidates only
//! replace the current best on a strictly smaller distance, so the first
//! object found at a given distance wins.

use lum_core::{MaterialId, Sphere, Triangle};
use lum_math::{triangle_area, Ray, Vec3};

/// Minimum accepted hit distance, also the discriminant threshold.
pub const HIT_EPSILON: f32 = 0.00001;

/// Slack allowed when comparing sub-triangle areas against the full area.
pub const AREA_EPSILON: f32 = 0.001;

/// Which radius term enters the sphere discriminant `b^2 - v.v + term`.
///
/// `Radius` adds the radius itself, so a sphere of radius `r` is hit as if
/// its radius were `sqrt(r)`, while the reported normal still divides by
/// `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SphereTerm {
    #[default]
    Radius,
    RadiusSquared,
}

impl SphereTerm {
    #[inline]
    fn apply(self, radius: f32) -> f32 {
        match self {
            SphereTerm::Radius => radius,
            SphereTerm::RadiusSquared => radius * radius,
        }
    }
}

/// Result of a nearest-hit query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray, `f32::INFINITY` on a miss
    pub distance: f32,
    /// Material of the hit object, `None` on a miss
    pub material: Option<MaterialId>,
    /// Surface normal at the hit point (zero on a miss)
    pub normal: Vec3,
}

impl Hit {
    pub const MISS: Hit = Hit {
        distance: f32::INFINITY,
        material: None,
        normal: Vec3::ZERO,
    };

    #[inline]
    pub fn is_miss(&self) -> bool {
        self.material.is_none()
    }
}

impl Default for Hit {
    fn default() -> Self {
        Self::MISS
    }
}

/// Find the nearest hit using the default sphere convention.
pub fn intersect(ray: &Ray, triangles: &[Triangle], spheres: &[Sphere]) -> Hit {
    intersect_with(ray, triangles, spheres, SphereTerm::default())
}

/// Find the nearest hit of `ray` over all triangles and spheres.
pub fn intersect_with(
    ray: &Ray,
    triangles: &[Triangle],
    spheres: &[Sphere],
    term: SphereTerm,
) -> Hit {
    let mut closest = Hit::MISS;

    for tri in triangles {
        if let Some(t) = hit_triangle(ray, tri) {
            if t < closest.distance {
                closest = Hit {
                    distance: t,
                    material: Some(tri.material),
                    normal: tri.normal,
                };
            }
        }
    }

    for sphere in spheres {
        if let Some(hit) = hit_sphere(ray, sphere, term, closest.distance) {
            closest = hit;
        }
    }

    closest
}

/// Plane intersection followed by the sum-of-areas inside test.
fn hit_triangle(ray: &Ray, tri: &Triangle) -> Option<f32> {
    let t = -(tri.d + tri.normal.dot(ray.origin)) / tri.normal.dot(ray.direction);

    // Also rejects NaN from rays parallel to the plane
    if !(t > HIT_EPSILON && t < f32::INFINITY) {
        return None;
    }

    let p = ray.at(t);
    let abc = triangle_area(tri.a, tri.b, tri.c);
    let pbc = triangle_area(p, tri.b, tri.c);
    let apc = triangle_area(tri.a, p, tri.c);
    let abp = triangle_area(tri.a, tri.b, p);

    if pbc + apc + abp <= abc + AREA_EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Sphere hit closer than `closest`, preferring the near root.
fn hit_sphere(ray: &Ray, sphere: &Sphere, term: SphereTerm, closest: f32) -> Option<Hit> {
    let v = ray.origin - sphere.center;
    let b = v.dot(ray.direction);
    let discriminant = b * b - v.dot(v) + term.apply(sphere.radius);

    if !(discriminant > HIT_EPSILON) {
        return None;
    }

    let d = discriminant.sqrt();
    let t1 = -b - d;
    let t2 = -b + d;

    let t = if t1 > HIT_EPSILON && t1 < closest {
        t1
    } else if t2 > HIT_EPSILON && t2 < closest {
        t2
    } else {
        return None;
    };

    let hit_point = ray.at(t);
    Some(Hit {
        distance: t,
        material: Some(sphere.material),
        normal: (hit_point - sphere.center) / sphere.radius,
    })
}
