//! Geometric helpers shared by scene construction and the kernel.

use crate::Vec3;

/// Area of triangle `abc` by Heron's formula.
///
/// The product under the root is clamped at zero so collinear points give
/// an area of 0 instead of NaN from rounding.
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    let ab = (b - a).length();
    let ac = (c - a).length();
    let bc = (c - b).length();
    let p = (ab + ac + bc) / 2.0;

    (p * (p - ab) * (p - ac) * (p - bc)).max(0.0).sqrt()
}

/// Express `v` (given in the local frame spanned by `ex`, `ey`, `ez`) in
/// world space and normalize the result.
///
/// Degenerate frames yield NaN components, which callers treat as a miss.
#[inline]
pub fn change_basis(v: Vec3, ex: Vec3, ey: Vec3, ez: Vec3) -> Vec3 {
    (ex * v.x + ey * v.y + ez * v.z).normalize()
}
