// extensions/lerp.rs
//
// Quantities an interpolator can blend.

use glam::{EulerRot, Quat, Vec2, Vec3};
use super::easing::Ease;

/// A value that can be blended towards another by a factor `t`.
///
/// Implementations must return `self` at `t == 0` and `to` at `t == 1`
/// (exactly for scalars and vectors, as the same rotation for quaternions).
pub trait Lerp: Copy {
    #[must_use]
    fn lerp(self, to: Self, t: f32) -> Self;
}

// `a * (1 - t) + b * t` rather than `a + (b - a) * t`: the latter can miss `b`
// by an ulp at t == 1.
impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self * (1.0 - t) + to * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self * (1.0 - t) + to * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self * (1.0 - t) + to * t
    }
}

/// Normalized quaternion lerp along the shorter arc.
impl Lerp for Quat {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Quat::lerp(self, to, t)
    }
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp<T: Lerp>(a: T, b: T, t: f32) -> T {
    a.lerp(b, t)
}

/// Interpolate with easing.
#[inline]
pub fn ease<T: Lerp>(a: T, b: T, t: f32, easing: impl Ease) -> T {
    a.lerp(b, easing.ease(t))
}

/// Rotation from Euler angles in degrees: `z` about Z first, then `x` about X,
/// then `y` about Y.
pub fn euler(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        degrees.y.to_radians(),
        degrees.x.to_radians(),
        degrees.z.to_radians(),
    )
}

/// Whether two quaternions describe the same rotation (q and -q are equal).
pub fn same_rotation(a: Quat, b: Quat, tolerance: f32) -> bool {
    1.0 - a.dot(b).abs() <= tolerance
}
