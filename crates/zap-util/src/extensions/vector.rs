// extensions/vector.rs
//
// Conversions between 2D game-plane vectors, 3D vectors, and angles.

use std::f32::consts::PI;
use glam::{Vec2, Vec3};

pub trait Vec2Ext {
    /// Lay a 2D vector on the ground plane: `(x, y)` becomes `(x, 0, y)`.
    fn to_ground(self) -> Vec3;
    /// Angle in radians of this direction, in (-PI, PI]. Zero for a zero vector.
    fn heading(self) -> f32;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn to_ground(self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.y)
    }

    #[inline]
    fn heading(self) -> f32 {
        // atan2 is scale-invariant, so no normalization is needed.
        let angle = self.y.atan2(self.x);
        // y == -0.0 on the negative x axis gives -PI.
        if angle == -PI { PI } else { angle }
    }
}

pub trait Vec3Ext {
    /// Drop the z component: `(x, y, z)` becomes `(x, y)`.
    fn truncate_xy(self) -> Vec2;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn truncate_xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Unit direction for an angle in radians: `(cos, sin)`.
#[inline]
pub fn direction(radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    Vec2::new(cos, sin)
}
