// extensions/mod.rs
//
// Interpolation building blocks: easing curves, blendable value types, the
// resumable interpolator, and the runner that delivers values to callbacks.
// None of them know about entities or scenes; games wire them up.

pub mod easing;
pub mod interpolator;
pub mod lerp;
pub mod runner;
pub mod vector;

pub use easing::{Ease, Easing};
pub use interpolator::{Frames, Interpolator};
pub use lerp::{Lerp, lerp, ease, euler, same_rotation};
pub use runner::{LerpId, LerpRunner, LerpTo, Tick};
pub use vector::{Vec2Ext, Vec3Ext, direction};
