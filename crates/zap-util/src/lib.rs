pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::LerpSettings;
pub use api::copy::{CopyFrom, spawn_copy};
pub use crate::core::math::{map, try_map, move_towards};
pub use crate::core::time::{FrameTime, TimeScale};
pub use error::{ConfigError, RangeError};
pub use systems::rng::{Rng, SharedRng, Shuffle};

pub use extensions::{
    Ease, Easing, Frames, Interpolator,
    Lerp, lerp, ease, euler, same_rotation,
    LerpId, LerpRunner, LerpTo, Tick,
    Vec2Ext, Vec3Ext, direction,
};
