use serde::{Deserialize, Serialize};

/// Which clock a run advances with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeScale {
    /// Game time: slows down or stops with the global time scale.
    #[default]
    Scaled,
    /// Real time: ignores the global time scale (pause menus, UI).
    Unscaled,
}

/// Elapsed time for one tick, in both clocks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Scaled delta in seconds.
    pub delta: f32,
    /// Real delta in seconds.
    pub unscaled_delta: f32,
}

impl FrameTime {
    /// Build a frame from the real delta and the current time scale factor.
    pub fn new(unscaled_delta: f32, time_scale: f32) -> Self {
        Self {
            delta: unscaled_delta * time_scale,
            unscaled_delta,
        }
    }

    /// A frame where both clocks agree (time scale 1).
    pub fn unscaled(dt: f32) -> Self {
        Self::new(dt, 1.0)
    }

    /// The delta for the given clock.
    #[inline]
    pub fn delta_for(&self, scale: TimeScale) -> f32 {
        match scale {
            TimeScale::Scaled => self.delta,
            TimeScale::Unscaled => self.unscaled_delta,
        }
    }
}
