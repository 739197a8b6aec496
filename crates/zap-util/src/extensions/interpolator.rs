// extensions/interpolator.rs
//
// A single interpolation run as a resumable state object.
// The driver calls `advance` once per tick; there is no hidden scheduling.
//
// Usage:
//   let mut lerp = Interpolator::new(0.0, 10.0, 2.0).with_easing(Easing::QuadOut);
//   while let Some(v) = lerp.step(&frame) { ... }   // one call per frame

use glam::{Quat, Vec3};
use crate::core::time::{FrameTime, TimeScale};
use super::easing::{Ease, Easing};
use super::lerp::{euler, Lerp};

/// Blends `from` into `to` as progress runs from 0 to 1 at `rate` per second.
///
/// With `rate <= 0` progress never moves and the run never completes. That is
/// the caller's responsibility; it is logged but not rejected.
#[derive(Debug, Clone)]
pub struct Interpolator<T: Lerp, E: Ease = Easing> {
    from: T,
    to: T,
    /// Progress per second of elapsed time.
    rate: f32,
    time_scale: TimeScale,
    easing: E,
    /// Normalized progress in [0, 1]; never decreases.
    progress: f64,
    /// Rounding error not yet added to `progress`.
    carry: f64,
}

impl<T: Lerp> Interpolator<T> {
    /// Linear interpolation on the scaled clock.
    pub fn new(from: T, to: T, rate: f32) -> Self {
        if !(rate > 0.0) {
            log::warn!("interpolator rate {} is not positive; the run will never complete", rate);
        }
        Self {
            from,
            to,
            rate,
            time_scale: TimeScale::Scaled,
            easing: Easing::Linear,
            progress: 0.0,
            carry: 0.0,
        }
    }
}

impl Interpolator<Quat> {
    /// Rotate between two Euler orientations given in degrees.
    pub fn euler(from: Vec3, to: Vec3, rate: f32) -> Self {
        Self::new(euler(from), euler(to), rate)
    }
}

impl<T: Lerp, E: Ease> Interpolator<T, E> {
    // -- Builder methods --

    /// Replace the easing with a named curve or any `Fn(f32) -> f32`.
    pub fn with_easing<E2: Ease>(self, easing: E2) -> Interpolator<T, E2> {
        Interpolator {
            from: self.from,
            to: self.to,
            rate: self.rate,
            time_scale: self.time_scale,
            easing,
            progress: self.progress,
            carry: self.carry,
        }
    }

    pub fn with_time_scale(mut self, time_scale: TimeScale) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Advance on real time, ignoring the game's time scale.
    pub fn unscaled(self) -> Self {
        self.with_time_scale(TimeScale::Unscaled)
    }

    /// Advance by `elapsed` seconds and return the blended value.
    ///
    /// Returns `None` once the run is complete. The call that brings progress
    /// to exactly 1 returns `Some(to)`; no later call yields a value.
    pub fn advance(&mut self, elapsed: f32) -> Option<T> {
        if self.is_complete() {
            return None;
        }
        // Compensated sum: steps smaller than the spacing of `progress` are
        // carried until they add up, so any positive rate reaches 1.
        let step = (f64::from(self.rate) * f64::from(elapsed)).max(0.0);
        let y = step - self.carry;
        if y > 0.0 {
            let sum = self.progress + y;
            self.carry = (sum - self.progress) - y;
            self.progress = sum.min(1.0);
        }
        Some(self.value())
    }

    /// Advance using this run's clock from a frame.
    pub fn step(&mut self, frame: &FrameTime) -> Option<T> {
        self.advance(frame.delta_for(self.time_scale))
    }

    /// Value at the current progress, without advancing.
    pub fn value(&self) -> T {
        self.from.lerp(self.to, self.easing.ease(self.progress as f32))
    }

    /// Rewind to the start so the same run can be played again.
    pub fn restart(&mut self) {
        self.progress = 0.0;
        self.carry = 0.0;
    }

    pub fn progress(&self) -> f32 {
        self.progress as f32
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    pub fn from(&self) -> T {
        self.from
    }

    pub fn to(&self) -> T {
        self.to
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    /// Lazily yield one value per fixed `dt` tick until complete.
    pub fn frames(&mut self, dt: f32) -> Frames<'_, T, E> {
        Frames { run: self, dt }
    }
}

/// Iterator over the values of an [`Interpolator`] at a fixed tick length.
/// Finite whenever `rate * dt > 0`.
pub struct Frames<'a, T: Lerp, E: Ease> {
    run: &'a mut Interpolator<T, E>,
    dt: f32,
}

impl<T: Lerp, E: Ease> Iterator for Frames<'_, T, E> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.run.advance(self.dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::lerp::same_rotation;

    #[test]
    fn scalar_reaches_end_exactly() {
        let mut lerp = Interpolator::new(0.1_f32, 0.7, 4.0);
        let values: Vec<f32> = lerp.frames(1.0 / 16.0).collect();
        assert_eq!(values.len(), 4);
        assert_eq!(*values.last().unwrap(), 0.7);
        assert!(lerp.is_complete());
        assert_eq!(lerp.advance(1.0), None);
    }

    #[test]
    fn half_step_then_finish() {
        let mut lerp = Interpolator::new(0.0_f32, 100.0, 1.0);
        assert_eq!(lerp.advance(0.5), Some(50.0));
        assert_eq!(lerp.progress(), 0.5);
        assert_eq!(lerp.advance(0.5), Some(100.0));
        assert_eq!(lerp.advance(0.5), None);
    }

    #[test]
    fn large_step_clamps_to_end() {
        let mut lerp = Interpolator::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(lerp.advance(10.0), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(lerp.progress(), 1.0);
    }

    #[test]
    fn zero_elapsed_repeats_current_value() {
        let mut lerp = Interpolator::new(0.0_f32, 1.0, 1.0);
        assert_eq!(lerp.advance(0.0), Some(0.0));
        assert_eq!(lerp.advance(0.0), Some(0.0));
        assert!(!lerp.is_complete());
    }

    #[test]
    fn non_positive_rate_never_completes() {
        let mut lerp = Interpolator::new(0.0_f32, 1.0, 0.0);
        for _ in 0..1000 {
            assert_eq!(lerp.advance(1.0), Some(0.0));
        }
        let mut backwards = Interpolator::new(0.0_f32, 1.0, -1.0);
        backwards.advance(1.0);
        assert_eq!(backwards.progress(), 0.0);
    }

    #[test]
    fn tiny_steps_still_complete() {
        let mut lerp = Interpolator::new(0.0_f32, 1.0, 1e-4);
        lerp.advance(9_999.99);
        assert!(!lerp.is_complete());

        // Each tick adds ~1e-8, well below the f32 spacing near 1.
        let values: Vec<f32> = lerp.frames(1e-4).take(10_000).collect();
        assert!(lerp.is_complete());
        assert!(values.len() < 10_000, "took {} ticks", values.len());
        assert_eq!(*values.last().unwrap(), 1.0);
    }

    #[test]
    fn tiny_steps_never_move_backwards() {
        let mut lerp = Interpolator::new(0.0_f32, 1.0, 1.0);
        lerp.advance(0.75);
        let mut last = lerp.progress();
        for _ in 0..1000 {
            lerp.advance(1e-9);
            assert!(lerp.progress() >= last);
            last = lerp.progress();
        }
        assert!(last > 0.75);
    }

    #[test]
    fn easing_shapes_intermediate_values() {
        let mut lerp = Interpolator::new(0.0_f32, 1.0, 1.0).with_easing(Easing::QuadIn);
        assert_eq!(lerp.advance(0.5), Some(0.25));
        assert_eq!(lerp.advance(0.5), Some(1.0));
    }

    #[test]
    fn closure_easing() {
        let mut lerp = Interpolator::new(0.0_f32, 8.0, 1.0).with_easing(|t: f32| t * t * t);
        assert_eq!(lerp.advance(0.5), Some(1.0));
    }

    #[test]
    fn step_uses_selected_clock() {
        let paused = FrameTime::new(0.5, 0.0);

        let mut scaled = Interpolator::new(0.0_f32, 1.0, 1.0);
        assert_eq!(scaled.step(&paused), Some(0.0));

        let mut real = Interpolator::new(0.0_f32, 1.0, 1.0).unscaled();
        assert_eq!(real.step(&paused), Some(0.5));
    }

    #[test]
    fn restart_replays_the_run() {
        let mut lerp = Interpolator::new(0.0_f32, 1.0, 4.0);
        let first: Vec<f32> = lerp.frames(0.1).collect();
        assert!(lerp.is_complete());
        lerp.restart();
        let second: Vec<f32> = lerp.frames(0.1).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn euler_run_ends_on_target_rotation() {
        let to = Vec3::new(10.0, 200.0, -30.0);
        let mut lerp = Interpolator::euler(Vec3::ZERO, to, 2.0);
        let last = lerp.frames(0.05).last().unwrap();
        assert!(same_rotation(last, euler(to), 1e-5));
    }

    #[test]
    fn quaternion_run_ends_on_target_rotation() {
        let from = Quat::IDENTITY;
        let to = Quat::from_rotation_z(1.2);
        let mut lerp = Interpolator::new(from, to, 0.7).with_easing(Easing::SineInOut);
        let last = lerp.frames(1.0 / 30.0).last().unwrap();
        assert!(same_rotation(last, to, 1e-6));
    }
}
