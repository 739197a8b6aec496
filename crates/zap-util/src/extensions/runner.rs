// extensions/runner.rs
//
// Callback delivery for interpolation runs, plus a manager that drives many
// runs from one per-frame tick. Abandoning a run (remove, clear, or just not
// ticking it) is the only cancellation; runs hold no resources.
//
// Usage:
//   let mut runs = LerpRunner::new();
//   runs.add(LerpTo::new(Interpolator::new(0.0, 1.0, 2.0), move |a| alpha = a));
//   runs.tick(&frame);  // Advances all runs, delivers values, drops finished ones

use std::collections::HashMap;
use super::easing::Ease;
use super::interpolator::Interpolator;
use super::lerp::Lerp;
use crate::core::time::FrameTime;

/// Something the runner can advance once per frame.
pub trait Tick {
    /// Advance one frame. Returns `false` once the final value has been delivered.
    fn tick(&mut self, frame: &FrameTime) -> bool;
}

/// An [`Interpolator`] bound to the callback that receives its values.
pub struct LerpTo<T: Lerp, E: Ease, F: FnMut(T)> {
    run: Interpolator<T, E>,
    target: F,
}

impl<T: Lerp, E: Ease, F: FnMut(T)> LerpTo<T, E, F> {
    pub fn new(run: Interpolator<T, E>, target: F) -> Self {
        Self { run, target }
    }

    pub fn interpolator(&self) -> &Interpolator<T, E> {
        &self.run
    }

    /// Rewind the run; the next tick starts from `from` again.
    pub fn restart(&mut self) {
        self.run.restart();
    }
}

impl<T: Lerp, E: Ease, F: FnMut(T)> Tick for LerpTo<T, E, F> {
    fn tick(&mut self, frame: &FrameTime) -> bool {
        match self.run.step(frame) {
            Some(value) => {
                (self.target)(value);
                !self.run.is_complete()
            }
            None => false,
        }
    }
}

/// Handle to a run for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LerpId(pub u32);

struct Entry<'a> {
    run: Box<dyn Tick + 'a>,
    playing: bool,
}

/// Drives all active runs from the frame loop.
#[derive(Default)]
pub struct LerpRunner<'a> {
    runs: HashMap<LerpId, Entry<'a>>,
    next_id: u32,
    /// Runs that finished since the last drain.
    completed: Vec<LerpId>,
}

impl<'a> LerpRunner<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a run. Returns a handle for later control.
    pub fn add(&mut self, run: impl Tick + 'a) -> LerpId {
        let id = LerpId(self.next_id);
        self.next_id += 1;
        self.runs.insert(id, Entry { run: Box::new(run), playing: true });
        id
    }

    /// Abandon a run. Its callback is never called again.
    pub fn remove(&mut self, id: LerpId) -> bool {
        let removed = self.runs.remove(&id).is_some();
        if removed {
            log::debug!("lerp {:?} abandoned", id);
        }
        removed
    }

    pub fn pause(&mut self, id: LerpId) {
        if let Some(entry) = self.runs.get_mut(&id) {
            entry.playing = false;
        }
    }

    pub fn resume(&mut self, id: LerpId) {
        if let Some(entry) = self.runs.get_mut(&id) {
            entry.playing = true;
        }
    }

    pub fn pause_all(&mut self) {
        for entry in self.runs.values_mut() {
            entry.playing = false;
        }
    }

    pub fn resume_all(&mut self) {
        for entry in self.runs.values_mut() {
            entry.playing = true;
        }
    }

    pub fn is_playing(&self, id: LerpId) -> bool {
        self.runs.get(&id).is_some_and(|e| e.playing)
    }

    /// Advance every playing run by one frame.
    /// Returns the number of runs that completed this tick.
    pub fn tick(&mut self, frame: &FrameTime) -> usize {
        let mut finished = Vec::new();

        for (&id, entry) in self.runs.iter_mut() {
            if entry.playing && !entry.run.tick(frame) {
                finished.push(id);
            }
        }

        for &id in &finished {
            self.runs.remove(&id);
            log::debug!("lerp {:?} complete", id);
        }
        let count = finished.len();
        self.completed.extend(finished);
        count
    }

    /// Drain the ids of runs that completed since the last call.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = LerpId> + '_ {
        self.completed.drain(..)
    }

    pub fn contains(&self, id: LerpId) -> bool {
        self.runs.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Abandon all runs.
    pub fn clear(&mut self) {
        self.runs.clear();
        self.completed.clear();
    }
}
