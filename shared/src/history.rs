use log::trace;

use crate::{copy_to, interpolate_into, CyclicArray, Element, Tick};

/// A state snapshot stamped with the tick and time it was produced at
#[derive(Clone, Debug)]
pub struct Snapshot<T> {
    pub tick: Option<Tick>,
    pub time_us: Option<u32>,
    pub state: T,
}

/// How `History::render_interpolated` produced the rendered state
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderSource {
    /// Blended between two bracketing snapshots at this fraction
    Interpolated(f32),
    /// The render time is past the newest snapshot, or history has gaps
    Latest,
    /// The render time is older than everything buffered
    Oldest,
}

/// Fixed-size history of stamped snapshots, newest at offset 0.
///
/// Pushing copies into the slot being overwritten, so steady-state recording does not
/// allocate.
pub struct History<T: Element + Clone> {
    snapshots: CyclicArray<Snapshot<T>>,
}

impl<T: Element + Clone> History<T> {
    /// # Panics
    ///
    /// Panics if `size < 2`; rendering needs a pair of snapshots.
    pub fn new(size: usize, prototype: &T) -> Self {
        assert!(size >= 2, "history needs at least two snapshots, got {}", size);
        Self {
            snapshots: CyclicArray::new(size, || Snapshot {
                tick: None,
                time_us: None,
                state: prototype.clone(),
            }),
        }
    }

    pub fn size(&self) -> usize {
        self.snapshots.size()
    }

    pub fn push(&mut self, tick: Tick, time_us: u32, state: &T) {
        let slot = self.snapshots.claim_next();
        slot.tick = Some(tick);
        slot.time_us = Some(time_us);
        copy_to(state, &mut slot.state);
    }

    pub fn latest(&self) -> &Snapshot<T> {
        self.snapshots.peek()
    }

    /// `back` snapshots before the latest one
    pub fn get(&self, back: usize) -> &Snapshot<T> {
        self.snapshots.get(-(back as isize))
    }

    pub fn get_mut(&mut self, back: usize) -> &mut Snapshot<T> {
        self.snapshots.get_mut(-(back as isize))
    }

    /// How many snapshots back the one recorded at `tick` is
    pub fn find_tick(&self, tick: Tick) -> Option<usize> {
        self.snapshots
            .find_offset(|snapshot| snapshot.tick == Some(tick))
            .map(|offset| offset.unsigned_abs())
    }

    /// Writes the state as of `render_time_us` into `destination`.
    ///
    /// Scans back from the newest pair of snapshots for one bracketing the render time and
    /// interpolates between them. Outside the buffered range the nearest snapshot is copied.
    pub fn render_interpolated(&self, render_time_us: u32, destination: &mut T) -> RenderSource {
        for back in 0..self.size() - 1 {
            let to = self.get(back);
            let from = self.get(back + 1);
            let (Some(to_time), Some(from_time)) = (to.time_us, from.time_us) else {
                copy_to(&self.latest().state, destination);
                return RenderSource::Latest;
            };
            if back == 0 && to_time < render_time_us {
                copy_to(&to.state, destination);
                return RenderSource::Latest;
            }
            if (from_time..=to_time).contains(&render_time_us) {
                let t = if to_time == from_time {
                    1.0
                } else {
                    (render_time_us - from_time) as f32 / (to_time - from_time) as f32
                };
                interpolate_into(&from.state, &to.state, destination, t);
                return RenderSource::Interpolated(t);
            }
        }
        trace!(
            "render time {} is older than the buffered history",
            render_time_us
        );
        copy_to(&self.get(self.size() - 1).state, destination);
        RenderSource::Oldest
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot<T>> {
        self.snapshots.iter()
    }
}
