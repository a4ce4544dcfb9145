use log::warn;

use crate::{copy_to, predicted_equal_to, stringify, CyclicArray, Element, Tick};

struct Predicted<T> {
    tick: Option<Tick>,
    state: T,
}

/// Outcome of checking an authoritative state against the prediction made for its tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    /// Nothing was recorded for the tick, or it has been overwritten
    Unknown,
    Accurate,
    /// The recorded state was replaced by the authoritative one. `back` is how many
    /// predictions were made after it and need replaying.
    Mispredicted { back: usize },
}

/// Client-side ring of predicted states keyed by tick
pub struct Prediction<T: Element + Clone> {
    history: CyclicArray<Predicted<T>>,
    errors: u32,
}

impl<T: Element + Clone> Prediction<T> {
    pub fn new(size: usize, prototype: &T) -> Self {
        Self {
            history: CyclicArray::new(size, || Predicted {
                tick: None,
                state: prototype.clone(),
            }),
            errors: 0,
        }
    }

    pub fn record(&mut self, tick: Tick, predicted: &T) {
        let slot = self.history.claim_next();
        slot.tick = Some(tick);
        copy_to(predicted, &mut slot.state);
    }

    pub fn latest(&self) -> Option<(Tick, &T)> {
        let latest = self.history.peek();
        latest.tick.map(|tick| (tick, &latest.state))
    }

    pub fn get(&self, tick: Tick) -> Option<&T> {
        self.find(tick)
            .map(|offset| &self.history.get(offset).state)
    }

    /// Total mispredictions seen
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Compares the prediction for `tick` against the authoritative state, using each
    /// property's prediction tolerance. On a mismatch the prediction is overwritten with the
    /// authoritative state.
    pub fn verify(&mut self, tick: Tick, authoritative: &T) -> Verification {
        let Some(offset) = self.find(tick) else {
            return Verification::Unknown;
        };
        let predicted = &mut self.history.get_mut(offset).state;
        if predicted_equal_to(predicted, authoritative) {
            return Verification::Accurate;
        }

        warn!(
            "misprediction at tick {}: predicted [{}], verified [{}]",
            tick,
            stringify(predicted),
            stringify(authoritative)
        );
        self.errors += 1;
        copy_to(authoritative, predicted);
        Verification::Mispredicted {
            back: offset.unsigned_abs(),
        }
    }

    /// Rebuilds the `back` newest predictions on top of the corrected one. Each is reset to its
    /// predecessor and then advanced by `simulate` with its own tick.
    pub fn replay_from(&mut self, back: usize, mut simulate: impl FnMut(Tick, &mut T)) {
        for distance in (0..back).rev() {
            let offset = -(distance as isize);
            let previous = self.history.get(offset - 1).state.clone();
            let slot = self.history.get_mut(offset);
            copy_to(&previous, &mut slot.state);
            if let Some(tick) = slot.tick {
                simulate(tick, &mut slot.state);
            }
        }
    }

    fn find(&self, tick: Tick) -> Option<isize> {
        self.history
            .find_offset(|predicted| predicted.tick == Some(tick))
    }
}
