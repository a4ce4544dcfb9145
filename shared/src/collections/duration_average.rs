use std::time::{Duration, Instant};

use super::CyclicArray;

/// Moving average over the last `size` measured durations
pub struct DurationAverage {
    samples: CyclicArray<Duration>,
    filled: usize,
    started: Option<Instant>,
}

impl DurationAverage {
    pub fn new(size: usize) -> Self {
        Self {
            samples: CyclicArray::new(size, Duration::default),
            filled: 0,
            started: None,
        }
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Records the time since `start`. Does nothing if not started.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.add(started.elapsed());
        }
    }

    pub fn add(&mut self, sample: Duration) {
        self.samples.add(sample);
        self.filled = (self.filled + 1).min(self.samples.size());
    }

    /// Zero until a sample is recorded
    pub fn average(&self) -> Duration {
        if self.filled == 0 {
            return Duration::ZERO;
        }
        let total: Duration = (0..self.filled)
            .map(|back| *self.samples.get(-(back as isize)))
            .sum();
        total / self.filled as u32
    }
}
