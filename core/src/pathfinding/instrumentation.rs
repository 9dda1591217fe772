use std::time::{Duration, Instant};

/// Observes a strategy run: wall-clock time from entry to the terminal state,
/// and the number of expansions. Never influences the search itself.
#[derive(Debug)]
pub struct Instrumentation {
    search_timer: Instant,
    expansions: usize,
}

/// Frozen counters of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub expansions: usize,
    pub elapsed: Duration,
}

impl Instrumentation {
    pub fn start() -> Self {
        Self {
            search_timer: Instant::now(),
            expansions: 0,
        }
    }

    pub fn record_expansion(&mut self) {
        self.expansions += 1;
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    pub fn stop(self) -> Measurement {
        Measurement {
            expansions: self.expansions,
            elapsed: self.search_timer.elapsed(),
        }
    }
}
