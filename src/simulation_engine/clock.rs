use std::time::{Duration, Instant};

/// Monotonic elapsed-time source for the whole simulation. Started once by the
/// orchestrator before any crossing; copies handed to every worker.
#[derive(Debug, Clone, Copy)]
pub struct SimulationClock {
    started_at: Instant,
}

impl SimulationClock {
    /// Marks the simulation start.
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Time elapsed since `start`. Callable concurrently from any worker.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}
