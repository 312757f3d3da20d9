// src/shared_data.rs

use crate::simulation_engine::geometry::Lane;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Timing configuration for one simulation run. Feed offsets and the crossing
/// time are counted in abstract feed units; `time_unit` sets how long one unit
/// lasts in real time, so tests can replay a schedule at millisecond scale.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Real duration of one feed time unit.
    pub time_unit: Duration,
    /// How many feed units a vehicle needs to cross the intersection.
    pub cross_time_units: u32,
}

impl SimulationConfig {
    pub fn cross_time(&self) -> Duration {
        self.time_unit * self.cross_time_units
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_unit: Duration::from_secs(1),
            cross_time_units: 1,
        }
    }
}

/// A light-state transition for one lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightEvent {
    /// The lane turned green and the named vehicle began crossing.
    Green { vehicle: u32 },
    /// The lane turned red; the crossing that began at the matching green
    /// event has finished.
    Red,
}

/// One recorded transition, stamped with elapsed simulation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingEvent {
    pub lane: Lane,
    pub event: LightEvent,
    pub at: Duration,
}

/// Shared append-only log of crossing events, filled by the lane controllers
/// and returned to the caller once every worker has terminated.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<CrossingEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: CrossingEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn snapshot(&self) -> Vec<CrossingEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation_engine::geometry::{Direction, Side};

    #[test]
    fn default_config_uses_one_second_units() {
        let config = SimulationConfig::default();
        assert_eq!(config.cross_time(), Duration::from_secs(1));
    }

    #[test]
    fn log_preserves_record_order() {
        let log = EventLog::new();
        let lane = Lane::new(Side::West, Direction::Left);
        log.record(CrossingEvent {
            lane,
            event: LightEvent::Green { vehicle: 7 },
            at: Duration::from_millis(5),
        });
        log.record(CrossingEvent {
            lane,
            event: LightEvent::Red,
            at: Duration::from_millis(25),
        });
        let events = log.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event, LightEvent::Green { vehicle: 7 });
        assert_eq!(events[1].event, LightEvent::Red);
    }
}
