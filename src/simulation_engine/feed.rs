use crate::simulation_engine::geometry::{Direction, Lane, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single scheduled arrival: a vehicle reaching the back of its entry lane
/// `time` feed units after the simulation starts. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    pub time: u64,
    pub side: Side,
    pub direction: Direction,
    pub id: u32,
}

impl Arrival {
    pub fn lane(&self) -> Lane {
        Lane::new(self.side, self.direction)
    }
}

/// The fixed arrival schedule, ordered by non-decreasing time offset. The
/// supplier consumes it once, front to back; nothing in the core mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalFeed {
    pub arrivals: Vec<Arrival>,
}

impl ArrivalFeed {
    pub fn new(arrivals: Vec<Arrival>) -> Self {
        Self { arrivals }
    }

    /// Parses a feed from its JSON configuration form.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in demonstration schedule: two East/Straight vehicles, three
    /// time units apart.
    pub fn example() -> Self {
        Self::new(vec![
            Arrival {
                time: 0,
                side: Side::East,
                direction: Direction::Straight,
                id: 0,
            },
            Arrival {
                time: 3,
                side: Side::East,
                direction: Direction::Straight,
                id: 1,
            },
        ])
    }

    /// How many arrivals the schedule designates for each lane. Lanes absent
    /// from the map receive no controller at all.
    pub fn arrivals_per_lane(&self) -> HashMap<Lane, usize> {
        let mut counts = HashMap::new();
        for arrival in &self.arrivals {
            *counts.entry(arrival.lane()).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}
