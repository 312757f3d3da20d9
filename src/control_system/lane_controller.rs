use crate::control_system::zone_locks::ZoneLockSet;
use crate::shared_data::{CrossingEvent, EventLog, LightEvent, SimulationConfig};
use crate::simulation_engine::clock::SimulationClock;
use crate::simulation_engine::feed::Arrival;
use crate::simulation_engine::geometry::{occupied_zones, ConflictZone, Lane};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tokio::time::sleep;

/// Pending arrivals for one lane: a FIFO written only by the supplier and read
/// only by that lane's controller, with a counting notifier signaled once per
/// enqueued arrival.
pub struct LaneInbox {
    queue: Mutex<VecDeque<Arrival>>,
    notifier: Semaphore,
}

impl LaneInbox {
    pub fn with_capacity(expected: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(expected)),
            notifier: Semaphore::new(0),
        }
    }

    /// Supplier side: enqueue one arrival and signal the controller.
    pub fn push(&self, arrival: Arrival) {
        self.queue.lock().unwrap().push_back(arrival);
        self.notifier.add_permits(1);
    }

    /// Controller side: wait until an arrival has been signaled, then take it.
    pub async fn next(&self) -> Arrival {
        self.notifier
            .acquire()
            .await
            .expect("lane notifier closed")
            .forget();
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .expect("signaled arrival missing from queue")
    }
}

/// The traffic light for one lane. Waits for signaled arrivals, locks every
/// zone on the lane's path atomically, holds them for the crossing time, then
/// releases them, until the lane's share of the feed is exhausted.
pub struct LaneController {
    lane: Lane,
    path: &'static [ConflictZone],
    expected: usize,
    inbox: Arc<LaneInbox>,
    locks: Arc<ZoneLockSet>,
    clock: SimulationClock,
    config: SimulationConfig,
    events: EventLog,
}

impl LaneController {
    pub fn new(
        lane: Lane,
        expected: usize,
        inbox: Arc<LaneInbox>,
        locks: Arc<ZoneLockSet>,
        clock: SimulationClock,
        config: SimulationConfig,
        events: EventLog,
    ) -> Self {
        Self {
            lane,
            path: occupied_zones(lane),
            expected,
            inbox,
            locks,
            clock,
            config,
            events,
        }
    }

    pub async fn run(self) {
        for _ in 0..self.expected {
            let arrival = self.inbox.next().await;
            self.locks.acquire_path(self.path).await;

            let at = self.clock.elapsed();
            self.events.record(CrossingEvent {
                lane: self.lane,
                event: LightEvent::Green {
                    vehicle: arrival.id,
                },
                at,
            });
            println!(
                "traffic light {:?} {:?} turns green at {:.2}s for vehicle {}",
                self.lane.side,
                self.lane.direction,
                at.as_secs_f64(),
                arrival.id
            );

            sleep(self.config.cross_time()).await;

            let at = self.clock.elapsed();
            self.events.record(CrossingEvent {
                lane: self.lane,
                event: LightEvent::Red,
                at,
            });
            println!(
                "traffic light {:?} {:?} turns red at {:.2}s",
                self.lane.side,
                self.lane.direction,
                at.as_secs_f64()
            );

            // Plain loop release; releasing never fails.
            for &zone in self.path {
                self.locks.release(zone);
            }
        }
        log::debug!(
            "lane {:?} {:?} handled all {} arrivals, terminating",
            self.lane.side,
            self.lane.direction,
            self.expected
        );
    }
}
