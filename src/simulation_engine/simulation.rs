// simulation.rs
use crate::control_system::lane_controller::{LaneController, LaneInbox};
use crate::control_system::zone_locks::ZoneLockSet;
use crate::shared_data::{CrossingEvent, EventLog, SimulationConfig};
use crate::simulation_engine::clock::SimulationClock;
use crate::simulation_engine::feed::ArrivalFeed;
use crate::simulation_engine::supplier::supply_arrivals;
use std::collections::HashMap;
use std::sync::Arc;

/// Runs one full simulation of the feed: one controller task per lane the feed
/// designates arrivals for, plus the supplier, all sharing the zone lock set.
/// Lanes the feed never names get no controller at all. Returns every recorded
/// light transition once all workers have terminated; locks, inboxes, and the
/// notifiers are dropped only after the joins complete.
pub async fn run_simulation(feed: ArrivalFeed, config: SimulationConfig) -> Vec<CrossingEvent> {
    let locks = Arc::new(ZoneLockSet::new());
    let events = EventLog::new();
    let clock = SimulationClock::start();

    let mut inboxes = HashMap::new();
    let mut controllers = Vec::new();
    for (lane, expected) in feed.arrivals_per_lane() {
        let inbox = Arc::new(LaneInbox::with_capacity(expected));
        inboxes.insert(lane, Arc::clone(&inbox));
        let controller = LaneController::new(
            lane,
            expected,
            inbox,
            Arc::clone(&locks),
            clock,
            config,
            events.clone(),
        );
        controllers.push(tokio::spawn(controller.run()));
    }
    log::info!(
        "started {} lane controllers for {} scheduled arrivals",
        controllers.len(),
        feed.len()
    );

    let supplier = tokio::spawn(supply_arrivals(feed, inboxes, config.time_unit));

    for controller in controllers {
        controller.await.expect("lane controller panicked");
    }
    supplier.await.expect("supplier panicked");
    log::info!("all workers terminated");

    events.snapshot()
}
