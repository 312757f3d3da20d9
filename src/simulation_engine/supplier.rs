use crate::control_system::lane_controller::LaneInbox;
use crate::simulation_engine::feed::ArrivalFeed;
use crate::simulation_engine::geometry::Lane;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Replays the feed in time order: sleep the gap to the next record's offset,
/// enqueue it on its lane's inbox, repeat until the feed is drained. The feed
/// is assumed well-formed (non-decreasing offsets); it is not validated.
pub async fn supply_arrivals(
    feed: ArrivalFeed,
    inboxes: HashMap<Lane, Arc<LaneInbox>>,
    time_unit: Duration,
) {
    let mut last_offset = 0u64;
    for arrival in feed.arrivals {
        if arrival.time > last_offset {
            sleep(time_unit * (arrival.time - last_offset) as u32).await;
            last_offset = arrival.time;
        }
        log::debug!(
            "supplying vehicle {} to lane {:?} {:?} at offset {}",
            arrival.id,
            arrival.side,
            arrival.direction,
            arrival.time
        );
        inboxes
            .get(&arrival.lane())
            .expect("every fed lane has an inbox")
            .push(arrival);
    }
    log::debug!("arrival feed exhausted, supplier terminating");
}
