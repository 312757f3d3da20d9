// feed_generator.rs
//
// Emits a random arrival schedule over the geometrically modeled lanes as
// JSON, suitable as a FEED_FILE input for the simulation binary.

use intersection_sim::simulation_engine::feed::{Arrival, ArrivalFeed};
use intersection_sim::simulation_engine::geometry::{occupied_zones, Lane};
use rand::Rng;

const NUM_ARRIVALS: u32 = 20;

fn main() {
    let lanes: Vec<Lane> = Lane::all()
        .filter(|lane| !occupied_zones(*lane).is_empty())
        .collect();

    let mut rng = rand::rng();
    let mut time = 0u64;
    let mut arrivals = Vec::new();
    for id in 0..NUM_ARRIVALS {
        // Offsets are non-decreasing: 0-2 units between consecutive arrivals.
        time += rng.random_range(0..3);
        let lane = lanes[rng.random_range(0..lanes.len())];
        arrivals.push(Arrival {
            time,
            side: lane.side,
            direction: lane.direction,
            id,
        });
    }

    let feed = ArrivalFeed::new(arrivals);
    println!(
        "{}",
        serde_json::to_string_pretty(&feed).expect("serialize feed")
    );
}
