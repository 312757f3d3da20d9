use intersection_sim::shared_data::SimulationConfig;
use intersection_sim::simulation_engine::feed::ArrivalFeed;
use intersection_sim::simulation_engine::simulation::run_simulation;

#[tokio::main]
async fn main() {
    env_logger::init();

    // The feed is fixed configuration data: a JSON file named by FEED_FILE,
    // or the built-in example schedule.
    let feed = match std::env::var("FEED_FILE") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path).expect("read feed file");
            ArrivalFeed::from_json_str(&json).expect("parse feed file")
        }
        Err(_) => ArrivalFeed::example(),
    };

    let scheduled = feed.len();
    let events = run_simulation(feed, SimulationConfig::default()).await;
    println!(
        "simulation finished: {} arrivals crossed, {} light transitions",
        scheduled,
        events.len()
    );
}
