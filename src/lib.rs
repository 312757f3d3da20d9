pub mod control_system;
pub mod shared_data;
pub mod simulation_engine;
