// simulation_engine/mod.rs
pub mod clock;
pub mod feed;
pub mod geometry;
pub mod simulation;
pub mod supplier;
