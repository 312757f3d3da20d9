// control_system/mod.rs
pub mod lane_controller;
pub mod zone_locks;
