//! Orrery library
//!
//! A star and its planets under Newtonian gravity. The numeric core lives in
//! [`physics`] and [`simulation`]; the remaining modules run it inside a
//! headless bevy `App`.

pub mod cli;
pub mod config;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod simulation;
pub mod states;

// Test utilities are public for integration tests
pub mod test_utils;
