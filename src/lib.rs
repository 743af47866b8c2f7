//! Directed quantum measurement: compare Born-rule sampling against sampling
//! from a state skewed by a two-angle directional field.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
