//! battle_sim - run seeded battles from scenario files
//!
//! The binary is a thin wrapper around [`scenario`] (what to fight) and
//! [`render`] (how to print it).

pub mod render;
pub mod scenario;

pub use render::{render_summary, render_text};
pub use scenario::{build_battle, load_scenario, parse_scenario, simulate, Scenario, ScenarioError};
