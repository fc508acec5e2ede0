//! Console front end for the battle arena.
//!
//! The client owns everything that touches the terminal: menus, input
//! parsing, colored narration and log setup. All rules live in `arena-core`;
//! the loop only turns validated menu choices into
//! [`arena_core::Command`]s and renders the returned outcomes.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::ArenaApp;
pub use config::CliConfig;
