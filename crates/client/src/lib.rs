//! Line-based terminal frontend for tilequest.
//!
//! The binary wires configuration, logging and content together; the
//! modules here hold everything that can be exercised without a terminal.

pub mod config;
pub mod console;
pub mod render;
pub mod repl;

pub use config::CliConfig;
pub use console::Console;
pub use repl::{Command, Flow, Game};
