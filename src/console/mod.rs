//! Console layer: command history and the REPL input controller

pub mod controller;
pub mod history;

pub use controller::{Console, ConsoleEvent, ConsoleReply, ConsoleState};
pub use history::{CommandHistory, HistoryStep};
