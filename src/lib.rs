//! Logoshell - Interactive editing shell for the Logo language
//!
//! This library implements the interactive code-surface engine behind a
//! Logo editing environment:
//!
//! 1. **Syntax layer** (`syntax` module)
//!    - Rule-driven token classification of single lines: keywords from a
//!      closed primitive vocabulary, `:variables`, `"quoted` words,
//!      numbers, and `;` comments, with later rules overwriting earlier
//!      ones where matches overlap
//!    - Directional, depth-counted bracket pair search over a full buffer
//!
//! 2. **Console layer** (`console` module)
//!    - A REPL input controller owning the transcript, the prompt
//!      boundary, command history, and the submit/echo protocol against
//!      an injected interpreter adapter
//!
//! 3. **Editing surface** (`surface` module)
//!    - Composes the classifier and the bracket locator over a live
//!      buffer and cursor, with per-line token caching
//!
//! The interpreter itself is an external collaborator behind the
//! [`interp::InterpreterAdapter`] trait; drawing hosts sit behind
//! [`drawing::DrawingSurface`]. Palettes are consumed only for rendering.
//!
//! # Example
//!
//! ```rust
//! use logoshell::console::Console;
//! use logoshell::interp::{ExecOutcome, InterpreterAdapter};
//!
//! struct Echo;
//!
//! impl InterpreterAdapter for Echo {
//!     fn execute(&mut self, code: &str) -> ExecOutcome {
//!         ExecOutcome::ok(code)
//!     }
//!     fn reset(&mut self) {}
//! }
//!
//! let mut console = Console::new(Echo).unwrap();
//! let reply = console.submit_line("pr \"hello");
//! assert_eq!(reply.output, "pr \"hello\n");
//! assert!(console.transcript().ends_with("? "));
//! ```

pub mod config;
pub mod console;
pub mod drawing;
pub mod helper;
pub mod interp;
pub mod palette;
pub mod surface;
pub mod syntax;

pub use config::{InterpreterConfig, ShellConfig};
pub use console::{CommandHistory, Console, ConsoleEvent, ConsoleReply, ConsoleState, HistoryStep};
pub use drawing::{DrawingController, DrawingSurface};
pub use helper::LogoHelper;
pub use interp::{ExecOutcome, InterpreterAdapter, ProcessInterpreter};
pub use palette::Palette;
pub use surface::EditingSurface;
pub use syntax::{find_match, scan_balance, Balance, Category, Classifier, Token};
