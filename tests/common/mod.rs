//! Shared test doubles for integration tests
//!
//! Provides a scriptable interpreter adapter and a recording drawing
//! surface, both exposing shared logs so tests can observe calls made by
//! a controller that owns the double.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use logoshell::drawing::DrawingSurface;
use logoshell::interp::{ExecOutcome, InterpreterAdapter};

/// Interpreter double that replays scripted outcomes and records every
/// piece of code it is asked to execute.
pub struct FakeInterpreter {
    outcomes: VecDeque<ExecOutcome>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeInterpreter {
    pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        Self::with_outcomes(Vec::new())
    }

    pub fn with_outcomes(outcomes: Vec<ExecOutcome>) -> (Self, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let fake = Self {
            outcomes: outcomes.into(),
            calls: Rc::clone(&calls),
        };
        (fake, calls)
    }
}

impl InterpreterAdapter for FakeInterpreter {
    fn execute(&mut self, code: &str) -> ExecOutcome {
        self.calls.borrow_mut().push(code.to_string());
        self.outcomes.pop_front().unwrap_or_else(|| ExecOutcome::ok(""))
    }

    fn reset(&mut self) {}
}

/// Drawing surface double recording lifecycle calls.
pub struct RecordingSurface {
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl RecordingSurface {
    pub fn new() -> (Self, Rc<RefCell<Vec<&'static str>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let surface = Self { calls: Rc::clone(&calls) };
        (surface, calls)
    }
}

impl DrawingSurface for RecordingSurface {
    fn initialize(&mut self) {
        self.calls.borrow_mut().push("initialize");
    }

    fn show(&mut self) {
        self.calls.borrow_mut().push("show");
    }

    fn hide(&mut self) {
        self.calls.borrow_mut().push("hide");
    }

    fn clear(&mut self) {
        self.calls.borrow_mut().push("clear");
    }
}
