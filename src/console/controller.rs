//! REPL input controller
//!
//! Owns the console transcript, the prompt boundary separating immutable
//! transcript history from the editable input region, the command history,
//! and the submit/echo protocol against an injected interpreter adapter.
//! Offsets into the transcript are byte offsets.

use regex::Regex;
use tracing::{debug, trace};

use super::history::{CommandHistory, HistoryStep};
use crate::drawing::DrawingController;
use crate::interp::InterpreterAdapter;
use crate::syntax::vocab;

const DEFAULT_PROMPT: &str = "? ";

/// Console lifecycle state. `Submitting` is transient: the controller does
/// not process further events until the in-flight submission has been fully
/// echoed, so reentrant submission is impossible by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleState {
    AtPrompt,
    Submitting,
}

/// Input events delivered by the host, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Insert(char),
    InsertText(String),
    Backspace,
    Submit,
    HistoryPrevious,
    HistoryNext,
    /// Move to the start of the editable input, not the start of the
    /// visual line: the prompt text itself must stay out of reach.
    MoveToInputStart,
    MoveCursor(usize),
}

/// What a handled event echoed, for hosts that render incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleReply {
    /// The transcript was cleared by the `clear`/`ct` built-in.
    pub cleared: bool,
    /// Output lines appended to the transcript by this event.
    pub output: String,
}

/// Stateful REPL input controller over a transcript buffer.
pub struct Console<A: InterpreterAdapter> {
    transcript: String,
    cursor: usize,
    prompt_boundary: usize,
    prompt: String,
    history: CommandHistory,
    state: ConsoleState,
    adapter: A,
    drawing: Option<DrawingController>,
    drawing_trigger: Regex,
}

impl<A: InterpreterAdapter> Console<A> {
    pub fn new(adapter: A) -> Result<Self, String> {
        Self::with_prompt(adapter, DEFAULT_PROMPT)
    }

    pub fn with_prompt(adapter: A, prompt: &str) -> Result<Self, String> {
        Self::with_settings(adapter, prompt, CommandHistory::new())
    }

    pub fn with_settings(
        adapter: A,
        prompt: &str,
        history: CommandHistory,
    ) -> Result<Self, String> {
        let drawing_trigger = Regex::new(&vocab::drawing_trigger_pattern())
            .map_err(|e| format!("Failed to compile drawing trigger pattern: {}", e))?;
        let mut console = Self {
            transcript: String::new(),
            cursor: 0,
            prompt_boundary: 0,
            prompt: prompt.to_string(),
            history,
            state: ConsoleState::AtPrompt,
            adapter,
            drawing: None,
            drawing_trigger,
        };
        console.show_prompt();
        Ok(console)
    }

    /// Attach an owned drawing controller; submitted code containing a
    /// drawing command will pop the surface open before execution.
    pub fn attach_drawing(&mut self, drawing: DrawingController) {
        self.drawing = Some(drawing);
    }

    pub fn drawing(&self) -> Option<&DrawingController> {
        self.drawing.as_ref()
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn prompt_boundary(&self) -> usize {
        self.prompt_boundary
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Text of the editable region: everything after the prompt boundary.
    pub fn current_input(&self) -> &str {
        &self.transcript[self.prompt_boundary..]
    }

    /// Reset the interpreter on the far side of the adapter boundary.
    pub fn reset_interpreter(&mut self) {
        self.adapter.reset();
    }

    /// Handle one input event.
    ///
    /// Any event originating with the cursor before the prompt boundary
    /// first moves the cursor to the end of the buffer, then applies the
    /// event's effect; nothing before the boundary is ever mutated.
    pub fn handle_event(&mut self, event: ConsoleEvent) -> ConsoleReply {
        if self.cursor < self.prompt_boundary {
            self.cursor = self.transcript.len();
        }

        match event {
            ConsoleEvent::Insert(ch) => {
                self.transcript.insert(self.cursor, ch);
                self.cursor += ch.len_utf8();
            }
            ConsoleEvent::InsertText(text) => {
                self.transcript.insert_str(self.cursor, &text);
                self.cursor += text.len();
            }
            ConsoleEvent::Backspace => {
                // no-op at or before the boundary: the prompt is immutable
                if self.cursor > self.prompt_boundary {
                    let prev = self.prev_char_boundary(self.cursor);
                    self.transcript.remove(prev);
                    self.cursor = prev;
                }
            }
            ConsoleEvent::Submit => return self.submit(),
            ConsoleEvent::HistoryPrevious => {
                let step = self.history.previous();
                self.apply_history_step(step);
            }
            ConsoleEvent::HistoryNext => {
                let step = self.history.next();
                self.apply_history_step(step);
            }
            ConsoleEvent::MoveToInputStart => {
                self.cursor = self.prompt_boundary;
            }
            ConsoleEvent::MoveCursor(offset) => {
                self.cursor = self.snap_to_char_boundary(offset.min(self.transcript.len()));
            }
        }

        ConsoleReply::default()
    }

    /// Convenience for line-based hosts: type `line` and submit it.
    pub fn submit_line(&mut self, line: &str) -> ConsoleReply {
        self.handle_event(ConsoleEvent::InsertText(line.to_string()));
        self.handle_event(ConsoleEvent::Submit)
    }

    /// Execute source that did not come from the input region (an editor
    /// "run" action). Bypasses history; shares the echo protocol.
    pub fn run_source(&mut self, code: &str) -> ConsoleReply {
        debug!(bytes = code.len(), "running external source");
        self.transcript.push_str("\nRunning code...\n");
        if is_clear_builtin(code) {
            return self.clear_transcript();
        }
        self.execute_and_echo(code)
    }

    fn submit(&mut self) -> ConsoleReply {
        let input = self.current_input().to_string();
        self.transcript.push('\n');

        if input.trim().is_empty() {
            self.show_prompt();
            return ConsoleReply::default();
        }

        if is_clear_builtin(&input) {
            return self.clear_transcript();
        }

        self.history.push(&input);
        self.execute_and_echo(&input)
    }

    fn execute_and_echo(&mut self, code: &str) -> ConsoleReply {
        self.state = ConsoleState::Submitting;

        if let Some(drawing) = self.drawing.as_mut() {
            if self.drawing_trigger.is_match(code) {
                drawing.ensure_visible();
            }
        }

        trace!("executing submitted code");
        let outcome = self.adapter.execute(code);

        let mut output = String::new();
        let stdout = outcome.stdout.trim_end();
        if !stdout.is_empty() {
            output.push_str(stdout);
            output.push('\n');
        }
        if !outcome.success {
            output.push_str("Error: ");
            output.push_str(&outcome.stderr);
            output.push('\n');
        }
        self.transcript.push_str(&output);

        self.state = ConsoleState::AtPrompt;
        self.show_prompt();
        ConsoleReply { cleared: false, output }
    }

    fn clear_transcript(&mut self) -> ConsoleReply {
        self.transcript.clear();
        self.show_prompt();
        ConsoleReply { cleared: true, output: String::new() }
    }

    /// Open a fresh prompt at the end of the transcript and advance the
    /// boundary to it. The boundary only ever moves forward within a turn.
    fn show_prompt(&mut self) {
        if !self.transcript.is_empty() && !self.transcript.ends_with('\n') {
            self.transcript.push('\n');
        }
        self.transcript.push_str(&self.prompt);
        self.prompt_boundary = self.transcript.len();
        self.cursor = self.prompt_boundary;
    }

    fn apply_history_step(&mut self, step: HistoryStep) {
        match step {
            HistoryStep::Entry(entry) => self.replace_input(&entry),
            HistoryStep::Cleared => self.replace_input(""),
            HistoryStep::Unchanged => {}
        }
    }

    /// Replace the editable region. Never touches text before the boundary.
    fn replace_input(&mut self, text: &str) {
        self.transcript.truncate(self.prompt_boundary);
        self.transcript.push_str(text);
        self.cursor = self.transcript.len();
    }

    fn prev_char_boundary(&self, offset: usize) -> usize {
        let mut prev = offset - 1;
        while !self.transcript.is_char_boundary(prev) {
            prev -= 1;
        }
        prev
    }

    fn snap_to_char_boundary(&self, mut offset: usize) -> usize {
        while offset > 0 && !self.transcript.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

fn is_clear_builtin(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.eq_ignore_ascii_case("clear") || trimmed.eq_ignore_ascii_case("ct")
}
