//! Rustyline helper for the terminal front-end
//!
//! Combines completion over the primitive vocabulary and session-defined
//! procedures, history-based hints, rule-table syntax highlighting, and
//! bracket-balance validation into a single `Helper` implementation.

use std::borrow::Cow;

use regex::Regex;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::palette::{self, Palette};
use crate::syntax::{brackets, vocab, Balance, Classifier};

const HINT_HISTORY_LIMIT: usize = 100;

/// Helper wiring the code-surface engine into rustyline.
pub struct LogoHelper {
    classifier: Classifier,
    palette: &'static Palette,
    command_history: Vec<String>,
    defined_procedures: Vec<String>,
    procedure_def: Regex,
}

impl LogoHelper {
    pub fn new(palette: &'static Palette) -> Result<Self, String> {
        let classifier = Classifier::new()?;
        let procedure_def = Regex::new(r"(?i)\bto\s+([A-Za-z_][A-Za-z0-9_.]*)")
            .map_err(|e| format!("Failed to compile procedure pattern: {}", e))?;
        Ok(Self {
            classifier,
            palette,
            command_history: Vec::new(),
            defined_procedures: Vec::new(),
            procedure_def,
        })
    }

    /// Remember a submitted command for hint lookup.
    pub fn add_to_history(&mut self, command: String) {
        if self.command_history.len() >= HINT_HISTORY_LIMIT {
            self.command_history.remove(0);
        }
        self.command_history.push(command);
    }

    /// Harvest `to <name>` procedure definitions from submitted code so
    /// they join the completion candidates.
    pub fn record_definitions(&mut self, code: &str) {
        for capture in self.procedure_def.captures_iter(code) {
            let name = capture[1].to_lowercase();
            if !self.defined_procedures.contains(&name) {
                self.defined_procedures.push(name);
            }
        }
        self.defined_procedures.sort();
    }

    fn all_completions(&self) -> Vec<String> {
        let mut completions: Vec<String> =
            vocab::all_primitives().map(|s| s.to_string()).collect();
        completions.extend(self.defined_procedures.iter().cloned());
        completions
    }
}

impl Completer for LogoHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_before_cursor = &line[..pos];
        let word_start = line_before_cursor
            .rfind(|c: char| c.is_whitespace() || matches!(c, '[' | ']' | '(' | ')'))
            .map(|i| i + 1)
            .unwrap_or(0);
        let partial = &line_before_cursor[word_start..];

        if partial.trim().is_empty() {
            return Ok((pos, vec![]));
        }

        let partial_lower = partial.to_lowercase();
        let mut matches: Vec<Pair> = self
            .all_completions()
            .into_iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&partial_lower))
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches.dedup_by(|a, b| a.display == b.display);

        Ok((word_start, matches))
    }
}

impl Hinter for LogoHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }

        // most recent matching command wins
        for command in self.command_history.iter().rev() {
            if command.starts_with(line) && command.len() > line.len() {
                return Some(command[line.len()..].to_string());
            }
        }

        None
    }
}

impl Highlighter for LogoHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let tokens = self.classifier.classify(line);
        let rendered = palette::render_line(line, &tokens, self.palette);
        if rendered == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(rendered)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[90m{}\x1b[0m", hint))
    }
}

impl Validator for LogoHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        // an unclosed [ or ( can still be completed on the next line;
        // anything else is handed to the interpreter as-is
        match brackets::scan_balance(ctx.input()) {
            Balance::Open(_) => Ok(ValidationResult::Incomplete),
            Balance::Balanced | Balance::Extra => Ok(ValidationResult::Valid(None)),
        }
    }
}

impl Helper for LogoHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::DefaultHistory;

    #[test]
    fn test_helper_creation() {
        assert!(LogoHelper::new(palette::DEFAULT_THEME).is_ok());
    }

    #[test]
    fn test_completion_vocabulary() {
        let helper = LogoHelper::new(palette::DEFAULT_THEME).unwrap();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        let (start, matches) = helper.complete("repeat 4 [fo", 12, &ctx).unwrap();
        assert_eq!(start, 10);
        assert!(matches.iter().any(|m| m.display == "forward"));
        assert!(matches.iter().any(|m| m.display == "foreach"));
    }

    #[test]
    fn test_completion_case_insensitive() {
        let helper = LogoHelper::new(palette::DEFAULT_THEME).unwrap();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        let (_, matches) = helper.complete("FD", 2, &ctx).unwrap();
        assert!(matches.iter().any(|m| m.display == "fd"));
    }

    #[test]
    fn test_completion_includes_defined_procedures() {
        let mut helper = LogoHelper::new(palette::DEFAULT_THEME).unwrap();
        helper.record_definitions("to square :size\nrepeat 4 [fd :size rt 90]\nend");

        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (_, matches) = helper.complete("squ", 3, &ctx).unwrap();
        assert!(matches.iter().any(|m| m.display == "square"));
    }

    #[test]
    fn test_hint_from_history() {
        let mut helper = LogoHelper::new(palette::DEFAULT_THEME).unwrap();
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        helper.add_to_history("repeat 4 [fd 10 rt 90]".to_string());
        helper.add_to_history("pr 5".to_string());

        let hint = helper.hint("repeat", 6, &ctx);
        assert_eq!(hint, Some(" 4 [fd 10 rt 90]".to_string()));
        assert_eq!(helper.hint("pr 5", 4, &ctx), None);
    }

    #[test]
    fn test_hint_history_capped() {
        let mut helper = LogoHelper::new(palette::DEFAULT_THEME).unwrap();
        for i in 0..150 {
            helper.add_to_history(format!("fd {}", i));
        }
        assert_eq!(helper.command_history.len(), HINT_HISTORY_LIMIT);
        assert_eq!(helper.command_history[0], "fd 50");
    }

    #[test]
    fn test_highlight_inserts_escapes() {
        let helper = LogoHelper::new(palette::DEFAULT_THEME).unwrap();
        let highlighted = helper.highlight("fd 10", 0);
        assert!(highlighted.contains("\x1b["));
    }

    #[test]
    fn test_highlight_plain_borrows() {
        let helper = LogoHelper::new(palette::DEFAULT_THEME).unwrap();
        let highlighted = helper.highlight("xyzzy", 0);
        assert!(matches!(highlighted, Cow::Borrowed(_)));
    }

    #[test]
    fn test_validation_via_balance() {
        assert_eq!(brackets::scan_balance("repeat 4 ["), Balance::Open(1));
        assert_eq!(
            brackets::scan_balance("repeat 4 [fd 10]"),
            Balance::Balanced
        );
    }
}
