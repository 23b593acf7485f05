//! Interpreter adapter boundary
//!
//! The language interpreter lives on the far side of this boundary and is
//! opaque to the rest of the crate. Failures over there are always folded
//! into an [`ExecOutcome`]; nothing propagates into the console layer as a
//! panic or an `Err`.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// Structured result of one interpreter execution. Whatever standard
/// output was produced is preserved even when `success` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutcome {
    pub fn ok(stdout: &str) -> Self {
        Self {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn failed(stdout: &str, stderr: &str) -> Self {
        Self {
            success: false,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }
}

/// Narrow interface to the external interpreter.
///
/// `execute` blocks for the full duration of the command; there is no
/// cancellation or timeout at this layer. A host that needs a responsive
/// input loop under long-running commands must offload to a worker.
pub trait InterpreterAdapter {
    fn execute(&mut self, code: &str) -> ExecOutcome;
    fn reset(&mut self);
}

/// Adapter that pipes each submission to an external interpreter command's
/// stdin and captures its output and exit status.
///
/// Each execution spawns a fresh process, so interpreter workspace state
/// does not persist across submissions; an embedding host that needs a
/// long-lived workspace supplies its own adapter instead.
pub struct ProcessInterpreter {
    program: String,
    args: Vec<String>,
}

impl ProcessInterpreter {
    pub fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
        }
    }

    /// Parse a whitespace-separated command line, e.g. from an environment
    /// variable: first word is the program, the rest its arguments.
    pub fn from_command_line(command_line: &str) -> Result<Self, String> {
        let mut parts = command_line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| "Empty interpreter command line".to_string())?;
        Ok(Self::new(program, parts.map(|s| s.to_string()).collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl InterpreterAdapter for ProcessInterpreter {
    fn execute(&mut self, code: &str) -> ExecOutcome {
        debug!(program = %self.program, "spawning interpreter process");

        let mut child = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!(program = %self.program, error = %e, "interpreter spawn failed");
                return ExecOutcome::failed(
                    "",
                    &format!("could not start interpreter '{}': {}", self.program, e),
                );
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(code.as_bytes()).and_then(|_| stdin.write_all(b"\n")) {
                // the process may still have produced output; fall through
                // to collection and report the write failure on stderr
                warn!(error = %e, "failed writing code to interpreter stdin");
            }
        }

        match child.wait_with_output() {
            Ok(output) => ExecOutcome {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => ExecOutcome::failed("", &format!("interpreter did not finish: {}", e)),
        }
    }

    fn reset(&mut self) {
        // each execution already starts from a fresh process
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_constructors() {
        let ok = ExecOutcome::ok("out");
        assert!(ok.success);
        assert_eq!(ok.stdout, "out");
        assert!(ok.stderr.is_empty());

        let failed = ExecOutcome::failed("partial", "boom");
        assert!(!failed.success);
        assert_eq!(failed.stdout, "partial");
        assert_eq!(failed.stderr, "boom");
    }

    #[test]
    fn test_from_command_line() {
        let adapter = ProcessInterpreter::from_command_line("pylogo -q --batch").unwrap();
        assert_eq!(adapter.program(), "pylogo");
        assert_eq!(adapter.args, vec!["-q", "--batch"]);
    }

    #[test]
    fn test_from_command_line_empty() {
        assert!(ProcessInterpreter::from_command_line("   ").is_err());
    }

    #[test]
    fn test_spawn_failure_folds_into_outcome() {
        let mut adapter = ProcessInterpreter::new("logoshell-no-such-binary", Vec::new());
        let outcome = adapter.execute("fd 10");
        assert!(!outcome.success);
        assert!(outcome.stderr.contains("could not start interpreter"));
        assert!(outcome.stdout.is_empty());
    }

    #[test]
    fn test_execute_captures_stdout() {
        // `cat` echoes its stdin back, exercising the full pipe round trip
        let mut adapter = ProcessInterpreter::new("cat", Vec::new());
        let outcome = adapter.execute("fd 10");
        assert!(outcome.success);
        assert_eq!(outcome.stdout, "fd 10\n");
    }
}
