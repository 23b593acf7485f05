//! Shell configuration
//!
//! Optional TOML configuration for the terminal front-end: prompt text,
//! color theme, history capacity, and the external interpreter command.
//! Missing file or missing keys fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

fn default_prompt() -> String {
    "? ".to_string()
}

fn default_theme() -> String {
    "amber_blue".to_string()
}

fn default_history_limit() -> usize {
    1000
}

/// External interpreter command: program plus arguments. The submitted
/// code is piped to its stdin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterpreterConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default)]
    pub interpreter: Option<InterpreterConfig>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            theme: default_theme(),
            history_limit: default_history_limit(),
            interpreter: None,
        }
    }
}

impl ShellConfig {
    /// Load configuration from a specific file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config '{}': {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config '{}': {}", path.display(), e))
    }

    /// Load from the default location if present, otherwise defaults.
    /// A malformed file is reported in the log, not fatal.
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// `$XDG_CONFIG_HOME/logoshell/config.toml` (or platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("logoshell").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, "? ");
        assert_eq!(config.theme, "amber_blue");
        assert_eq!(config.history_limit, 1000);
        assert!(config.interpreter.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: ShellConfig = toml::from_str(
            r#"
            prompt = "logo> "
            theme = "monokai"
            history_limit = 50

            [interpreter]
            command = "pylogo"
            args = ["-q"]
            "#,
        )
        .unwrap();

        assert_eq!(config.prompt, "logo> ");
        assert_eq!(config.theme, "monokai");
        assert_eq!(config.history_limit, 50);
        let interp = config.interpreter.unwrap();
        assert_eq!(interp.command, "pylogo");
        assert_eq!(interp.args, vec!["-q"]);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ShellConfig = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.prompt, "? ");
        assert_eq!(config.history_limit, 1000);
    }

    #[test]
    fn test_interpreter_args_default_empty() {
        let config: ShellConfig = toml::from_str(
            r#"
            [interpreter]
            command = "pylogo"
            "#,
        )
        .unwrap();
        assert!(config.interpreter.unwrap().args.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(ShellConfig::load(Path::new("/nonexistent/logoshell.toml")).is_err());
    }
}
