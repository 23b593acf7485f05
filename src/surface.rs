//! Editing surface controller
//!
//! Composes the token classifier and the bracket locator over a live
//! buffer. Edits mark the buffer modified and refresh the bracket match;
//! cursor moves refresh the bracket match and drop any stale highlight.
//! Per-line token results are cached keyed by line content, so an edit to
//! a line invalidates exactly that line's entry by changing its key.
//! Cursor offsets are char offsets into the buffer.

use std::num::NonZeroUsize;

use lru::LruCache;
use ropey::Rope;
use tracing::trace;

use crate::syntax::{brackets, Classifier, Token};

const TOKEN_CACHE_LINES: usize = 256;

/// Live buffer plus cursor, classification, and bracket-match state.
pub struct EditingSurface {
    text: Rope,
    cursor: usize,
    classifier: Classifier,
    token_cache: LruCache<String, Vec<Token>>,
    bracket_match: Option<usize>,
    modified: bool,
}

impl EditingSurface {
    pub fn new() -> Result<Self, String> {
        Self::with_text("")
    }

    pub fn with_text(text: &str) -> Result<Self, String> {
        let classifier = Classifier::new()?;
        let cache_size = NonZeroUsize::new(TOKEN_CACHE_LINES.max(1)).unwrap();
        let mut surface = Self {
            text: Rope::from_str(text),
            cursor: 0,
            classifier,
            token_cache: LruCache::new(cache_size),
            bracket_match: None,
            modified: false,
        };
        surface.refresh_bracket_match();
        Ok(surface)
    }

    /// Replace the whole buffer, e.g. when loading a file. Clears the
    /// modified flag: the new content is the baseline.
    pub fn set_text(&mut self, text: &str) {
        self.text = Rope::from_str(text);
        self.cursor = self.cursor.min(self.text.len_chars());
        self.modified = false;
        self.refresh_bracket_match();
    }

    pub fn text(&self) -> String {
        self.text.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    pub fn line_count(&self) -> usize {
        self.text.len_lines()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Line index the cursor currently sits on.
    pub fn cursor_line(&self) -> usize {
        self.text.char_to_line(self.cursor)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    /// Move the cursor (clamped to buffer bounds) and recompute the
    /// bracket match for the new position.
    pub fn move_cursor(&mut self, to: usize) {
        self.cursor = to.min(self.text.len_chars());
        self.refresh_bracket_match();
    }

    /// Insert text at the cursor.
    pub fn insert(&mut self, text: &str) {
        self.text.insert(self.cursor, text);
        self.cursor += text.chars().count();
        self.modified = true;
        trace!(chars = text.chars().count(), "surface insert");
        self.refresh_bracket_match();
    }

    /// Delete the character before the cursor. Returns false at offset 0.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.text.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        self.modified = true;
        self.refresh_bracket_match();
        true
    }

    /// Delete a char range, clamped to buffer bounds.
    pub fn delete_range(&mut self, start: usize, end: usize) {
        let len = self.text.len_chars();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return;
        }
        self.text.remove(start..end);
        if self.cursor > end {
            self.cursor -= end - start;
        } else if self.cursor > start {
            self.cursor = start;
        }
        self.modified = true;
        self.refresh_bracket_match();
    }

    /// Content of one line, without its trailing newline.
    pub fn line(&self, row: usize) -> Option<String> {
        if row >= self.text.len_lines() {
            return None;
        }
        let mut line = self.text.line(row).to_string();
        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Some(line)
    }

    /// Tokens for one line, classified on demand and cached by content.
    pub fn line_tokens(&mut self, row: usize) -> Vec<Token> {
        let Some(line) = self.line(row) else {
            return Vec::new();
        };
        if let Some(tokens) = self.token_cache.get(&line) {
            return tokens.clone();
        }
        let tokens = self.classifier.classify(&line);
        self.token_cache.put(line, tokens.clone());
        tokens
    }

    /// Partner offset of the bracket at the cursor, if any. Only the
    /// partner is reported; the anchor is the caller's to track.
    pub fn current_match(&self) -> Option<usize> {
        self.bracket_match
    }

    fn refresh_bracket_match(&mut self) {
        let text = self.text.to_string();
        self.bracket_match = brackets::find_match(&text, self.cursor);
    }
}
