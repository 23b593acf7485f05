//! Bracket pair location over a full buffer
//!
//! `find_match` performs a directional, depth-counted scan from an anchor
//! bracket chosen relative to the cursor. Offsets are char offsets into the
//! buffer. The scan reports only the partner's offset, never the anchor's
//! own; callers highlighting both ends track the anchor themselves.

/// The partner character of a bracket, or `None` for non-brackets.
pub fn partner(ch: char) -> Option<char> {
    match ch {
        '[' => Some(']'),
        ']' => Some('['),
        '(' => Some(')'),
        ')' => Some('('),
        _ => None,
    }
}

fn is_opening(ch: char) -> bool {
    matches!(ch, '[' | '(')
}

/// Find the offset of the bracket matching the one at or beside `cursor`.
///
/// Anchor selection, in order: a closing bracket just before an at-end
/// cursor; the character at the cursor; the character before the cursor.
/// Returns `None` when no anchor is found or when the scan exhausts the
/// buffer without balancing — unbalanced nesting is a legitimate outcome,
/// not an error.
pub fn find_match(text: &str, cursor: usize) -> Option<usize> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let cursor = cursor.min(len);

    let anchor = if cursor == len && cursor > 0 && matches!(chars[cursor - 1], ']' | ')') {
        cursor - 1
    } else if cursor < len && partner(chars[cursor]).is_some() {
        cursor
    } else if cursor > 0 && partner(chars[cursor - 1]).is_some() {
        cursor - 1
    } else {
        return None;
    };

    let anchor_ch = chars[anchor];
    let pair_ch = partner(anchor_ch)?;
    let mut depth = 1usize;

    if is_opening(anchor_ch) {
        for (pos, &ch) in chars.iter().enumerate().skip(anchor + 1) {
            if ch == anchor_ch {
                depth += 1;
            } else if ch == pair_ch {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
        }
    } else {
        for pos in (0..anchor).rev() {
            let ch = chars[pos];
            if ch == anchor_ch {
                depth += 1;
            } else if ch == pair_ch {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
        }
    }

    None
}

/// Delimiter balance of a whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    /// Every opened delimiter is closed.
    Balanced,
    /// `n` delimiters remain open; more input can complete them.
    Open(usize),
    /// A closing delimiter appeared with nothing open.
    Extra,
}

/// Comment-aware delimiter-depth summary of `text`.
///
/// Square brackets and parentheses are counted independently; a `;` skips
/// the rest of its line. Used by input validation to decide whether an
/// entry can still be completed by typing more.
pub fn scan_balance(text: &str) -> Balance {
    let mut square: i64 = 0;
    let mut paren: i64 = 0;
    let mut in_comment = false;

    for ch in text.chars() {
        if in_comment {
            if ch == '\n' {
                in_comment = false;
            }
            continue;
        }
        match ch {
            ';' => in_comment = true,
            '[' => square += 1,
            ']' => square -= 1,
            '(' => paren += 1,
            ')' => paren -= 1,
            _ => {}
        }
        if square < 0 || paren < 0 {
            return Balance::Extra;
        }
    }

    let open = (square + paren) as usize;
    if open > 0 {
        Balance::Open(open)
    } else {
        Balance::Balanced
    }
}
