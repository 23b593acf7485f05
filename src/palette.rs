//! Color palettes for rendering classified text
//!
//! A palette maps semantic roles to colors; core logic never inspects it.
//! The rendering helpers here splice ANSI truecolor escapes around token
//! spans for terminal hosts.

use crate::syntax::{Category, Token};

pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// ANSI truecolor foreground escape for this color.
    pub fn fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// ANSI truecolor background escape for this color.
    pub fn bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Named mapping of semantic display roles to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub keyword: Color,
    pub variable: Color,
    pub string: Color,
    pub number: Color,
    pub comment: Color,
    /// Emphasis for the partner of a matched bracket.
    pub bracket_match: Color,
}

impl Palette {
    /// Color for a token category; `Plain` keeps the terminal default.
    pub fn color_for(&self, category: Category) -> Option<Color> {
        match category {
            Category::Keyword => Some(self.keyword),
            Category::Variable => Some(self.variable),
            Category::StringLiteral => Some(self.string),
            Category::Number => Some(self.number),
            Category::Comment => Some(self.comment),
            Category::Plain => None,
        }
    }
}

pub const AMBER_BLUE: Palette = Palette {
    name: "amber_blue",
    keyword: Color::new(0x81, 0xA1, 0xC1),
    variable: Color::new(0xA3, 0xBE, 0x8C),
    string: Color::new(0xD0, 0x87, 0x70),
    number: Color::new(0xB4, 0x8E, 0xAD),
    comment: Color::new(0x61, 0x6E, 0x88),
    bracket_match: Color::new(0x4C, 0x56, 0x6A),
};

pub const LIGHT: Palette = Palette {
    name: "light",
    keyword: Color::new(0x15, 0x65, 0xC0),
    variable: Color::new(0x2E, 0x7D, 0x32),
    string: Color::new(0xE6, 0x51, 0x00),
    number: Color::new(0x7B, 0x1F, 0xA2),
    comment: Color::new(0x75, 0x75, 0x75),
    bracket_match: Color::new(0xE0, 0xE0, 0xE0),
};

pub const MONOKAI: Palette = Palette {
    name: "monokai",
    keyword: Color::new(0xF9, 0x26, 0x72),
    variable: Color::new(0xA6, 0xE2, 0x2E),
    string: Color::new(0xE6, 0xDB, 0x74),
    number: Color::new(0xAE, 0x81, 0xFF),
    comment: Color::new(0x75, 0x71, 0x5E),
    bracket_match: Color::new(0x3E, 0x3D, 0x32),
};

pub const SOLARIZED_DARK: Palette = Palette {
    name: "solarized_dark",
    keyword: Color::new(0x26, 0x8B, 0xD2),
    variable: Color::new(0x85, 0x99, 0x00),
    string: Color::new(0xCB, 0x4B, 0x16),
    number: Color::new(0xD3, 0x36, 0x82),
    comment: Color::new(0x58, 0x6E, 0x75),
    bracket_match: Color::new(0x07, 0x36, 0x42),
};

pub const DEFAULT_THEME: &Palette = &AMBER_BLUE;

const THEMES: &[&Palette] = &[&AMBER_BLUE, &LIGHT, &MONOKAI, &SOLARIZED_DARK];

/// Look up a built-in theme by name.
pub fn by_name(name: &str) -> Option<&'static Palette> {
    THEMES.iter().copied().find(|p| p.name == name)
}

/// Names of all built-in themes.
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|p| p.name).collect()
}

/// Render one line with ANSI escapes spliced around its token spans.
pub fn render_line(line: &str, tokens: &[Token], palette: &Palette) -> String {
    if tokens.is_empty() {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + tokens.len() * 12);
    for token in tokens {
        let text = &line[token.start..token.end];
        match palette.color_for(token.category) {
            Some(color) => {
                result.push_str(&color.fg());
                result.push_str(text);
                result.push_str(RESET);
            }
            None => result.push_str(text),
        }
    }
    result
}
