//! Closed vocabulary of Logo primitive names
//!
//! The classifier treats every name here as a keyword, grouped by what the
//! primitive does. The set is static configuration: nothing is discovered at
//! runtime, and membership checks are case-insensitive.

use itertools::Itertools;

/// Procedure definition and workspace-binding primitives
pub const DEFINITIONS: &[&str] = &[
    "to", "end", "output", "op", "stop", "local", "localmake", "make", "name", "thing",
];

/// Input/output primitives
pub const IO: &[&str] = &[
    "print", "pr", "show", "type", "readword", "readlist", "readchar",
];

/// Control-flow primitives
pub const CONTROL: &[&str] = &[
    "if", "ifelse", "test", "iftrue", "ift", "iffalse", "iff", "repeat", "while", "until", "for",
    "foreach", "run", "runresult", "apply", "catch", "throw",
];

/// List and word operations
pub const LISTS: &[&str] = &[
    "first", "last", "butfirst", "bf", "butlast", "bl", "item", "fput", "lput", "list",
    "sentence", "se", "word", "count", "emptyp", "wordp", "listp", "numberp", "memberp",
];

/// Arithmetic primitives
pub const MATH: &[&str] = &[
    "sum", "difference", "product", "quotient", "remainder", "modulo", "int", "round", "sqrt",
    "power", "sin", "cos", "tan", "arctan", "random", "rerandom",
];

/// Logic primitives
pub const LOGIC: &[&str] = &["and", "or", "not", "equalp", "lessp", "greaterp"];

/// Turtle motion and drawing primitives
pub const MOTION: &[&str] = &[
    "forward", "fd", "back", "bk", "right", "rt", "left", "lt", "penup", "pu", "pendown", "pd",
    "home", "clearscreen", "cs", "clean", "hideturtle", "ht", "showturtle", "st", "setpos",
    "setxy", "setx", "sety", "setheading", "seth", "setpencolor", "setpc", "setpensize",
    "setbackground", "setbg", "pos", "xcor", "ycor", "heading", "towards",
];

/// Workspace management primitives
pub const WORKSPACE: &[&str] = &["load", "save", "edit", "ed", "bye"];

/// Commands whose presence in submitted code should pop open the drawing
/// surface. Overlaps with `MOTION` but is not identical: it adds drawing
/// commands (`arc`, `circle`, ...) and omits pure queries (`pos`, `xcor`).
pub const DRAWING_TRIGGERS: &[&str] = &[
    "forward", "fd", "back", "bk", "backward", "right", "rt", "left", "lt", "penup", "pu",
    "pendown", "pd", "home", "clearscreen", "cs", "clean", "hideturtle", "ht", "showturtle",
    "st", "setpos", "setxy", "setx", "sety", "setheading", "seth", "setpencolor", "setpc",
    "setpensize", "setbackground", "setbg", "arc", "circle", "dot", "stamp", "fill", "towards",
    "distance",
];

/// All vocabulary groups with their names, in classification group order.
pub fn groups() -> [(&'static str, &'static [&'static str]); 8] {
    [
        ("definitions", DEFINITIONS),
        ("io", IO),
        ("control", CONTROL),
        ("lists", LISTS),
        ("math", MATH),
        ("logic", LOGIC),
        ("motion", MOTION),
        ("workspace", WORKSPACE),
    ]
}

/// Iterate over every primitive name across all groups.
pub fn all_primitives() -> impl Iterator<Item = &'static str> {
    groups().into_iter().flat_map(|(_, words)| words.iter().copied())
}

/// Case-insensitive membership test against the full vocabulary.
pub fn is_primitive(word: &str) -> bool {
    all_primitives().any(|p| p.eq_ignore_ascii_case(word))
}

/// Whole-word, case-insensitive alternation over the full vocabulary.
pub fn keyword_pattern() -> String {
    format!(r"(?i)\b(?:{})\b", all_primitives().join("|"))
}

/// Whole-word, case-insensitive alternation over the drawing triggers.
pub fn drawing_trigger_pattern() -> String {
    format!(r"(?i)\b(?:{})\b", DRAWING_TRIGGERS.iter().join("|"))
}
