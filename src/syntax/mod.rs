//! Syntax layer: vocabulary, token classification, bracket matching
//!
//! Everything here is pure and stateless per call: classification depends
//! only on one line's text and the static rule table; bracket matching
//! depends only on the buffer text and a cursor offset.

pub mod brackets;
pub mod classify;
pub mod vocab;

pub use brackets::{find_match, partner, scan_balance, Balance};
pub use classify::{Category, Classifier, Token};
