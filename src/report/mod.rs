//! Report handling for debrief
//!
//! The model's reply is free text; the only structured part is a small JSON
//! object of performance scores buried somewhere in it. This module digs that
//! object out and validates it.

mod scores;

pub use scores::{extract_scores, format_score, ExtractError, ScoreTable};
