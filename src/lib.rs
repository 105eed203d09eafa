//! debrief - Interview transcript analysis with AI-powered insights
//!
//! Sends an interview transcript to Gemini, prints the narrative report,
//! and charts the extracted performance scores.

pub mod chart;
pub mod cli;
pub mod config;
pub mod llm;
pub mod report;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "debrief";
