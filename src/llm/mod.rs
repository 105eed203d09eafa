//! LLM module for debrief
//!
//! Handles the transcript analysis request against the Gemini API.

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, AnalysisRequest, LlmProvider};
pub use gemini::GeminiClient;
pub use prompts::build_analysis_prompt;
