//! Score table extraction from free-text model responses.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;

/// Cap on how much of the offending text a diagnostic carries.
const SNIPPET_MAX_LEN: usize = 200;

/// Why no score table could be produced from a response.
///
/// All of these are non-fatal to the analysis run: the text report has
/// already been printed, only the chart is skipped.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in the response")]
    NoJsonFound,

    #[error("malformed JSON ({message}), attempted to parse: >>>{snippet}<<<")]
    MalformedJson { snippet: String, message: String },

    #[error("decoded JSON is not a flat object of numeric scores")]
    NotNumericMap,

    #[error("decoded JSON object contains no scores")]
    EmptyScores,
}

/// Ordered metric -> score mapping extracted from a model response.
///
/// Non-empty by construction; entries keep the order the model emitted them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    entries: Vec<(String, f64)>,
}

impl ScoreTable {
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-serialize the table as a JSON object.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (metric, score) in &self.entries {
            if let Some(number) = serde_json::Number::from_f64(*score) {
                map.insert(metric.clone(), Value::Number(number));
            }
        }
        Value::Object(map)
    }
}

/// Locate and decode the score object embedded in a model response.
///
/// A fenced ```json block takes priority; otherwise the first balanced
/// `{...}` region is used. Single best-effort attempt: if the chosen
/// candidate fails strict decoding no later region is tried and no repair
/// (trailing commas etc.) is applied.
pub fn extract_scores(response: &str) -> Result<ScoreTable, ExtractError> {
    let candidate = fenced_json(response)
        .or_else(|| balanced_object(response))
        .ok_or(ExtractError::NoJsonFound)?;
    let candidate = candidate.trim();

    let value: Value =
        serde_json::from_str(candidate).map_err(|e| ExtractError::MalformedJson {
            snippet: truncate(candidate, SNIPPET_MAX_LEN),
            message: e.to_string(),
        })?;

    let map = match value {
        Value::Object(map) => map,
        _ => return Err(ExtractError::NotNumericMap),
    };

    if map.is_empty() {
        return Err(ExtractError::EmptyScores);
    }

    let mut entries = Vec::with_capacity(map.len());
    for (metric, score) in map {
        match score.as_f64() {
            Some(score) => entries.push((metric, score)),
            None => return Err(ExtractError::NotNumericMap),
        }
    }

    Ok(ScoreTable { entries })
}

/// Content of the first ```json fenced block, if any.
fn fenced_json(text: &str) -> Option<&str> {
    static FENCED: OnceLock<Regex> = OnceLock::new();
    let fenced = FENCED
        .get_or_init(|| Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("valid fence regex"));

    fenced
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First balanced `{...}` region, counting braces outside string literals.
///
/// Unrelated braces in prose ahead of the real object will still win here;
/// the fence-first policy above is what keeps this fallback rare.
fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Render a score for display: whole numbers without a decimal point.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len - 3;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
