//! Parsing of provider completions into a validated [`TextAnalysis`].
//!
//! Providers are told to return bare JSON but routinely wrap it in a
//! markdown code fence anyway, so the raw completion is cleaned before
//! parsing. Validation is all-or-nothing: a reply missing either required
//! field, or carrying an out-of-range energy level, yields no result at
//! all rather than a partial one.

use super::models::TextAnalysis;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplyParseError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("dominant_colors is empty")]
    EmptyColors,

    #[error("energy_level {0} is outside 1-10")]
    EnergyOutOfRange(i64),
}

#[derive(Debug, Deserialize)]
struct RawReply {
    #[serde(default)]
    dominant_colors: Option<Vec<String>>,
    #[serde(default)]
    energy_level: Option<i64>,
    #[serde(default)]
    svg_path: Option<String>,
}

/// Parse a raw provider completion into a [`TextAnalysis`].
pub fn parse_analysis(reply: &str) -> Result<TextAnalysis, ReplyParseError> {
    let cleaned = strip_code_fence(reply);

    let raw: RawReply = serde_json::from_str(cleaned)
        .map_err(|e| ReplyParseError::InvalidJson(e.to_string()))?;

    let dominant_colors = raw
        .dominant_colors
        .ok_or(ReplyParseError::MissingField("dominant_colors"))?;
    if dominant_colors.is_empty() {
        return Err(ReplyParseError::EmptyColors);
    }

    let energy_level = raw
        .energy_level
        .ok_or(ReplyParseError::MissingField("energy_level"))?;
    if !(1..=10).contains(&energy_level) {
        return Err(ReplyParseError::EnergyOutOfRange(energy_level));
    }

    Ok(TextAnalysis {
        dominant_colors,
        energy_level: energy_level as u8,
        svg_path: raw.svg_path,
    })
}

/// Strip a surrounding markdown code fence, if any.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest.strip_suffix("```").unwrap_or(rest)
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest.strip_suffix("```").unwrap_or(rest)
    } else {
        trimmed
    };
    body.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_REPLY: &str = r##"{
        "dominant_colors": ["#1E90FF", "#00BFFF"],
        "energy_level": 7,
        "svg_path": "M 10 50 Q 30 20 50 50 T 90 50"
    }"##;

    #[test]
    fn test_parses_plain_reply() {
        let analysis = parse_analysis(VALID_REPLY).unwrap();
        assert_eq!(analysis.dominant_colors, vec!["#1E90FF", "#00BFFF"]);
        assert_eq!(analysis.energy_level, 7);
        assert_eq!(
            analysis.svg_path.as_deref(),
            Some("M 10 50 Q 30 20 50 50 T 90 50")
        );
    }

    #[test]
    fn test_json_fence_is_stripped() {
        let fenced = format!("```json\n{}\n```", VALID_REPLY);
        assert_eq!(
            parse_analysis(&fenced).unwrap(),
            parse_analysis(VALID_REPLY).unwrap()
        );
    }

    #[test]
    fn test_bare_fence_is_stripped() {
        let fenced = format!("```\n{}\n```", VALID_REPLY);
        assert_eq!(
            parse_analysis(&fenced).unwrap(),
            parse_analysis(VALID_REPLY).unwrap()
        );
    }

    #[test]
    fn test_fence_without_closing_marker() {
        let fenced = format!("```json\n{}", VALID_REPLY);
        assert!(parse_analysis(&fenced).is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let padded = format!("\n\n  {}  \n", VALID_REPLY);
        assert!(parse_analysis(&padded).is_ok());
    }

    #[test]
    fn test_missing_dominant_colors_fails_entirely() {
        let reply = r#"{"energy_level": 5}"#;
        assert_eq!(
            parse_analysis(reply).unwrap_err(),
            ReplyParseError::MissingField("dominant_colors")
        );
    }

    #[test]
    fn test_empty_dominant_colors_rejected() {
        let reply = r#"{"dominant_colors": [], "energy_level": 5}"#;
        assert_eq!(
            parse_analysis(reply).unwrap_err(),
            ReplyParseError::EmptyColors
        );
    }

    #[test]
    fn test_missing_energy_level_rejected() {
        let reply = r##"{"dominant_colors": ["#FFFFFF"]}"##;
        assert_eq!(
            parse_analysis(reply).unwrap_err(),
            ReplyParseError::MissingField("energy_level")
        );
    }

    #[test]
    fn test_out_of_range_energy_rejected() {
        for energy in [0, 11, 15, -3] {
            let reply = format!(
                r##"{{"dominant_colors": ["#FFFFFF"], "energy_level": {}}}"##,
                energy
            );
            assert_eq!(
                parse_analysis(&reply).unwrap_err(),
                ReplyParseError::EnergyOutOfRange(energy)
            );
        }
    }

    #[test]
    fn test_svg_path_defaults_to_none() {
        let reply = r##"{"dominant_colors": ["#FFFFFF"], "energy_level": 5}"##;
        assert_eq!(parse_analysis(reply).unwrap().svg_path, None);

        let reply = r##"{"dominant_colors": ["#FFFFFF"], "energy_level": 5, "svg_path": null}"##;
        assert_eq!(parse_analysis(reply).unwrap().svg_path, None);
    }

    #[test]
    fn test_prose_reply_is_invalid_json() {
        let err = parse_analysis("Here are your colors: blue and green").unwrap_err();
        assert!(matches!(err, ReplyParseError::InvalidJson(_)));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let reply = r##"{"dominant_colors": ["#FFFFFF"], "energy_level": 5, "confidence": 0.9}"##;
        assert!(parse_analysis(reply).is_ok());
    }
}
