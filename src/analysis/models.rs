//! Analysis request/response models

use serde::{Deserialize, Serialize};

/// Inbound analysis request body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    pub text: String,
    /// Whether to consult the generative provider. Defaults to true when
    /// absent from the request body.
    #[serde(default = "default_use_gemini")]
    pub use_gemini: bool,
}

fn default_use_gemini() -> bool {
    true
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            use_gemini: true,
        }
    }

    pub fn without_provider(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            use_gemini: false,
        }
    }
}

/// Validated result extracted from a provider completion.
///
/// `dominant_colors` is always non-empty and `energy_level` always within
/// 1..=10; replies violating either never produce a value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAnalysis {
    pub dominant_colors: Vec<String>,
    pub energy_level: u8,
    pub svg_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationType {
    FastSpin,
    MediumSpin,
    SlowPulse,
}

impl AnimationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationType::FastSpin => "fast-spin",
            AnimationType::MediumSpin => "medium-spin",
            AnimationType::SlowPulse => "slow-pulse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientType {
    Conic,
    Radial,
}

impl GradientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientType::Conic => "conic",
            GradientType::Radial => "radial",
        }
    }
}

/// Mood label attached to a response.
///
/// `Neutral` is reserved for the fallback response; the energy mapping
/// never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Intense,
    Energetic,
    Calm,
    Peaceful,
    Neutral,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Intense => "intense",
            Mood::Energetic => "energetic",
            Mood::Calm => "calm",
            Mood::Peaceful => "peaceful",
            Mood::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final response body for `/api/analyze`.
///
/// Optional fields serialize as explicit `null` so logged responses keep
/// a stable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationParams {
    pub colors: Vec<String>,
    pub animation_type: AnimationType,
    /// CSS duration, e.g. "3s".
    pub speed: String,
    pub gradient_type: GradientType,
    pub mood: Option<Mood>,
    pub energy_level: Option<u8>,
    pub svg_path: Option<String>,
}

impl AnimationParams {
    /// The fixed response substituted whenever the provider is skipped or
    /// fails. Distinguishable from any mapped response by its neutral mood.
    pub fn fallback() -> Self {
        Self {
            colors: vec![
                "#4A90E2".to_string(),
                "#6BB6FF".to_string(),
                "#A8E6CF".to_string(),
            ],
            animation_type: AnimationType::MediumSpin,
            speed: "8s".to_string(),
            gradient_type: GradientType::Radial,
            mood: Some(Mood::Neutral),
            energy_level: Some(5),
            svg_path: None,
        }
    }

    /// Render the palette as a CSS gradient string.
    pub fn css_gradient(&self) -> String {
        let color_string = self.colors.join(", ");
        match self.gradient_type {
            GradientType::Conic => format!("conic-gradient(from 0deg, {})", color_string),
            GradientType::Radial => format!("radial-gradient(circle at center, {})", color_string),
        }
    }
}
