//! Energy-to-animation parameter mapping.

use super::models::{AnimationParams, AnimationType, GradientType, Mood, TextAnalysis};

/// Discrete motion parameters derived from an energy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionParams {
    pub animation_type: AnimationType,
    pub speed: &'static str,
    pub gradient_type: GradientType,
    pub mood: Mood,
}

/// Map an energy level (1-10) to discrete motion parameters.
///
/// Pure and total over the valid range; the parser guarantees no other
/// value reaches this function.
pub fn map_energy_to_parameters(energy_level: u8) -> MotionParams {
    let (animation_type, speed) = if energy_level > 8 {
        (AnimationType::FastSpin, "3s")
    } else if energy_level > 6 {
        (AnimationType::MediumSpin, "6s")
    } else if energy_level > 3 {
        (AnimationType::SlowPulse, "10s")
    } else {
        (AnimationType::SlowPulse, "15s")
    };

    // The gradient cutoff is 7, deliberately offset from the animation
    // cutoffs: energy 8 spins at medium speed but already renders conic.
    let gradient_type = if energy_level > 7 {
        GradientType::Conic
    } else {
        GradientType::Radial
    };

    let mood = if energy_level > 8 {
        Mood::Intense
    } else if energy_level > 6 {
        Mood::Energetic
    } else if energy_level > 3 {
        Mood::Calm
    } else {
        Mood::Peaceful
    };

    MotionParams {
        animation_type,
        speed,
        gradient_type,
        mood,
    }
}

/// Assemble the full response for a validated analysis: motion parameters
/// from the energy level, colors and shape path carried over verbatim.
pub fn parameters_for_analysis(analysis: &TextAnalysis) -> AnimationParams {
    let motion = map_energy_to_parameters(analysis.energy_level);
    AnimationParams {
        colors: analysis.dominant_colors.clone(),
        animation_type: motion.animation_type,
        speed: motion.speed.to_string(),
        gradient_type: motion.gradient_type,
        mood: Some(motion.mood),
        energy_level: Some(analysis.energy_level),
        svg_path: analysis.svg_path.clone(),
    }
}
