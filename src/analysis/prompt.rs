//! Prompt construction for the text analysis request.

/// Build the analysis prompt for a piece of user text.
///
/// The text is embedded verbatim. The template pins down the reply shape
/// (a bare JSON object) and anchors the `svg_path` format with worked
/// examples, since the model otherwise drifts into prose or markdown.
pub fn analysis_prompt(text: &str) -> String {
    format!(
        r##"Analyze this text for a particle effect: "{text}"

Return JSON with these fields:
{{
    "dominant_colors": ["#color1", "#color2", "#color3"],
    "energy_level": 5,
    "svg_path": "M 50 10 L 90 50 L 50 90 L 10 50 Z"
}}

Rules:
- dominant_colors: 3-4 hex colors representing the text's visual essence
- energy_level: 1-10 (1=calm, 10=intense)
- svg_path: A simple SVG path string representing the shape/object in the text. Use coordinates 0-100. For "cube" make a square, for "circle" make a circle, for "wave" make a wavy line, etc. Keep it simple and accurate. If no clear shape, use null.

Examples:
- Square: "M 20 20 L 80 20 L 80 80 L 20 80 Z"
- Circle: "M 50 10 A 40 40 0 1 1 49 10 Z"
- Triangle: "M 50 10 L 90 80 L 10 80 Z"
- Wave: "M 10 50 Q 30 20 50 50 T 90 50"

Return only valid JSON, no markdown or extra text."##
    )
}
