//! Prompt construction for brand identity generation

use brandcraft_core::types::{BrandBrief, KEYWORD_COUNT, PALETTE_SIZE};

/// Build the generation prompt for a brief.
///
/// The idea, industry and vibe label are embedded verbatim, followed by the
/// JSON structure the service must return.
pub fn build_prompt(brief: &BrandBrief) -> String {
    format!(
        "Create a high-impact brand identity for a startup or business with these details:\n\
         Core Idea: {idea}\n\
         Industry: {industry}\n\
         Tone/Vibe: {vibe}\n\
         \n\
         You must return valid JSON in this exact structure:\n\
         {{\n\
         \x20 \"name\": \"One strong brand name\",\n\
         \x20 \"tagline\": \"A short, punchy catchphrase\",\n\
         \x20 \"colors\": [{{\"hex\": \"#HEXCODE\", \"name\": \"Color Name\"}}],\n\
         \x20 \"description\": \"2-sentence mission statement\",\n\
         \x20 \"voice\": \"Description of the brand's tone of voice\",\n\
         \x20 \"keywords\": [\"5\", \"distinct\", \"brand\", \"attribute\", \"keywords\"]\n\
         }}\n\
         Provide exactly {colors} colors and exactly {keywords} keywords.",
        idea = brief.idea,
        industry = brief.industry,
        vibe = brief.vibe.label(),
        colors = PALETTE_SIZE,
        keywords = KEYWORD_COUNT,
    )
}
