//! Response schema sent with every generation request
//!
//! Uses the OpenAPI subset accepted by `generationConfig.responseSchema`
//! (upper-case type names).

use brandcraft_core::types::PALETTE_SIZE;
use serde_json::{json, Value};

/// Fields every identity object must carry
pub const REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "tagline",
    "colors",
    "description",
    "voice",
    "keywords",
];

/// Build the strict response schema for a brand identity.
///
/// `colors` must contain exactly four `{hex, name}` objects. The keyword
/// count is left to the prompt.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "tagline": { "type": "STRING" },
            "colors": {
                "type": "ARRAY",
                "minItems": PALETTE_SIZE,
                "maxItems": PALETTE_SIZE,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "hex": { "type": "STRING" },
                        "name": { "type": "STRING" }
                    },
                    "required": ["hex", "name"]
                }
            },
            "description": { "type": "STRING" },
            "voice": { "type": "STRING" },
            "keywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": REQUIRED_FIELDS,
    })
}
