//! Field aliasing and catalog mapping records.
//!
//! Two small interop concerns live here: canonicalizing the short field
//! names the chat/router layer emits (`name`, `colors`, `style`) to the
//! persisted field names, and the mapping records the enrichment pipeline
//! produces when it tries to snap a raw inferred value onto one of the
//! static catalog options.

use serde::{Deserialize, Serialize};

use crate::snapshot::{FIELD_BRAND_COLORS, FIELD_DESIGN_STYLE, FIELD_PROJECT_NAME};

/// Confidence below which a catalog mapping is not trusted.
pub const MIN_MAPPING_CONFIDENCE: f32 = 0.7;

/// Short-name aliases accepted for persisted fields.
const FIELD_ALIASES: [(&str, &str); 3] = [
    ("name", FIELD_PROJECT_NAME),
    ("colors", FIELD_BRAND_COLORS),
    ("style", FIELD_DESIGN_STYLE),
];

/// Canonicalizes a field name, resolving known short aliases.
///
/// Matching is case-insensitive; unknown names pass through unchanged.
///
/// # Examples
///
/// ```
/// use clarity_intake::canonical_field;
///
/// assert_eq!(canonical_field("Name"), "project_name");
/// assert_eq!(canonical_field("colors"), "brand_colors");
/// assert_eq!(canonical_field("industry"), "industry");
/// ```
#[must_use]
pub fn canonical_field(field: &str) -> &str {
    let lowered = field.to_ascii_lowercase();
    for (alias, canonical) in FIELD_ALIASES {
        if lowered == alias {
            return canonical;
        }
    }
    field
}

/// Result of snapping a raw value onto the closest catalog option.
///
/// Produced upstream; the core only applies the acceptance threshold.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldMapping {
    /// The raw value the mapper started from.
    #[serde(default)]
    pub original_value: String,

    /// The catalog option it landed on, if any.
    #[serde(default)]
    pub mapped_value: Option<String>,

    /// Mapper confidence in `[0.0, 1.0]`.
    #[serde(default)]
    pub confidence: f32,

    /// Short justification for the mapping.
    #[serde(default)]
    pub rationale: String,
}

impl FieldMapping {
    /// Returns the mapped option value only when the mapper was
    /// confident enough; otherwise the raw value stands.
    #[must_use]
    pub fn effective(&self) -> Option<&str> {
        if self.confidence >= MIN_MAPPING_CONFIDENCE {
            self.mapped_value.as_deref()
        } else {
            None
        }
    }
}
