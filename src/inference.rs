//! Inference records.
//!
//! The upstream enrichment pipeline proposes values for intake fields
//! before the user has answered anything. Each proposal carries the value
//! itself plus the metadata the wizard surfaces as confidence badges and
//! "why did we pick this" tooltips.

use serde::{Deserialize, Serialize};

use crate::provenance::InferenceOrigin;
use crate::value::FieldValue;

/// Minimum confidence an inference can carry.
pub const MIN_CONFIDENCE: f32 = 0.0;

/// Maximum confidence an inference can carry.
pub const MAX_CONFIDENCE: f32 = 1.0;

/// A machine-proposed value for a single intake field.
///
/// Produced by the enrichment pipeline and treated as opaque input by the
/// resolution core: value resolution reads only `value`, source
/// classification reads only `origin`, and the remaining metadata exists
/// for presentation code via
/// [`inferred_with_meta`](crate::resolve::inferred_with_meta).
///
/// # Examples
///
/// ```
/// use clarity_intake::{InferenceOrigin, InferredField};
///
/// let rec = InferredField::new("finance")
///     .with_confidence(0.85)
///     .with_origin(InferenceOrigin::Scraped)
///     .with_rationale("Extracted from website hero section");
///
/// assert!(rec.is_defined());
/// assert_eq!(rec.confidence(), 0.85);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InferredField {
    /// The proposed value. `Null` means the pipeline emitted a record
    /// without committing to a value; such records resolve as absent.
    #[serde(default)]
    pub value: FieldValue,

    /// Confidence score in `[0.0, 1.0]`.
    #[serde(default)]
    confidence: f32,

    /// How the proposal was produced.
    #[serde(default, rename = "source")]
    pub origin: InferenceOrigin,

    /// Short human-readable justification for the proposal.
    #[serde(default)]
    pub rationale: String,
}

impl InferredField {
    /// Creates a record for a proposed value with default metadata.
    #[must_use]
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Sets the confidence, clamped into `[0.0, 1.0]`.
    #[must_use]
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
        self
    }

    /// Sets the origin tag.
    #[must_use]
    pub const fn with_origin(mut self, origin: InferenceOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the rationale text.
    #[must_use]
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }

    /// Returns the clamped confidence score.
    ///
    /// Records deserialized from the wire may carry out-of-range scores;
    /// the accessor clamps rather than trusting the producer.
    #[must_use]
    pub fn confidence(&self) -> f32 {
        self.confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }

    /// Whether the record actually proposes a value.
    ///
    /// A record whose value is `Null` exists in the inferred map but does
    /// not participate in resolution.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        !self.value.is_null()
    }
}
