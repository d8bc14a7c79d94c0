//! Snapshot updates with source tracking.
//!
//! The resolvers never write to a snapshot, but the surrounding product
//! does: a user saves an answer, or the enrichment pipeline lands a batch
//! of proposals. These operations mirror the persistence payload shape
//! exactly — a user edit writes the override map *and* the persisted slot
//! selected by the question's placement — so the resolver and the
//! payload builder stay in lock-step.

use tracing::debug;

use crate::inference::InferredField;
use crate::mapping::canonical_field;
use crate::question::{Placement, QuestionDef};
use crate::snapshot::{
    StateSnapshot, FIELD_BRAND_COLORS, FIELD_DESIGN_STYLE, FIELD_INDUSTRY, FIELD_PROJECT_NAME,
};
use crate::value::FieldValue;

/// Records a user's answer for a question.
///
/// The value always lands in `user_overrides` (explicit human intent,
/// highest priority — including an explicit empty string when the user
/// clears a field). Fields with a persisted slot also get the value
/// written through, matching what the persistence client saves.
pub fn apply_user_edit(snapshot: &mut StateSnapshot, question: &QuestionDef, value: FieldValue) {
    let field = canonical_field(&question.field).to_string();

    match question.placement {
        Placement::TopLevel => write_top_level(snapshot, &field, &value),
        Placement::AdditionalContext => {
            snapshot
                .additional_context
                .fields
                .insert(field.clone(), value.clone());
        }
        Placement::OverrideOnly => {}
    }

    debug!(field = %field, value = %value, "user edit applied");
    snapshot.project_meta.user_overrides.insert(field, value);
}

/// Lands one enrichment proposal in the snapshot.
///
/// The record is always stored in the inferred map so presentation code
/// can show confidence and rationale. The active (persisted) field is
/// updated only when the user has not overridden it; a user answer is
/// never displaced by the pipeline.
pub fn merge_inferred(snapshot: &mut StateSnapshot, field: &str, record: InferredField) {
    let field = canonical_field(field).to_string();
    let value = record.value.clone();
    snapshot.project_meta.inferred.insert(field.clone(), record);

    if snapshot.has_override_key(&field) {
        debug!(field = %field, "field is user-overridden, skipping active update");
        return;
    }
    if !value.is_truthy() {
        return;
    }

    // The project name is never set from inference; it comes from the
    // seed form or a CRM match.
    match field.as_str() {
        FIELD_INDUSTRY | FIELD_DESIGN_STYLE | FIELD_BRAND_COLORS => {
            write_top_level(snapshot, &field, &value);
        }
        // Auxiliary fields the pipeline proposes land in additional
        // context rather than on the project record.
        "draft_pages" | "tone" => {
            snapshot.additional_context.fields.insert(field.clone(), value);
        }
        _ => {}
    }
    debug!(field = %field, "inferred value merged");
}

/// Writes a value into a top-level persisted slot.
///
/// String slots take text (or clear on `null`); the color slot accepts a
/// list, a single color as text, or a comma-separated string. Values of
/// the wrong shape are dropped rather than coerced further.
fn write_top_level(snapshot: &mut StateSnapshot, field: &str, value: &FieldValue) {
    match field {
        FIELD_PROJECT_NAME | FIELD_INDUSTRY | FIELD_DESIGN_STYLE => {
            let slot = match field {
                FIELD_PROJECT_NAME => &mut snapshot.project_name,
                FIELD_INDUSTRY => &mut snapshot.industry,
                _ => &mut snapshot.design_style,
            };
            match value {
                FieldValue::Text(text) => *slot = text.clone(),
                FieldValue::Null => slot.clear(),
                _ => {}
            }
        }
        FIELD_BRAND_COLORS => match value {
            FieldValue::List(colors) => snapshot.brand_colors = colors.clone(),
            FieldValue::Text(text) if !text.is_empty() => {
                snapshot.brand_colors = split_colors(text);
            }
            FieldValue::Null => snapshot.brand_colors.clear(),
            _ => {}
        },
        _ => {}
    }
}

/// Splits a color string: `"Brown, Cream"` becomes two entries, a plain
/// `"Brown"` becomes one.
fn split_colors(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ToString::to_string)
        .collect()
}
