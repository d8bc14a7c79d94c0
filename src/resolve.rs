//! Pure field resolution.
//!
//! The three entry points a picker-hosting UI calls per field: effective
//! value, provenance, and (in [`crate::options`]) the merged option list.
//! Every function here is a pure, synchronous computation over a snapshot
//! taken by reference; calling twice with the same inputs returns
//! structurally equal results.
//!
//! Value resolution and source classification are deliberately
//! asymmetric: CRM data is never surfaced as a value, yet it can win
//! provenance for three specific fields. The two functions may disagree
//! on a single snapshot and both answers are correct.

use crate::inference::InferredField;
use crate::provenance::Provenance;
use crate::question::QuestionDef;
use crate::snapshot::{
    StateSnapshot, FIELD_BRAND_COLORS, FIELD_INDUSTRY, FIELD_PROJECT_NAME,
};
use crate::value::FieldValue;

/// The field whose question is skipped once the user has answered it.
///
/// A narrow, single-field carve-out: the primary name is asked up front
/// by the seed form, so the wizard never re-asks it. Other answered
/// questions still render (with the answer preselected).
pub const PRIMARY_NAME_FIELD: &str = FIELD_PROJECT_NAME;

/// Whether the user has explicitly supplied a usable value for a field.
///
/// Stricter than value resolution: an override entry holding `null` or
/// an empty string exists, but does not count as user-provided here.
#[must_use]
pub fn has_user_provided_value(snapshot: &StateSnapshot, field: &str) -> bool {
    snapshot
        .user_override(field)
        .is_some_and(FieldValue::is_provided)
}

/// Resolves the effective value to display for a field.
///
/// First match wins:
///
/// 1. A user override entry, by key existence. An explicit empty string
///    is still the user's entry and is returned as-is.
/// 2. An inference record with a defined value.
/// 3. The `additional_context` slot, when the field is placed there.
/// 4. The top-level record slot, when the field is placed there.
/// 5. `None`.
///
/// Absence is always signaled by `None`, never by panicking.
#[must_use]
pub fn resolve_value(
    snapshot: &StateSnapshot,
    field: &str,
    is_top_level: bool,
    is_additional_context: bool,
) -> Option<FieldValue> {
    if let Some(overridden) = snapshot.user_override(field) {
        return Some(overridden.clone());
    }

    if let Some(record) = snapshot.inferred_record(field) {
        if record.is_defined() {
            return Some(record.value.clone());
        }
    }

    if is_additional_context {
        if let Some(value) = snapshot.context_value(field) {
            return Some(value.clone());
        }
    }

    if is_top_level {
        if let Some(value) = snapshot.top_level(field) {
            return Some(value);
        }
    }

    None
}

/// Resolves the effective value for a question using its placement.
#[must_use]
pub fn resolve_question_value(snapshot: &StateSnapshot, question: &QuestionDef) -> Option<FieldValue> {
    resolve_value(
        snapshot,
        &question.field,
        question.placement.is_top_level(),
        question.placement.is_additional_context(),
    )
}

/// Classifies which upstream system produced a field's effective value.
///
/// First match wins:
///
/// 1. `User`: a non-empty user override exists.
/// 2. `Crm`: the field is one of the three directory-backed fields and
///    the directory record carries a truthy entry for it. CRM presence
///    wins provenance even though value resolution never reads CRM data.
/// 3. `Scraped`: research/scrape evidence exists, or the inference
///    record's own origin tag is scrape-derived.
/// 4. `Inferred`: the fallback, whether or not a defined inference
///    record exists.
#[must_use]
pub fn resolve_source(field: &str, snapshot: &StateSnapshot) -> Provenance {
    if has_user_provided_value(snapshot, field) {
        return Provenance::User;
    }

    if let Some(crm_key) = crm_key_for(field) {
        if snapshot.crm_value(crm_key).is_some_and(FieldValue::is_truthy) {
            return Provenance::Crm;
        }
    }

    let scrape_tagged = snapshot
        .inferred_record(field)
        .is_some_and(|record| record.origin.is_scrape_derived());
    if snapshot.has_scrape_evidence(field) || scrape_tagged {
        return Provenance::Scraped;
    }

    Provenance::Inferred
}

/// The directory's own key for the three CRM-backed fields.
fn crm_key_for(field: &str) -> Option<&'static str> {
    match field {
        FIELD_INDUSTRY => Some("industry"),
        FIELD_BRAND_COLORS => Some("colors"),
        FIELD_PROJECT_NAME => Some("name"),
        _ => None,
    }
}

/// Returns the full inference record for presentation code.
///
/// Only records that actually propose a value are returned; a record
/// whose value is `null` stays invisible, matching value resolution.
#[must_use]
pub fn inferred_with_meta<'a>(
    snapshot: &'a StateSnapshot,
    field: &str,
) -> Option<&'a InferredField> {
    snapshot
        .inferred_record(field)
        .filter(|record| record.is_defined())
}

/// Filters the question list to those the wizard should render.
///
/// Order-preserving. Exactly one question is ever dropped: the primary
/// name question, once the user has supplied a non-empty override for
/// it. Nothing else is filtered, answered or not.
#[must_use]
pub fn active_questions<'a>(
    questions: &'a [QuestionDef],
    snapshot: &StateSnapshot,
) -> Vec<&'a QuestionDef> {
    questions
        .iter()
        .filter(|q| {
            !(q.field == PRIMARY_NAME_FIELD && has_user_provided_value(snapshot, &q.field))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::inference::InferredField;
    use crate::provenance::InferenceOrigin;
    use crate::question::InputKind;

    fn snapshot_with_layers() -> StateSnapshot {
        let mut snapshot = StateSnapshot {
            industry: "stored-industry".to_string(),
            ..StateSnapshot::default()
        };
        snapshot
            .additional_context
            .fields
            .insert("tone".into(), FieldValue::Text("Playful".into()));
        snapshot
    }

    #[test]
    fn test_override_wins_over_everything() {
        let snapshot = snapshot_with_layers()
            .with_override("industry", "user-industry")
            .with_inferred("industry", InferredField::new("ai-industry"));

        let value = resolve_value(&snapshot, "industry", true, false);
        assert_eq!(value, Some(FieldValue::Text("user-industry".into())));
    }

    #[test]
    fn test_empty_override_is_still_returned_by_value_resolution() {
        let snapshot = snapshot_with_layers()
            .with_override("industry", "")
            .with_inferred("industry", InferredField::new("ai-industry"));

        // Existence check, not truthiness: the cleared field is the
        // user's entry.
        let value = resolve_value(&snapshot, "industry", true, false);
        assert_eq!(value, Some(FieldValue::Text(String::new())));

        // ...while source classification refuses to call it user-sourced.
        assert_eq!(resolve_source("industry", &snapshot), Provenance::Inferred);
    }

    #[test]
    fn test_inferred_beats_stored_values() {
        let snapshot =
            snapshot_with_layers().with_inferred("industry", InferredField::new("ai-industry"));
        let value = resolve_value(&snapshot, "industry", true, false);
        assert_eq!(value, Some(FieldValue::Text("ai-industry".into())));
    }

    #[test]
    fn test_undefined_inference_record_is_skipped() {
        let snapshot = snapshot_with_layers().with_inferred("industry", InferredField::default());
        let value = resolve_value(&snapshot, "industry", true, false);
        assert_eq!(value, Some(FieldValue::Text("stored-industry".into())));
    }

    #[test]
    fn test_additional_context_checked_before_top_level() {
        let snapshot = snapshot_with_layers();
        let value = resolve_value(&snapshot, "tone", false, true);
        assert_eq!(value, Some(FieldValue::Text("Playful".into())));
    }

    #[test]
    fn test_placement_flags_gate_fallback_reads() {
        let snapshot = snapshot_with_layers();
        // Correct flag reads the stored value.
        assert!(resolve_value(&snapshot, "industry", true, false).is_some());
        // Caller misuse yields None, same as missing data.
        assert_eq!(resolve_value(&snapshot, "industry", false, false), None);
        assert_eq!(resolve_value(&snapshot, "tone", true, false), None);
        assert_eq!(resolve_value(&snapshot, "unknown", true, true), None);
    }

    #[test]
    fn test_source_user_requires_non_empty_override() {
        let provided = StateSnapshot::default().with_override("industry", "finance");
        assert_eq!(resolve_source("industry", &provided), Provenance::User);

        let cleared = StateSnapshot::default().with_override("industry", "");
        assert_eq!(resolve_source("industry", &cleared), Provenance::Inferred);

        let null = StateSnapshot::default().with_override("industry", FieldValue::Null);
        assert_eq!(resolve_source("industry", &null), Provenance::Inferred);
    }

    #[test]
    fn test_source_crm_applies_to_exactly_three_fields() {
        let snapshot = StateSnapshot::default()
            .with_crm_entry("industry", "Legal Services")
            .with_crm_entry("colors", FieldValue::List(vec!["Navy".into()]))
            .with_crm_entry("name", "Fast Law")
            .with_crm_entry("tone", "Formal");

        assert_eq!(resolve_source("industry", &snapshot), Provenance::Crm);
        assert_eq!(resolve_source("brand_colors", &snapshot), Provenance::Crm);
        assert_eq!(resolve_source("project_name", &snapshot), Provenance::Crm);
        // Other fields never classify as CRM, even with a matching key.
        assert_eq!(resolve_source("tone", &snapshot), Provenance::Inferred);
    }

    #[test]
    fn test_source_crm_requires_truthy_entry() {
        let snapshot = StateSnapshot::default().with_crm_entry("industry", "");
        assert_eq!(resolve_source("industry", &snapshot), Provenance::Inferred);
    }

    #[test]
    fn test_source_crm_wins_even_though_value_resolution_ignores_crm() {
        let snapshot = StateSnapshot::default().with_crm_entry("industry", "Artisan Coffee");
        assert_eq!(resolve_source("industry", &snapshot), Provenance::Crm);
        // The asymmetry: no value surfaces from the CRM record.
        assert_eq!(
            resolve_value(&snapshot, "industry", true, false),
            Some(FieldValue::Text(String::new()))
        );
    }

    #[test]
    fn test_source_scraped_from_evidence_maps() {
        let mut snapshot = StateSnapshot::default();
        snapshot
            .additional_context
            .research_data
            .insert("industry".into(), FieldValue::Text("coffee".into()));
        assert_eq!(resolve_source("industry", &snapshot), Provenance::Scraped);
    }

    #[test]
    fn test_source_scraped_from_inference_origin_tag() {
        for origin in [InferenceOrigin::Scraped, InferenceOrigin::Hybrid] {
            let snapshot = StateSnapshot::default().with_inferred(
                "industry",
                InferredField::new("finance").with_origin(origin),
            );
            assert_eq!(resolve_source("industry", &snapshot), Provenance::Scraped);
        }

        let snapshot = StateSnapshot::default().with_inferred(
            "industry",
            InferredField::new("finance").with_origin(InferenceOrigin::Llm),
        );
        assert_eq!(resolve_source("industry", &snapshot), Provenance::Inferred);
    }

    #[test]
    fn test_source_user_beats_crm_and_scrape() {
        let mut snapshot = StateSnapshot::default()
            .with_override("industry", "finance")
            .with_crm_entry("industry", "Legal Services")
            .with_inferred(
                "industry",
                InferredField::new("law").with_origin(InferenceOrigin::Scraped),
            );
        snapshot
            .additional_context
            .scrape_summary
            .insert("industry".into(), FieldValue::Text("law firm".into()));

        assert_eq!(resolve_source("industry", &snapshot), Provenance::User);
    }

    #[test]
    fn test_inferred_with_meta_requires_defined_value() {
        let defined = StateSnapshot::default().with_inferred(
            "industry",
            InferredField::new("finance")
                .with_confidence(0.8)
                .with_rationale("Seed text mentions banking"),
        );
        let record = inferred_with_meta(&defined, "industry").unwrap();
        assert_eq!(record.confidence(), 0.8);

        let undefined =
            StateSnapshot::default().with_inferred("industry", InferredField::default());
        assert!(inferred_with_meta(&undefined, "industry").is_none());
        assert!(inferred_with_meta(&undefined, "missing").is_none());
    }

    #[test]
    fn test_active_questions_drops_only_answered_primary_name() {
        let questions = vec![
            QuestionDef::new(PRIMARY_NAME_FIELD, "Business Name", InputKind::FreeText),
            QuestionDef::new("industry", "Industry", InputKind::FreeText),
            QuestionDef::new("tone", "Tone of Voice", InputKind::FreeText),
        ];

        let unanswered = StateSnapshot::default();
        let active = active_questions(&questions, &unanswered);
        assert_eq!(active.len(), 3);

        let answered = StateSnapshot::default().with_override(PRIMARY_NAME_FIELD, "Acme");
        let active = active_questions(&questions, &answered);
        let fields: Vec<&str> = active.iter().map(|q| q.field.as_str()).collect();
        assert_eq!(fields, vec!["industry", "tone"]);
    }

    #[test]
    fn test_active_questions_ignores_other_answered_fields() {
        let questions = vec![
            QuestionDef::new(PRIMARY_NAME_FIELD, "Business Name", InputKind::FreeText),
            QuestionDef::new("industry", "Industry", InputKind::FreeText),
        ];
        // Answering a non-primary question never filters it.
        let snapshot = StateSnapshot::default().with_override("industry", "finance");
        assert_eq!(active_questions(&questions, &snapshot).len(), 2);

        // An empty primary-name override does not trigger the skip.
        let cleared = StateSnapshot::default().with_override(PRIMARY_NAME_FIELD, "");
        assert_eq!(active_questions(&questions, &cleared).len(), 2);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let snapshot = snapshot_with_layers()
            .with_inferred("industry", InferredField::new("finance"))
            .with_crm_entry("industry", "Banking");

        let first = resolve_value(&snapshot, "industry", true, false);
        let second = resolve_value(&snapshot, "industry", true, false);
        assert_eq!(first, second);
        assert_eq!(
            resolve_source("industry", &snapshot),
            resolve_source("industry", &snapshot)
        );
    }
}
