//! Intake completeness audit.
//!
//! After every round of answers and enrichment, the wizard reports what
//! it still needs. A field counts as satisfied by *any* resolvable
//! provided value — a confident inference is as good as an answer, so
//! prefilled fields are never nagged about.

use crate::question::QuestionDef;
use crate::resolve::resolve_question_value;
use crate::snapshot::StateSnapshot;
use crate::value::FieldValue;

/// Outcome of auditing a question list against a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeAudit {
    /// Display labels of required questions with no provided value, in
    /// catalog order.
    pub missing: Vec<String>,
}

impl IntakeAudit {
    /// Whether all essential information is present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Audits which required questions still lack a provided value.
///
/// Optional questions never appear. Values that resolve to `null` or an
/// empty string count as missing; an empty list (an explicit "no pages"
/// choice) does not.
#[must_use]
pub fn audit_intake(questions: &[QuestionDef], snapshot: &StateSnapshot) -> IntakeAudit {
    let missing = questions
        .iter()
        .filter(|q| q.required)
        .filter(|q| {
            !resolve_question_value(snapshot, q)
                .as_ref()
                .is_some_and(FieldValue::is_provided)
        })
        .map(|q| q.label.clone())
        .collect();
    IntakeAudit { missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::inference::InferredField;
    use crate::question::{InputKind, Placement};

    fn questions() -> Vec<QuestionDef> {
        vec![
            QuestionDef::new("project_name", "Business Name", InputKind::FreeText)
                .required()
                .with_placement(Placement::TopLevel),
            QuestionDef::new("industry", "Industry", InputKind::FreeText)
                .required()
                .with_placement(Placement::TopLevel),
            QuestionDef::new("tone", "Tone of Voice", InputKind::FreeText)
                .with_placement(Placement::AdditionalContext),
        ]
    }

    #[test]
    fn test_everything_missing_on_a_fresh_snapshot() {
        let audit = audit_intake(&questions(), &StateSnapshot::default());
        assert_eq!(audit.missing, vec!["Business Name", "Industry"]);
        assert!(!audit.is_complete());
    }

    #[test]
    fn test_optional_questions_are_never_reported() {
        let audit = audit_intake(&questions(), &StateSnapshot::default());
        assert!(!audit.missing.contains(&"Tone of Voice".to_string()));
    }

    #[test]
    fn test_inferred_values_satisfy_the_audit() {
        let snapshot = StateSnapshot::default()
            .with_override("project_name", "Coffee Express")
            .with_inferred("industry", InferredField::new("Artisan Coffee"));
        let audit = audit_intake(&questions(), &snapshot);
        assert!(audit.is_complete());
    }

    #[test]
    fn test_stored_top_level_values_satisfy_the_audit() {
        let snapshot = StateSnapshot {
            project_name: "Fast Law".to_string(),
            industry: "Legal Services".to_string(),
            ..StateSnapshot::default()
        };
        let audit = audit_intake(&questions(), &snapshot);
        assert!(audit.is_complete());
    }

    #[test]
    fn test_cleared_override_counts_as_missing() {
        let snapshot = StateSnapshot {
            industry: "Legal Services".to_string(),
            ..StateSnapshot::default()
        }
        .with_override("project_name", "Fast Law")
        .with_override("industry", "");

        // The cleared override shadows the stored value in resolution,
        // so the field genuinely has nothing to show.
        let audit = audit_intake(&questions(), &snapshot);
        assert_eq!(audit.missing, vec!["Industry"]);
    }
}
