//! The immutable state snapshot.
//!
//! Every resolution call takes the project state as a plain value: the
//! last persisted top-level fields, the auxiliary context map, the CRM
//! record, and the project metadata holding user overrides and machine
//! inferences. The resolution core never writes to a snapshot; callers
//! fetch a fresh one per render cycle and pass it in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::inference::InferredField;
use crate::mapping::FieldMapping;
use crate::value::FieldValue;

/// Canonical field name of the project/business name.
pub const FIELD_PROJECT_NAME: &str = "project_name";

/// Canonical field name of the industry classification.
pub const FIELD_INDUSTRY: &str = "industry";

/// Canonical field name of the design style selection.
pub const FIELD_DESIGN_STYLE: &str = "design_style";

/// Canonical field name of the brand color set.
pub const FIELD_BRAND_COLORS: &str = "brand_colors";

/// Project metadata: the layered value sources the resolver arbitrates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectMeta {
    /// Values a human explicitly entered, keyed by field name.
    /// Highest resolution priority. An entry may hold an empty string:
    /// the user answered, then cleared the field.
    #[serde(default)]
    pub user_overrides: BTreeMap<String, FieldValue>,

    /// Machine-proposed values from the enrichment pipeline.
    #[serde(default)]
    pub inferred: BTreeMap<String, InferredField>,

    /// Mappings from raw inferred values to the closest catalog option.
    #[serde(default)]
    pub field_mappings: BTreeMap<String, FieldMapping>,
}

/// Auxiliary context: fields not modeled as top-level, plus the nested
/// evidence maps used only for provenance classification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdditionalContext {
    /// Research evidence keyed by field name.
    #[serde(default)]
    pub research_data: BTreeMap<String, FieldValue>,

    /// Page-scrape evidence keyed by field name.
    #[serde(default)]
    pub scrape_summary: BTreeMap<String, FieldValue>,

    /// Everything else stored under additional context (selected pages,
    /// tone, font pairing, ...).
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

/// Read-only input to every resolution call.
///
/// Top-level fields mirror the persisted project record and default to
/// empty, so a freshly created project deserializes from `{}`.
///
/// # Examples
///
/// ```
/// use clarity_intake::{FieldValue, StateSnapshot};
///
/// let snapshot = StateSnapshot::default()
///     .with_override("industry", "finance")
///     .with_context_field("tone", "Friendly");
///
/// assert!(snapshot.has_override_key("industry"));
/// assert_eq!(
///     snapshot.context_value("tone"),
///     Some(&FieldValue::Text("Friendly".into()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// The business/project name as last persisted.
    #[serde(default)]
    pub project_name: String,

    /// The industry classification as last persisted.
    #[serde(default)]
    pub industry: String,

    /// The design style as last persisted.
    #[serde(default)]
    pub design_style: String,

    /// The brand color set as last persisted.
    #[serde(default)]
    pub brand_colors: Vec<String>,

    /// Auxiliary fields and provenance evidence.
    #[serde(default)]
    pub additional_context: AdditionalContext,

    /// Record from a connected business directory. Keys follow the
    /// directory's own vocabulary (`name`, `industry`, `colors`, `bio`),
    /// not the canonical field names.
    #[serde(default)]
    pub crm_data: BTreeMap<String, FieldValue>,

    /// Layered value sources.
    #[serde(default)]
    pub project_meta: ProjectMeta,
}

impl StateSnapshot {
    /// Looks up a user override by key existence.
    ///
    /// Returns the stored value as-is, including an explicit empty
    /// string.
    #[must_use]
    pub fn user_override(&self, field: &str) -> Option<&FieldValue> {
        self.project_meta.user_overrides.get(field)
    }

    /// Whether an override entry exists at all, provided or not.
    #[must_use]
    pub fn has_override_key(&self, field: &str) -> bool {
        self.project_meta.user_overrides.contains_key(field)
    }

    /// Looks up the inference record for a field, defined or not.
    #[must_use]
    pub fn inferred_record(&self, field: &str) -> Option<&InferredField> {
        self.project_meta.inferred.get(field)
    }

    /// Looks up an auxiliary context field (not the evidence maps).
    #[must_use]
    pub fn context_value(&self, field: &str) -> Option<&FieldValue> {
        self.additional_context.fields.get(field)
    }

    /// Looks up a CRM record entry by the directory's own key.
    #[must_use]
    pub fn crm_value(&self, key: &str) -> Option<&FieldValue> {
        self.crm_data.get(key)
    }

    /// Reads a top-level persisted field by canonical name.
    ///
    /// Known fields always exist on the record (they default to empty),
    /// so this returns the stored value as-is; only an unknown name
    /// yields `None`.
    #[must_use]
    pub fn top_level(&self, field: &str) -> Option<FieldValue> {
        match field {
            FIELD_PROJECT_NAME => Some(FieldValue::Text(self.project_name.clone())),
            FIELD_INDUSTRY => Some(FieldValue::Text(self.industry.clone())),
            FIELD_DESIGN_STYLE => Some(FieldValue::Text(self.design_style.clone())),
            FIELD_BRAND_COLORS => Some(FieldValue::List(self.brand_colors.clone())),
            _ => None,
        }
    }

    /// Whether research or scrape evidence exists for a field.
    #[must_use]
    pub fn has_scrape_evidence(&self, field: &str) -> bool {
        self.additional_context
            .research_data
            .get(field)
            .is_some_and(FieldValue::is_truthy)
            || self
                .additional_context
                .scrape_summary
                .get(field)
                .is_some_and(FieldValue::is_truthy)
    }

    /// Adds a user override (test and fixture convenience).
    #[must_use]
    pub fn with_override(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.project_meta
            .user_overrides
            .insert(field.into(), value.into());
        self
    }

    /// Adds an inference record (test and fixture convenience).
    #[must_use]
    pub fn with_inferred(mut self, field: impl Into<String>, record: InferredField) -> Self {
        self.project_meta.inferred.insert(field.into(), record);
        self
    }

    /// Adds an auxiliary context field (test and fixture convenience).
    #[must_use]
    pub fn with_context_field(
        mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Self {
        self.additional_context
            .fields
            .insert(field.into(), value.into());
        self
    }

    /// Adds a CRM entry under the directory's key (test convenience).
    #[must_use]
    pub fn with_crm_entry(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.crm_data.insert(key.into(), value.into());
        self
    }
}
