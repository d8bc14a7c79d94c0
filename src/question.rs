//! Static question definitions.
//!
//! A question is immutable metadata about one intake field: how it is
//! rendered, which part of the snapshot it reads and writes, and the
//! static option catalog its picker offers. The core takes these as
//! configuration and never mutates them.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// How a question is rendered and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Free-form text entry.
    FreeText,

    /// Pick exactly one option.
    SingleChoice,

    /// Pick any number of options.
    MultiChoice,

    /// Pick or compose a set of brand colors.
    ColorSet,

    /// Pick a design style from a visual gallery.
    StyleGallery,

    /// Pick a heading/body font pairing.
    FontPairing,

    /// Pick the set of pages the site should have.
    PageSet,
}

impl InputKind {
    /// Whether this kind is driven by a static option catalog.
    #[must_use]
    pub const fn is_choice_backed(&self) -> bool {
        matches!(
            self,
            Self::SingleChoice
                | Self::MultiChoice
                | Self::StyleGallery
                | Self::FontPairing
                | Self::PageSet
        )
    }
}

/// Where a field's persisted value lives in the snapshot.
///
/// This is the same branch the persistence payload builder takes when an
/// edit is saved, so the two must stay in lock-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Stored directly on the project record.
    TopLevel,

    /// Stored under `additional_context`.
    AdditionalContext,

    /// Lives only in `user_overrides`, with no persisted slot.
    #[default]
    OverrideOnly,
}

impl Placement {
    /// Returns true for fields stored on the project record.
    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        matches!(self, Self::TopLevel)
    }

    /// Returns true for fields stored under additional context.
    #[must_use]
    pub const fn is_additional_context(&self) -> bool {
        matches!(self, Self::AdditionalContext)
    }
}

/// One entry in a question's static option catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Stable value persisted when this option is chosen.
    pub value: String,

    /// Display label.
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ChoiceOption {
    /// Creates an option whose label equals its value.
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            description: None,
            icon: None,
        }
    }

    /// Creates an option with a distinct display label.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            icon: None,
        }
    }

    /// Sets the description shown under the label.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the icon identifier.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Immutable metadata for one intake question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDef {
    /// Canonical field name this question resolves.
    pub field: String,

    /// Display name shown in the wizard.
    pub label: String,

    /// Rendering/answer kind.
    pub kind: InputKind,

    /// Static option catalog. Never mutated by the core.
    #[serde(default)]
    pub options: Vec<ChoiceOption>,

    /// Whether the intake audit treats this field as essential.
    #[serde(default)]
    pub required: bool,

    /// Which snapshot slot holds the persisted value.
    #[serde(default)]
    pub placement: Placement,
}

impl QuestionDef {
    /// Creates an override-only, optional question with no options.
    #[must_use]
    pub fn new(field: impl Into<String>, label: impl Into<String>, kind: InputKind) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
            required: false,
            placement: Placement::OverrideOnly,
        }
    }

    /// Sets the option catalog.
    #[must_use]
    pub fn with_options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = options;
        self
    }

    /// Marks the question as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the placement.
    #[must_use]
    pub const fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}

/// An ordered, validated list of question definitions.
///
/// Validation happens once at construction; resolution trusts the
/// catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<QuestionDef>", into = "Vec<QuestionDef>")]
pub struct QuestionCatalog {
    questions: Vec<QuestionDef>,
}

impl QuestionCatalog {
    /// Validates and wraps an ordered question list.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptyFieldName`] if any field name is empty.
    /// - [`CatalogError::DuplicateField`] if two questions share a field.
    /// - [`CatalogError::MissingOptions`] if a choice-backed question has
    ///   an empty catalog.
    /// - [`CatalogError::EmptyOptionValue`] if an option value is empty.
    pub fn new(questions: Vec<QuestionDef>) -> CatalogResult<Self> {
        let mut seen: Vec<&str> = Vec::with_capacity(questions.len());
        for q in &questions {
            if q.field.is_empty() {
                return Err(CatalogError::EmptyFieldName);
            }
            if seen.contains(&q.field.as_str()) {
                return Err(CatalogError::DuplicateField {
                    field: q.field.clone(),
                });
            }
            seen.push(&q.field);

            if q.kind.is_choice_backed() && q.options.is_empty() {
                return Err(CatalogError::MissingOptions {
                    field: q.field.clone(),
                });
            }
            if q.options.iter().any(|opt| opt.value.is_empty()) {
                return Err(CatalogError::EmptyOptionValue {
                    field: q.field.clone(),
                });
            }
        }
        Ok(Self { questions })
    }

    /// The questions in catalog order.
    #[must_use]
    pub fn questions(&self) -> &[QuestionDef] {
        &self.questions
    }

    /// Finds a question by canonical field name.
    #[must_use]
    pub fn by_field(&self, field: &str) -> Option<&QuestionDef> {
        self.questions.iter().find(|q| q.field == field)
    }

    /// Number of questions in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl TryFrom<Vec<QuestionDef>> for QuestionCatalog {
    type Error = CatalogError;

    fn try_from(questions: Vec<QuestionDef>) -> CatalogResult<Self> {
        Self::new(questions)
    }
}

impl From<QuestionCatalog> for Vec<QuestionDef> {
    fn from(catalog: QuestionCatalog) -> Self {
        catalog.questions
    }
}

impl<'a> IntoIterator for &'a QuestionCatalog {
    type Item = &'a QuestionDef;
    type IntoIter = std::slice::Iter<'a, QuestionDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
