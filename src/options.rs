//! Priority option merging.
//!
//! Choice pickers show a static catalog, but the user's own words and the
//! inference pipeline's proposal deserve a slot even when they match no
//! catalog entry. Merging synthesizes those entries ahead of the catalog
//! and annotates them so the picker can render "From your description" /
//! "Recommended" badges — without ever mutating the static catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::question::ChoiceOption;
use crate::value::FieldValue;

/// Description attached to a synthesized user entry.
pub const USER_OPTION_DESCRIPTION: &str = "Your selection";

/// Description attached to a synthesized inference entry.
pub const INFERRED_OPTION_DESCRIPTION: &str = "AI recommendation";

/// Badge label for the user's own value.
pub const USER_BADGE_LABEL: &str = "From your description";

/// Badge label for the inference pipeline's proposal.
pub const INFERRED_BADGE_LABEL: &str = "Recommended";

/// A set of option values keyed case-insensitively.
///
/// Candidate-vs-catalog comparisons must not produce two options that
/// differ only by case, so membership is tracked under a normalized key
/// in one place rather than scattered lowercase calls.
#[derive(Debug, Clone, Default)]
pub struct NormalizedSet {
    inner: HashSet<String>,
}

impl NormalizedSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set seeded with the given values.
    #[must_use]
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for value in values {
            set.insert(value);
        }
        set
    }

    /// Inserts a value; returns false if it was already present under
    /// any casing.
    pub fn insert(&mut self, value: &str) -> bool {
        self.inner.insert(value.to_lowercase())
    }

    /// Whether the value is present under any casing.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.inner.contains(&value.to_lowercase())
    }

    /// Number of distinct normalized values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Which candidate a priority badge marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    User,
    Inferred,
}

/// Display badge for a user- or AI-supplied candidate value.
///
/// The badge targets a value, not an index: when the candidate already
/// exists in the catalog no entry is synthesized, and the badge attaches
/// to the existing catalog option instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBadge {
    /// The candidate value the badge marks.
    pub value: String,

    /// Whether the candidate came from the user or the pipeline.
    #[serde(rename = "type")]
    pub kind: BadgeKind,

    /// Badge text.
    pub label: String,
}

/// Result of merging candidates into a static option catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityOptions {
    /// `[synthesized user?][synthesized inferred?][...defaults]`, with
    /// the defaults never reordered relative to each other.
    pub options: Vec<ChoiceOption>,

    /// Badge metadata for candidate values, synthesized or not.
    pub badges: Vec<PriorityBadge>,

    /// The value the picker should preselect.
    pub selected: Option<String>,
}

/// Merges user and inferred candidates into a fresh option list.
///
/// - A candidate absent from the catalog (case-insensitively) gets a
///   synthesized entry prepended ahead of the defaults; a candidate
///   already present gets only its badge.
/// - An inferred candidate equal to the user's is folded into the user
///   entry entirely.
/// - `selected` falls back user → inferred → `current_value`, the last
///   only when it is actually a string; non-string current values are
///   silently excluded rather than coerced.
///
/// Empty-string candidates are treated as absent.
#[must_use]
pub fn build_priority_options(
    default_options: &[ChoiceOption],
    user_value: Option<&str>,
    inferred_value: Option<&str>,
    current_value: Option<&FieldValue>,
) -> PriorityOptions {
    let user = user_value.filter(|v| !v.is_empty());
    let inferred = inferred_value.filter(|v| !v.is_empty());

    let mut seen = NormalizedSet::from_values(default_options.iter().map(|o| o.value.as_str()));
    let mut synthesized: Vec<ChoiceOption> = Vec::new();
    let mut badges: Vec<PriorityBadge> = Vec::new();

    if let Some(value) = user {
        if seen.insert(value) {
            synthesized.push(
                ChoiceOption::plain(value).with_description(USER_OPTION_DESCRIPTION),
            );
        }
        badges.push(PriorityBadge {
            value: value.to_string(),
            kind: BadgeKind::User,
            label: USER_BADGE_LABEL.to_string(),
        });
    }

    if let Some(value) = inferred {
        if user != Some(value) {
            if seen.insert(value) {
                synthesized.push(
                    ChoiceOption::plain(value).with_description(INFERRED_OPTION_DESCRIPTION),
                );
            }
            badges.push(PriorityBadge {
                value: value.to_string(),
                kind: BadgeKind::Inferred,
                label: INFERRED_BADGE_LABEL.to_string(),
            });
        }
    }

    let mut options = synthesized;
    options.extend(default_options.iter().cloned());

    let selected = user
        .map(ToString::to_string)
        .or_else(|| inferred.map(ToString::to_string))
        .or_else(|| {
            current_value
                .and_then(FieldValue::as_text)
                .map(ToString::to_string)
        });

    PriorityOptions {
        options,
        badges,
        selected,
    }
}
