//! # clarity-intake — field-value precedence resolution
//!
//! The decision core of the Clarity guided intake wizard. The wizard
//! prefills business facts (name, industry, style, colors, tone, fonts,
//! pages) from an AI enrichment pass, a CRM lookup, or a page scrape,
//! and lets the user review, accept, or override each one. This crate
//! owns the one part of that flow with real logic: deciding, per field,
//! which candidate value wins, which upstream source gets credit, and
//! how user/AI candidates merge into a picker's static option catalog.
//!
//! ## Core Concepts
//!
//! - **Snapshot**: the immutable project state a caller fetches per
//!   render cycle and passes by reference into every call
//! - **Override**: a value the user explicitly entered; highest priority
//! - **Inference**: a machine-proposed value with confidence, origin,
//!   and rationale metadata
//! - **Provenance**: which upstream system produced the effective value
//!   (`user`, `crm`, `scraped`, `inferred`)
//!
//! ## Usage
//!
//! ```rust
//! use clarity_intake::{
//!     build_priority_options, resolve_source, resolve_value, InferredField, Provenance,
//!     StateSnapshot,
//! };
//!
//! let snapshot = StateSnapshot::default()
//!     .with_inferred("industry", InferredField::new("finance").with_confidence(0.85));
//!
//! let value = resolve_value(&snapshot, "industry", true, false);
//! assert_eq!(value.unwrap().as_text(), Some("finance"));
//! assert_eq!(resolve_source("industry", &snapshot), Provenance::Inferred);
//!
//! let merged = build_priority_options(&[], None, Some("finance"), None);
//! assert_eq!(merged.selected.as_deref(), Some("finance"));
//! ```
//!
//! All entry points are pure and synchronous; there is no I/O, no shared
//! state, and no caching. Absent data degrades to `None` or a fallback
//! tag, never to a panic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core types
pub mod error;
pub mod inference;
pub mod mapping;
pub mod provenance;
pub mod question;
pub mod snapshot;
pub mod value;

// Operations
pub mod audit;
pub mod catalog;
pub mod options;
pub mod resolve;
pub mod update;

// Re-export primary types at crate root for convenience
pub use audit::{audit_intake, IntakeAudit};
pub use catalog::default_questions;
pub use error::{CatalogError, CatalogResult};
pub use inference::{InferredField, MAX_CONFIDENCE, MIN_CONFIDENCE};
pub use mapping::{canonical_field, FieldMapping, MIN_MAPPING_CONFIDENCE};
pub use options::{
    build_priority_options, BadgeKind, NormalizedSet, PriorityBadge, PriorityOptions,
    INFERRED_BADGE_LABEL, INFERRED_OPTION_DESCRIPTION, USER_BADGE_LABEL, USER_OPTION_DESCRIPTION,
};
pub use provenance::{InferenceOrigin, Provenance};
pub use question::{ChoiceOption, InputKind, Placement, QuestionCatalog, QuestionDef};
pub use resolve::{
    active_questions, has_user_provided_value, inferred_with_meta, resolve_question_value,
    resolve_source, resolve_value, PRIMARY_NAME_FIELD,
};
pub use snapshot::{
    AdditionalContext, ProjectMeta, StateSnapshot, FIELD_BRAND_COLORS, FIELD_DESIGN_STYLE,
    FIELD_INDUSTRY, FIELD_PROJECT_NAME,
};
pub use update::{apply_user_edit, merge_inferred};
pub use value::FieldValue;
