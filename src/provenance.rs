//! Provenance tags.
//!
//! Every effective field value is attributed to exactly one upstream
//! system. Knowing where a prefilled value came from drives the badge a
//! picker shows next to it and which edits are allowed to displace it.

use serde::{Deserialize, Serialize};

/// Which upstream system produced a field's currently effective value.
///
/// Classification is total: every field resolves to exactly one of these
/// per snapshot, with [`Provenance::Inferred`] as the fallback when no
/// stronger signal exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// A human explicitly entered the value.
    User,

    /// The value came from a connected business directory record.
    Crm,

    /// The value was lifted from a page scrape or research pass.
    Scraped,

    /// The value was proposed by the upstream inference pipeline.
    Inferred,
}

impl Provenance {
    /// Returns the wire/badge tag for this provenance.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Crm => "crm",
            Self::Scraped => "scraped",
            Self::Inferred => "inferred",
        }
    }

    /// Returns true if a human supplied the value.
    #[must_use]
    pub const fn is_user(&self) -> bool {
        matches!(self, Self::User)
    }

    /// Returns true if an automated system supplied the value.
    #[must_use]
    pub const fn is_automated(&self) -> bool {
        matches!(self, Self::Crm | Self::Scraped | Self::Inferred)
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Origin tag carried on an inference record itself.
///
/// The inference pipeline annotates each proposal with how it was
/// produced; `Scraped` and `Hybrid` reclassify the field's provenance
/// from `inferred` to `scraped` even though the value still lives in the
/// inferred map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum InferenceOrigin {
    /// Produced by the language model alone.
    Llm,

    /// Extracted from scraped page content.
    Scraped,

    /// Combined scrape evidence and model judgment.
    Hybrid,

    /// A static default the pipeline fell back to.
    Default,

    /// Unrecognized or absent origin tag.
    #[default]
    Unknown,
}

impl From<String> for InferenceOrigin {
    fn from(s: String) -> Self {
        match s.as_str() {
            "llm" => Self::Llm,
            "scraped" => Self::Scraped,
            "hybrid" => Self::Hybrid,
            "default" => Self::Default,
            _ => Self::Unknown,
        }
    }
}

impl InferenceOrigin {
    /// Returns true if this origin reclassifies the field as scraped.
    #[must_use]
    pub const fn is_scrape_derived(&self) -> bool {
        matches!(self, Self::Scraped | Self::Hybrid)
    }
}

impl std::fmt::Display for InferenceOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Llm => write!(f, "llm"),
            Self::Scraped => write!(f, "scraped"),
            Self::Hybrid => write!(f, "hybrid"),
            Self::Default => write!(f, "default"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
