//! Entity categories and raw detections.

use serde::{Deserialize, Serialize};

/// Entity category classification.
///
/// The four CoNLL categories plus an open `Other` variant for tags the
/// upstream model emits that we do not know about. Unknown tags are carried
/// through verbatim, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    /// Person name (PER)
    Person,
    /// Organization name (ORG)
    Organization,
    /// Location/Place (LOC)
    Location,
    /// Miscellaneous entity (MISC)
    Misc,
    /// Any other category tag, kept as reported
    Other(String),
}

impl EntityCategory {
    /// Convert to standard tag string (CoNLL format).
    #[must_use]
    pub fn as_tag(&self) -> &str {
        match self {
            EntityCategory::Person => "PER",
            EntityCategory::Organization => "ORG",
            EntityCategory::Location => "LOC",
            EntityCategory::Misc => "MISC",
            EntityCategory::Other(s) => s.as_str(),
        }
    }

    /// Parse from a tag string.
    ///
    /// Case-insensitive, and tolerant of BIO prefixes (`B-PER`, `I-ORG`)
    /// since some models leak them through aggregation.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "PER" | "PERSON" | "B-PER" | "I-PER" => EntityCategory::Person,
            "ORG" | "ORGANIZATION" | "B-ORG" | "I-ORG" => EntityCategory::Organization,
            "LOC" | "LOCATION" | "GPE" | "B-LOC" | "I-LOC" => EntityCategory::Location,
            "MISC" | "B-MISC" | "I-MISC" => EntityCategory::Misc,
            other => EntityCategory::Other(other.to_string()),
        }
    }

    /// Display label for the grouped entity listing.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            EntityCategory::Person => "👤 Persons".to_string(),
            EntityCategory::Organization => "🏢 Organizations".to_string(),
            EntityCategory::Location => "📍 Locations".to_string(),
            EntityCategory::Misc => "📌 Miscellaneous".to_string(),
            EntityCategory::Other(tag) => format!("📋 {tag}"),
        }
    }

    /// Background color used when highlighting this category inline.
    ///
    /// The four known categories have fixed colors; everything else shares
    /// one default.
    #[must_use]
    pub fn highlight_color(&self) -> &'static str {
        match self {
            EntityCategory::Person => "#B2C0B2",
            EntityCategory::Organization => "#CDB5B5",
            EntityCategory::Location => "#88896F",
            EntityCategory::Misc => "#9E98A9",
            EntityCategory::Other(_) => "#FFEAA7",
        }
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// One raw finding from an extractor backend.
///
/// Immutable; built fresh per `recognize` call and discarded after
/// formatting. The surface text may still carry WordPiece continuation
/// markers (see [`clean_surface`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Category tag for the span
    pub category: EntityCategory,
    /// Surface text as detected
    pub text: String,
}

impl RawDetection {
    /// Create a new detection.
    #[must_use]
    pub fn new(category: EntityCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

/// Remove WordPiece continuation markers from an aggregated surface.
///
/// Aggregated surfaces keep a space before each continuation fragment, so
/// `"Univer ##sity"` merges to `"University"`. Any stray bare `##` is also
/// dropped. Cleaning an already-clean surface returns it unchanged.
#[must_use]
pub fn clean_surface(surface: &str) -> String {
    surface.replace(" ##", "").replace("##", "")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cleaning_is_idempotent(s in ".*") {
            let once = clean_surface(&s);
            let twice = clean_surface(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn cleaned_surface_has_no_marker(s in ".*") {
            prop_assert!(!clean_surface(&s).contains("##"));
        }

        #[test]
        fn tag_roundtrip_stable(tag in "[A-Z]{3,10}") {
            let c = EntityCategory::from_tag(&tag);
            let back = EntityCategory::from_tag(c.as_tag());
            prop_assert_eq!(back, c);
        }
    }
}
