//! # entmark
//!
//! Named-entity extraction with grouped listings and inline HTML
//! highlighting.
//!
//! Feed text in, get HTML markup out: a deduplicated, type-grouped entity
//! listing followed by the original text with every whole-word entity
//! occurrence wrapped in a colored span. The extraction model sits behind
//! the [`Extractor`] trait so the formatting pipeline is testable with
//! fixture backends and indifferent to where detections come from.
//!
//! ## Quick Start
//!
//! ```rust
//! use entmark::{auto, Formatter};
//!
//! let formatter = Formatter::new(auto());
//! let html = formatter.process("Kunming is the capital of Yunnan");
//! assert!(html.contains("Named Entities Found"));
//! ```
//!
//! ## Design
//!
//! - **Black-box model**: backends implement [`Extractor::recognize`],
//!   returning category-tagged surface spans with sub-token aggregation
//!   already done. The only residual cleanup here is WordPiece
//!   continuation-marker removal.
//! - **Never faults outward**: [`Formatter::process`] returns a string for
//!   every input. Blank input, zero detections and backend failures all
//!   render as messages, so a UI can display the result unconditionally.
//! - **Trait-based**: backends are sealed, mirroring a stable tested set;
//!   use [`MockExtractor`] for deterministic tests.

#![warn(missing_docs)]

pub mod catalog;
pub mod detection;
mod error;
pub mod extractors;
pub mod render;

pub mod cli;

pub use catalog::{CatalogGroup, EntityCatalog};
pub use detection::{clean_surface, EntityCategory, RawDetection};
pub use error::{Error, Result};
pub use extractors::HeuristicExtractor;
pub use render::{highlight_entities, Formatter, ERROR_PREFIX, MSG_EMPTY_INPUT, MSG_NO_ENTITIES};

/// Demo prompts carried over from the original interactive gallery.
pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "Yunnan University is the best University in Yunnan Province",
    "Kunming is the capital of Yunnan",
    "Beijing is the capital of China",
    "Mao Zedong was a Chinese politician, who founded the People's Republic of China",
];

// =============================================================================
// Sealed Trait Pattern
// =============================================================================
//
// Extractor is "sealed" - it can only be implemented by types in this
// crate. This keeps the backend set stable and lets the formatter rely on
// backend invariants; tests use MockExtractor instead of hand-rolled
// implementations.

mod sealed {
    /// Sealed trait marker. Cannot be implemented outside this crate.
    pub trait Sealed {}

    impl Sealed for super::HeuristicExtractor {}
    impl Sealed for super::MockExtractor {}
}

/// Trait for entity extraction backends.
///
/// All backends implement this trait for consistent usage. The trait is
/// **sealed**: it can only be implemented by types defined in this crate.
/// For testing, use [`MockExtractor`].
pub trait Extractor: sealed::Sealed + Send + Sync {
    /// Extract raw detections from text, in model output order.
    ///
    /// Sub-token fragments are assumed already aggregated into whole-word
    /// groups; surfaces may still carry `##` continuation markers, which
    /// the formatting layer removes.
    fn recognize(&self, text: &str) -> Result<Vec<RawDetection>>;

    /// Categories this backend can produce.
    fn supported_categories(&self) -> Vec<EntityCategory>;

    /// Check if the backend is available and ready.
    fn is_available(&self) -> bool;

    /// Backend name/identifier.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// Backend description.
    fn description(&self) -> &'static str {
        "Unknown extractor backend"
    }
}

/// A fixture-driven extractor for tests.
///
/// Returns a fixed detection sequence, or a fixed error, regardless of
/// input. Provided so tests can drive the formatter deterministically
/// without breaking the sealed trait pattern.
///
/// # Example
///
/// ```rust
/// use entmark::{EntityCategory, MockExtractor, RawDetection};
///
/// let mock = MockExtractor::new("test-mock").with_detections(vec![
///     RawDetection::new(EntityCategory::Person, "Mao Zedong"),
/// ]);
/// ```
#[derive(Clone)]
pub struct MockExtractor {
    name: &'static str,
    detections: Vec<RawDetection>,
    error: Option<&'static str>,
}

impl MockExtractor {
    /// Create a new mock extractor.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            detections: Vec::new(),
            error: None,
        }
    }

    /// Set detections to return on recognition.
    #[must_use]
    pub fn with_detections(mut self, detections: Vec<RawDetection>) -> Self {
        self.detections = detections;
        self
    }

    /// Make recognition fail with the given message.
    #[must_use]
    pub fn with_error(mut self, message: &'static str) -> Self {
        self.error = Some(message);
        self
    }
}

impl Extractor for MockExtractor {
    fn recognize(&self, _text: &str) -> Result<Vec<RawDetection>> {
        match self.error {
            Some(message) => Err(Error::extraction(message)),
            None => Ok(self.detections.clone()),
        }
    }

    fn supported_categories(&self) -> Vec<EntityCategory> {
        let mut categories: Vec<EntityCategory> = Vec::new();
        for d in &self.detections {
            if !categories.contains(&d.category) {
                categories.push(d.category.clone());
            }
        }
        categories
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Fixture-driven extractor for testing"
    }
}

/// Select the best available extractor backend.
///
/// Currently the heuristic backend, which is always available and needs no
/// model download. A transformer-backed extractor, when present, would take
/// priority here.
///
/// # Example
///
/// ```rust
/// use entmark::{auto, Formatter};
///
/// let formatter = Formatter::new(auto());
/// let _ = formatter.process("Beijing is the capital of China");
/// ```
#[must_use]
pub fn auto() -> Box<dyn Extractor> {
    Box::new(HeuristicExtractor::new())
}

/// List known backends and their availability.
#[must_use]
pub fn available_backends() -> Vec<(&'static str, bool)> {
    vec![("heuristic", true)]
}
