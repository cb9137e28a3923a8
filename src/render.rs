//! Result formatting: grouped entity listing plus inline highlighting.
//!
//! This is the core of the crate. [`Formatter::process`] turns free text
//! into HTML markup with two sections: a deduplicated, type-grouped entity
//! listing and a copy of the input with every whole-word entity occurrence
//! wrapped in a colored `<span>`.
//!
//! Every outcome is a string. Empty input, an empty catalog and extractor
//! failures all map to fixed messages rather than errors, so a UI shell can
//! render the return value unconditionally.

use regex::Regex;

use crate::catalog::EntityCatalog;
use crate::Extractor;

/// Prompt returned for blank input.
pub const MSG_EMPTY_INPUT: &str = "Please enter some text to analyze.";

/// Message returned when extraction finds nothing usable.
pub const MSG_NO_ENTITIES: &str = "No named entities found in the text.";

/// Prefix of the message returned when the extractor fails.
pub const ERROR_PREFIX: &str = "Error analyzing text: ";

/// Formats extraction results for display.
///
/// Wraps an [`Extractor`] and exposes the single entry point
/// [`process`](Formatter::process). Stateless between calls; safe to share
/// across threads when the extractor is.
pub struct Formatter {
    extractor: Box<dyn Extractor>,
}

impl Formatter {
    /// Create a formatter over the given extractor backend.
    #[must_use]
    pub fn new(extractor: Box<dyn Extractor>) -> Self {
        Self { extractor }
    }

    /// Analyze `text` and render the result as HTML markup.
    ///
    /// Never panics and never returns an error: blank input yields a prompt
    /// message, an empty extraction yields a no-entities message, and an
    /// extractor fault is caught and rendered as a diagnostic string.
    #[must_use]
    pub fn process(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return MSG_EMPTY_INPUT.to_string();
        }

        let detections = match self.extractor.recognize(text) {
            Ok(detections) => detections,
            Err(e) => return format!("{ERROR_PREFIX}{e}"),
        };

        let catalog = EntityCatalog::from_detections(&detections);
        if catalog.is_empty() {
            return MSG_NO_ENTITIES.to_string();
        }

        render_result(&catalog, text)
    }

    /// Name of the underlying extractor backend.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.extractor.name()
    }

    /// Analyze `text` and return the catalog itself rather than markup.
    ///
    /// Used by structured output paths (e.g. the CLI's JSON mode). Unlike
    /// [`process`](Formatter::process), extraction faults propagate.
    pub fn catalog(&self, text: &str) -> crate::Result<EntityCatalog> {
        let detections = self.extractor.recognize(text)?;
        Ok(EntityCatalog::from_detections(&detections))
    }
}

/// Render the full markup: heading, grouped listing, heading, highlighted
/// text. Sections are concatenated without separators.
fn render_result(catalog: &EntityCatalog, text: &str) -> String {
    let mut out = String::new();

    out.push_str("<h2>🔍 Named Entities Found</h2>");
    for group in catalog.groups() {
        out.push_str(&format!("<h3>{}</h3>", group.category.label()));
        for entity in &group.entities {
            out.push_str(&format!("• {entity}<br>"));
        }
        out.push_str("<br>");
    }

    out.push_str("<h2>📝 Original Text with Entities</h2>");
    out.push_str(&highlight_entities(catalog, text));

    out
}

/// Wrap every whole-word occurrence of each cataloged entity in a colored
/// span.
///
/// The rewrite is sequential and destructive: entities are processed in
/// catalog order (category first-seen, then per-category first-seen), and
/// each substitution runs over the string produced by the previous one.
/// Inserted markup becomes part of the text later entities search, so an
/// entity that is a whole-word substring of an already-wrapped longer one
/// can re-match inside the marker. Known limitation, kept for compatibility
/// with the behavior downstream consumers expect.
///
/// Matching is case-insensitive with Unicode word boundaries; the wrapped
/// text is the matched occurrence, so original casing is preserved.
/// Entities with no whole-word occurrence are skipped silently.
pub fn highlight_entities(catalog: &EntityCatalog, text: &str) -> String {
    let mut highlighted = text.to_string();

    for group in catalog.groups() {
        let color = group.category.highlight_color();
        for entity in &group.entities {
            // A marker-only detection cleans to nothing; an empty pattern
            // would match at every boundary.
            if entity.is_empty() {
                continue;
            }
            let pattern = format!(r"(?i)\b{}\b", regex::escape(entity));
            let Ok(re) = Regex::new(&pattern) else {
                continue;
            };
            highlighted = re
                .replace_all(&highlighted, |caps: &regex::Captures<'_>| {
                    format!(
                        r#"<span style="background-color: {color}; padding: 2px 4px; border-radius: 3px; font-weight: bold;">{}</span>"#,
                        &caps[0]
                    )
                })
                .into_owned();
        }
    }

    highlighted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{EntityCategory, RawDetection};
    use crate::MockExtractor;

    fn loc(text: &str) -> RawDetection {
        RawDetection::new(EntityCategory::Location, text)
    }

    fn formatter_with(detections: Vec<RawDetection>) -> Formatter {
        Formatter::new(Box::new(
            MockExtractor::new("mock").with_detections(detections),
        ))
    }

    #[test]
    fn test_blank_input_returns_prompt() {
        // The mock errors if invoked; the guard must short-circuit first.
        let f = Formatter::new(Box::new(MockExtractor::new("mock").with_error("must not run")));
        assert_eq!(f.process(""), MSG_EMPTY_INPUT);
        assert_eq!(f.process("   \n\t "), MSG_EMPTY_INPUT);
    }

    #[test]
    fn test_empty_extraction_returns_no_entities() {
        let f = formatter_with(vec![]);
        assert_eq!(f.process("plain text"), MSG_NO_ENTITIES);
    }

    #[test]
    fn test_extractor_fault_rendered_as_message() {
        let f = Formatter::new(Box::new(
            MockExtractor::new("mock").with_error("model exploded"),
        ));
        let out = f.process("some text");
        assert!(out.starts_with(ERROR_PREFIX));
        assert!(out.contains("model exploded"));
    }

    #[test]
    fn test_locations_scenario() {
        let f = formatter_with(vec![loc("Kunming"), loc("Yunnan")]);
        let out = f.process("Kunming is the capital of Yunnan");

        assert!(out.contains("<h2>🔍 Named Entities Found</h2>"));
        assert!(out.contains("<h3>📍 Locations</h3>"));
        let kunming = out.find("• Kunming<br>").expect("Kunming listed");
        let yunnan = out.find("• Yunnan<br>").expect("Yunnan listed");
        assert!(kunming < yunnan, "listing keeps first-seen order");

        assert!(out.contains("<h2>📝 Original Text with Entities</h2>"));
        assert!(out.contains(r#"background-color: #88896F"#));
        assert!(out.contains(">Kunming</span>"));
        assert!(out.contains(">Yunnan</span>"));
    }

    #[test]
    fn test_duplicate_detection_catalogs_once_highlights_all() {
        let f = formatter_with(vec![loc("Yunnan"), loc("Yunnan")]);
        let out = f.process("Yunnan borders Yunnan");

        assert_eq!(out.matches("• Yunnan<br>").count(), 1);
        assert_eq!(out.matches(">Yunnan</span>").count(), 2);
    }

    #[test]
    fn test_highlight_preserves_original_casing() {
        let f = formatter_with(vec![loc("KUNMING")]);
        let out = f.process("kunming is a city");
        assert!(out.contains(">kunming</span>"));
    }

    #[test]
    fn test_no_partial_word_match() {
        let catalog = EntityCatalog::from_detections(&[loc("Yun")]);
        let out = highlight_entities(&catalog, "Yunnan is a province");
        assert!(!out.contains("<span"));
    }

    #[test]
    fn test_entity_absent_from_text_skipped_silently() {
        let f = formatter_with(vec![loc("Beijing")]);
        let out = f.process("No capital here");
        assert!(out.contains("• Beijing<br>"));
        assert!(!out.contains("<span"));
        assert!(out.ends_with("No capital here"));
    }

    #[test]
    fn test_marker_cleaned_before_highlighting() {
        let f = Formatter::new(Box::new(MockExtractor::new("mock").with_detections(vec![
            RawDetection::new(EntityCategory::Organization, "Univer ##sity"),
        ])));
        let out = f.process("Yunnan University is old");
        assert!(out.contains("• University<br>"));
        assert!(out.contains(">University</span>"));
    }

    #[test]
    fn test_destructive_rewrite_rematches_marker_text() {
        // "Yunnan" is processed after "Yunnan University" has been wrapped,
        // so it re-matches inside the inserted marker. Documented artifact.
        let catalog = EntityCatalog::from_detections(&[
            RawDetection::new(EntityCategory::Organization, "Yunnan University"),
            loc("Yunnan"),
        ]);
        let out = highlight_entities(&catalog, "Yunnan University is in Yunnan");
        assert!(out.contains(">Yunnan</span> University"));
    }

    #[test]
    fn test_unknown_category_uses_default_color() {
        let f = Formatter::new(Box::new(MockExtractor::new("mock").with_detections(vec![
            RawDetection::new(EntityCategory::Other("EVENT".into()), "Olympics"),
        ])));
        let out = f.process("The Olympics open today");
        assert!(out.contains("<h3>📋 EVENT</h3>"));
        assert!(out.contains("background-color: #FFEAA7"));
    }
}
