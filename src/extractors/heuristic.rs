//! Heuristic NER - zero-model named entity recognition.
//!
//! Identifies likely Person/Organization/Location entities using
//! capitalization patterns and context words, without any ML framework:
//!
//! 1. **Capitalization** - title-case words are candidate entities
//! 2. **Context windows** - surrounding words provide the category signal
//! 3. **Suffix/prefix rules** - "Inc.", "Mr.", "in", "from" etc.
//! 4. **Sequence patterns** - multi-word entities like "Yunnan University"
//!
//! # Limitations
//!
//! Much lower accuracy than a transformer model. Struggles with lowercase
//! names, ambiguous contexts and domain terminology. It exists so the
//! pipeline works offline; swap in a model-backed extractor for quality.

use crate::detection::{EntityCategory, RawDetection};
use crate::{Extractor, Result};

/// Zero-model heuristic extractor.
///
/// # Approach
///
/// 1. Tokenize the text into words
/// 2. Collect capitalized sequences (candidate entities)
/// 3. Classify each candidate from context:
///    - Person: preceded by a title, followed by a reporting/founding verb
///    - Organization: carries a corporate/institutional suffix
///    - Location: preceded by a locative preposition
/// 4. Remaining multi-word candidates fall back to Misc
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    /// Create a new heuristic extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Context Words
// =============================================================================

/// Titles and honorifics that precede a person name.
const PERSON_TITLES: &[&str] = &[
    "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "dr", "dr.", "prof", "prof.",
    "president", "chairman", "senator", "governor", "mayor", "king", "queen",
    "sir", "dame", "general", "judge", "professor", "coach",
];

/// Verbs that commonly follow a person name.
const PERSON_VERBS: &[&str] = &[
    "said", "says", "told", "asked", "announced", "stated", "explained",
    "founded", "created", "invented", "discovered", "wrote", "led", "leads",
    "was", "is",
];

/// Corporate and institutional suffixes (strong organization signal).
const ORG_SUFFIXES: &[&str] = &[
    "inc", "inc.", "corp", "corp.", "corporation", "co", "co.", "ltd",
    "ltd.", "llc", "plc", "gmbh", "company", "group", "holdings",
    "foundation", "institute", "university", "college", "school", "hospital",
    "museum", "bank", "labs", "technologies", "systems", "association",
    "republic", "ministry", "party",
];

/// Locative prepositions preceding a place name.
const LOC_PREPOSITIONS: &[&str] = &[
    "in", "at", "from", "to", "near", "of", "across", "throughout",
    "based", "located", "headquartered", "born", "lives", "visited",
    "capital",
];

/// Words never treated as entities on their own.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "as", "is", "was", "are", "were", "be",
    "he", "she", "it", "they", "we", "you", "i", "this", "that", "these",
    "those", "who", "which", "what", "when", "where", "why", "how",
];

/// Connectors allowed inside a multi-word name ("Bank of America").
const NAME_CONNECTORS: &[&str] = &["of", "the", "and"];

// =============================================================================
// Tokenization
// =============================================================================

#[derive(Debug, Clone)]
struct Token<'a> {
    text: &'a str,
    is_capitalized: bool,
}

impl<'a> Token<'a> {
    fn new(text: &'a str) -> Self {
        let is_capitalized = text
            .chars()
            .next()
            .map(char::is_uppercase)
            .unwrap_or(false);
        Self {
            text,
            is_capitalized,
        }
    }

    fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Split on non-word characters, keeping apostrophes and hyphens inside
/// tokens.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if c.is_alphanumeric() || c == '\'' || c == '-' {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            tokens.push(Token::new(&text[s..i]));
        }
    }
    if let Some(s) = start {
        tokens.push(Token::new(&text[s..]));
    }

    tokens
}

// =============================================================================
// Candidate Detection & Classification
// =============================================================================

/// A candidate entity: contiguous token indices.
#[derive(Debug)]
struct Candidate {
    tokens: Vec<usize>,
}

impl Candidate {
    fn surface(&self, tokens: &[Token<'_>]) -> String {
        self.tokens
            .iter()
            .map(|&i| tokens[i].text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Collect capitalized word sequences, allowing connectors between
/// capitalized words.
fn find_candidates(tokens: &[Token<'_>]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut current: Option<Vec<usize>> = None;

    for (i, token) in tokens.iter().enumerate() {
        let lower = token.lower();
        let is_stop = STOP_WORDS.contains(&lower.as_str());

        if token.is_capitalized && !is_stop {
            current.get_or_insert_with(Vec::new).push(i);
        } else if NAME_CONNECTORS.contains(&lower.as_str())
            && current.is_some()
            && tokens.get(i + 1).map(|t| t.is_capitalized).unwrap_or(false)
        {
            // Keep "of"/"the"/"and" inside a name only when the name
            // continues after them.
            if let Some(span) = &mut current {
                span.push(i);
            }
        } else if let Some(span) = current.take() {
            candidates.push(Candidate { tokens: span });
        }
    }
    if let Some(span) = current {
        candidates.push(Candidate { tokens: span });
    }

    candidates
}

/// Classify a candidate from its own words and surrounding context.
fn classify(candidate: &Candidate, tokens: &[Token<'_>]) -> Option<EntityCategory> {
    let first = *candidate.tokens.first()?;
    let last = *candidate.tokens.last()?;

    let prev = first.checked_sub(1).map(|i| tokens[i].lower());
    let next = tokens.get(last + 1).map(|t| t.lower());

    // Organization suffix inside the name itself is the strongest signal.
    if candidate
        .tokens
        .iter()
        .any(|&i| ORG_SUFFIXES.contains(&tokens[i].lower().as_str()))
        || next
            .as_deref()
            .map(|n| ORG_SUFFIXES.contains(&n))
            .unwrap_or(false)
    {
        return Some(EntityCategory::Organization);
    }

    if let Some(p) = prev.as_deref() {
        if PERSON_TITLES.contains(&p) {
            return Some(EntityCategory::Person);
        }
        if LOC_PREPOSITIONS.contains(&p) {
            return Some(EntityCategory::Location);
        }
    }

    if next
        .as_deref()
        .map(|n| PERSON_VERBS.contains(&n))
        .unwrap_or(false)
        && candidate.tokens.len() >= 2
    {
        return Some(EntityCategory::Person);
    }

    // Multi-word capitalized sequences with no other signal: report them
    // rather than drop them, in the residual category.
    if candidate.tokens.len() >= 2 {
        return Some(EntityCategory::Misc);
    }

    None
}

// =============================================================================
// Extractor Implementation
// =============================================================================

impl Extractor for HeuristicExtractor {
    fn recognize(&self, text: &str) -> Result<Vec<RawDetection>> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(vec![]);
        }

        let mut detections = Vec::new();
        for mut candidate in find_candidates(&tokens) {
            // Titles are capitalized, so they land inside the span. Strip
            // them; their presence classifies the remainder as a person.
            let mut titled = false;
            while candidate
                .tokens
                .first()
                .map(|&i| PERSON_TITLES.contains(&tokens[i].lower().as_str()))
                .unwrap_or(false)
            {
                candidate.tokens.remove(0);
                titled = true;
            }
            if candidate.tokens.is_empty() {
                continue;
            }

            let category = if titled {
                Some(EntityCategory::Person)
            } else {
                classify(&candidate, &tokens)
            };
            if let Some(category) = category {
                detections.push(RawDetection::new(category, candidate.surface(&tokens)));
            }
        }

        Ok(detections)
    }

    fn supported_categories(&self) -> Vec<EntityCategory> {
        vec![
            EntityCategory::Person,
            EntityCategory::Organization,
            EntityCategory::Location,
            EntityCategory::Misc,
        ]
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn description(&self) -> &'static str {
        "Zero-model heuristic extractor (capitalization + context words)"
    }
}
