//! Extractor backend implementations.
//!
//! Each backend implements the [`Extractor`](crate::Extractor) trait. Only
//! one ships today:
//!
//! - [`HeuristicExtractor`] - capitalization + context heuristics, always
//!   available, no model download. Lower accuracy than a transformer NER
//!   model but good enough to exercise the formatting pipeline offline.
//!
//! A transformer-backed extractor would slot in behind the same trait; the
//! formatter never sees the difference.

pub mod heuristic;

pub use heuristic::HeuristicExtractor;
