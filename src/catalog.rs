//! Grouping and deduplication of raw detections.

use serde::Serialize;

use crate::detection::{clean_surface, EntityCategory, RawDetection};

/// One category's entities, in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogGroup {
    /// The category this group collects
    pub category: EntityCategory,
    /// Distinct cleaned surfaces, first-seen order
    pub entities: Vec<String>,
}

/// Deduplicated, type-grouped entity listing built from raw detections.
///
/// Category order follows the first detection of each category in the raw
/// sequence; within a category, entities keep first-seen order and exact
/// (case-sensitive) duplicates of the cleaned surface are dropped.
///
/// Built once per request and read-only afterward.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntityCatalog {
    groups: Vec<CatalogGroup>,
}

impl EntityCatalog {
    /// Build a catalog from an ordered detection sequence.
    ///
    /// Surfaces are cleaned of continuation markers before dedup, so two
    /// detections that differ only in marker placement collapse to one
    /// entry.
    #[must_use]
    pub fn from_detections(detections: &[RawDetection]) -> Self {
        let mut catalog = EntityCatalog::default();
        for detection in detections {
            catalog.insert(&detection.category, clean_surface(&detection.text));
        }
        catalog
    }

    fn insert(&mut self, category: &EntityCategory, surface: String) {
        match self.groups.iter_mut().find(|g| g.category == *category) {
            Some(group) => {
                if !group.entities.contains(&surface) {
                    group.entities.push(surface);
                }
            }
            None => self.groups.push(CatalogGroup {
                category: category.clone(),
                entities: vec![surface],
            }),
        }
    }

    /// True if no entities were cataloged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of categories present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Total number of distinct entities across all categories.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.groups.iter().map(|g| g.entities.len()).sum()
    }

    /// Iterate groups in category first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = &CatalogGroup> {
        self.groups.iter()
    }

    /// Entities for one category, if present.
    #[must_use]
    pub fn get(&self, category: &EntityCategory) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.category == *category)
            .map(|g| g.entities.as_slice())
    }
}
