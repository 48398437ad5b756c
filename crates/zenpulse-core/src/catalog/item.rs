//! Meditation catalog.
//!
//! The catalog is defined once and never mutated. Whether an item is locked
//! is part of the item itself (`free`), so there is exactly one place that
//! decides it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single piece of meditation content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// Duration in minutes. Always > 0 inside a [`Catalog`].
    pub duration_min: u32,
    /// Free items are accessible without a subscription.
    pub free: bool,
}

impl ContentItem {
    pub fn new(id: &str, title: &str, duration_min: u32, free: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            duration_min,
            free,
        }
    }

    pub fn is_locked(&self) -> bool {
        !self.free
    }
}

/// Immutable, validated list of content items.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    /// Build a catalog, rejecting empty ids, duplicate ids and zero durations.
    pub fn new(items: Vec<ContentItem>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "id".into(),
                    message: "content item id must not be empty".into(),
                });
            }
            if item.duration_min == 0 {
                return Err(ValidationError::InvalidValue {
                    field: format!("{}.duration_min", item.id),
                    message: "duration must be positive".into(),
                });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ValidationError::DuplicateId {
                    collection: "catalog".into(),
                    id: item.id.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    /// The six meditations shipped with the app. The first two are free.
    pub fn builtin() -> Self {
        Self {
            items: vec![
                ContentItem::new("m1", "Утреннее дыхание", 5, true),
                ContentItem::new("m2", "Спокойный фокус", 7, true),
                ContentItem::new("m3", "Глубокий сон", 15, false),
                ContentItem::new("m4", "Снятие стресса", 10, false),
                ContentItem::new("m5", "Сканирование тела", 12, false),
                ContentItem::new("m6", "Вечерняя благодарность", 8, false),
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn free_items(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(|item| item.free)
    }

    pub fn locked_items(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(|item| item.is_locked())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
