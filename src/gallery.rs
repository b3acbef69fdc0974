//! Category-filtered view over the media catalog.
//!
//! [`GalleryModel`] owns three things: the catalog (fixed for the session),
//! the active category filter, and the visible subset derived from the two.
//!
//! ```text
//! catalog:  [a.jpg/x, b.mp4/y, c.png/x]
//! filter:   "x"
//! visible:  [a.jpg, c.png]          ← catalog order preserved
//! ```
//!
//! The visible subset is recomputed only by [`GalleryModel::set_category`];
//! nothing else mutates it. Filtering by the [`ALL_CATEGORY`] sentinel shows
//! the whole catalog.
//!
//! ## Construction Rules
//!
//! A model is only built from a consistent catalog: no item may sit in the
//! `all` sentinel, category ids are unique, and every item's category is one
//! of the declared categories. This keeps `set_category` honest, since a
//! known category is exactly one the UI can offer as a pill.

use crate::media::MediaItem;
use crate::types::Category;
use thiserror::Error;
use tracing::debug;

/// Sentinel filter value meaning "no filter".
pub const ALL_CATEGORY: &str = "all";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Unknown category: {0}")]
    InvalidCategory(String),
    #[error("'all' is reserved and cannot be used as a category (found on {0})")]
    ReservedCategory(String),
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),
    #[error("Item {url} uses undeclared category '{category}'")]
    UnknownItemCategory { url: String, category: String },
}

#[derive(Debug, Clone)]
pub struct GalleryModel {
    catalog: Vec<MediaItem>,
    categories: Vec<Category>,
    active_category: String,
    visible_items: Vec<MediaItem>,
}

impl GalleryModel {
    /// Build a model from declared categories and the catalog.
    ///
    /// The filter starts at [`ALL_CATEGORY`].
    pub fn new(categories: Vec<Category>, catalog: Vec<MediaItem>) -> Result<Self, GalleryError> {
        for (i, category) in categories.iter().enumerate() {
            if category.id == ALL_CATEGORY {
                return Err(GalleryError::ReservedCategory(format!(
                    "category '{}'",
                    category.name
                )));
            }
            if categories[..i].iter().any(|c| c.id == category.id) {
                return Err(GalleryError::DuplicateCategory(category.id.clone()));
            }
        }
        for item in &catalog {
            if item.category == ALL_CATEGORY {
                return Err(GalleryError::ReservedCategory(item.url.clone()));
            }
            if !categories.iter().any(|c| c.id == item.category) {
                return Err(GalleryError::UnknownItemCategory {
                    url: item.url.clone(),
                    category: item.category.clone(),
                });
            }
        }

        debug!(
            items = catalog.len(),
            categories = categories.len(),
            "gallery model created"
        );
        let visible_items = catalog.clone();
        Ok(Self {
            catalog,
            categories,
            active_category: ALL_CATEGORY.to_string(),
            visible_items,
        })
    }

    /// Build a model whose categories are derived from the items, in order of
    /// first appearance. Each derived category uses its id as display name.
    pub fn from_items(catalog: Vec<MediaItem>) -> Result<Self, GalleryError> {
        let mut categories: Vec<Category> = Vec::new();
        for item in &catalog {
            if !categories.iter().any(|c| c.id == item.category) {
                categories.push(Category::new(&item.category, &item.category));
            }
        }
        Self::new(categories, catalog)
    }

    /// Switch the active filter and recompute the visible subset.
    ///
    /// Fails with [`GalleryError::InvalidCategory`] for an id that is neither
    /// [`ALL_CATEGORY`] nor a declared category; the model is left unchanged.
    pub fn set_category(&mut self, id: &str) -> Result<(), GalleryError> {
        if !self.is_known_category(id) {
            return Err(GalleryError::InvalidCategory(id.to_string()));
        }
        if self.active_category == id {
            return Ok(());
        }

        self.active_category = id.to_string();
        self.visible_items = if id == ALL_CATEGORY {
            self.catalog.clone()
        } else {
            self.catalog
                .iter()
                .filter(|item| item.category == id)
                .cloned()
                .collect()
        };
        debug!(
            category = id,
            visible = self.visible_items.len(),
            "category filter changed"
        );
        Ok(())
    }

    /// Items matching the active filter, in catalog order.
    pub fn visible_items(&self) -> &[MediaItem] {
        &self.visible_items
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// Declared categories, excluding the `all` sentinel.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn catalog(&self) -> &[MediaItem] {
        &self.catalog
    }

    /// True for [`ALL_CATEGORY`] and every declared category id.
    pub fn is_known_category(&self, id: &str) -> bool {
        id == ALL_CATEGORY || self.categories.iter().any(|c| c.id == id)
    }

    /// Number of catalog items a filter would show.
    pub fn count_in(&self, id: &str) -> usize {
        if id == ALL_CATEGORY {
            self.catalog.len()
        } else {
            self.catalog.iter().filter(|i| i.category == id).count()
        }
    }
}
