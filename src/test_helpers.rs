//! Shared test utilities for the folio test suite.
//!
//! Provides ready-made galleries, a media directory builder, and lookup
//! helpers that panic with a clear message on a miss.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let mut model = three_item_model();
//! model.set_category("x").unwrap();
//!
//! let tmp = media_tree(&["010-Misc/001-Colosseum.jpeg"]);
//! let catalog = scan(tmp.path(), "/images").unwrap();
//! assert_eq!(item_titles(&catalog), ["Colosseum"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::{self, CatalogFile};
use crate::gallery::GalleryModel;
use crate::media::MediaItem;

// =========================================================================
// Galleries
// =========================================================================

/// `[a.jpg/x, b.mp4/y, c.png/x]`, categories derived.
pub fn three_item_model() -> GalleryModel {
    GalleryModel::from_items(vec![
        MediaItem::new("a.jpg", "x", "A"),
        MediaItem::new("b.mp4", "y", "B"),
        MediaItem::new("c.png", "x", "C"),
    ])
    .unwrap()
}

/// The sixteen-item sample portfolio, unfiltered.
pub fn sample_model() -> GalleryModel {
    catalog::sample_catalog().into_model().unwrap()
}

// =========================================================================
// Media directory fixtures
// =========================================================================

/// Create a temp directory containing empty files at the given relative paths.
///
/// Parent directories are created as needed.
pub fn media_tree(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for rel in files {
        touch(&tmp.path().join(rel));
    }
    tmp
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"").unwrap();
}

// =========================================================================
// Lookups and extractors
// =========================================================================

/// All item titles in catalog order.
pub fn item_titles(catalog: &CatalogFile) -> Vec<&str> {
    catalog.items.iter().map(|i| i.title.as_str()).collect()
}

/// Find an item by URL. Panics if not found.
pub fn find_item<'a>(items: &'a [MediaItem], url: &str) -> &'a MediaItem {
    items.iter().find(|i| i.url == url).unwrap_or_else(|| {
        let urls: Vec<&str> = items.iter().map(|i| i.url.as_str()).collect();
        panic!("item '{url}' not found. Available: {urls:?}")
    })
}
