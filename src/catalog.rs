//! Catalog file loading, validation, and the stock sample catalog.
//!
//! The gallery's static catalog lives in `gallery.toml` in the source
//! directory:
//!
//! ```toml
//! [display]
//! all_label = "All Work"        # label of the unfiltered pill
//! initial_category = "all"      # filter active when the gallery opens
//!
//! [[categories]]
//! id = "antelope-canyon"
//! name = "Antelope Canyon"
//!
//! [[items]]
//! url = "/images/photography/8.jpeg"
//! category = "antelope-canyon"
//! title = "Antelope Canyon"
//! ```
//!
//! ## Loading
//!
//! The file is merged over the stock defaults the same way sparse config
//! files are: tables merge key by key, anything else (including the
//! `categories` and `items` arrays) replaces the default wholesale. Unknown
//! keys are rejected to catch typos early. When no `gallery.toml` exists the
//! stock sample portfolio is used, so the CLI has something to show.
//!
//! ## Categories
//!
//! `[[categories]]` is optional. Without it, categories are derived from the
//! items in order of first appearance, each using its id as display name.

use crate::gallery::{ALL_CATEGORY, GalleryError, GalleryModel};
use crate::media::MediaItem;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// File name looked up in the source directory.
pub const CATALOG_FILE: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("Gallery error: {0}")]
    Gallery(#[from] GalleryError),
    #[error("Catalog validation error: {0}")]
    Validation(String),
}

/// Contents of `gallery.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogFile {
    /// Presentation defaults.
    pub display: DisplayConfig,
    /// Declared filter categories, in pill order. Empty means "derive".
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    /// The catalog, in display order.
    pub items: Vec<MediaItem>,
}

/// Presentation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Label of the unfiltered ("all") pill.
    pub all_label: String,
    /// Filter active when the gallery is first shown.
    pub initial_category: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            all_label: "All Work".to_string(),
            initial_category: ALL_CATEGORY.to_string(),
        }
    }
}

impl CatalogFile {
    /// Categories as declared, or derived from the items when none are.
    pub fn effective_categories(&self) -> Vec<Category> {
        if !self.categories.is_empty() {
            return self.categories.clone();
        }
        let mut derived: Vec<Category> = Vec::new();
        for item in &self.items {
            if !derived.iter().any(|c| c.id == item.category) {
                derived.push(Category::new(&item.category, &item.category));
            }
        }
        derived
    }

    /// Check the catalog is internally consistent.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.display.all_label.trim().is_empty() {
            return Err(CatalogError::Validation(
                "display.all_label must not be empty".into(),
            ));
        }

        let mut ids = HashSet::new();
        for category in &self.categories {
            if category.id.is_empty() {
                return Err(CatalogError::Validation(
                    "category ids must not be empty".into(),
                ));
            }
            if category.id == ALL_CATEGORY {
                return Err(CatalogError::Validation(format!(
                    "category id '{ALL_CATEGORY}' is reserved"
                )));
            }
            if !ids.insert(category.id.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
        }

        let mut urls = HashSet::new();
        for item in &self.items {
            if item.url.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "item '{}' has an empty url",
                    item.title
                )));
            }
            if item.category.is_empty() {
                return Err(CatalogError::Validation(format!(
                    "item {} has an empty category",
                    item.url
                )));
            }
            if item.category == ALL_CATEGORY {
                return Err(CatalogError::Validation(format!(
                    "item {} cannot be in the reserved '{ALL_CATEGORY}' category",
                    item.url
                )));
            }
            if !self.categories.is_empty() && !ids.contains(item.category.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "item {} uses undeclared category '{}'",
                    item.url, item.category
                )));
            }
            if !urls.insert(item.url.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate item url {}",
                    item.url
                )));
            }
        }

        let initial = &self.display.initial_category;
        if initial != ALL_CATEGORY
            && !self.effective_categories().iter().any(|c| &c.id == initial)
        {
            return Err(CatalogError::Validation(format!(
                "display.initial_category '{initial}' is not a known category"
            )));
        }
        Ok(())
    }

    /// Validate, then build a gallery with the configured initial filter
    /// applied.
    pub fn into_model(self) -> Result<GalleryModel, CatalogError> {
        self.validate()?;
        let categories = self.effective_categories();
        let mut model = GalleryModel::new(categories, self.items)?;
        model.set_category(&self.display.initial_category)?;
        Ok(model)
    }

    /// Render as `gallery.toml` text.
    pub fn to_toml(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// =============================================================================
// Loading, merging, and validation
// =============================================================================

/// Stock defaults as a TOML table, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    let mut table = toml::Table::new();
    let display = DisplayConfig::default();
    let mut display_table = toml::Table::new();
    display_table.insert("all_label".into(), toml::Value::String(display.all_label));
    display_table.insert(
        "initial_category".into(),
        toml::Value::String(display.initial_category),
    );
    table.insert("display".into(), toml::Value::Table(display_table));
    table.insert("categories".into(), toml::Value::Array(Vec::new()));
    table.insert("items".into(), toml::Value::Array(Vec::new()));
    toml::Value::Table(table)
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `gallery.toml` from a directory as a raw TOML value.
///
/// `Ok(None)` when the file does not exist.
pub fn load_raw_catalog(dir: &Path) -> Result<Option<toml::Value>, CatalogError> {
    let path = dir.join(CATALOG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an overlay onto the stock defaults, deserialize, and validate.
pub fn resolve_catalog(overlay: toml::Value) -> Result<CatalogFile, CatalogError> {
    let merged = merge_toml(stock_defaults_value(), overlay);
    let catalog: CatalogFile = merged.try_into()?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load the catalog for a source directory.
///
/// Falls back to [`sample_catalog`] when the directory has no `gallery.toml`.
pub fn load_catalog(dir: &Path) -> Result<CatalogFile, CatalogError> {
    match load_raw_catalog(dir)? {
        Some(overlay) => {
            let catalog = resolve_catalog(overlay)?;
            debug!(
                path = %dir.join(CATALOG_FILE).display(),
                items = catalog.items.len(),
                "catalog loaded"
            );
            Ok(catalog)
        }
        None => {
            debug!(dir = %dir.display(), "no {CATALOG_FILE}, using sample catalog");
            Ok(sample_catalog())
        }
    }
}

/// Write a catalog into `dir/gallery.toml`, replacing any existing file.
pub fn write_catalog(dir: &Path, catalog: &CatalogFile) -> Result<(), CatalogError> {
    catalog.validate()?;
    fs::create_dir_all(dir)?;
    fs::write(dir.join(CATALOG_FILE), catalog.to_toml()?)?;
    Ok(())
}

/// The sample photography portfolio.
pub fn sample_catalog() -> CatalogFile {
    let categories = vec![
        Category::new("antelope-canyon", "Antelope Canyon"),
        Category::new("switzerland", "Switzerland"),
        Category::new("misc", "Misc"),
    ];
    let entries: [(u32, &str, &str); 16] = [
        (1, "misc", "Cinque Terre"),
        (2, "misc", "Cinque Terre"),
        (3, "misc", "Plitvice Lakes"),
        (4, "misc", "Plitvice Lakes"),
        (5, "misc", "Plitvice Lakes"),
        (6, "misc", "Great Pyramid of Giza"),
        (7, "misc", "Colosseum"),
        (8, "antelope-canyon", "Antelope Canyon"),
        (9, "antelope-canyon", "Antelope Canyon"),
        (10, "antelope-canyon", "Antelope Canyon"),
        (11, "switzerland", "Switzerland"),
        (12, "switzerland", "Switzerland"),
        (13, "switzerland", "Switzerland"),
        (14, "switzerland", "Switzerland"),
        (15, "switzerland", "Switzerland"),
        (16, "antelope-canyon", "Antelope Canyon"),
    ];
    let items = entries
        .iter()
        .map(|&(n, category, title)| {
            MediaItem::new(format!("/images/photography/{n}.jpeg"), category, title)
        })
        .collect();
    CatalogFile {
        display: DisplayConfig::default(),
        categories,
        items,
    }
}

/// Fully commented sample `gallery.toml`, printed by `gen-catalog`.
///
/// Parses to exactly [`sample_catalog`].
pub fn stock_catalog_toml() -> &'static str {
    r##"# Folio Gallery Catalog
# =====================
# Place this file as gallery.toml in the --source directory.
# Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Display
# ---------------------------------------------------------------------------
[display]
# Label of the pill that shows every item.
all_label = "All Work"

# Filter active when the gallery opens: "all" or a category id below.
initial_category = "all"

# ---------------------------------------------------------------------------
# Categories, in pill order.
# Optional: when omitted, categories are derived from the items.
# The id "all" is reserved.
# ---------------------------------------------------------------------------
[[categories]]
id = "antelope-canyon"
name = "Antelope Canyon"

[[categories]]
id = "switzerland"
name = "Switzerland"

[[categories]]
id = "misc"
name = "Misc"

# ---------------------------------------------------------------------------
# Items, in display order.
# Files ending in .mp4, .mov, .webm or .avi play as videos; anything else
# is shown as an image.
# ---------------------------------------------------------------------------
[[items]]
url = "/images/photography/1.jpeg"
category = "misc"
title = "Cinque Terre"

[[items]]
url = "/images/photography/2.jpeg"
category = "misc"
title = "Cinque Terre"

[[items]]
url = "/images/photography/3.jpeg"
category = "misc"
title = "Plitvice Lakes"

[[items]]
url = "/images/photography/4.jpeg"
category = "misc"
title = "Plitvice Lakes"

[[items]]
url = "/images/photography/5.jpeg"
category = "misc"
title = "Plitvice Lakes"

[[items]]
url = "/images/photography/6.jpeg"
category = "misc"
title = "Great Pyramid of Giza"

[[items]]
url = "/images/photography/7.jpeg"
category = "misc"
title = "Colosseum"

[[items]]
url = "/images/photography/8.jpeg"
category = "antelope-canyon"
title = "Antelope Canyon"

[[items]]
url = "/images/photography/9.jpeg"
category = "antelope-canyon"
title = "Antelope Canyon"

[[items]]
url = "/images/photography/10.jpeg"
category = "antelope-canyon"
title = "Antelope Canyon"

[[items]]
url = "/images/photography/11.jpeg"
category = "switzerland"
title = "Switzerland"

[[items]]
url = "/images/photography/12.jpeg"
category = "switzerland"
title = "Switzerland"

[[items]]
url = "/images/photography/13.jpeg"
category = "switzerland"
title = "Switzerland"

[[items]]
url = "/images/photography/14.jpeg"
category = "switzerland"
title = "Switzerland"

[[items]]
url = "/images/photography/15.jpeg"
category = "switzerland"
title = "Switzerland"

[[items]]
url = "/images/photography/16.jpeg"
category = "antelope-canyon"
title = "Antelope Canyon"
"##
}
