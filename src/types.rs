//! Shared types used by the catalog loader, the scanner, and the gallery.
//!
//! These types are serialized to `gallery.toml` and must stay compatible
//! with what [`crate::scan`] writes and [`crate::catalog`] reads.

use serde::{Deserialize, Serialize};

/// A filter category shown as a pill above the thumbnail grid.
///
/// The `all` sentinel is never a `Category`: it is implied by every gallery
/// and labelled by the catalog's `display.all_label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Stable identifier stored on each item (e.g. `antelope-canyon`).
    pub id: String,
    /// Display label (e.g. "Antelope Canyon").
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
