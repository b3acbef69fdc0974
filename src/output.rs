//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every entity leads with its positional index and title; the URL follows
//! as an indented `Source:` context line. Indices are 1-based on screen
//! (what a visitor sees in a "3 / 16" counter) even though the library uses
//! 0-based cursors.
//!
//! # Output Format
//!
//! ## Categories
//!
//! ```text
//! Categories
//! * All Work (16) [all]
//!   Antelope Canyon (4) [antelope-canyon]
//!   Switzerland (5) [switzerland]
//! ```
//!
//! ## List
//!
//! ```text
//! Antelope Canyon (4 items)
//! 001 Antelope Canyon [image]
//!     Source: /images/photography/8.jpeg
//! ```
//!
//! ## Lightbox
//!
//! ```text
//! Lightbox 2 / 4: Antelope Canyon [image]
//!     Source: /images/photography/9.jpeg
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::catalog::CatalogFile;
use crate::gallery::{ALL_CATEGORY, GalleryModel};
use crate::media::{MediaItem, MediaKind};
use crate::viewer::{Step, StepError, Viewer};
use serde::Serialize;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 item`, `2 items`.
fn count(n: usize, one: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { one } else { many })
}

/// Item header plus its indented source line.
fn item_lines(position: usize, item: &MediaItem, depth: usize) -> [String; 2] {
    [
        format!(
            "{}{} {} [{}]",
            indent(depth),
            format_index(position),
            item.title,
            item.kind()
        ),
        format!("{}Source: {}", indent(depth + 1), item.url),
    ]
}

/// Display label of a filter id: `all_label` for the sentinel, the declared
/// name otherwise, the raw id as a last resort.
pub fn category_label<'a>(model: &'a GalleryModel, id: &'a str, all_label: &'a str) -> &'a str {
    if id == ALL_CATEGORY {
        return all_label;
    }
    model
        .categories()
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(id)
}

// ============================================================================
// Categories
// ============================================================================

/// Filter pills with counts; the active one is marked with `*`.
pub fn format_categories(model: &GalleryModel, all_label: &str) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    let pills = std::iter::once((ALL_CATEGORY, all_label)).chain(
        model
            .categories()
            .iter()
            .map(|c| (c.id.as_str(), c.name.as_str())),
    );
    for (id, name) in pills {
        let marker = if id == model.active_category() { '*' } else { ' ' };
        lines.push(format!("{marker} {name} ({}) [{id}]", model.count_in(id)));
    }
    lines
}

pub fn print_categories(model: &GalleryModel, all_label: &str) {
    for line in format_categories(model, all_label) {
        println!("{}", line);
    }
}

// ============================================================================
// Visible items
// ============================================================================

/// The thumbnail grid for the active filter.
pub fn format_visible(model: &GalleryModel, all_label: &str) -> Vec<String> {
    let items = model.visible_items();
    let label = category_label(model, model.active_category(), all_label);
    let mut lines = vec![format!("{} ({})", label, count(items.len(), "item", "items"))];
    for (i, item) in items.iter().enumerate() {
        lines.extend(item_lines(i + 1, item, 0));
    }
    lines
}

pub fn print_visible(model: &GalleryModel, all_label: &str) {
    for line in format_visible(model, all_label) {
        println!("{}", line);
    }
}

/// One visible item as emitted by `list --json`.
#[derive(Debug, Serialize)]
pub struct ListEntry<'a> {
    pub index: usize,
    pub url: &'a str,
    pub category: &'a str,
    pub title: &'a str,
    pub kind: MediaKind,
}

pub fn list_entries(items: &[MediaItem]) -> Vec<ListEntry<'_>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ListEntry {
            index,
            url: &item.url,
            category: &item.category,
            title: &item.title,
            kind: item.kind(),
        })
        .collect()
}

// ============================================================================
// Lightbox
// ============================================================================

/// Current lightbox state: closed, or the item under the cursor.
pub fn format_lightbox(viewer: &Viewer) -> Vec<String> {
    let items = viewer.visible_items();
    let (Some((position, total)), Ok(item)) =
        (viewer.position(), viewer.lightbox().current_item(items))
    else {
        return vec!["Lightbox closed".to_string()];
    };
    vec![
        format!(
            "Lightbox {position} / {total}: {} [{}]",
            item.title,
            item.kind()
        ),
        format!("{}Source: {}", indent(1), item.url),
    ]
}

pub fn print_lightbox(viewer: &Viewer) {
    for line in format_lightbox(viewer) {
        println!("{}", line);
    }
}

/// Header line for one browse step, noting failures that were ignored.
pub fn format_step(step: &Step, result: &Result<(), StepError>) -> String {
    match result {
        Ok(()) => format!("> {step}"),
        Err(err) => format!("> {step} (ignored: {err})"),
    }
}

// ============================================================================
// Scan / check
// ============================================================================

/// Catalog grouped by category, as produced by `scan` or loaded by `check`.
pub fn format_catalog(catalog: &CatalogFile) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    for (i, category) in catalog.effective_categories().iter().enumerate() {
        let items: Vec<&MediaItem> = catalog
            .items
            .iter()
            .filter(|item| item.category == category.id)
            .collect();
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            category.name,
            count(items.len(), "item", "items")
        ));
        lines.push(format!("{}Id: {}", indent(1), category.id));
        for (j, item) in items.iter().enumerate() {
            lines.extend(item_lines(j + 1, item, 1));
        }
    }
    lines
}

pub fn print_catalog(catalog: &CatalogFile) {
    for line in format_catalog(catalog) {
        println!("{}", line);
    }
}

/// One-line summary: category, image and video counts.
pub fn format_summary(catalog: &CatalogFile) -> String {
    let videos = catalog.items.iter().filter(|i| i.is_video()).count();
    let images = catalog.items.len() - videos;
    format!(
        "{}, {} ({}, {})",
        count(catalog.effective_categories().len(), "category", "categories"),
        count(catalog.items.len(), "item", "items"),
        count(images, "image", "images"),
        count(videos, "video", "videos"),
    )
}
