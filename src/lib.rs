//! # Folio
//!
//! The gallery behind a photography portfolio: a catalog of photos and short
//! videos, a row of category pills that filter it, and a full-screen
//! lightbox that steps through whatever is visible.
//!
//! # Architecture: Model, Cursor, Coordinator
//!
//! ```text
//! gallery.toml ─┐
//!               ├─▶ CatalogFile ─▶ GalleryModel ──visible_items()──┐
//! media dir ────┘    (catalog)      (filter)                       ▼
//!                                                    LightboxController
//!                                                    (cursor into the slice)
//!                    Viewer = GalleryModel + LightboxController
//! ```
//!
//! - [`gallery::GalleryModel`] owns the catalog and the active filter and
//!   derives the visible subset. Only `set_category` changes it.
//! - [`lightbox::LightboxController`] owns nothing but a cursor. Every call
//!   takes the slice to navigate, so it can never hold a stale copy of the
//!   media list, only a stale index, which it reports.
//! - [`viewer::Viewer`] is the single writer that keeps the two consistent:
//!   it closes the lightbox when the filter changes under it and when the
//!   cursor goes stale.
//!
//! Everything is synchronous. Each call is a complete state transition and a
//! failed call leaves state untouched.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`media`] | `MediaItem` and extension-based image/video classification |
//! | [`types`] | Shared `Category` type |
//! | [`gallery`] | Catalog, category filter, visible subset |
//! | [`lightbox`] | Open/closed cursor state machine with wraparound |
//! | [`viewer`] | Gallery + lightbox coordination, scripted `Step`s |
//! | [`catalog`] | `gallery.toml` loading, validation, sample catalog |
//! | [`scan`] | Build a catalog from a directory of category folders |
//! | [`naming`] | `NNN-name` parsing and category-id slugs |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Close on Invalidate
//!
//! A lightbox cursor is an index into the visible subset. When the subset
//! changes, the index may point at a different item or at nothing. Rather
//! than guess which item the visitor meant, the viewer closes the lightbox.
//!
//! ## Classification by Extension
//!
//! `.mp4`, `.mov`, `.webm` and `.avi` play as video; everything else is an
//! image. No file is opened to find out. A misnamed file is misclassified.
//!
//! ## Wraparound Navigation
//!
//! `next` on the last item shows the first, `prev` on the first shows the
//! last. Browsing never hits a dead end.

pub mod catalog;
pub mod gallery;
pub mod lightbox;
pub mod media;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_helpers;
