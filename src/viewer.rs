//! A gallery and its lightbox, kept consistent with each other.
//!
//! [`GalleryModel`] and [`LightboxController`] are independent on purpose:
//! the lightbox only holds an index into whatever slice it is handed. The
//! [`Viewer`] is the single writer that pairs them and enforces the rules the
//! presentation layer would otherwise have to remember:
//!
//! - Switching to a different category while the lightbox is open closes it.
//!   Re-selecting the active category is a no-op and keeps it open.
//! - A [`LightboxError::StaleCursor`] from [`Viewer::current`] closes the
//!   lightbox before the error is returned.
//! - Any other failure leaves both halves exactly as they were.
//!
//! [`Step`] is one scripted user action, so a session can be replayed from a
//! list like `["category:x", "open:1", "next"]`.

use crate::gallery::{GalleryError, GalleryModel};
use crate::lightbox::{LightboxController, LightboxError};
use crate::media::MediaItem;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Viewer {
    gallery: GalleryModel,
    lightbox: LightboxController,
}

impl Viewer {
    pub fn new(gallery: GalleryModel) -> Self {
        Self {
            gallery,
            lightbox: LightboxController::new(),
        }
    }

    pub fn gallery(&self) -> &GalleryModel {
        &self.gallery
    }

    pub fn lightbox(&self) -> &LightboxController {
        &self.lightbox
    }

    pub fn visible_items(&self) -> &[MediaItem] {
        self.gallery.visible_items()
    }

    /// Change the category filter, closing the lightbox if the visible
    /// subset changes under it.
    pub fn select_category(&mut self, id: &str) -> Result<(), GalleryError> {
        let before = self.gallery.active_category().to_string();
        self.gallery.set_category(id)?;
        if before != self.gallery.active_category() && self.lightbox.is_open() {
            debug!(from = %before, to = id, "filter changed under open lightbox, closing");
            self.lightbox.close();
        }
        Ok(())
    }

    pub fn open(&mut self, index: usize) -> Result<(), LightboxError> {
        self.lightbox.open(index, self.gallery.visible_items())
    }

    pub fn next(&mut self) -> Result<usize, LightboxError> {
        self.lightbox.next(self.gallery.visible_items())
    }

    pub fn prev(&mut self) -> Result<usize, LightboxError> {
        self.lightbox.prev(self.gallery.visible_items())
    }

    pub fn close(&mut self) {
        self.lightbox.close();
    }

    /// The item shown in the lightbox.
    ///
    /// On a stale cursor the lightbox is closed and the error still returned.
    pub fn current(&mut self) -> Result<&MediaItem, LightboxError> {
        match self.lightbox.current_item(self.gallery.visible_items()) {
            Err(err @ LightboxError::StaleCursor { .. }) => {
                warn!(error = %err, "closing lightbox on stale cursor");
                self.lightbox.close();
                Err(err)
            }
            other => other,
        }
    }

    /// 1-based position and visible total while open, for "3 / 16" counters.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.lightbox
            .cursor()
            .map(|cursor| (cursor + 1, self.gallery.visible_items().len()))
    }

    /// Apply one scripted action.
    pub fn apply(&mut self, step: &Step) -> Result<(), StepError> {
        match step {
            Step::Category(id) => self.select_category(id)?,
            Step::Open(index) => self.open(*index)?,
            Step::Next => {
                self.next()?;
            }
            Step::Prev => {
                self.prev()?;
            }
            Step::Close => self.close(),
        }
        Ok(())
    }
}

/// Failure of a single [`Step`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error(transparent)]
    Gallery(#[from] GalleryError),
    #[error(transparent)]
    Lightbox(#[from] LightboxError),
}

/// One user action against a [`Viewer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Category(String),
    Open(usize),
    Next,
    Prev,
    Close,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid step '{0}' (expected next, prev, close, open:<index> or category:<id>)")]
pub struct ParseStepError(String);

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "next" => return Ok(Step::Next),
            "prev" => return Ok(Step::Prev),
            "close" => return Ok(Step::Close),
            _ => {}
        }
        match s.split_once(':') {
            Some(("open", index)) => index
                .parse()
                .map(Step::Open)
                .map_err(|_| ParseStepError(s.to_string())),
            Some(("category", id)) if !id.is_empty() => Ok(Step::Category(id.to_string())),
            _ => Err(ParseStepError(s.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Category(id) => write!(f, "category:{id}"),
            Step::Open(index) => write!(f, "open:{index}"),
            Step::Next => f.write_str("next"),
            Step::Prev => f.write_str("prev"),
            Step::Close => f.write_str("close"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::ALL_CATEGORY;
    use crate::test_helpers::*;

    fn current_url(viewer: &mut Viewer) -> String {
        viewer.current().unwrap().url.clone()
    }

    // =========================================================================
    // Filter / lightbox coupling
    // =========================================================================

    #[test]
    fn scenario_filter_open_next() {
        let mut viewer = Viewer::new(three_item_model());
        viewer.select_category("x").unwrap();
        viewer.open(1).unwrap();
        assert_eq!(current_url(&mut viewer), "c.png");
        viewer.next().unwrap();
        assert_eq!(current_url(&mut viewer), "a.jpg");
    }

    #[test]
    fn changing_filter_closes_open_lightbox() {
        let mut viewer = Viewer::new(sample_model());
        viewer.open(12).unwrap();
        viewer.select_category("antelope-canyon").unwrap();
        assert!(!viewer.lightbox().is_open());
        assert_eq!(viewer.current(), Err(LightboxError::NotOpen));
    }

    #[test]
    fn reselecting_same_filter_keeps_lightbox_open() {
        let mut viewer = Viewer::new(sample_model());
        viewer.select_category("switzerland").unwrap();
        viewer.open(2).unwrap();
        viewer.select_category("switzerland").unwrap();
        assert_eq!(viewer.position(), Some((3, 5)));
    }

    #[test]
    fn invalid_filter_leaves_lightbox_alone() {
        let mut viewer = Viewer::new(sample_model());
        viewer.open(0).unwrap();
        let err = viewer.select_category("mars").unwrap_err();
        assert_eq!(err, GalleryError::InvalidCategory("mars".into()));
        assert!(viewer.lightbox().is_open());
        assert_eq!(viewer.gallery().active_category(), ALL_CATEGORY);
    }

    #[test]
    fn stale_cursor_closes_lightbox() {
        let mut viewer = Viewer::new(sample_model());
        viewer.open(15).unwrap();
        // Bypass the viewer's own filter handling to simulate a shrunk subset.
        viewer.gallery.set_category("misc").unwrap();

        let err = viewer.current().unwrap_err();
        assert_eq!(err, LightboxError::StaleCursor { cursor: 15, len: 7 });
        assert!(!viewer.lightbox().is_open());
    }

    #[test]
    fn wraparound_over_filtered_subset() {
        let mut viewer = Viewer::new(sample_model());
        viewer.select_category("antelope-canyon").unwrap();
        viewer.open(0).unwrap();
        viewer.prev().unwrap();
        assert_eq!(current_url(&mut viewer), "/images/photography/16.jpeg");
        viewer.next().unwrap();
        assert_eq!(current_url(&mut viewer), "/images/photography/8.jpeg");
    }

    #[test]
    fn position_is_one_based() {
        let mut viewer = Viewer::new(three_item_model());
        assert_eq!(viewer.position(), None);
        viewer.open(0).unwrap();
        assert_eq!(viewer.position(), Some((1, 3)));
        viewer.prev().unwrap();
        assert_eq!(viewer.position(), Some((3, 3)));
    }

    // =========================================================================
    // Steps
    // =========================================================================

    #[test]
    fn parse_steps() {
        assert_eq!("next".parse::<Step>(), Ok(Step::Next));
        assert_eq!(" prev ".parse::<Step>(), Ok(Step::Prev));
        assert_eq!("close".parse::<Step>(), Ok(Step::Close));
        assert_eq!("open:3".parse::<Step>(), Ok(Step::Open(3)));
        assert_eq!(
            "category:antelope-canyon".parse::<Step>(),
            Ok(Step::Category("antelope-canyon".into()))
        );
    }

    #[test]
    fn parse_rejects_malformed_steps() {
        for bad in ["", "forward", "open:", "open:-1", "open:x", "category:", "next:1"] {
            assert!(bad.parse::<Step>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn step_display_parses_back() {
        for step in [
            Step::Next,
            Step::Prev,
            Step::Close,
            Step::Open(7),
            Step::Category("misc".into()),
        ] {
            assert_eq!(step.to_string().parse::<Step>(), Ok(step));
        }
    }

    #[test]
    fn apply_runs_a_session() {
        let mut viewer = Viewer::new(three_item_model());
        let steps: Vec<Step> = ["category:x", "open:1", "next", "next"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        for step in &steps {
            viewer.apply(step).unwrap();
        }
        assert_eq!(current_url(&mut viewer), "c.png");

        viewer.apply(&Step::Close).unwrap();
        assert_eq!(
            viewer.apply(&Step::Next),
            Err(StepError::Lightbox(LightboxError::NotOpen))
        );
    }

    #[test]
    fn apply_reports_failures_without_changing_state() {
        let mut viewer = Viewer::new(three_item_model());
        viewer.apply(&Step::Open(2)).unwrap();
        assert!(matches!(
            viewer.apply(&Step::Open(3)),
            Err(StepError::Lightbox(LightboxError::IndexOutOfRange { .. }))
        ));
        assert!(matches!(
            viewer.apply(&Step::Category("z".into())),
            Err(StepError::Gallery(GalleryError::InvalidCategory(_)))
        ));
        assert_eq!(viewer.position(), Some((3, 3)));
    }
}
