//! Full-screen lightbox navigation.
//!
//! [`LightboxController`] is a two-state machine:
//!
//! ```text
//!            open(i)                 next / prev
//!   Closed ───────────▶ Open(i) ◀──────────────┐
//!     ▲                   │  └─────────────────┘
//!     └──── close() ──────┘
//! ```
//!
//! The controller never stores the media list. Every call that needs items
//! takes the slice the gallery currently reports as visible, so the cursor
//! is only an index. If that slice shrinks underneath an open cursor,
//! [`LightboxController::current_item`] reports [`LightboxError::StaleCursor`]
//! and the caller is expected to close.
//!
//! Navigation wraps in both directions: `next` on the last item lands on the
//! first, `prev` on the first lands on the last.

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LightboxError {
    #[error("Index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Lightbox is not open")]
    NotOpen,
    #[error("Cannot navigate an empty collection")]
    EmptyCollection,
    #[error("Cursor {cursor} no longer fits the {len} visible items")]
    StaleCursor { cursor: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { cursor: usize },
}

#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    state: LightboxState,
}

impl LightboxController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Cursor position while open.
    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { cursor } => Some(cursor),
            LightboxState::Closed => None,
        }
    }

    /// Open on `items[index]`.
    ///
    /// An out-of-range index leaves the state as it was.
    pub fn open<T>(&mut self, index: usize, items: &[T]) -> Result<(), LightboxError> {
        if index >= items.len() {
            return Err(LightboxError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        self.state = LightboxState::Open { cursor: index };
        debug!(cursor = index, len = items.len(), "lightbox opened");
        Ok(())
    }

    /// Advance to the next item, wrapping to the first. Returns the new cursor.
    pub fn next<T>(&mut self, items: &[T]) -> Result<usize, LightboxError> {
        self.step(items, |cursor, len| (cursor + 1) % len)
    }

    /// Step back to the previous item, wrapping to the last. Returns the new cursor.
    pub fn prev<T>(&mut self, items: &[T]) -> Result<usize, LightboxError> {
        self.step(items, |cursor, len| (cursor + len - 1) % len)
    }

    fn step<T>(
        &mut self,
        items: &[T],
        advance: impl FnOnce(usize, usize) -> usize,
    ) -> Result<usize, LightboxError> {
        let LightboxState::Open { cursor } = self.state else {
            return Err(LightboxError::NotOpen);
        };
        if items.is_empty() {
            return Err(LightboxError::EmptyCollection);
        }
        let cursor = advance(cursor, items.len());
        self.state = LightboxState::Open { cursor };
        debug!(cursor, len = items.len(), "lightbox moved");
        Ok(cursor)
    }

    /// Close the lightbox. Closing twice is the same as closing once.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("lightbox closed");
        }
        self.state = LightboxState::Closed;
    }

    /// The item under the cursor.
    pub fn current_item<'a, T>(&self, items: &'a [T]) -> Result<&'a T, LightboxError> {
        let LightboxState::Open { cursor } = self.state else {
            return Err(LightboxError::NotOpen);
        };
        items.get(cursor).ok_or(LightboxError::StaleCursor {
            cursor,
            len: items.len(),
        })
    }
}
