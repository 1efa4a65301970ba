//! Fullscreen lightbox navigation.
//!
//! Every open, close, and navigate starts an animation. Until the caller
//! reports it finished with [`Lightbox::finish_transition`], further
//! transitions are rejected so rapid key presses or swipes cannot stack.

use thiserror::Error;

/// Reasons a lightbox transition is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LightboxError {
    /// Another transition has not finished yet.
    #[error("a transition is already in progress")]
    Busy,
    /// The lightbox is closed.
    #[error("lightbox is not open")]
    NotOpen,
    /// The requested index is past the end of the gallery.
    #[error("photo index {index} out of range for {len} photos")]
    OutOfRange { index: usize, len: usize },
}

/// Lightbox state over a gallery of `len` photos.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    len: usize,
    current: Option<usize>,
    in_transition: bool,
}

impl Lightbox {
    /// Closed lightbox over `len` photos.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: None,
            in_transition: false,
        }
    }

    /// Index of the photo on screen.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Whether the lightbox is showing a photo.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Whether an animation is still running.
    pub fn in_transition(&self) -> bool {
        self.in_transition
    }

    /// Update the gallery size, e.g. after another batch loads.
    /// Closes the lightbox if the current photo no longer exists.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.current.is_some_and(|i| i >= len) {
            self.current = None;
            self.in_transition = false;
        }
    }

    fn begin(&mut self) -> Result<(), LightboxError> {
        if self.in_transition {
            return Err(LightboxError::Busy);
        }
        self.in_transition = true;
        Ok(())
    }

    /// Open at `index`.
    pub fn open(&mut self, index: usize) -> Result<usize, LightboxError> {
        if index >= self.len {
            return Err(LightboxError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.begin()?;
        self.current = Some(index);
        Ok(index)
    }

    fn step(&mut self, forward: bool) -> Result<usize, LightboxError> {
        let current = self.current.ok_or(LightboxError::NotOpen)?;
        self.begin()?;
        let next = if forward {
            (current + 1) % self.len
        } else {
            (current + self.len - 1) % self.len
        };
        self.current = Some(next);
        Ok(next)
    }

    /// Move to the next photo, wrapping to the first.
    pub fn next(&mut self) -> Result<usize, LightboxError> {
        self.step(true)
    }

    /// Move to the previous photo, wrapping to the last.
    pub fn prev(&mut self) -> Result<usize, LightboxError> {
        self.step(false)
    }

    /// Close the lightbox.
    pub fn close(&mut self) -> Result<(), LightboxError> {
        if self.current.is_none() {
            return Err(LightboxError::NotOpen);
        }
        self.begin()?;
        self.current = None;
        Ok(())
    }

    /// Mark the running animation as done.
    pub fn finish_transition(&mut self) {
        self.in_transition = false;
    }

    /// Neighbour indices worth preloading: `(prev, next)`.
    pub fn preload_targets(&self) -> Option<(usize, usize)> {
        let current = self.current?;
        if self.len < 2 {
            return None;
        }
        Some((
            (current + self.len - 1) % self.len,
            (current + 1) % self.len,
        ))
    }
}
