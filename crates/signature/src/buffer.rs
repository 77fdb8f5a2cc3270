//! Fixed five-slot window of raw pointer samples

use crate::constants::{SMOOTHING_CURSOR, WINDOW_SIZE};
use crate::types::Point;

/// Error type for point buffer misuse
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("Buffer not started - call reset() first")]
    NotStarted,
    #[error("Buffer is full - run the smoother before pushing more samples")]
    Full,
}

/// Rolling window of the most recent samples of the stroke being captured.
///
/// `cursor` is the index of the most recently written slot and always stays in
/// `0..=4`. The buffer never allocates after construction.
#[derive(Debug, Clone, Default)]
pub struct PointBuffer {
    slots: [Point; WINDOW_SIZE],
    cursor: usize,
    started: bool,
}

impl PointBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session with `first` in slot 0
    pub fn reset(&mut self, first: Point) {
        self.slots[0] = first;
        self.cursor = 0;
        self.started = true;
    }

    /// Store the next sample after the cursor
    pub fn push(&mut self, point: Point) -> Result<usize, BufferError> {
        if !self.started {
            return Err(BufferError::NotStarted);
        }
        if self.cursor >= SMOOTHING_CURSOR {
            return Err(BufferError::Full);
        }
        self.cursor += 1;
        self.slots[self.cursor] = point;
        Ok(self.cursor)
    }

    /// Close the session; pushes fail until the next reset
    pub fn finish(&mut self) {
        self.cursor = 0;
        self.started = false;
    }

    /// Restart the window at `start` with `next` already collected (cursor = 1)
    pub(crate) fn slide(&mut self, start: Point, next: Point) {
        self.slots[0] = start;
        self.slots[1] = next;
        self.cursor = 1;
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// True once the window holds five samples and a curve can be emitted
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursor == SMOOTHING_CURSOR
    }

    /// Read a slot, None past the end of the window.
    /// Slots past the cursor hold stale samples.
    #[inline]
    pub fn slot(&self, index: usize) -> Option<Point> {
        self.slots.get(index).copied()
    }

    /// All five slots
    #[inline]
    pub fn slots(&self) -> &[Point; WINDOW_SIZE] {
        &self.slots
    }
}
