// URL Motion: frame cursor
// Steps through a fixed frame sequence and wraps from the last frame back to 0

use std::sync::Arc;

use urlmotion_utils::Frame;

use super::engine::{AnimationEngine, AnimationFrame};

/// Looping cursor over a shared frame sequence
#[derive(Debug, Clone)]
pub struct FrameCursor {
    /// Frames to cycle through
    frames: Arc<[Frame]>,
    /// Last frame shown, None before the first advance
    index: Option<usize>,
}

impl FrameCursor {
    pub fn new(frames: Arc<[Frame]>) -> Self {
        Self {
            frames,
            index: None,
        }
    }

    /// Index of the frame last returned by `next_frame`
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl AnimationEngine for FrameCursor {
    fn next_frame(&mut self) -> Option<AnimationFrame> {
        if self.frames.is_empty() {
            return None;
        }

        let next = match self.index {
            Some(current) if current + 1 < self.frames.len() => current + 1,
            _ => 0,
        };
        self.index = Some(next);

        Some(AnimationFrame::new(next, self.frames[next].clone()))
    }

    fn reset(&mut self) {
        self.index = None;
    }
}
