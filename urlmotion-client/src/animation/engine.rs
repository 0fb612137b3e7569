// URL Motion: AnimationEngine trait and core types

/// A frame produced by an animation, tagged with its position in the sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Position of this frame in the sequence (0-based)
    pub index: usize,
    /// The text to display
    pub content: String,
}

impl AnimationFrame {
    pub fn new(index: usize, content: String) -> Self {
        Self { index, content }
    }

    /// The fragment string for this frame (`#` + content)
    pub fn fragment(&self) -> String {
        format!("#{}", self.content)
    }
}

/// Frame-based animation interface
pub trait AnimationEngine: Send {
    /// Advance and return the next frame.
    /// Returns None if there is nothing to show (empty sequence)
    fn next_frame(&mut self) -> Option<AnimationFrame>;

    /// Rewind to the position before the first frame
    fn reset(&mut self);
}
