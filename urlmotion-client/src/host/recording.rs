// URL Motion: Recording fragment target
//
// In-memory FragmentTarget for tests and headless hosts. Records every write
// so tests can assert the exact sequence a controller produced.

use std::sync::{Arc, Mutex};

use super::{lock, FragmentTarget};

/// Fragment target that remembers everything written to it.
///
/// Clones share the same log, so a test can keep one clone and hand another
/// to the controller.
///
/// # Example
///
/// ```ignore
/// let fragment = RecordingFragment::new();
/// let mut controller = MotionController::new(frames, scheduler, Arc::new(fragment.clone()));
/// controller.start(None);
/// clock.advance(Duration::from_secs(2));
/// assert_eq!(fragment.writes(), vec!["#Loading.", "#Loading.."]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingFragment {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every value written, oldest first
    pub fn writes(&self) -> Vec<String> {
        lock(&self.writes).clone()
    }

    /// Number of writes so far
    pub fn write_count(&self) -> usize {
        lock(&self.writes).len()
    }

    /// The value currently displayed (the last write), empty if never written
    pub fn current(&self) -> String {
        lock(&self.writes).last().cloned().unwrap_or_default()
    }

    /// Forget all recorded writes
    pub fn reset(&self) {
        lock(&self.writes).clear();
    }
}

impl FragmentTarget for RecordingFragment {
    fn write(&self, text: &str) {
        lock(&self.writes).push(text.to_string());
    }
}
