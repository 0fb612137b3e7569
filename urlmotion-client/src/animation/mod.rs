// URL Motion: Animation
// Frame cursor and the controller that plays it through the URL fragment

pub mod controller;
pub mod cursor;
pub mod engine;

pub use controller::{MotionController, Observer, DEFAULT_PERIOD};
pub use cursor::FrameCursor;
pub use engine::{AnimationEngine, AnimationFrame};
