// URL Motion shared library
//
// Frame sequences, predefined animations and configuration. Nothing in this
// crate touches a host: it only produces the strings that the client crate
// plays through the URL fragment.

pub mod config;
pub mod error;
pub mod frames;
pub mod preset;

pub use config::{LoadingBarConfig, MotionConfig, DEFAULT_PERIOD_MS};
pub use error::{MotionError, MotionResult};
pub use frames::{Frame, Frames};
pub use preset::Preset;
