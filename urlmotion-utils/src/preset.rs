// URL Motion: Predefined Animations
//
// Named handles for every generator in the frame library, so an animation can
// be picked from a string (config file, query parameter) instead of code.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{MotionError, MotionResult};
use crate::frames::{self, Frames};

/// A predefined animation from the frame library
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Preset {
    #[default]
    ThreeDots,
    ArrowSpinner,
    VerticalBars,
    StreachingVerticalBars,
    SpiningDots,
    LoadingBar,
    BouncingBalls,
    Smiley,
    Monkeys,
    Hearts,
    Material,
    Soccer,
    Aesthetic,
}

impl Preset {
    /// Look up a preset by its camelCase name (`"arrowSpinner"`)
    pub fn from_name(name: &str) -> MotionResult<Self> {
        Self::from_str(name).map_err(|_| MotionError::UnknownPreset(name.to_string()))
    }

    /// The camelCase name this preset parses from
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Render the preset with its default parameters
    pub fn frames(&self) -> Frames {
        match self {
            Preset::ThreeDots => frames::three_dots_default(),
            Preset::ArrowSpinner => frames::arrow_spinner(),
            Preset::VerticalBars => frames::vertical_bars(),
            Preset::StreachingVerticalBars => frames::streaching_vertical_bars(),
            Preset::SpiningDots => frames::spining_dots(),
            Preset::LoadingBar => frames::loading_bar_default(),
            Preset::BouncingBalls => frames::bouncing_balls(),
            Preset::Smiley => frames::smiley(),
            Preset::Monkeys => frames::monkeys(),
            Preset::Hearts => frames::hearts(),
            Preset::Material => frames::material(),
            Preset::Soccer => frames::soccer(),
            Preset::Aesthetic => frames::aesthetic(),
        }
    }
}
