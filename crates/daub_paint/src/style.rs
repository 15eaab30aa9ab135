//! Device-level drawing state values: blend modes, line styles, shadows

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color::Color;

/// Blend mode applied to subsequent draws
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Clear,
    Copy,
    SourceIn,
    SourceOut,
    DestinationOver,
    DestinationIn,
}

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Rule for deciding which regions of a path are inside
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Dash pattern for strokes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dash {
    /// Offset into the pattern at which the stroke starts
    #[serde(default)]
    pub phase: f32,
    /// Alternating on/off lengths
    pub lengths: SmallVec<[f32; 4]>,
}

impl Dash {
    pub fn new(phase: f32, lengths: impl IntoIterator<Item = f32>) -> Self {
        Self {
            phase,
            lengths: lengths.into_iter().collect(),
        }
    }

    /// A solid (undashed) line
    pub fn solid() -> Self {
        Self::default()
    }

    pub fn is_solid(&self) -> bool {
        self.lengths.is_empty()
    }
}

/// Shadow parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default)]
    pub blur_radius: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur_radius: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur_radius,
            color,
        }
    }

    /// No shadow; the state a fresh device starts in
    pub const fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, Color::TRANSPARENT)
    }

    pub fn sm() -> Self {
        Self::new(0.0, 1.0, 2.0, Color::new(0.0, 0.0, 0.0, 0.1))
    }

    pub fn md() -> Self {
        Self::new(0.0, 4.0, 6.0, Color::new(0.0, 0.0, 0.0, 0.1))
    }

    pub fn lg() -> Self {
        Self::new(0.0, 10.0, 15.0, Color::new(0.0, 0.0, 0.0, 0.1))
    }

    pub fn is_visible(&self) -> bool {
        self.color.a > 0.0
    }
}
