//! Attributed text runs

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Black,
}

/// Horizontal text alignment within the target rect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text style configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Font family name
    pub family: String,
    /// Font size in pixels
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
    pub align: TextAlign,
    /// Letter spacing adjustment
    pub letter_spacing: f32,
    /// Line height multiplier
    pub line_height: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "system-ui".to_string(),
            size: 14.0,
            weight: FontWeight::Regular,
            color: Color::BLACK,
            align: TextAlign::Left,
            letter_spacing: 0.0,
            line_height: 1.2,
        }
    }
}

impl TextStyle {
    /// Create a new text style with font size
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// A run of text sharing one style
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    #[serde(default)]
    pub style: TextStyle,
}

/// Text made of styled spans, laid out as one paragraph
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributedText {
    spans: Vec<TextSpan>,
}

impl AttributedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-span text
    pub fn plain(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            spans: vec![TextSpan {
                text: text.into(),
                style,
            }],
        }
    }

    /// Append a span
    pub fn span(mut self, text: impl Into<String>, style: TextStyle) -> Self {
        self.spans.push(TextSpan {
            text: text.into(),
            style,
        });
        self
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    /// Concatenated text of all spans
    pub fn to_plain_string(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
