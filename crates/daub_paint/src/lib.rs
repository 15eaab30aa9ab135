//! Daub Paint
//!
//! The device-facing half of Daub: plain value types for 2D drawing and the
//! [`DrawContext`] trait that chains render into.
//!
//! # Features
//!
//! - Geometry (points, sizes, rects with inset and divide helpers)
//! - Colors, blend modes, line styles and shadows
//! - Paths and shape helpers (rect, rounded rect, ellipse, capsule)
//! - Gradients with lazily resolved stops
//! - Attributed text runs and image content-mode placement
//! - [`RecordingContext`], a `DrawContext` that records every call

pub mod color;
pub mod context;
pub mod geometry;
pub mod gradient;
pub mod image;
pub mod path;
pub mod style;
pub mod text;

pub use color::Color;
pub use context::{DrawCommand, DrawContext, GraphicsState, RecordingContext, SaveMarker};
pub use geometry::{EdgeInsets, Point, Rect, RectEdge, Size, UnitPoint};
pub use gradient::{Gradient, GradientError, GradientStop, ResolvedGradient};
pub use image::{ContentMode, ImageId, ImageRef};
pub use path::{Path, PathBuilder, PathCommand};
pub use style::{BlendMode, Dash, FillRule, LineCap, Shadow};
pub use text::{AttributedText, FontWeight, TextAlign, TextSpan, TextStyle};
