//! Built-in actions
//!
//! Actions fall into four groups by how they treat the successor:
//!
//! | Kind           | Effect on successor                        | Actions                                      |
//! |----------------|--------------------------------------------|----------------------------------------------|
//! | local          | none; own changes undone before forwarding | fill, border, line, gradients, image, text   |
//! | logical        | sees a new rect/path                       | inset, offset, divide, shape, path, clear    |
//! | device         | sees new device state                      | clip, shadow, blend                          |
//! | logical+device | both                                       | alpha, transparency layer                    |
//!
//! Every change is scoped, so nothing an action does outlives the action and
//! its successors.

mod clip;
mod content;
mod effects;
mod gradient;
mod layout;
mod paint;
mod shape;

pub use clip::{Clip, ClipSource};
pub use content::{Image, Text};
pub use effects::{Alpha, Blend, DropShadow, TransparencyLayer};
pub use gradient::{BorderGradient, LinearGradient, RadialGradient};
pub use layout::{Divide, Inset, Offset, Split};
pub use paint::{Border, Fill, Line};
pub use shape::{ClearPath, SetPath, Shape, ShapeGenerator};

pub use crate::chain::Forward;

use daub_paint::{FillRule, Path, Rect};

use crate::canvas::Canvas;

/// Intersect the device clip with the current path, or the rect if none
fn clip_to_current(device: &mut Canvas<'_, '_>, rect: Rect, path: Option<&Path>) {
    match path {
        Some(path) => device.clip_to_path(path, FillRule::NonZero),
        None => device.clip_to_rect(rect),
    }
}
