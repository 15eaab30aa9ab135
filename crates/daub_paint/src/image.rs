//! Image handles and content-mode placement
//!
//! Image pixels belong to the device; the paint layer only carries an opaque
//! [`ImageId`] plus the intrinsic size needed to place the image.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size, UnitPoint};

/// Handle to a device-owned image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub u64);

/// An image handle together with its intrinsic size
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: ImageId,
    pub size: Size,
}

impl ImageRef {
    pub const fn new(id: u64, size: Size) -> Self {
        Self {
            id: ImageId(id),
            size,
        }
    }
}

/// How an image is placed within the current rect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    /// Stretch to fill the rect, ignoring aspect ratio
    #[default]
    ScaleToFill,
    /// Fit entirely within the rect, keeping aspect ratio (may letterbox)
    ScaleAspectFit,
    /// Cover the rect, keeping aspect ratio (overflow is clipped)
    ScaleAspectFill,
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ContentMode {
    /// Anchor point for the unscaled modes
    fn anchor(self) -> Option<UnitPoint> {
        Some(match self {
            ContentMode::Center => UnitPoint::CENTER,
            ContentMode::Top => UnitPoint::TOP,
            ContentMode::Bottom => UnitPoint::BOTTOM,
            ContentMode::Left => UnitPoint::LEFT,
            ContentMode::Right => UnitPoint::RIGHT,
            ContentMode::TopLeft => UnitPoint::TOP_LEFT,
            ContentMode::TopRight => UnitPoint::TOP_RIGHT,
            ContentMode::BottomLeft => UnitPoint::BOTTOM_LEFT,
            ContentMode::BottomRight => UnitPoint::BOTTOM_RIGHT,
            ContentMode::ScaleToFill
            | ContentMode::ScaleAspectFit
            | ContentMode::ScaleAspectFill => return None,
        })
    }

    /// Rect the image is drawn into when placed in `bounds`
    pub fn place(self, image: Size, bounds: Rect) -> Rect {
        if self == ContentMode::ScaleToFill || image.is_empty() {
            return bounds;
        }

        let size = match self {
            ContentMode::ScaleAspectFit | ContentMode::ScaleAspectFill => {
                let sx = bounds.width / image.width;
                let sy = bounds.height / image.height;
                let scale = if self == ContentMode::ScaleAspectFit {
                    sx.min(sy)
                } else {
                    sx.max(sy)
                };
                Size::new(image.width * scale, image.height * scale)
            }
            _ => image,
        };

        let anchor = self.anchor().unwrap_or(UnitPoint::CENTER);
        Rect::new(
            bounds.x + (bounds.width - size.width) * anchor.x,
            bounds.y + (bounds.height - size.height) * anchor.y,
            size.width,
            size.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    const SQUARE: Size = Size::new(50.0, 50.0);

    #[test]
    fn test_scale_modes() {
        assert_eq!(ContentMode::ScaleToFill.place(SQUARE, BOUNDS), BOUNDS);
        assert_eq!(
            ContentMode::ScaleAspectFit.place(SQUARE, BOUNDS),
            Rect::new(50.0, 0.0, 100.0, 100.0)
        );
        assert_eq!(
            ContentMode::ScaleAspectFill.place(SQUARE, BOUNDS),
            Rect::new(0.0, -50.0, 200.0, 200.0)
        );
    }

    #[test]
    fn test_anchor_modes_keep_intrinsic_size() {
        assert_eq!(
            ContentMode::Center.place(SQUARE, BOUNDS),
            Rect::new(75.0, 25.0, 50.0, 50.0)
        );
        assert_eq!(
            ContentMode::TopLeft.place(SQUARE, BOUNDS),
            Rect::new(0.0, 0.0, 50.0, 50.0)
        );
        assert_eq!(
            ContentMode::BottomRight.place(SQUARE, BOUNDS),
            Rect::new(150.0, 50.0, 50.0, 50.0)
        );
        assert_eq!(
            ContentMode::Right.place(SQUARE, BOUNDS),
            Rect::new(150.0, 25.0, 50.0, 50.0)
        );
        assert_eq!(
            ContentMode::Top.place(SQUARE, BOUNDS),
            Rect::new(75.0, 0.0, 50.0, 50.0)
        );
    }

    #[test]
    fn test_empty_image_fills_bounds() {
        assert_eq!(ContentMode::Center.place(Size::ZERO, BOUNDS), BOUNDS);
    }
}
