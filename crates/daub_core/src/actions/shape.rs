//! Actions that set or clear the current path

use std::fmt;

use daub_paint::{Path, Rect};

use crate::chain::{Action, Next};
use crate::error::Result;
use crate::state::RenderState;

/// Builds a path from the current rect
pub enum ShapeGenerator {
    Rect,
    RoundedRect { radius: f32 },
    Ellipse,
    /// Rounded rect with fully round ends
    Capsule,
    Custom(Box<dyn Fn(Rect) -> Path>),
}

impl ShapeGenerator {
    pub fn custom(f: impl Fn(Rect) -> Path + 'static) -> Self {
        ShapeGenerator::Custom(Box::new(f))
    }

    pub fn generate(&self, rect: Rect) -> Path {
        match self {
            ShapeGenerator::Rect => Path::rect(rect),
            ShapeGenerator::RoundedRect { radius } => Path::rounded_rect(rect, *radius),
            ShapeGenerator::Ellipse => Path::ellipse(rect),
            ShapeGenerator::Capsule => Path::capsule(rect),
            ShapeGenerator::Custom(f) => f(rect),
        }
    }
}

impl fmt::Debug for ShapeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeGenerator::Rect => f.write_str("Rect"),
            ShapeGenerator::RoundedRect { radius } => f
                .debug_struct("RoundedRect")
                .field("radius", radius)
                .finish(),
            ShapeGenerator::Ellipse => f.write_str("Ellipse"),
            ShapeGenerator::Capsule => f.write_str("Capsule"),
            ShapeGenerator::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Set the current path to a shape generated from the current rect
#[derive(Debug)]
pub struct Shape {
    generator: ShapeGenerator,
}

impl Shape {
    pub fn new(generator: ShapeGenerator) -> Self {
        Self { generator }
    }

    pub fn rounded(radius: f32) -> Self {
        Self::new(ShapeGenerator::RoundedRect { radius })
    }
}

impl Action for Shape {
    fn name(&self) -> &'static str {
        "shape"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.scoped(|scope| {
            let path = self.generator.generate(scope.rect());
            scope.set_path(path);
            next.run(scope)
        })
    }
}

/// Set the current path to a fixed path
///
/// A relative path is given in unit coordinates and mapped into the current
/// rect at draw time; otherwise it is used as is.
#[derive(Clone, Debug)]
pub struct SetPath {
    path: Path,
    relative: bool,
}

impl SetPath {
    pub fn absolute(path: Path) -> Self {
        Self {
            path,
            relative: false,
        }
    }

    pub fn relative(path: Path) -> Self {
        Self {
            path,
            relative: true,
        }
    }
}

impl Action for SetPath {
    fn name(&self) -> &'static str {
        "path"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.scoped(|scope| {
            let path = if self.relative {
                self.path.mapped_into(scope.rect())
            } else {
                self.path.clone()
            };
            scope.set_path(path);
            next.run(scope)
        })
    }
}

/// Drop the current path so the rest of the chain works on the rect
#[derive(Clone, Copy, Debug, Default)]
pub struct ClearPath;

impl Action for ClearPath {
    fn name(&self) -> &'static str {
        "clear_path"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.scoped(|scope| {
            scope.clear_path();
            next.run(scope)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Fill;
    use crate::chain::Chain;
    use crate::render::render;
    use daub_paint::{Color, DrawCommand, FillRule, PathBuilder, RecordingContext};

    const R: Rect = Rect::new(10.0, 10.0, 40.0, 20.0);

    #[test]
    fn test_shape_fill_uses_path() {
        let chain = Chain::new(Shape::rounded(4.0)).then(Fill::new(Color::RED));
        let mut device = RecordingContext::new();
        render(&chain, R, Some(&mut device)).unwrap();

        assert!(device.commands().contains(&DrawCommand::FillPath {
            path: Path::rounded_rect(R, 4.0),
            rule: FillRule::NonZero,
        }));
    }

    #[test]
    fn test_custom_generator() {
        let generator = ShapeGenerator::custom(|rect| {
            PathBuilder::new()
                .move_to(rect.x, rect.max_y())
                .line_to(rect.center().x, rect.y)
                .line_to(rect.max_x(), rect.max_y())
                .close()
                .build()
        });
        assert_eq!(format!("{generator:?}"), "Custom(..)");
        assert_eq!(generator.generate(R).bounds(), Some(R));
    }

    #[test]
    fn test_relative_path_maps_into_rect() {
        let unit = Path::rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        let chain = Chain::new(SetPath::relative(unit)).then(Fill::new(Color::RED));
        let mut device = RecordingContext::new();
        render(&chain, R, Some(&mut device)).unwrap();

        assert!(device.commands().contains(&DrawCommand::FillPath {
            path: Path::rect(R),
            rule: FillRule::NonZero,
        }));
    }

    #[test]
    fn test_clear_path_falls_back_to_rect() {
        let chain = Chain::new(Shape::new(ShapeGenerator::Ellipse))
            .then(ClearPath)
            .then(Fill::new(Color::RED));
        let mut device = RecordingContext::new();
        render(&chain, R, Some(&mut device)).unwrap();

        assert!(device.commands().contains(&DrawCommand::FillRect(R)));
    }
}
