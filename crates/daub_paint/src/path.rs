//! Path building and representation

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::{Point, Rect};

/// Cubic control-point factor for approximating a quarter circle
const KAPPA: f32 = 0.552_284_8;

/// Path command
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        control: Point,
        end: Point,
    },
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Close,
}

impl PathCommand {
    fn map_points(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::QuadTo { control, end } => PathCommand::QuadTo {
                control: f(control),
                end: f(end),
            },
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => PathCommand::CubicTo {
                control1: f(control1),
                control2: f(control2),
                end: f(end),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }

    fn points(&self) -> SmallVec<[Point; 3]> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => smallvec::smallvec![p],
            PathCommand::QuadTo { control, end } => smallvec::smallvec![control, end],
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => smallvec::smallvec![control1, control2, end],
            PathCommand::Close => SmallVec::new(),
        }
    }
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: impl IntoIterator<Item = PathCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Closed rectangle outline
    pub fn rect(rect: Rect) -> Self {
        PathBuilder::new()
            .move_to(rect.min_x(), rect.min_y())
            .line_to(rect.max_x(), rect.min_y())
            .line_to(rect.max_x(), rect.max_y())
            .line_to(rect.min_x(), rect.max_y())
            .close()
            .build()
    }

    /// Rectangle with circular corners; the radius is clamped to half the
    /// shorter side
    pub fn rounded_rect(rect: Rect, radius: f32) -> Self {
        let r = radius.max(0.0).min(rect.width.min(rect.height) / 2.0);
        if r <= 0.0 {
            return Self::rect(rect);
        }
        let k = r * (1.0 - KAPPA);
        let (x0, y0, x1, y1) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
        PathBuilder::new()
            .move_to(x0 + r, y0)
            .line_to(x1 - r, y0)
            .cubic_to(x1 - k, y0, x1, y0 + k, x1, y0 + r)
            .line_to(x1, y1 - r)
            .cubic_to(x1, y1 - k, x1 - k, y1, x1 - r, y1)
            .line_to(x0 + r, y1)
            .cubic_to(x0 + k, y1, x0, y1 - k, x0, y1 - r)
            .line_to(x0, y0 + r)
            .cubic_to(x0, y0 + k, x0 + k, y0, x0 + r, y0)
            .close()
            .build()
    }

    /// Ellipse inscribed in `rect`
    pub fn ellipse(rect: Rect) -> Self {
        let c = rect.center();
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        let ox = rx * KAPPA;
        let oy = ry * KAPPA;
        PathBuilder::new()
            .move_to(c.x + rx, c.y)
            .cubic_to(c.x + rx, c.y + oy, c.x + ox, c.y + ry, c.x, c.y + ry)
            .cubic_to(c.x - ox, c.y + ry, c.x - rx, c.y + oy, c.x - rx, c.y)
            .cubic_to(c.x - rx, c.y - oy, c.x - ox, c.y - ry, c.x, c.y - ry)
            .cubic_to(c.x + ox, c.y - ry, c.x + rx, c.y - oy, c.x + rx, c.y)
            .close()
            .build()
    }

    /// Rounded rect whose radius is half the shorter side
    pub fn capsule(rect: Rect) -> Self {
        Self::rounded_rect(rect, rect.width.min(rect.height) / 2.0)
    }

    /// Translate every point by a delta
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        self.map_points(|p| p.offset(dx, dy))
    }

    /// Treat this path as drawn in the unit square and map it onto `rect`
    pub fn mapped_into(&self, rect: Rect) -> Self {
        self.map_points(|p| Point::new(rect.x + p.x * rect.width, rect.y + p.y * rect.height))
    }

    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            commands: self.commands.iter().map(|c| c.map_points(&f)).collect(),
        }
    }

    /// Bounding box of all points, including control points
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.commands.iter().flat_map(PathCommand::points);
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Rect::from_points(min, max))
    }
}

/// Builder for constructing paths
#[derive(Debug)]
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::MoveTo(point));
        self.current = point;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::LineTo(point));
        self.current = point;
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        let end = Point::new(x, y);
        self.path.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end,
        });
        self.current = end;
        self
    }

    pub fn cubic_to(mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> Self {
        let end = Point::new(x, y);
        self.path.commands.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end,
        });
        self.current = end;
        self
    }

    /// Line relative to the current point
    pub fn line_by(self, dx: f32, dy: f32) -> Self {
        let Point { x, y } = self.current;
        self.line_to(x + dx, y + dy)
    }

    pub fn current_point(&self) -> Point {
        self.current
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_path() {
        let path = Path::rect(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(path.commands().len(), 5); // move + 3 lines + close
        assert_eq!(path.bounds(), Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
    }

    #[test]
    fn test_rounded_rect_clamps_radius() {
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
        assert_eq!(Path::rounded_rect(rect, 100.0), Path::capsule(rect));
        assert_eq!(Path::rounded_rect(rect, 0.0), Path::rect(rect));
        assert_eq!(Path::rounded_rect(rect, 5.0).bounds(), Some(rect));
    }

    #[test]
    fn test_ellipse_bounds() {
        let rect = Rect::new(10.0, 10.0, 80.0, 40.0);
        assert_eq!(Path::ellipse(rect).bounds(), Some(rect));
    }

    #[test]
    fn test_mapped_into_and_translated() {
        let unit = PathBuilder::new().move_to(0.0, 0.0).line_to(1.0, 1.0).build();
        let mapped = unit.mapped_into(Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(mapped.bounds(), Some(Rect::new(10.0, 20.0, 100.0, 50.0)));

        let moved = mapped.translated(5.0, -5.0);
        assert_eq!(moved.bounds(), Some(Rect::new(15.0, 15.0, 100.0, 50.0)));
    }

    #[test]
    fn test_empty_path_has_no_bounds() {
        assert!(Path::new().is_empty());
        assert_eq!(Path::new().bounds(), None);
    }
}
