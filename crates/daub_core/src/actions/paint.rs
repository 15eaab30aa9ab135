//! Solid fills and strokes

use daub_paint::{BlendMode, Color, Dash, FillRule, LineCap, Point, UnitPoint};

use crate::chain::{Action, Next};
use crate::error::{ChainError, Result};
use crate::state::RenderState;

/// Fill the current path, or the current rect when no path is set
#[derive(Clone, Debug)]
pub struct Fill {
    color: Color,
    blend: Option<BlendMode>,
    rule: FillRule,
}

impl Fill {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            blend: None,
            rule: FillRule::NonZero,
        }
    }

    pub fn with_blend(mut self, mode: BlendMode) -> Self {
        self.blend = Some(mode);
        self
    }

    pub fn with_rule(mut self, rule: FillRule) -> Self {
        self.rule = rule;
        self
    }
}

impl Action for Fill {
    fn name(&self) -> &'static str {
        "fill"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.device_scoped(|scope| {
            let (rect, path, mut device) = scope.parts();
            if let Some(mode) = self.blend {
                device.set_blend_mode(mode);
            }
            device.set_fill_color(self.color);
            match path {
                Some(path) => device.fill_path(path, self.rule),
                None => device.fill_rect(rect),
            }
        });
        next.run(state)
    }
}

/// Stroke the current path, or the current rect when no path is set
#[derive(Clone, Debug)]
pub struct Border {
    color: Color,
    width: f32,
    dash: Option<Dash>,
}

impl Border {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn with_dash(mut self, dash: Dash) -> Self {
        self.dash = Some(dash);
        self
    }
}

impl Action for Border {
    fn name(&self) -> &'static str {
        "border"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        // A stroke on an empty rect would still show at full line width
        if state.path().is_none() && state.rect().is_empty() {
            return next.run(state);
        }
        state.device_scoped(|scope| {
            let (rect, path, mut device) = scope.parts();
            device.set_stroke_color(self.color);
            device.set_line_width(self.width);
            if let Some(dash) = &self.dash {
                device.set_line_dash(dash);
            }
            match path {
                Some(path) => device.stroke_path(path),
                None => device.stroke_rect(rect),
            }
        });
        next.run(state)
    }
}

/// Stroke disjoint segments between pairs of unit points
///
/// Points are resolved against the current rect, so `(0, 0.5) -> (1, 0.5)`
/// is a horizontal rule through the middle whatever the rect's size.
#[derive(Clone, Debug)]
pub struct Line {
    color: Color,
    width: f32,
    cap: LineCap,
    points: Vec<UnitPoint>,
}

impl Line {
    pub fn new(
        color: Color,
        width: f32,
        points: impl IntoIterator<Item = UnitPoint>,
    ) -> std::result::Result<Self, ChainError> {
        let points: Vec<_> = points.into_iter().collect();
        if points.len() % 2 != 0 {
            return Err(ChainError::OddLinePoints(points.len()));
        }
        Ok(Self {
            color,
            width,
            cap: LineCap::Butt,
            points,
        })
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

impl Action for Line {
    fn name(&self) -> &'static str {
        "line"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        if !self.points.is_empty() && !state.rect().is_empty() {
            state.device_scoped(|scope| {
                let (rect, _, mut device) = scope.parts();
                let points: Vec<Point> = self.points.iter().map(|&p| rect.point_at(p)).collect();
                device.set_stroke_color(self.color);
                device.set_line_width(self.width);
                device.set_line_cap(self.cap);
                device.stroke_line_segments(&points);
            });
        }
        next.run(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Chain;
    use crate::render::render;
    use daub_paint::{DrawCommand, Rect, RecordingContext};

    const R: Rect = Rect::new(0.0, 0.0, 100.0, 40.0);

    #[test]
    fn test_fill_is_local() {
        let chain = Chain::new(Fill::new(Color::RED).with_blend(BlendMode::Multiply))
            .then(Fill::new(Color::BLUE));
        let mut device = RecordingContext::new();
        render(&chain, R, Some(&mut device)).unwrap();

        let draws: Vec<_> = device.draws().collect();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].1.blend_mode, BlendMode::Multiply);
        // The second fill must not inherit the first one's blend mode
        assert_eq!(draws[1].1.blend_mode, BlendMode::Normal);
        assert_eq!(draws[1].1.fill_color, Color::BLUE);
    }

    #[test]
    fn test_line_rejects_odd_points() {
        let err = Line::new(Color::BLACK, 1.0, [UnitPoint::TOP_LEFT]).unwrap_err();
        assert_eq!(err, ChainError::OddLinePoints(1));
    }

    #[test]
    fn test_line_maps_unit_points() {
        let line = Line::new(Color::BLACK, 2.0, [UnitPoint::LEFT, UnitPoint::RIGHT]).unwrap();
        let mut device = RecordingContext::new();
        render(&Chain::new(line), R, Some(&mut device)).unwrap();

        assert!(device.commands().contains(&DrawCommand::StrokeLineSegments(vec![
            Point::new(0.0, 20.0),
            Point::new(100.0, 20.0),
        ])));
    }

    #[test]
    fn test_dashed_border_call_sequence() {
        let dash = Dash::new(0.0, [4.0, 2.0]);
        let chain = Chain::new(Border::new(Color::RED, 2.0).with_dash(dash.clone()));
        let mut device = RecordingContext::new();
        render(&chain, R, Some(&mut device)).unwrap();

        assert_eq!(
            device.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::SetStrokeColor(Color::RED),
                DrawCommand::SetLineWidth(2.0),
                DrawCommand::SetLineDash(dash.clone()),
                DrawCommand::StrokeRect(R),
                DrawCommand::Restore,
            ]
        );
        assert_eq!(device.state().dash, Dash::solid());
    }

    #[test]
    fn test_strokes_skip_empty_rect() {
        let line = Line::new(Color::BLACK, 4.0, [UnitPoint::TOP, UnitPoint::BOTTOM])
            .unwrap()
            .with_cap(LineCap::Round);
        let chain = Chain::new(Border::new(Color::RED, 4.0))
            .then(line)
            .then(Fill::new(Color::BLUE));
        let empty = Rect::new(100.0, 0.0, 0.0, 40.0);
        let mut device = RecordingContext::new();
        let stats = render(&chain, empty, Some(&mut device)).unwrap();

        assert_eq!(stats.actions, 3);
        assert!(!device.commands().iter().any(|c| matches!(
            c,
            DrawCommand::StrokeRect(_) | DrawCommand::StrokeLineSegments(_)
        )));
    }
}
