//! Gradient fills

use daub_paint::{Gradient, UnitPoint};

use crate::chain::{Action, Chain, Next};
use crate::error::Result;
use crate::state::RenderState;

use super::clip::{Clip, ClipSource};
use super::clip_to_current;

/// Fill the current path (or rect) with a linear gradient
///
/// `start` and `end` are unit points resolved against the current rect.
#[derive(Debug)]
pub struct LinearGradient {
    gradient: Gradient,
    start: UnitPoint,
    end: UnitPoint,
}

impl LinearGradient {
    /// Top to bottom
    pub fn new(gradient: Gradient) -> Self {
        Self::between(gradient, UnitPoint::TOP, UnitPoint::BOTTOM)
    }

    pub fn between(gradient: Gradient, start: UnitPoint, end: UnitPoint) -> Self {
        Self {
            gradient,
            start,
            end,
        }
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }
}

impl Action for LinearGradient {
    fn name(&self) -> &'static str {
        "linear_gradient"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.device_scoped(|scope| {
            let (rect, path, mut device) = scope.parts();
            clip_to_current(&mut device, rect, path);
            device.draw_linear_gradient(
                self.gradient.resolved(),
                rect.point_at(self.start),
                rect.point_at(self.end),
            );
        });
        next.run(state)
    }
}

/// Fill the current path (or rect) with a radial gradient
///
/// Radii are fractions of half the rect's shorter side, so `0.0 -> 1.0`
/// spreads from the center to the nearest edge.
#[derive(Debug)]
pub struct RadialGradient {
    gradient: Gradient,
    center: UnitPoint,
    start_radius: f32,
    end_radius: f32,
}

impl RadialGradient {
    pub fn new(gradient: Gradient) -> Self {
        Self {
            gradient,
            center: UnitPoint::CENTER,
            start_radius: 0.0,
            end_radius: 1.0,
        }
    }

    pub fn with_center(mut self, center: UnitPoint) -> Self {
        self.center = center;
        self
    }

    pub fn with_radii(mut self, start: f32, end: f32) -> Self {
        self.start_radius = start;
        self.end_radius = end;
        self
    }
}

impl Action for RadialGradient {
    fn name(&self) -> &'static str {
        "radial_gradient"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.device_scoped(|scope| {
            let (rect, path, mut device) = scope.parts();
            clip_to_current(&mut device, rect, path);
            let center = rect.point_at(self.center);
            let unit = rect.width.min(rect.height) / 2.0;
            device.draw_radial_gradient(
                self.gradient.resolved(),
                center,
                self.start_radius * unit,
                center,
                self.end_radius * unit,
            );
        });
        next.run(state)
    }
}

/// Paint a gradient into an inset outline of the current path
///
/// The outline is `width` wide and lies inside the path: the device clip is
/// narrowed to the path, then to the path's stroke at twice the width, and the
/// gradient fills what is left. Requires a current path.
#[derive(Debug)]
pub struct BorderGradient {
    width: f32,
    fill: Chain,
}

impl BorderGradient {
    pub fn new(width: f32, gradient: LinearGradient) -> Self {
        Self::with_fill(width, gradient)
    }

    pub fn radial(width: f32, gradient: RadialGradient) -> Self {
        Self::with_fill(width, gradient)
    }

    fn with_fill(width: f32, fill: impl Action + 'static) -> Self {
        let fill = Chain::new(Clip::new(ClipSource::CurrentPath))
            .then(Clip::new(ClipSource::StrokedPath { width: width * 2.0 }))
            .then(fill);
        Self { width, fill }
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Action for BorderGradient {
    fn name(&self) -> &'static str {
        "border_gradient"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.require_path(self.name())?;
        state.device_scoped(|scope| self.fill.execute(scope))?;
        next.run(state)
    }
}
