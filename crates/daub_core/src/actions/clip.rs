//! Clipping the rest of the chain

use daub_paint::{FillRule, Path};

use crate::chain::{Action, Next};
use crate::error::Result;
use crate::state::RenderState;

/// What a [`Clip`] intersects the device clip with
#[derive(Clone, Debug, PartialEq)]
pub enum ClipSource {
    CurrentRect,
    /// Requires a current path
    CurrentPath,
    /// The area covered by stroking the current path; requires a path
    StrokedPath { width: f32 },
    /// A fixed path in absolute coordinates
    Path(Path),
}

impl ClipSource {
    fn needs_path(&self) -> bool {
        matches!(self, ClipSource::CurrentPath | ClipSource::StrokedPath { .. })
    }
}

/// Narrow the device clip for the rest of the chain
#[derive(Clone, Debug)]
pub struct Clip {
    source: ClipSource,
}

impl Clip {
    pub fn new(source: ClipSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &ClipSource {
        &self.source
    }
}

impl Action for Clip {
    fn name(&self) -> &'static str {
        "clip"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        if self.source.needs_path() {
            state.require_path(self.name())?;
        }

        state.device_scoped(|scope| {
            let (rect, path, mut device) = scope.parts();
            match (&self.source, path) {
                (ClipSource::CurrentRect, _) => device.clip_to_rect(rect),
                (ClipSource::CurrentPath, Some(path)) => {
                    device.clip_to_path(path, FillRule::NonZero)
                }
                (ClipSource::StrokedPath { width }, Some(path)) => {
                    device.clip_to_stroked_path(path, *width)
                }
                (ClipSource::Path(fixed), _) => device.clip_to_path(fixed, FillRule::NonZero),
                (ClipSource::CurrentPath | ClipSource::StrokedPath { .. }, None) => {}
            }
            next.run(scope)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Fill, Shape, ShapeGenerator};
    use crate::chain::Chain;
    use crate::error::RenderError;
    use crate::render::render;
    use daub_paint::{Color, DrawCommand, Rect, RecordingContext};

    const R: Rect = Rect::new(0.0, 0.0, 10.0, 10.0);

    #[test]
    fn test_clip_applies_to_successor_only() {
        let chain = Chain::new(Clip::new(ClipSource::CurrentRect)).then(Fill::new(Color::RED));
        let mut device = RecordingContext::new();
        render(&chain, R, Some(&mut device)).unwrap();

        let (_, fill_state) = device.draws().next().unwrap();
        assert_eq!(fill_state.clip_depth, 1);
        assert_eq!(device.state().clip_depth, 0);
    }

    #[test]
    fn test_stroked_clip_needs_path() {
        let chain = Chain::new(Clip::new(ClipSource::StrokedPath { width: 2.0 }));
        let mut device = RecordingContext::new();
        let err = render(&chain, R, Some(&mut device)).unwrap_err();
        assert_eq!(err, RenderError::MissingPath { action: "clip" });
        assert!(device.commands().is_empty());
    }

    #[test]
    fn test_current_path_clip() {
        let chain = Chain::new(Shape::new(ShapeGenerator::Ellipse))
            .then(Clip::new(ClipSource::CurrentPath))
            .then(Fill::new(Color::RED));
        let mut device = RecordingContext::new();
        render(&chain, R, Some(&mut device)).unwrap();

        assert!(device.commands().contains(&DrawCommand::ClipToPath {
            path: Path::ellipse(R),
            rule: FillRule::NonZero,
        }));
    }
}
