//! Device context - the immediate-mode drawing API chains render into
//!
//! [`DrawContext`] is the seam between the chain engine and whatever actually
//! puts pixels on a surface. It mirrors a conventional 2D graphics context:
//! a save/restore state stack, state setters, clipping, and draw calls that use
//! the current state.
//!
//! [`RecordingContext`] implements the trait by recording every call as a
//! [`DrawCommand`] and tracking the graphics state the way a real context would,
//! so the recorded log can be inspected, serialized, or replayed.

use serde::Serialize;

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};
use crate::gradient::ResolvedGradient;
use crate::image::ImageRef;
use crate::path::{Path, PathBuilder};
use crate::style::{BlendMode, Dash, FillRule, LineCap, Shadow};
use crate::text::AttributedText;

/// Token returned by [`DrawContext::save`]
///
/// Callers hold on to markers to check that restores pair with the save they
/// expect. The value is the save depth *after* the save.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SaveMarker(pub usize);

/// Immediate-mode 2D drawing backend
pub trait DrawContext {
    // ─────────────────────────────────────────────────────────────────────────
    // State Stack
    // ─────────────────────────────────────────────────────────────────────────

    /// Push a copy of the current graphics state
    fn save(&mut self) -> SaveMarker;

    /// Pop back to the most recently saved graphics state
    fn restore(&mut self);

    // ─────────────────────────────────────────────────────────────────────────
    // State Setters
    // ─────────────────────────────────────────────────────────────────────────

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_blend_mode(&mut self, mode: BlendMode);

    fn set_line_width(&mut self, width: f32);

    fn set_line_cap(&mut self, cap: LineCap);

    fn set_line_dash(&mut self, dash: &Dash);

    /// Global alpha multiplied into every subsequent draw
    fn set_alpha(&mut self, alpha: f32);

    fn set_shadow(&mut self, shadow: Shadow);

    // ─────────────────────────────────────────────────────────────────────────
    // Clipping (intersects with the current clip)
    // ─────────────────────────────────────────────────────────────────────────

    fn clip_to_rect(&mut self, rect: Rect);

    fn clip_to_path(&mut self, path: &Path, rule: FillRule);

    /// Clip to the area covered by stroking `path` with `width`
    fn clip_to_stroked_path(&mut self, path: &Path, width: f32);

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing
    // ─────────────────────────────────────────────────────────────────────────

    fn fill_rect(&mut self, rect: Rect);

    fn stroke_rect(&mut self, rect: Rect);

    fn fill_path(&mut self, path: &Path, rule: FillRule);

    fn stroke_path(&mut self, path: &Path);

    /// Stroke disjoint segments, one per pair of points
    ///
    /// Default implementation strokes a path of move/line pairs.
    fn stroke_line_segments(&mut self, points: &[Point]) {
        let path = points
            .chunks_exact(2)
            .fold(PathBuilder::new(), |builder, pair| {
                builder
                    .move_to(pair[0].x, pair[0].y)
                    .line_to(pair[1].x, pair[1].y)
            })
            .build();
        self.stroke_path(&path);
    }

    /// Fill the current clip with a linear gradient along `start` -> `end`
    fn draw_linear_gradient(&mut self, gradient: &ResolvedGradient, start: Point, end: Point);

    /// Fill the current clip with a radial gradient between two circles
    fn draw_radial_gradient(
        &mut self,
        gradient: &ResolvedGradient,
        start_center: Point,
        start_radius: f32,
        end_center: Point,
        end_radius: f32,
    );

    fn draw_image(&mut self, image: &ImageRef, rect: Rect, blend: BlendMode, alpha: f32);

    /// Size of `text` laid out with at most `max_width` per line
    ///
    /// A `max_width` of zero or less means unconstrained.
    fn measure_text(&self, text: &AttributedText, max_width: f32) -> Size;

    fn draw_text(&mut self, text: &AttributedText, rect: Rect);

    // ─────────────────────────────────────────────────────────────────────────
    // Transparency Layers
    // ─────────────────────────────────────────────────────────────────────────

    /// Start compositing subsequent draws into an offscreen group
    fn begin_transparency_layer(&mut self);

    /// Composite the current group back using the alpha/shadow/blend in effect
    /// when it began
    fn end_transparency_layer(&mut self);
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Context
// ─────────────────────────────────────────────────────────────────────────────

/// A device call that was recorded
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawCommand {
    // State
    Save,
    Restore,
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetBlendMode(BlendMode),
    SetLineWidth(f32),
    SetLineCap(LineCap),
    SetLineDash(Dash),
    SetAlpha(f32),
    SetShadow(Shadow),

    // Clipping
    ClipToRect(Rect),
    ClipToPath {
        path: Path,
        rule: FillRule,
    },
    ClipToStrokedPath {
        path: Path,
        width: f32,
    },

    // Drawing
    FillRect(Rect),
    StrokeRect(Rect),
    FillPath {
        path: Path,
        rule: FillRule,
    },
    StrokePath(Path),
    StrokeLineSegments(Vec<Point>),
    DrawLinearGradient {
        gradient: ResolvedGradient,
        start: Point,
        end: Point,
    },
    DrawRadialGradient {
        gradient: ResolvedGradient,
        start_center: Point,
        start_radius: f32,
        end_center: Point,
        end_radius: f32,
    },
    DrawImage {
        image: ImageRef,
        rect: Rect,
        blend: BlendMode,
        alpha: f32,
    },
    DrawText {
        text: String,
        rect: Rect,
    },

    // Layers
    BeginTransparencyLayer,
    EndTransparencyLayer,
}

impl DrawCommand {
    /// True for commands that put marks on the surface
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            DrawCommand::FillRect(_)
                | DrawCommand::StrokeRect(_)
                | DrawCommand::FillPath { .. }
                | DrawCommand::StrokePath(_)
                | DrawCommand::StrokeLineSegments(_)
                | DrawCommand::DrawLinearGradient { .. }
                | DrawCommand::DrawRadialGradient { .. }
                | DrawCommand::DrawImage { .. }
                | DrawCommand::DrawText { .. }
        )
    }
}

/// The saveable part of a device's state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphicsState {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub line_width: f32,
    pub line_cap: LineCap,
    pub dash: Dash,
    pub blend_mode: BlendMode,
    pub alpha: f32,
    pub shadow: Shadow,
    /// Number of clips intersected into the current clip region
    pub clip_depth: usize,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            line_cap: LineCap::Butt,
            dash: Dash::solid(),
            blend_mode: BlendMode::Normal,
            alpha: 1.0,
            shadow: Shadow::none(),
            clip_depth: 0,
        }
    }
}

/// Recording implementation of [`DrawContext`]
///
/// Every call is appended to the command log together with the graphics state
/// in effect once the call completed.
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    states: Vec<GraphicsState>,
    state: GraphicsState,
    saved: Vec<GraphicsState>,
    layer_depth: usize,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.states.clear();
        std::mem::take(&mut self.commands)
    }

    /// Graphics state right after the command at `index` ran
    pub fn state_after(&self, index: usize) -> Option<&GraphicsState> {
        self.states.get(index)
    }

    /// Drawing commands paired with the state they were drawn with
    pub fn draws(&self) -> impl Iterator<Item = (&DrawCommand, &GraphicsState)> + '_ {
        self.commands
            .iter()
            .zip(self.states.iter())
            .filter(|(command, _)| command.is_draw())
    }

    /// Current graphics state
    pub fn state(&self) -> &GraphicsState {
        &self.state
    }

    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn layer_depth(&self) -> usize {
        self.layer_depth
    }

    /// Clear all recorded commands and reset to the initial state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn record(&mut self, command: DrawCommand) {
        self.commands.push(command);
        self.states.push(self.state.clone());
    }
}

impl DrawContext for RecordingContext {
    fn save(&mut self) -> SaveMarker {
        self.saved.push(self.state.clone());
        self.record(DrawCommand::Save);
        SaveMarker(self.saved.len())
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => tracing::warn!("restore without a matching save; ignoring"),
        }
        self.record(DrawCommand::Restore);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
        self.record(DrawCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
        self.record(DrawCommand::SetStrokeColor(color));
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.state.blend_mode = mode;
        self.record(DrawCommand::SetBlendMode(mode));
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
        self.record(DrawCommand::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
        self.record(DrawCommand::SetLineCap(cap));
    }

    fn set_line_dash(&mut self, dash: &Dash) {
        self.state.dash = dash.clone();
        self.record(DrawCommand::SetLineDash(dash.clone()));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha;
        self.record(DrawCommand::SetAlpha(alpha));
    }

    fn set_shadow(&mut self, shadow: Shadow) {
        self.state.shadow = shadow;
        self.record(DrawCommand::SetShadow(shadow));
    }

    fn clip_to_rect(&mut self, rect: Rect) {
        self.state.clip_depth += 1;
        self.record(DrawCommand::ClipToRect(rect));
    }

    fn clip_to_path(&mut self, path: &Path, rule: FillRule) {
        self.state.clip_depth += 1;
        self.record(DrawCommand::ClipToPath {
            path: path.clone(),
            rule,
        });
    }

    fn clip_to_stroked_path(&mut self, path: &Path, width: f32) {
        self.state.clip_depth += 1;
        self.record(DrawCommand::ClipToStrokedPath {
            path: path.clone(),
            width,
        });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.record(DrawCommand::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.record(DrawCommand::StrokeRect(rect));
    }

    fn fill_path(&mut self, path: &Path, rule: FillRule) {
        self.record(DrawCommand::FillPath {
            path: path.clone(),
            rule,
        });
    }

    fn stroke_path(&mut self, path: &Path) {
        self.record(DrawCommand::StrokePath(path.clone()));
    }

    fn stroke_line_segments(&mut self, points: &[Point]) {
        self.record(DrawCommand::StrokeLineSegments(points.to_vec()));
    }

    fn draw_linear_gradient(&mut self, gradient: &ResolvedGradient, start: Point, end: Point) {
        self.record(DrawCommand::DrawLinearGradient {
            gradient: gradient.clone(),
            start,
            end,
        });
    }

    fn draw_radial_gradient(
        &mut self,
        gradient: &ResolvedGradient,
        start_center: Point,
        start_radius: f32,
        end_center: Point,
        end_radius: f32,
    ) {
        self.record(DrawCommand::DrawRadialGradient {
            gradient: gradient.clone(),
            start_center,
            start_radius,
            end_center,
            end_radius,
        });
    }

    fn draw_image(&mut self, image: &ImageRef, rect: Rect, blend: BlendMode, alpha: f32) {
        self.record(DrawCommand::DrawImage {
            image: *image,
            rect,
            blend,
            alpha,
        });
    }

    /// Fixed advance model: each char is half the font size wide (plus letter
    /// spacing), each line is `size * line_height` tall.
    fn measure_text(&self, text: &AttributedText, max_width: f32) -> Size {
        let mut width = 0.0f32;
        let mut line_height = 0.0f32;
        for span in text.spans() {
            let chars = span.text.chars().count() as f32;
            width += chars * (span.style.size * 0.5 + span.style.letter_spacing);
            line_height = line_height.max(span.style.size * span.style.line_height);
        }
        if width <= 0.0 {
            return Size::ZERO;
        }
        if max_width > 0.0 && width > max_width {
            let lines = (width / max_width).ceil();
            Size::new(max_width, lines * line_height)
        } else {
            Size::new(width, line_height)
        }
    }

    fn draw_text(&mut self, text: &AttributedText, rect: Rect) {
        self.record(DrawCommand::DrawText {
            text: text.to_plain_string(),
            rect,
        });
    }

    fn begin_transparency_layer(&mut self) {
        self.layer_depth += 1;
        self.record(DrawCommand::BeginTransparencyLayer);
    }

    fn end_transparency_layer(&mut self) {
        match self.layer_depth.checked_sub(1) {
            Some(depth) => self.layer_depth = depth,
            None => tracing::warn!("end_transparency_layer without a matching begin; ignoring"),
        }
        self.record(DrawCommand::EndTransparencyLayer);
    }
}
