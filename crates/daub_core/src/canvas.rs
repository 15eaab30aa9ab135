//! The device as actions see it
//!
//! [`Canvas`] forwards every [`DrawContext`] call except `save` and
//! `restore`. The device's state stack belongs to the scope guards in
//! [`crate::state`]; an action that wants its changes undone opens a device
//! scope instead of saving by hand.
//!
//! ```compile_fail
//! use daub_core::RenderState;
//!
//! fn save_by_hand(state: &mut RenderState<'_>) {
//!     state.device().save();
//! }
//! ```

use daub_paint::{
    AttributedText, BlendMode, Color, Dash, DrawContext, FillRule, ImageRef, LineCap, Path,
    Point, Rect, ResolvedGradient, Shadow, Size,
};

/// A borrowed device without access to its state stack
pub struct Canvas<'s, 'a> {
    device: &'s mut (dyn DrawContext + 'a),
}

impl<'s, 'a> Canvas<'s, 'a> {
    pub(crate) fn new(device: &'s mut (dyn DrawContext + 'a)) -> Self {
        Self { device }
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.device.set_fill_color(color);
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.device.set_stroke_color(color);
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.device.set_blend_mode(mode);
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.device.set_line_width(width);
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.device.set_line_cap(cap);
    }

    pub fn set_line_dash(&mut self, dash: &Dash) {
        self.device.set_line_dash(dash);
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.device.set_alpha(alpha);
    }

    pub fn set_shadow(&mut self, shadow: Shadow) {
        self.device.set_shadow(shadow);
    }

    pub fn clip_to_rect(&mut self, rect: Rect) {
        self.device.clip_to_rect(rect);
    }

    pub fn clip_to_path(&mut self, path: &Path, rule: FillRule) {
        self.device.clip_to_path(path, rule);
    }

    pub fn clip_to_stroked_path(&mut self, path: &Path, width: f32) {
        self.device.clip_to_stroked_path(path, width);
    }

    pub fn fill_rect(&mut self, rect: Rect) {
        self.device.fill_rect(rect);
    }

    pub fn stroke_rect(&mut self, rect: Rect) {
        self.device.stroke_rect(rect);
    }

    pub fn fill_path(&mut self, path: &Path, rule: FillRule) {
        self.device.fill_path(path, rule);
    }

    pub fn stroke_path(&mut self, path: &Path) {
        self.device.stroke_path(path);
    }

    pub fn stroke_line_segments(&mut self, points: &[Point]) {
        self.device.stroke_line_segments(points);
    }

    pub fn draw_linear_gradient(&mut self, gradient: &ResolvedGradient, start: Point, end: Point) {
        self.device.draw_linear_gradient(gradient, start, end);
    }

    pub fn draw_radial_gradient(
        &mut self,
        gradient: &ResolvedGradient,
        start_center: Point,
        start_radius: f32,
        end_center: Point,
        end_radius: f32,
    ) {
        self.device
            .draw_radial_gradient(gradient, start_center, start_radius, end_center, end_radius);
    }

    pub fn draw_image(&mut self, image: &ImageRef, rect: Rect, blend: BlendMode, alpha: f32) {
        self.device.draw_image(image, rect, blend, alpha);
    }

    pub fn measure_text(&self, text: &AttributedText, max_width: f32) -> Size {
        self.device.measure_text(text, max_width)
    }

    pub fn draw_text(&mut self, text: &AttributedText, rect: Rect) {
        self.device.draw_text(text, rect);
    }

    /// Layers are opened only by `TransparencyLayer`, which always ends them
    pub(crate) fn begin_transparency_layer(&mut self) {
        self.device.begin_transparency_layer();
    }

    pub(crate) fn end_transparency_layer(&mut self) {
        self.device.end_transparency_layer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Action, Chain, Next};
    use crate::error::Result;
    use crate::render::render;
    use crate::state::RenderState;
    use daub_paint::{DrawCommand, RecordingContext};

    const R: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    /// Draws through the canvas without opening a device scope
    #[derive(Debug)]
    struct Unscoped;

    impl Action for Unscoped {
        fn name(&self) -> &'static str {
            "unscoped"
        }

        fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
            let rect = state.rect();
            let mut canvas = state.device();
            canvas.set_fill_color(Color::RED);
            canvas.fill_rect(rect);
            next.run(state)
        }
    }

    #[test]
    fn test_canvas_forwards_draw_calls() {
        let mut device = RecordingContext::new();
        render(&Chain::new(Unscoped), R, Some(&mut device)).unwrap();

        assert_eq!(
            device.commands(),
            &[DrawCommand::SetFillColor(Color::RED), DrawCommand::FillRect(R)]
        );
    }

    #[test]
    fn test_actions_cannot_unbalance_the_device() {
        // Unscoped state changes leak, but the save depth is owned by scopes
        let chain = Chain::new(Unscoped).then(crate::actions::Fill::new(Color::BLUE));
        let mut device = RecordingContext::new();
        let stats = render(&chain, R, Some(&mut device)).unwrap();

        assert_eq!(stats.actions, 2);
        assert_eq!(stats.max_device_depth, 1);
        assert_eq!(device.save_depth(), 0);
    }
}
