//! Image and text content

use daub_paint::{AttributedText, BlendMode, ContentMode, ImageRef, Rect};

use crate::chain::{Action, Next};
use crate::error::Result;
use crate::state::RenderState;

/// Draw an image into the current rect
///
/// The image is placed per its [`ContentMode`] and clipped to the rect, so
/// aspect-fill overflow never spills outside.
#[derive(Clone, Copy, Debug)]
pub struct Image {
    image: ImageRef,
    mode: ContentMode,
    blend: BlendMode,
    alpha: f32,
}

impl Image {
    pub fn new(image: ImageRef) -> Self {
        Self {
            image,
            mode: ContentMode::default(),
            blend: BlendMode::Normal,
            alpha: 1.0,
        }
    }

    pub fn with_mode(mut self, mode: ContentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

impl Action for Image {
    fn name(&self) -> &'static str {
        "image"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.device_scoped(|scope| {
            let (rect, _, mut device) = scope.parts();
            device.clip_to_rect(rect);
            let placed = self.mode.place(self.image.size, rect);
            device.draw_image(&self.image, placed, self.blend, self.alpha);
        });
        next.run(state)
    }
}

/// Draw attributed text vertically centered in the current rect
#[derive(Clone, Debug)]
pub struct Text {
    text: AttributedText,
}

impl Text {
    pub fn new(text: AttributedText) -> Self {
        Self { text }
    }
}

impl Action for Text {
    fn name(&self) -> &'static str {
        "text"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        // A zero max width would measure as unconstrained
        if !self.text.is_empty() && !state.rect().is_empty() {
            state.device_scoped(|scope| {
                let (rect, _, mut device) = scope.parts();
                let size = device.measure_text(&self.text, rect.width);
                let target = Rect::new(
                    rect.x,
                    rect.y + (rect.height - size.height) / 2.0,
                    rect.width,
                    size.height,
                );
                device.draw_text(&self.text, target);
            });
        }
        next.run(state)
    }
}
