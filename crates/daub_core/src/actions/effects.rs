//! Device-state effects that apply to the rest of the chain

use daub_paint::{BlendMode, Shadow};

use crate::chain::{Action, Next};
use crate::error::Result;
use crate::state::RenderState;

/// Cast a shadow from everything the rest of the chain draws
#[derive(Clone, Copy, Debug)]
pub struct DropShadow {
    shadow: Shadow,
}

impl DropShadow {
    pub fn new(shadow: Shadow) -> Self {
        Self { shadow }
    }
}

impl Action for DropShadow {
    fn name(&self) -> &'static str {
        "shadow"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.device_scoped(|scope| {
            scope.device().set_shadow(self.shadow);
            next.run(scope)
        })
    }
}

/// Set the blend mode for the rest of the chain
#[derive(Clone, Copy, Debug)]
pub struct Blend {
    mode: BlendMode,
}

impl Blend {
    pub fn new(mode: BlendMode) -> Self {
        Self { mode }
    }
}

impl Action for Blend {
    fn name(&self) -> &'static str {
        "blend"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.device_scoped(|scope| {
            scope.device().set_blend_mode(self.mode);
            next.run(scope)
        })
    }
}

/// Multiply the rest of the chain by a global alpha
#[derive(Clone, Copy, Debug)]
pub struct Alpha {
    alpha: f32,
}

impl Alpha {
    /// `alpha` is clamped to `0.0..=1.0`
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

impl Action for Alpha {
    fn name(&self) -> &'static str {
        "alpha"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.layer_scoped(|scope| {
            scope.device().set_alpha(self.alpha);
            next.run(scope)
        })
    }
}

/// Composite the rest of the chain as one group
///
/// Shadows and alpha set before the layer apply to the group as a whole
/// instead of to each draw inside it. The layer is closed even when the rest
/// of the chain fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransparencyLayer;

impl Action for TransparencyLayer {
    fn name(&self) -> &'static str {
        "transparency_layer"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.layer_scoped(|scope| {
            scope.device().begin_transparency_layer();
            let result = next.run(scope);
            scope.device().end_transparency_layer();
            result
        })
    }
}
