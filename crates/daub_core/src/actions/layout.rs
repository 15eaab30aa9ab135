//! Actions that change the rect the rest of the chain draws into

use daub_paint::{EdgeInsets, RectEdge};

use crate::chain::{Action, Chain, Next};
use crate::error::Result;
use crate::state::RenderState;

/// Shrink the current rect for the rest of the chain
#[derive(Clone, Copy, Debug)]
pub struct Inset {
    insets: EdgeInsets,
}

impl Inset {
    pub fn new(insets: EdgeInsets) -> Self {
        Self { insets }
    }

    pub fn uniform(amount: f32) -> Self {
        Self::new(EdgeInsets::uniform(amount))
    }
}

impl Action for Inset {
    fn name(&self) -> &'static str {
        "inset"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.scoped(|scope| {
            let rect = scope.rect().inset_by(self.insets);
            scope.set_rect(rect);
            next.run(scope)
        })
    }
}

/// Translate the current rect and path for the rest of the chain
#[derive(Clone, Copy, Debug)]
pub struct Offset {
    dx: f32,
    dy: f32,
}

impl Offset {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Action for Offset {
    fn name(&self) -> &'static str {
        "offset"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        state.scoped(|scope| {
            let rect = scope.rect().offset(self.dx, self.dy);
            let path = scope.path().map(|path| path.translated(self.dx, self.dy));
            scope.set_rect(rect);
            if let Some(path) = path {
                scope.set_path(path);
            }
            next.run(scope)
        })
    }
}

/// Carve a slice off one edge of the current rect
///
/// The optional slice chain draws into the slice; the rest of the chain draws
/// into the remainder. Both run in their own logical scope with no current
/// path, and the slice chain runs first.
#[derive(Debug)]
pub struct Divide {
    amount: f32,
    padding: f32,
    edge: RectEdge,
    slice: Option<Chain>,
}

impl Divide {
    pub fn new(amount: f32, edge: RectEdge) -> Self {
        Self {
            amount,
            padding: 0.0,
            edge,
            slice: None,
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_slice(mut self, slice: impl Into<Chain>) -> Self {
        self.slice = Some(slice.into());
        self
    }
}

impl Action for Divide {
    fn name(&self) -> &'static str {
        "divide"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        let (slice, remainder) = state.rect().divided(self.amount, self.padding, self.edge);
        tracing::trace!(?slice, ?remainder, edge = ?self.edge, "divide");

        if let Some(chain) = &self.slice {
            state.scoped(|scope| {
                scope.set_rect(slice);
                scope.clear_path();
                chain.execute(scope)
            })?;
        }

        state.scoped(|scope| {
            scope.set_rect(remainder);
            scope.clear_path();
            next.run(scope)
        })
    }
}

/// Run a sub-chain, then the rest of the chain, against the same state
///
/// Both see the rect and path this action saw; nothing the first chain does
/// can leak into the second.
#[derive(Debug)]
pub struct Split {
    first: Chain,
}

impl Split {
    pub fn new(first: impl Into<Chain>) -> Self {
        Self {
            first: first.into(),
        }
    }
}

impl Action for Split {
    fn name(&self) -> &'static str {
        "split"
    }

    fn execute(&self, state: &mut RenderState<'_>, next: Next<'_>) -> Result<()> {
        self.first.execute(state)?;
        next.run(state)
    }
}
