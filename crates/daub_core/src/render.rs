//! Render pass entry point

use daub_paint::{DrawContext, Rect};

use crate::chain::Chain;
use crate::error::{RenderError, Result};
use crate::state::{RenderStats, RenderState};

/// Render `chain` into `rect` on `device`
///
/// Returns [`RenderError::NoDevice`] without touching anything when the host
/// has no device to draw into. On success and on error alike, every scope the
/// chain opened has been closed by the time this returns.
pub fn render(
    chain: &Chain,
    rect: Rect,
    device: Option<&mut dyn DrawContext>,
) -> Result<RenderStats> {
    let Some(device) = device else {
        tracing::warn!("render requested without a device context");
        return Err(RenderError::NoDevice);
    };

    tracing::debug!(?rect, actions = chain.len(), "render pass start");

    let mut state = RenderState::new(rect, device);
    let result = chain.execute(&mut state);

    debug_assert!(state.is_balanced(), "scopes left open after render: {state:?}");

    match result {
        Ok(()) => {
            let stats = state.stats();
            tracing::debug!(
                actions = stats.actions,
                max_logical_depth = stats.max_logical_depth,
                max_device_depth = stats.max_device_depth,
                "render pass complete"
            );
            Ok(stats)
        }
        Err(err) => {
            tracing::debug!(error = %err, "render pass aborted");
            Err(err)
        }
    }
}
