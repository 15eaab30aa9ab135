//! Rendering state and scoped overrides
//!
//! A [`RenderState`] lives for exactly one render pass. It carries the current
//! rectangle and path that actions draw against, the device being drawn into,
//! and two stacks used to bound the lifetime of state changes:
//!
//! - the **logical** stack snapshots `(rect, path)`;
//! - the **device** stack holds the [`SaveMarker`] of every open device save.
//!
//! Neither stack can be pushed directly. The only way in is through the three
//! scope primitives, which hand the closure a guard that pops on drop:
//!
//! ```text
//! scoped        push (rect, path)        ... closure ...   pop, restore rect/path
//! device_scoped device.save()            ... closure ...   device.restore()
//! layer_scoped  push (rect, path), save  ... closure ...   restore, pop
//! ```
//!
//! Drop runs on every exit path (normal return, `?`, unwinding), so a scope can
//! never leak its changes past itself. Actions reach the device through a
//! [`Canvas`], which has no `save`/`restore`, so the marker stack always
//! matches the device's own stack. The rect and path are only writable
//! through a [`LogicalScope`], which makes it impossible for an action to
//! change them permanently.

use std::fmt;
use std::ops::{Deref, DerefMut};

use daub_paint::{DrawContext, Path, Rect, SaveMarker};
use smallvec::SmallVec;

use crate::canvas::Canvas;
use crate::error::{RenderError, Result};

/// Counters collected over one render pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Number of actions executed, sub-chains included
    pub actions: usize,
    /// Deepest logical scope nesting reached
    pub max_logical_depth: usize,
    /// Deepest device scope nesting reached
    pub max_device_depth: usize,
}

/// Per-pass mutable context shared by every action in a chain
pub struct RenderState<'a> {
    rect: Rect,
    path: Option<Path>,
    device: &'a mut dyn DrawContext,
    logical: SmallVec<[(Rect, Option<Path>); 8]>,
    markers: SmallVec<[SaveMarker; 8]>,
    stats: RenderStats,
}

impl<'a> RenderState<'a> {
    /// Fresh state for a pass over `rect`, with no current path
    pub fn new(rect: Rect, device: &'a mut dyn DrawContext) -> Self {
        Self {
            rect,
            path: None,
            device,
            logical: SmallVec::new(),
            markers: SmallVec::new(),
            stats: RenderStats::default(),
        }
    }

    /// The rectangle actions currently draw into
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The current path, if an earlier action set one
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// The current path, or [`RenderError::MissingPath`] naming `action`
    pub fn require_path(&self, action: &'static str) -> Result<&Path> {
        self.path.as_ref().ok_or(RenderError::MissingPath { action })
    }

    /// The device, minus its save/restore stack
    pub fn device(&mut self) -> Canvas<'_, 'a> {
        Canvas::new(&mut *self.device)
    }

    /// Current rect and path together with the device
    pub fn parts(&mut self) -> (Rect, Option<&Path>, Canvas<'_, 'a>) {
        (self.rect, self.path.as_ref(), Canvas::new(&mut *self.device))
    }

    pub fn logical_depth(&self) -> usize {
        self.logical.len()
    }

    pub fn device_depth(&self) -> usize {
        self.markers.len()
    }

    /// True when no scope is open
    pub fn is_balanced(&self) -> bool {
        self.logical.is_empty() && self.markers.is_empty()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub(crate) fn enter_action(&mut self, name: &'static str) {
        self.stats.actions += 1;
        tracing::trace!(
            action = name,
            rect = ?self.rect,
            has_path = self.path.is_some(),
            logical_depth = self.logical.len(),
            device_depth = self.markers.len(),
            "execute"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scope Primitives
    // ─────────────────────────────────────────────────────────────────────────

    /// Run `f` inside a logical scope; rect and path are restored afterwards
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut LogicalScope<'_, 'a>) -> R) -> R {
        let mut scope = LogicalScope::open(self);
        f(&mut scope)
    }

    /// Run `f` between a device save and its matching restore
    pub fn device_scoped<R>(&mut self, f: impl FnOnce(&mut DeviceScope<'_, 'a>) -> R) -> R {
        let mut scope = DeviceScope::open(self);
        f(&mut scope)
    }

    /// Run `f` inside a logical scope and a device scope opened in that order
    ///
    /// They close in the reverse order: device first, then logical.
    pub fn layer_scoped<R>(&mut self, f: impl FnOnce(&mut DeviceScope<'_, 'a>) -> R) -> R {
        self.scoped(|logical| logical.device_scoped(f))
    }
}

impl fmt::Debug for RenderState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderState")
            .field("rect", &self.rect)
            .field("path", &self.path)
            .field("logical_depth", &self.logical.len())
            .field("device_depth", &self.markers.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scope Guards
// ─────────────────────────────────────────────────────────────────────────────

/// An open logical scope; pops and restores `(rect, path)` on drop
///
/// Derefs to the [`RenderState`], so the continuation runs through it.
pub struct LogicalScope<'s, 'a> {
    state: &'s mut RenderState<'a>,
    depth: usize,
}

impl<'s, 'a> LogicalScope<'s, 'a> {
    fn open(state: &'s mut RenderState<'a>) -> Self {
        state.logical.push((state.rect, state.path.clone()));
        let depth = state.logical.len();
        state.stats.max_logical_depth = state.stats.max_logical_depth.max(depth);
        Self { state, depth }
    }

    /// Replace the current rect until this scope closes
    pub fn set_rect(&mut self, rect: Rect) {
        self.state.rect = rect;
    }

    /// Replace the current path until this scope closes
    pub fn set_path(&mut self, path: Path) {
        self.state.path = Some(path);
    }

    /// Remove the current path until this scope closes
    pub fn clear_path(&mut self) {
        self.state.path = None;
    }
}

impl<'a> Deref for LogicalScope<'_, 'a> {
    type Target = RenderState<'a>;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl<'a> DerefMut for LogicalScope<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl Drop for LogicalScope<'_, '_> {
    fn drop(&mut self) {
        debug_assert_eq!(
            self.state.logical.len(),
            self.depth,
            "logical scope closed out of order"
        );
        if let Some((rect, path)) = self.state.logical.pop() {
            self.state.rect = rect;
            self.state.path = path;
        }
    }
}

/// An open device scope; restores the device on drop
///
/// Derefs to the [`RenderState`], so the continuation runs through it.
pub struct DeviceScope<'s, 'a> {
    state: &'s mut RenderState<'a>,
    marker: SaveMarker,
}

impl<'s, 'a> DeviceScope<'s, 'a> {
    fn open(state: &'s mut RenderState<'a>) -> Self {
        let marker = state.device.save();
        state.markers.push(marker);
        state.stats.max_device_depth = state.stats.max_device_depth.max(state.markers.len());
        Self { state, marker }
    }

    /// Marker the device returned when this scope saved
    pub fn marker(&self) -> SaveMarker {
        self.marker
    }
}

impl<'a> Deref for DeviceScope<'_, 'a> {
    type Target = RenderState<'a>;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl<'a> DerefMut for DeviceScope<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl Drop for DeviceScope<'_, '_> {
    fn drop(&mut self) {
        let popped = self.state.markers.pop();
        debug_assert_eq!(
            popped,
            Some(self.marker),
            "device scope closed out of order"
        );
        self.state.device.restore();
    }
}
