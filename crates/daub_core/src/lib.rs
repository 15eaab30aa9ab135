//! Daub Core
//!
//! Composable drawing-action chains. A [`Chain`] links [`Action`]s end to end;
//! rendering a chain walks it once against a [`RenderState`] that carries the
//! current rect and path and the device being drawn into.
//!
//! Actions can change what later actions see (a smaller rect, a clip, a
//! shadow) but only through scopes that are unwound when the action's part of
//! the chain finishes, so branches never leak state into each other.
//!
//! ```
//! use daub_core::actions::{Border, Fill, Inset};
//! use daub_core::{render, Chain};
//! use daub_paint::{Color, Rect, RecordingContext};
//!
//! let chain = Chain::new(Inset::uniform(10.0))
//!     .then(Fill::new(Color::BLUE))
//!     .then(Border::new(Color::RED, 2.0));
//!
//! let mut device = RecordingContext::new();
//! let stats = render(&chain, Rect::new(0.0, 0.0, 100.0, 100.0), Some(&mut device)).unwrap();
//! assert_eq!(stats.actions, 3);
//! ```

pub mod actions;
pub mod canvas;
pub mod chain;
pub mod error;
pub mod render;
pub mod scene;
pub mod state;

pub use canvas::Canvas;
pub use chain::{Action, Chain, Next};
pub use error::{ChainError, RenderError, Result, SceneError};
pub use render::render;
pub use scene::{ActionSpec, SceneSpec};
pub use state::{DeviceScope, LogicalScope, RenderState, RenderStats};
