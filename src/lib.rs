//! Ticker UI - timer-driven counter widgets on a small headless widget core
//!
//! Widgets form a retained tree. Drawing snapshots the tree into a list of
//! presentational primitives, and the [`App`] shell owns mounting, event
//! dispatch and teardown.

pub mod app;
pub mod core;
pub mod render;
pub mod widgets;

pub use app::{App, Error};
pub use widgets::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::app::{App, Error};
    pub use crate::core::{Context, Event, State, Widget};
    pub use crate::render::{Primitive, RenderList, Renderer};
    pub use crate::widgets::*;
}
