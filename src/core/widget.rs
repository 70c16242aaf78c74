//! Widget trait and core widget types

use crate::core::{Context, Event};
use crate::render::RenderList;

/// Unique identifier for widgets
pub type WidgetId = u64;

/// Core trait that all UI components implement
pub trait Widget: Send + Sync {
    /// Returns the widget's unique identifier
    fn id(&self) -> WidgetId;

    /// Emit this widget's presentation into the render list
    fn draw(&self, list: &mut RenderList);

    /// Persistent child widgets, for lifecycle walks and event routing
    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut []
    }

    /// Handle events (clicks, etc.)
    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        let _ = (event, ctx);
        false // Not handled by default
    }

    /// Called when the widget is mounted
    fn on_mount(&mut self, ctx: &mut Context) {
        let _ = ctx;
    }

    /// Called when the widget is unmounted
    fn on_unmount(&mut self, ctx: &mut Context) {
        let _ = ctx;
    }
}

/// A boxed widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;

/// Helper to generate unique widget IDs
pub fn next_widget_id() -> WidgetId {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
