//! Button widget

use std::sync::Arc;

use crate::core::{next_widget_id, Context, Event, Widget, WidgetId};
use crate::render::RenderList;

/// Callback type for button activation
pub type OnClick = Arc<dyn Fn() + Send + Sync>;

/// Labeled push button
pub struct Button {
    id: WidgetId,
    label: String,
    on_click: Option<OnClick>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: next_widget_id(),
            label: label.into(),
            on_click: None,
        }
    }

    pub fn on_click<F: Fn() + Send + Sync + 'static>(mut self, handler: F) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for Button {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn draw(&self, list: &mut RenderList) {
        list.button(self.id, self.label.as_str());
    }

    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        match event {
            Event::MouseUp { .. } => {
                if let Some(ref handler) = self.on_click {
                    handler();
                    ctx.mark_dirty(self.id);
                    return true;
                }
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_click_invokes_handler() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&clicks);
        let mut button = Button::new("Stop").on_click(move || {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        let mut ctx = Context::new();

        assert!(button.on_event(&Event::click(), &mut ctx));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.take_dirty(), vec![button.id()]);
    }

    #[test]
    fn test_other_events_not_handled() {
        let mut button = Button::new("Stop").on_click(|| {});
        let mut ctx = Context::new();

        assert!(!button.on_event(&Event::MouseMove { x: 1.0, y: 2.0 }, &mut ctx));
        assert!(!button.on_event(&Event::Close, &mut ctx));
        assert!(!ctx.is_dirty());
    }

    #[test]
    fn test_click_without_handler_not_handled() {
        let mut button = Button::new("Play");
        let mut ctx = Context::new();

        assert!(!button.on_event(&Event::click(), &mut ctx));
    }
}
