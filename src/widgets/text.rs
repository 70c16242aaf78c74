//! Text widget

use crate::core::{next_widget_id, Widget, WidgetId};
use crate::render::RenderList;

/// Plain text content
pub struct Text {
    id: WidgetId,
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: next_widget_id(),
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Widget for Text {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn draw(&self, list: &mut RenderList) {
        list.text(self.content.as_str());
    }
}
