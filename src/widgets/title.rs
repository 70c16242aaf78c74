//! Heading widget

use crate::core::{next_widget_id, Widget, WidgetId};
use crate::render::RenderList;

/// Colored heading
pub struct Title {
    id: WidgetId,
    color: String,
    text: String,
}

impl Title {
    pub fn new(color: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: next_widget_id(),
            color: color.into(),
            text: text.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for Title {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn draw(&self, list: &mut RenderList) {
        list.heading(self.color.as_str(), self.text.as_str());
    }
}
