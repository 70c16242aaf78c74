//! Container widgets

use crate::core::{next_widget_id, BoxedWidget, Widget, WidgetId};
use crate::render::RenderList;

/// Vertical container with persistent children
pub struct Column {
    id: WidgetId,
    children: Vec<BoxedWidget>,
}

impl Column {
    pub fn new() -> Self {
        Self {
            id: next_widget_id(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<BoxedWidget>) -> Self {
        self.children = children;
        self
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn draw(&self, list: &mut RenderList) {
        for child in &self.children {
            child.draw(list);
        }
    }

    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut self.children
    }
}
