//! Build context for widgets

use crate::core::WidgetId;
use std::collections::HashMap;

/// Context passed to widgets during lifecycle and event handling
#[derive(Debug, Default)]
pub struct Context {
    /// Widget tree for lookups
    widget_tree: HashMap<WidgetId, WidgetInfo>,
    /// Widgets that need redraw
    dirty_widgets: Vec<WidgetId>,
}

#[derive(Debug, Clone)]
pub struct WidgetInfo {
    pub id: WidgetId,
    pub parent_id: Option<WidgetId>,
    pub children: Vec<WidgetId>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a widget as needing redraw
    pub fn mark_dirty(&mut self, id: WidgetId) {
        if !self.dirty_widgets.contains(&id) {
            self.dirty_widgets.push(id);
        }
    }

    /// Get dirty widgets and clear the list
    pub fn take_dirty(&mut self) -> Vec<WidgetId> {
        std::mem::take(&mut self.dirty_widgets)
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty_widgets.is_empty()
    }

    /// Register a widget in the tree
    pub fn register_widget(&mut self, id: WidgetId, parent_id: Option<WidgetId>) {
        self.widget_tree.insert(
            id,
            WidgetInfo {
                id,
                parent_id,
                children: Vec::new(),
            },
        );

        if let Some(pid) = parent_id {
            if let Some(parent) = self.widget_tree.get_mut(&pid) {
                parent.children.push(id);
            }
        }
    }

    /// Drop a widget's tree record on unmount
    pub fn unregister_widget(&mut self, id: WidgetId) {
        if let Some(info) = self.widget_tree.remove(&id) {
            if let Some(pid) = info.parent_id {
                if let Some(parent) = self.widget_tree.get_mut(&pid) {
                    parent.children.retain(|c| *c != id);
                }
            }
        }
    }

    pub fn widget_info(&self, id: WidgetId) -> Option<&WidgetInfo> {
        self.widget_tree.get(&id)
    }

    pub fn widget_count(&self) -> usize {
        self.widget_tree.len()
    }
}
