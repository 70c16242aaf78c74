//! Elapsed-seconds display widget

use crate::core::{next_widget_id, Widget, WidgetId};
use crate::render::RenderList;

/// Display class selecting the counter's visual treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayClass {
    Primary,
    Secondary,
}

impl DisplayClass {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayClass::Primary => "primary",
            DisplayClass::Secondary => "secondary",
        }
    }
}

impl From<bool> for DisplayClass {
    fn from(primary: bool) -> Self {
        if primary {
            DisplayClass::Primary
        } else {
            DisplayClass::Secondary
        }
    }
}

/// Renders a count as "<count> seconds" under the `counter` class
pub struct Counter {
    id: WidgetId,
    count: u64,
    class: DisplayClass,
}

impl Counter {
    pub fn new(count: u64, class: DisplayClass) -> Self {
        Self {
            id: next_widget_id(),
            count,
            class,
        }
    }

    pub fn label(&self) -> String {
        format!("{} seconds", self.count)
    }

    pub fn class(&self) -> DisplayClass {
        self.class
    }
}

impl Widget for Counter {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn draw(&self, list: &mut RenderList) {
        list.classed_text(&["counter", self.class.as_str()], self.label());
    }
}
