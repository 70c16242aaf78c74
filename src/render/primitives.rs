//! Render primitives

use crate::core::WidgetId;

/// A presentational primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Heading {
        color: String,
        text: String,
    },
    Text {
        classes: Vec<String>,
        content: String,
    },
    Button {
        widget: WidgetId,
        label: String,
    },
}

/// Render command list
#[derive(Debug, Default)]
pub struct RenderList {
    pub primitives: Vec<Primitive>,
}

impl RenderList {
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
        }
    }

    pub fn heading(&mut self, color: impl Into<String>, text: impl Into<String>) {
        self.primitives.push(Primitive::Heading {
            color: color.into(),
            text: text.into(),
        });
    }

    pub fn text(&mut self, content: impl Into<String>) {
        self.primitives.push(Primitive::Text {
            classes: Vec::new(),
            content: content.into(),
        });
    }

    pub fn classed_text(&mut self, classes: &[&str], content: impl Into<String>) {
        self.primitives.push(Primitive::Text {
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            content: content.into(),
        });
    }

    pub fn button(&mut self, widget: WidgetId, label: impl Into<String>) {
        self.primitives.push(Primitive::Button {
            widget,
            label: label.into(),
        });
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Label of the first button primitive, if any
    pub fn button_label(&self) -> Option<&str> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Button { label, .. } => Some(label.as_str()),
            _ => None,
        })
    }

    /// First text primitive carrying the given class
    pub fn text_with_class(&self, class: &str) -> Option<&Primitive> {
        self.primitives.iter().find(|p| {
            matches!(p, Primitive::Text { classes, .. } if classes.iter().any(|c| c == class))
        })
    }

    /// Whether any primitive displays the given content verbatim
    pub fn contains_text(&self, needle: &str) -> bool {
        self.primitives.iter().any(|p| match p {
            Primitive::Heading { text, .. } => text == needle,
            Primitive::Text { content, .. } => content == needle,
            Primitive::Button { label, .. } => label == needle,
        })
    }

    /// Plain-text dump, one line per primitive
    pub fn to_text(&self) -> String {
        let lines: Vec<String> = self
            .primitives
            .iter()
            .map(|p| match p {
                Primitive::Heading { color, text } => format!("== {text} == ({color})"),
                Primitive::Text { classes, content } if classes.is_empty() => content.clone(),
                Primitive::Text { classes, content } => {
                    format!("{content} [{}]", classes.join(" "))
                }
                Primitive::Button { label, .. } => format!("[{label}]"),
            })
            .collect();
        lines.join("\n")
    }
}
