//! Headless rendering: widgets emit primitives into a render list

mod primitives;

pub use primitives::*;

use crate::core::Widget;

/// Snapshots widget trees into render lists
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the tree rooted at `root` into a fresh render list
    pub fn render(&self, root: &dyn Widget) -> RenderList {
        let mut list = RenderList::new();
        root.draw(&mut list);
        list
    }
}
