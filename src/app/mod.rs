//! Application shell

use std::time::Duration;

use tracing::info;

use crate::core::{BoxedWidget, Context, Event, Widget, WidgetId};
use crate::render::{RenderList, Renderer};

/// Period between demo frame checks
const FRAME_PERIOD: Duration = Duration::from_millis(250);

/// Errors surfaced by the app shell
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no root widget configured")]
    MissingRoot,
    #[error("signal handling failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application struct
pub struct App {
    title: String,
    root: Option<BoxedWidget>,
    context: Context,
    renderer: Renderer,
    mounted: bool,
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            root: None,
            context: Context::new(),
            renderer: Renderer::new(),
            mounted: false,
        }
    }

    pub fn root(mut self, widget: impl Widget + 'static) -> Self {
        self.root = Some(Box::new(widget));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Mount the tree: register every widget and arm lifecycle resources
    pub fn mount(&mut self) -> Result<(), Error> {
        let root = self.root.as_mut().ok_or(Error::MissingRoot)?;
        if !self.mounted {
            mount_widget(root.as_mut(), None, &mut self.context);
            self.mounted = true;
            info!(
                title = %self.title,
                widgets = self.context.widget_count(),
                "mounted"
            );
        }
        Ok(())
    }

    /// Unmount the tree: disarm lifecycle resources, drop registrations
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if let Some(root) = self.root.as_mut() {
            unmount_widget(root.as_mut(), &mut self.context);
        }
        self.mounted = false;
        info!(title = %self.title, "unmounted");
    }

    /// Route an event depth-first until a widget handles it
    pub fn dispatch(&mut self, event: &Event) -> bool {
        match self.root.as_mut() {
            Some(root) => dispatch_event(root.as_mut(), event, &mut self.context),
            None => false,
        }
    }

    /// Snapshot the current tree into a render list
    pub fn render(&mut self) -> RenderList {
        self.context.take_dirty();
        match self.root.as_deref() {
            Some(root) => self.renderer.render(root),
            None => RenderList::new(),
        }
    }

    /// Mount, log a fresh frame whenever the output changes, tear down on
    /// ctrl-c.
    pub async fn run(mut self) -> Result<(), Error> {
        self.mount()?;

        let mut frames = tokio::time::interval(FRAME_PERIOD);
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        let mut last_frame = None;
        loop {
            tokio::select! {
                result = &mut shutdown => {
                    result?;
                    info!("shutdown requested");
                    break;
                }
                _ = frames.tick() => {
                    let frame = self.render().to_text();
                    if last_frame.as_deref() != Some(frame.as_str()) {
                        info!("frame:\n{frame}");
                        last_frame = Some(frame);
                    }
                }
            }
        }

        self.unmount();
        Ok(())
    }
}

fn mount_widget(widget: &mut dyn Widget, parent: Option<WidgetId>, ctx: &mut Context) {
    let id = widget.id();
    ctx.register_widget(id, parent);
    widget.on_mount(ctx);
    for child in widget.children_mut() {
        mount_widget(child.as_mut(), Some(id), ctx);
    }
}

fn unmount_widget(widget: &mut dyn Widget, ctx: &mut Context) {
    for child in widget.children_mut() {
        unmount_widget(child.as_mut(), ctx);
    }
    widget.on_unmount(ctx);
    ctx.unregister_widget(widget.id());
}

fn dispatch_event(widget: &mut dyn Widget, event: &Event, ctx: &mut Context) -> bool {
    if widget.on_event(event, ctx) {
        return true;
    }
    for child in widget.children_mut() {
        if dispatch_event(child.as_mut(), event, ctx) {
            return true;
        }
    }
    false
}
