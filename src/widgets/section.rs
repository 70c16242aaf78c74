//! Play/stop counter section

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{
    next_widget_id, BoxedWidget, Context, Event, Interval, State, Widget, WidgetId,
};
use crate::render::RenderList;
use crate::widgets::{Button, Counter, DisplayClass, Title};

/// Default period between automatic counter increments
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Snapshot of a section's play state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionState {
    pub counter: u64,
    pub is_playing: bool,
}

impl Default for SectionState {
    fn default() -> Self {
        Self {
            counter: 0,
            is_playing: true,
        }
    }
}

/// Stateful widget: heading, body text, ticking counter and a play/stop
/// toggle.
///
/// While mounted and playing, the counter increments once per interval.
/// Every committed change, tick or toggle, is reported to the `on_update`
/// listener with a full state snapshot. A tick that lands while stopped
/// changes nothing and notifies nobody.
pub struct CounterSection {
    id: WidgetId,
    color: String,
    title: String,
    text: String,
    is_primary: bool,
    interval: Duration,
    state: State<SectionState>,
    children: Vec<BoxedWidget>,
    timer: Option<Interval>,
}

impl CounterSection {
    pub fn new(color: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: next_widget_id(),
            color: color.into(),
            title: title.into(),
            text: String::new(),
            is_primary: false,
            interval: DEFAULT_INTERVAL,
            state: State::new(SectionState::default()),
            children: Vec::new(),
            timer: None,
        }
    }

    /// Body text shown between the heading and the counter
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Use the `primary` display class for the counter (default: `secondary`)
    pub fn primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    /// Period between automatic increments. A zero period would stall the
    /// timer task, so it is rejected and the previous value kept.
    pub fn interval(mut self, period: Duration) -> Self {
        if period.is_zero() {
            warn!(?period, "ignoring zero interval");
        } else {
            self.interval = period;
        }
        self
    }

    /// Listener invoked with a full snapshot after every committed change
    pub fn on_update<F>(self, callback: F) -> Self
    where
        F: Fn(&SectionState) + Send + Sync + 'static,
    {
        self.state.subscribe(callback);
        self
    }

    /// Nested content rendered between the counter and the toggle
    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Current state snapshot
    pub fn state(&self) -> SectionState {
        self.state.get()
    }

    /// Configured tick period
    pub fn period(&self) -> Duration {
        self.interval
    }

    /// `primary` or `secondary`, from the section's configuration
    pub fn display_class(&self) -> DisplayClass {
        DisplayClass::from(self.is_primary)
    }

    /// Flip between playing and stopped, notifying the update listener
    pub fn toggle(&self) {
        self.state.update(|s| s.is_playing = !s.is_playing);
    }

    fn toggle_label(is_playing: bool) -> &'static str {
        if is_playing {
            "Stop"
        } else {
            "Play"
        }
    }

    fn toggle_button(&self) -> Button {
        let state = self.state.clone();
        Button::new(Self::toggle_label(self.state.get().is_playing))
            .on_click(move || state.update(|s| s.is_playing = !s.is_playing))
    }
}

impl Widget for CounterSection {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn draw(&self, list: &mut RenderList) {
        let snapshot = self.state.get();
        Title::new(self.color.as_str(), self.title.as_str()).draw(list);
        if !self.text.is_empty() {
            list.text(self.text.as_str());
        }
        Counter::new(snapshot.counter, self.display_class()).draw(list);
        for child in &self.children {
            child.draw(list);
        }
        self.toggle_button().draw(list);
    }

    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut self.children
    }

    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        if self.toggle_button().on_event(event, ctx) {
            ctx.mark_dirty(self.id);
            return true;
        }
        false
    }

    fn on_mount(&mut self, _ctx: &mut Context) {
        if self.timer.is_some() {
            return;
        }
        debug!(widget = self.id, period = ?self.interval, "arming section timer");
        let state = self.state.clone();
        self.timer = Some(Interval::spawn(self.interval, move || {
            // check and increment commit under one lock; a tick while
            // stopped changes nothing and notifies nobody
            state.update_if(|s| {
                if s.is_playing {
                    s.counter += 1;
                    true
                } else {
                    false
                }
            });
        }));
    }

    fn on_unmount(&mut self, _ctx: &mut Context) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Primitive;
    use crate::widgets::Text;
    use std::sync::{Arc, Mutex};
    use tokio::time::sleep;

    const PERIOD: Duration = Duration::from_millis(100);

    fn sample_section() -> CounterSection {
        CounterSection::new("blue", "Testing")
            .text("This is a basic testing component!")
            .primary(true)
            .interval(PERIOD)
    }

    fn recording(section: CounterSection) -> (CounterSection, Arc<Mutex<Vec<SectionState>>>) {
        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&updates);
        let section = section.on_update(move |s| sink.lock().unwrap().push(*s));
        (section, updates)
    }

    #[test]
    fn test_initial_state() {
        let section = sample_section();
        let state = section.state();
        assert_eq!(state.counter, 0);
        assert!(state.is_playing);
    }

    #[test]
    fn test_toggle_flips_play_state() {
        let section = sample_section();

        section.toggle();
        assert!(!section.state().is_playing);

        section.toggle();
        assert!(section.state().is_playing);
    }

    #[test]
    fn test_toggle_label_follows_state() {
        let section = sample_section();
        let mut list = RenderList::new();
        section.draw(&mut list);
        assert_eq!(list.button_label(), Some("Stop"));

        section.toggle();
        list.clear();
        section.draw(&mut list);
        assert_eq!(list.button_label(), Some("Play"));
    }

    #[test]
    fn test_display_class_from_config() {
        assert_eq!(sample_section().display_class(), DisplayClass::Primary);
        assert_eq!(
            sample_section().primary(false).display_class(),
            DisplayClass::Secondary
        );
    }

    #[test]
    fn test_zero_interval_rejected() {
        let section = CounterSection::new("blue", "Testing").interval(Duration::ZERO);
        assert_eq!(section.period(), DEFAULT_INTERVAL);

        let section = section.interval(PERIOD).interval(Duration::ZERO);
        assert_eq!(section.period(), PERIOD);
    }

    #[test]
    fn test_draw_order() {
        let section = sample_section().child(Text::new("content"));
        let mut list = RenderList::new();
        section.draw(&mut list);

        let kinds: Vec<&str> = list
            .primitives
            .iter()
            .map(|p| match p {
                Primitive::Heading { .. } => "heading",
                Primitive::Text { classes, .. } if classes.is_empty() => "text",
                Primitive::Text { .. } => "counter",
                Primitive::Button { .. } => "button",
            })
            .collect();
        assert_eq!(kinds, vec!["heading", "text", "counter", "text", "button"]);
    }

    #[test]
    fn test_children_absent_when_not_supplied() {
        let mut list = RenderList::new();
        sample_section().draw(&mut list);
        assert!(!list.contains_text("content"));

        list.clear();
        sample_section().child(Text::new("content")).draw(&mut list);
        assert!(list.contains_text("content"));
    }

    #[test]
    fn test_on_update_called_once_per_toggle_with_full_state() {
        let (section, updates) = recording(sample_section());

        section.toggle();
        section.toggle();

        assert_eq!(
            *updates.lock().unwrap(),
            vec![
                SectionState {
                    counter: 0,
                    is_playing: false
                },
                SectionState {
                    counter: 0,
                    is_playing: true
                },
            ]
        );
    }

    #[test]
    fn test_click_event_toggles() {
        let mut section = sample_section();
        let mut ctx = Context::new();

        assert!(section.on_event(&Event::click(), &mut ctx));
        assert!(!section.state().is_playing);
        // the section itself is marked for redraw
        assert!(ctx.take_dirty().contains(&section.id()));

        assert!(!section.on_event(&Event::Close, &mut ctx));
        assert!(!section.state().is_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_increment_while_playing() {
        let (mut section, updates) = recording(sample_section());
        let mut ctx = Context::new();
        section.on_mount(&mut ctx);

        sleep(PERIOD * 2 + Duration::from_millis(10)).await;

        assert_eq!(section.state().counter, 2);
        assert_eq!(
            *updates.lock().unwrap(),
            vec![
                SectionState {
                    counter: 1,
                    is_playing: true
                },
                SectionState {
                    counter: 2,
                    is_playing: true
                },
            ]
        );
        section.on_unmount(&mut ctx);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_do_nothing_while_stopped() {
        let (mut section, updates) = recording(sample_section());
        let mut ctx = Context::new();
        section.on_mount(&mut ctx);
        section.toggle();
        updates.lock().unwrap().clear();

        sleep(PERIOD * 5 + Duration::from_millis(10)).await;

        assert_eq!(section.state().counter, 0);
        assert!(updates.lock().unwrap().is_empty());

        section.toggle();
        sleep(PERIOD + Duration::from_millis(10)).await;
        assert_eq!(section.state().counter, 1);
        section.on_unmount(&mut ctx);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_stops_ticks_and_updates() {
        let (mut section, updates) = recording(sample_section());
        let mut ctx = Context::new();
        section.on_mount(&mut ctx);

        sleep(PERIOD * 2 + Duration::from_millis(10)).await;
        section.on_unmount(&mut ctx);

        sleep(PERIOD * 5).await;

        assert_eq!(section.state().counter, 2);
        assert_eq!(updates.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let (mut section, updates) = recording(sample_section());
        let mut ctx = Context::new();
        section.on_mount(&mut ctx);

        sleep(PERIOD + Duration::from_millis(10)).await;
        drop(section);

        sleep(PERIOD * 5).await;

        assert_eq!(updates.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_mount_arms_one_timer() {
        let (mut section, updates) = recording(sample_section());
        let mut ctx = Context::new();
        section.on_mount(&mut ctx);
        section.on_mount(&mut ctx);

        sleep(PERIOD + Duration::from_millis(10)).await;

        assert_eq!(section.state().counter, 1);
        assert_eq!(updates.lock().unwrap().len(), 1);
        section.on_unmount(&mut ctx);
    }
}
