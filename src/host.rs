//! Demo host screen: a full-screen surface with one trigger button that
//! presents an alert sheet.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::constants::{
    DEFAULT_SHEET_COLOR, DEMO_BUTTON_CORNER_RADIUS, DEMO_BUTTON_HEIGHT, DEMO_BUTTON_TITLE,
    DEMO_BUTTON_TOP_MARGIN, DEMO_BUTTON_WIDTH,
};
use crate::invalidation::{ChangeFlags, WidgetId};
use crate::layout::{Constraints, Pin, Size};
use crate::renderer::{Border, PaintContext};
use crate::surface::{Surface, SurfaceHandle};
use crate::widgets::{
    AlertSheet, AlertSheetDelegate, Color, Event, EventResponse, Rect, StyledButton, Widget,
};

pub const ALERT_TITLE: &str = "Network Error";
pub const ALERT_MESSAGE: &str = "You appear to be offline. Check your connection and try again.";
pub const ALERT_BUTTON_TITLE: &str = "DISMISS";

pub struct HostConfig {
    pub screen_size: Size,
    pub background_color: Color,
    pub trigger_title: String,
    /// Interval between animation frames
    pub frame_interval: Duration,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            screen_size: Size::new(375.0, 667.0),
            background_color: Color::WHITE,
            trigger_title: DEMO_BUTTON_TITLE.to_string(),
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl HostConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen_size(mut self, size: Size) -> Self {
        self.screen_size = size;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn trigger_title(mut self, title: impl Into<String>) -> Self {
        self.trigger_title = title.into();
        self
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }
}

/// Rounded trigger button pinned near the top of the screen.
pub struct DemoButton {
    button: StyledButton,
    pin: Pin,
}

impl DemoButton {
    pub fn new(title: impl Into<String>, screen_width: f32) -> Self {
        let pin = Pin::new(DEMO_BUTTON_TOP_MARGIN, DEMO_BUTTON_WIDTH, DEMO_BUTTON_HEIGHT);
        let mut button = StyledButton::new(pin.resolve(screen_width))
            .title(title)
            .corner_radius(DEMO_BUTTON_CORNER_RADIUS)
            .background_images(None, None)
            .border(Border::new(0.0, Color::TRANSPARENT));
        button.set_background_color(DEFAULT_SHEET_COLOR);
        Self { button, pin }
    }

    pub fn title(&self) -> &str {
        self.button.get_title()
    }

    /// True once per completed tap.
    pub fn take_activation(&mut self) -> bool {
        self.button.take_activation()
    }
}

impl Widget for DemoButton {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let frame = self.pin.resolve(constraints.max_width);
        self.button.set_origin(frame.x, frame.y);
        self.button.layout(Constraints::tight(frame.size()))
    }

    fn paint(&self, ctx: &mut PaintContext) {
        self.button.paint(ctx);
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        self.button.event(event)
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.button.set_origin(x, y);
    }

    fn bounds(&self) -> Rect {
        self.button.bounds()
    }

    fn id(&self) -> WidgetId {
        self.button.id()
    }

    fn mark_dirty(&mut self, flags: ChangeFlags) {
        self.button.mark_dirty(flags);
    }

    fn needs_layout(&self) -> bool {
        self.button.needs_layout()
    }

    fn needs_paint(&self) -> bool {
        self.button.needs_paint()
    }

    fn clear_dirty(&mut self) {
        self.button.clear_dirty();
    }
}

/// Delegate installed by [`HostScreen`]: dismisses on any button and counts
/// what it saw.
#[derive(Debug, Default)]
pub struct DemoSheetDelegate {
    clicks: Vec<usize>,
    dismissals: usize,
}

impl DemoSheetDelegate {
    pub fn clicks(&self) -> &[usize] {
        &self.clicks
    }

    pub fn dismissals(&self) -> usize {
        self.dismissals
    }
}

impl AlertSheetDelegate for DemoSheetDelegate {
    fn alert_sheet_clicked_button(&mut self, sheet: &mut AlertSheet, button_index: usize) {
        log::info!("Alert sheet button {} tapped, dismissing", button_index);
        self.clicks.push(button_index);
        sheet.dismiss();
    }

    fn alert_sheet_did_dismiss(&mut self, _sheet: &AlertSheet) {
        log::info!("Alert sheet dismissed");
        self.dismissals += 1;
    }
}

pub struct HostScreen {
    config: HostConfig,
    surface: SurfaceHandle,
    trigger: DemoButton,
    sheet: Option<AlertSheet>,
    delegate: Rc<RefCell<DemoSheetDelegate>>,
}

impl HostScreen {
    pub fn new(config: HostConfig) -> Self {
        let surface = Rc::new(RefCell::new(
            Surface::new(config.screen_size).with_background(config.background_color),
        ));
        let mut trigger = DemoButton::new(config.trigger_title.clone(), config.screen_size.width);
        trigger.layout(Constraints::loose(config.screen_size));

        Self {
            config,
            surface,
            trigger,
            sheet: None,
            delegate: Rc::new(RefCell::new(DemoSheetDelegate::default())),
        }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn surface(&self) -> &SurfaceHandle {
        &self.surface
    }

    pub fn trigger(&self) -> &DemoButton {
        &self.trigger
    }

    pub fn sheet(&self) -> Option<&AlertSheet> {
        self.sheet.as_ref()
    }

    pub fn delegate(&self) -> &Rc<RefCell<DemoSheetDelegate>> {
        &self.delegate
    }

    /// Build and show the offline alert, unless one is still on screen.
    ///
    /// Returns true if a new sheet was presented.
    pub fn present_alert(&mut self) -> bool {
        if let Some(sheet) = self.sheet.as_ref() {
            if self.surface.borrow().contains(sheet.id()) {
                log::debug!("Alert sheet already presented");
                return false;
            }
        }

        let mut sheet = AlertSheet::new(
            self.config.screen_size,
            Some(ALERT_TITLE),
            Some(ALERT_MESSAGE),
            Some(ALERT_BUTTON_TITLE),
            None,
        );
        sheet.set_delegate(&self.delegate);
        sheet.show(&self.surface);
        self.sheet = Some(sheet);
        true
    }

    /// Route pointer input: the sheet sits on top, so it sees events first.
    pub fn event(&mut self, event: &Event) -> EventResponse {
        if let Some(sheet) = self.sheet.as_mut() {
            if sheet.event(event) == EventResponse::Handled {
                return EventResponse::Handled;
            }
        }

        let response = self.trigger.event(event);
        if self.trigger.take_activation() {
            self.present_alert();
        }
        response
    }

    /// Advance animations. Returns true while another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(sheet) = self.sheet.as_mut() else {
            return false;
        };
        let animating = sheet.tick(now);
        if sheet.is_retired() {
            log::debug!("Releasing retired alert sheet {:?}", sheet.id());
            self.sheet = None;
        }
        animating
    }

    /// Rotate or resize the screen.
    pub fn set_screen_size(&mut self, size: Size) {
        self.config.screen_size = size;
        self.surface.borrow_mut().set_size(size);
        self.trigger.layout(Constraints::loose(size));
        if let Some(sheet) = self.sheet.as_mut() {
            sheet.set_screen_size(size);
        }
    }

    /// Paint the screen background, the trigger, and the sheet on top.
    pub fn paint(&self, ctx: &mut PaintContext) {
        let (size, background) = {
            let surface = self.surface.borrow();
            (surface.size(), surface.background())
        };
        ctx.draw_rect(Rect::from_size(size), background);
        self.trigger.paint(ctx);
        if let Some(sheet) = self.sheet.as_ref() {
            sheet.paint(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::SheetState;

    fn tap(host: &mut HostScreen, (x, y): (f32, f32)) {
        for event in Event::tap(x, y) {
            host.event(&event);
        }
    }

    fn run_frames(host: &mut HostScreen, start: Instant) -> Instant {
        let mut now = start;
        host.tick(now);
        for _ in 0..100 {
            now += Duration::from_millis(16);
            if !host.tick(now) {
                break;
            }
        }
        now
    }

    #[test]
    fn test_config_builder() {
        let config = HostConfig::new()
            .screen_size(Size::new(320.0, 568.0))
            .trigger_title("Go")
            .frame_interval(Duration::from_millis(8));

        assert_eq!(config.screen_size, Size::new(320.0, 568.0));
        assert_eq!(config.trigger_title, "Go");
        assert_eq!(config.frame_interval, Duration::from_millis(8));
        assert_eq!(config.background_color, Color::WHITE);
    }

    #[test]
    fn test_trigger_placement() {
        let host = HostScreen::new(HostConfig::default());
        assert_eq!(host.trigger().bounds(), Rect::new(87.5, 44.0, 200.0, 44.0));
        assert_eq!(host.trigger().title(), DEMO_BUTTON_TITLE);
    }

    #[test]
    fn test_trigger_presents_alert() {
        let mut host = HostScreen::new(HostConfig::default());
        let center = host.trigger().bounds().center();
        tap(&mut host, center);

        let sheet = host.sheet().unwrap();
        assert_eq!(sheet.state(), SheetState::Showing);
        assert_eq!(sheet.title_label().unwrap().get_text(), ALERT_TITLE);
        assert!(sheet.image_view().is_none());
        assert!(host.surface().borrow().contains(sheet.id()));
    }

    #[test]
    fn test_second_present_is_guarded() {
        let mut host = HostScreen::new(HostConfig::default());
        assert!(host.present_alert());
        let first = host.sheet().unwrap().id();

        assert!(!host.present_alert());
        assert_eq!(host.sheet().unwrap().id(), first);
        assert_eq!(host.surface().borrow().children().len(), 1);
    }

    #[test]
    fn test_dismiss_button_releases_sheet() {
        let mut host = HostScreen::new(HostConfig::default());
        host.present_alert();
        let now = run_frames(&mut host, Instant::now());

        let button = host.sheet().unwrap().button().unwrap().bounds().center();
        tap(&mut host, button);
        assert_eq!(host.delegate().borrow().clicks(), &[0]);
        assert_eq!(host.sheet().unwrap().state(), SheetState::Dismissing);

        run_frames(&mut host, now);

        assert!(host.sheet().is_none());
        assert!(host.surface().borrow().children().is_empty());
        assert_eq!(host.delegate().borrow().dismissals(), 1);

        assert!(host.present_alert());
    }

    #[test]
    fn test_paint_background_first() {
        let host = HostScreen::new(HostConfig::default());
        let mut ctx = PaintContext::new();
        host.paint(&mut ctx);

        assert_eq!(ctx.commands()[0].color(), Some(Color::WHITE));
        assert!(ctx.commands().len() >= 2);
    }

    #[test]
    fn test_rotation_moves_trigger() {
        let mut host = HostScreen::new(HostConfig::default());
        host.present_alert();
        host.set_screen_size(Size::new(667.0, 375.0));

        assert_eq!(host.trigger().bounds().x, (667.0 - 200.0) / 2.0);
        assert_eq!(host.sheet().unwrap().frame().width, 667.0);
    }
}
