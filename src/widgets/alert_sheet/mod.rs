//! Slide-up alert sheet overlay.
//!
//! An [`AlertSheet`] is a full-width panel with a curved top edge that rises
//! from below the screen. It can carry an image, a title, a message and one
//! action button; which of those exist is fixed at construction.
//!
//! ## Lifecycle
//!
//! ```text
//! Hidden --show()--> Showing --(transition ends)--> Visible
//! Visible --dismiss()--> Dismissing --(transition ends)--> Hidden (retired)
//! ```
//!
//! `show` and `dismiss` only start a transition; [`AlertSheet::tick`] drives
//! it. Every side effect of completion happens on the tick that finishes it.
//! Calls that do not match the current state are ignored. A sheet that has
//! been dismissed is retired and cannot be shown again; build a new one.

mod delegate;
mod outline;

pub use delegate::AlertSheetDelegate;
pub use outline::{outline_path, Outline};

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use crate::animation::{AdvanceResult, Animatable, AnimationState, SpringConfig, Transition};
use crate::constants::{
    ANIMATION_DAMPING, ANIMATION_DELAY_MS, ANIMATION_DURATION_MS, ANIMATION_VELOCITY,
    BUTTON_HEIGHT, BUTTON_WIDTH, DEFAULT_SHEET_COLOR, DEFAULT_SHEET_FONT_SIZE, IMAGE_HEIGHT,
    IMAGE_WIDTH, MESSAGE_MAX_HEIGHT, MESSAGE_MAX_WIDTH, SHEET_HEIGHT, SHEET_WITH_BUTTON_HEIGHT,
    TITLE_MAX_HEIGHT, TITLE_MAX_WIDTH, TOP_TO_BUTTON, TOP_TO_IMAGE, TOP_TO_MESSAGE, TOP_TO_TITLE,
};
use crate::invalidation::{ChangeFlags, WidgetId};
use crate::layout::{Constraints, Pin, Size};
use crate::renderer::PaintContext;
use crate::surface::{Surface, SurfaceHandle};

use super::button::StyledButton;
use super::font::Font;
use super::image::{ImageSource, ImageView};
use super::label::StyledLabel;
use super::widget::{Color, Event, EventResponse, Rect, Widget};

/// Where the sheet is in its show/dismiss cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    /// Off-screen and transparent. Initial state, and final after a dismiss.
    Hidden,
    /// Sliding in.
    Showing,
    /// Resting flush with the bottom of the screen.
    Visible,
    /// Sliding out.
    Dismissing,
}

/// Semantic slot a child occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildRole {
    Image,
    Title,
    Message,
    Button,
}

impl ChildRole {
    /// Placement of this role inside the sheet.
    pub fn pin(self) -> Pin {
        match self {
            ChildRole::Image => Pin::new(TOP_TO_IMAGE, IMAGE_WIDTH, IMAGE_HEIGHT),
            ChildRole::Title => Pin::new(TOP_TO_TITLE, TITLE_MAX_WIDTH, TITLE_MAX_HEIGHT),
            ChildRole::Message => Pin::new(TOP_TO_MESSAGE, MESSAGE_MAX_WIDTH, MESSAGE_MAX_HEIGHT),
            ChildRole::Button => Pin::new(TOP_TO_BUTTON, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }
}

/// The animated part of the sheet's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SheetPose {
    y: f32,
    opacity: f32,
}

impl Animatable for SheetPose {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        SheetPose {
            y: f32::lerp(&from.y, &to.y, t),
            opacity: f32::lerp(&from.opacity, &to.opacity, t),
        }
    }
}

pub struct AlertSheet {
    widget_id: WidgetId,
    dirty_flags: ChangeFlags,
    screen: Size,
    frame: Rect,
    opacity: f32,
    state: SheetState,
    retired: bool,
    pose: AnimationState<SheetPose>,
    background_color: Color,
    font: Font,
    image: Option<ImageView>,
    title: Option<StyledLabel>,
    message: Option<StyledLabel>,
    button: Option<StyledButton>,
    outline: Outline,
    delegate: Option<Weak<RefCell<dyn AlertSheetDelegate>>>,
    host: Weak<RefCell<Surface>>,
}

impl AlertSheet {
    /// Build a sheet for a screen of the given size.
    ///
    /// Every content argument is optional and each present one adds exactly
    /// one child. The sheet is as wide as the screen, tall only when it has a
    /// button, and starts hidden just below the bottom edge.
    pub fn new(
        screen: Size,
        title: Option<&str>,
        message: Option<&str>,
        button_title: Option<&str>,
        image: Option<ImageSource>,
    ) -> Self {
        let height = if button_title.is_some() {
            SHEET_WITH_BUTTON_HEIGHT
        } else {
            SHEET_HEIGHT
        };
        let background_color = DEFAULT_SHEET_COLOR;
        let font = Font::system(DEFAULT_SHEET_FONT_SIZE);

        let image = image.map(|source| ImageView::new(source).background(background_color));

        let title = title.map(|text| {
            let mut label = StyledLabel::zero().text(text).max_lines(1);
            label.set_background_color(background_color);
            label.set_font(font.clone());
            label
        });

        let message = message.map(|text| {
            let mut label = StyledLabel::zero().text(text);
            label.set_background_color(background_color);
            label.set_font(font.clone());
            label
        });

        let button = button_title.map(|text| {
            let mut button = StyledButton::zero().title(text);
            button.set_background_color(background_color);
            button.set_font(font.clone());
            button
        });

        let rest = SheetPose {
            y: screen.height,
            opacity: 0.0,
        };
        let transition = Transition::spring(
            ANIMATION_DURATION_MS,
            SpringConfig::new(ANIMATION_DAMPING, ANIMATION_VELOCITY),
        )
        .delay(ANIMATION_DELAY_MS);

        let mut sheet = Self {
            widget_id: WidgetId::next(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            screen,
            frame: Rect::new(0.0, rest.y, screen.width, height),
            opacity: rest.opacity,
            state: SheetState::Hidden,
            retired: false,
            pose: AnimationState::new(rest, transition),
            background_color,
            font,
            image,
            title,
            message,
            button,
            outline: Outline::new(Size::new(screen.width, height)),
            delegate: None,
            host: Weak::new(),
        };
        sheet.layout_children();

        log::debug!(
            "Created alert sheet {:?} ({}x{}) with {:?}",
            sheet.widget_id,
            sheet.frame.width,
            sheet.frame.height,
            sheet.roles()
        );
        sheet
    }

    /// Set the delegate. The sheet keeps only a weak reference.
    pub fn set_delegate<D: AlertSheetDelegate + 'static>(&mut self, delegate: &Rc<RefCell<D>>) {
        let delegate: Rc<RefCell<dyn AlertSheetDelegate>> = delegate.clone();
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// The delegate, if one is set and still alive.
    pub fn delegate(&self) -> Option<Rc<RefCell<dyn AlertSheetDelegate>>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Change the sheet color. Title, message and button backgrounds follow,
    /// and the outline is refilled on the next paint.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
        if let Some(title) = self.title.as_mut() {
            title.set_background_color(color);
        }
        if let Some(message) = self.message.as_mut() {
            message.set_background_color(color);
        }
        if let Some(button) = self.button.as_mut() {
            button.set_background_color(color);
        }
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Change the font of every text-bearing child.
    pub fn set_font(&mut self, font: Font) {
        if let Some(title) = self.title.as_mut() {
            title.set_font(font.clone());
        }
        if let Some(message) = self.message.as_mut() {
            message.set_font(font.clone());
        }
        if let Some(button) = self.button.as_mut() {
            button.set_font(font.clone());
        }
        self.font = font;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.state == SheetState::Hidden
    }

    /// True from the moment `show` is accepted until the dismiss completes.
    pub fn is_visible(&self) -> bool {
        !self.is_hidden()
    }

    /// True once a dismiss has completed; the sheet will not show again.
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// True while a show or dismiss transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.pose.is_animating()
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn screen_size(&self) -> Size {
        self.screen
    }

    pub fn image_view(&self) -> Option<&ImageView> {
        self.image.as_ref()
    }

    pub fn title_label(&self) -> Option<&StyledLabel> {
        self.title.as_ref()
    }

    pub fn message_label(&self) -> Option<&StyledLabel> {
        self.message.as_ref()
    }

    pub fn button(&self) -> Option<&StyledButton> {
        self.button.as_ref()
    }

    /// Roles of the present children, in paint order.
    pub fn roles(&self) -> Vec<ChildRole> {
        self.children().into_iter().map(|(role, _)| role).collect()
    }

    /// Surface-space bounds of the child in `role`, if present.
    pub fn child_bounds(&self, role: ChildRole) -> Option<Rect> {
        self.children()
            .into_iter()
            .find(|(r, _)| *r == role)
            .map(|(_, child)| child.bounds())
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Resting y when fully shown.
    fn shown_y(&self) -> f32 {
        self.screen.height - self.frame.height
    }

    /// Attach to `host` and slide in. Ignored unless hidden and not retired.
    pub fn show(&mut self, host: &SurfaceHandle) {
        if self.state != SheetState::Hidden {
            log::debug!("show ignored for {:?}: state is {:?}", self.widget_id, self.state);
            return;
        }
        if self.retired {
            log::warn!(
                "show ignored for {:?}: a dismissed sheet is not reused",
                self.widget_id
            );
            return;
        }

        host.borrow_mut().attach(self.widget_id);
        self.host = Rc::downgrade(host);
        self.state = SheetState::Showing;
        self.pose.animate_to(SheetPose {
            y: self.shown_y(),
            opacity: 1.0,
        });
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        log::debug!("{:?}: Hidden -> Showing", self.widget_id);
    }

    /// Slide out, then detach. Ignored unless fully shown.
    pub fn dismiss(&mut self) {
        if self.state != SheetState::Visible {
            log::debug!(
                "dismiss ignored for {:?}: state is {:?}",
                self.widget_id,
                self.state
            );
            return;
        }

        self.state = SheetState::Dismissing;
        self.pose.animate_to(SheetPose {
            y: self.screen.height,
            opacity: 0.0,
        });
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        log::debug!("{:?}: Visible -> Dismissing", self.widget_id);
    }

    /// Advance any transition in flight to `now`.
    ///
    /// Returns true while another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pose.advance(now) {
            AdvanceResult::NoChange => {}
            AdvanceResult::Changed(pose) => self.apply_pose(pose),
            AdvanceResult::Finished(pose) => {
                self.apply_pose(pose);
                self.finish_transition();
            }
        }
        self.pose.is_animating()
    }

    /// Time until the transition in flight ends, measured from `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.pose.remaining(now)
    }

    /// Re-layout for a new screen size, e.g. after a rotation.
    pub fn set_screen_size(&mut self, screen: Size) {
        if screen == self.screen {
            return;
        }
        self.screen = screen;
        self.frame.width = screen.width;
        self.outline = Outline::new(self.frame.size());

        let target = match self.state {
            SheetState::Hidden | SheetState::Dismissing => SheetPose {
                y: screen.height,
                opacity: self.pose.target().opacity,
            },
            SheetState::Showing | SheetState::Visible => SheetPose {
                y: self.shown_y(),
                opacity: self.pose.target().opacity,
            },
        };
        if self.pose.is_animating() {
            self.pose.animate_to(target);
        } else {
            self.pose.set_immediate(target);
            self.frame.y = target.y;
        }

        self.layout_children();
        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
    }

    fn apply_pose(&mut self, pose: SheetPose) {
        self.opacity = pose.opacity;
        if self.frame.y != pose.y {
            self.frame.y = pose.y;
            self.position_children();
        }
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    fn finish_transition(&mut self) {
        match self.state {
            SheetState::Showing => {
                self.state = SheetState::Visible;
                log::debug!("{:?}: Showing -> Visible", self.widget_id);
            }
            SheetState::Dismissing => {
                self.state = SheetState::Hidden;
                self.retired = true;
                log::debug!("{:?}: Dismissing -> Hidden", self.widget_id);

                if let Some(delegate) = self.delegate() {
                    delegate.borrow_mut().alert_sheet_did_dismiss(self);
                }
                if let Some(host) = self.host.upgrade() {
                    host.borrow_mut().detach(self.widget_id);
                }
                self.host = Weak::new();
            }
            SheetState::Hidden | SheetState::Visible => {}
        }
    }

    fn notify_button_clicked(&mut self, button_index: usize) {
        log::debug!("{:?}: button {} clicked", self.widget_id, button_index);
        if let Some(delegate) = self.delegate() {
            delegate
                .borrow_mut()
                .alert_sheet_clicked_button(self, button_index);
        }
    }

    fn children(&self) -> Vec<(ChildRole, &dyn Widget)> {
        let mut children: Vec<(ChildRole, &dyn Widget)> = Vec::with_capacity(4);
        if let Some(image) = self.image.as_ref() {
            children.push((ChildRole::Image, image));
        }
        if let Some(title) = self.title.as_ref() {
            children.push((ChildRole::Title, title));
        }
        if let Some(message) = self.message.as_ref() {
            children.push((ChildRole::Message, message));
        }
        if let Some(button) = self.button.as_ref() {
            children.push((ChildRole::Button, button));
        }
        children
    }

    fn children_mut(&mut self) -> Vec<(ChildRole, &mut dyn Widget)> {
        let mut children: Vec<(ChildRole, &mut dyn Widget)> = Vec::with_capacity(4);
        if let Some(image) = self.image.as_mut() {
            children.push((ChildRole::Image, image));
        }
        if let Some(title) = self.title.as_mut() {
            children.push((ChildRole::Title, title));
        }
        if let Some(message) = self.message.as_mut() {
            children.push((ChildRole::Message, message));
        }
        if let Some(button) = self.button.as_mut() {
            children.push((ChildRole::Button, button));
        }
        children
    }

    /// Resolve every present child's pin against the current width.
    fn layout_children(&mut self) {
        let width = self.frame.width;
        for (role, child) in self.children_mut() {
            let local = role.pin().resolve(width);
            child.layout(Constraints::tight(local.size()));
        }
        self.position_children();
    }

    fn position_children(&mut self) {
        let (x, y, width) = (self.frame.x, self.frame.y, self.frame.width);
        for (role, child) in self.children_mut() {
            let local = role.pin().resolve(width);
            child.set_origin(x + local.x, y + local.y);
        }
    }
}

impl Widget for AlertSheet {
    /// The sheet always takes the full available width and its fixed height.
    fn layout(&mut self, constraints: Constraints) -> Size {
        let width = constraints.max_width;
        if width.is_finite() && width != self.frame.width {
            self.set_screen_size(Size::new(width, self.screen.height));
        }
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
        self.frame.size()
    }

    fn paint(&self, ctx: &mut PaintContext) {
        if self.is_hidden() {
            return;
        }

        ctx.push_opacity(self.opacity);
        ctx.draw_fill(
            self.outline.tessellation().clone(),
            (self.frame.x, self.frame.y),
            self.background_color,
        );
        for (_, child) in self.children() {
            child.paint(ctx);
        }
        ctx.pop_opacity();
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        if self.is_hidden() {
            return EventResponse::Ignored;
        }

        let frame = self.frame;
        let inside = event.coords().is_some_and(|(x, y)| {
            frame.contains(x, y) && self.outline.contains(x - frame.x, y - frame.y)
        });

        let response = match self.button.as_mut() {
            Some(button) => button.event(event),
            None => EventResponse::Ignored,
        };

        if self.button.as_mut().is_some_and(|b| b.take_activation()) {
            self.notify_button_clicked(0);
        }

        if response == EventResponse::Handled || inside {
            EventResponse::Handled
        } else {
            EventResponse::Ignored
        }
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.frame.x = x;
        self.frame.y = y;
        self.position_children();
    }

    fn bounds(&self) -> Rect {
        self.frame
    }

    fn id(&self) -> WidgetId {
        self.widget_id
    }

    fn mark_dirty(&mut self, flags: ChangeFlags) {
        self.dirty_flags |= flags;
    }

    fn needs_layout(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_LAYOUT)
            || self.children().iter().any(|(_, c)| c.needs_layout())
    }

    fn needs_paint(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_PAINT)
            || self.children().iter().any(|(_, c)| c.needs_paint())
    }

    fn clear_dirty(&mut self) {
        self.dirty_flags = ChangeFlags::empty();
        for (_, child) in self.children_mut() {
            child.clear_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;

    const SCREEN: Size = Size::new(375.0, 667.0);

    fn full_sheet() -> AlertSheet {
        AlertSheet::new(
            SCREEN,
            Some("Network Error"),
            Some("You appear to be offline."),
            Some("DISMISS"),
            Some(ImageSource::named("icon-offline")),
        )
    }

    /// Run the transition in flight to completion and return the time of the last frame.
    fn settle(sheet: &mut AlertSheet, start: Instant) -> Instant {
        let mut now = start;
        sheet.tick(now);
        for _ in 0..100 {
            now += Duration::from_millis(16);
            if !sheet.tick(now) {
                break;
            }
        }
        now
    }

    #[derive(Default)]
    struct Recorder {
        clicked: Vec<usize>,
        dismissed: usize,
        state_on_dismiss: Option<SheetState>,
        dismiss_on_click: bool,
    }

    impl AlertSheetDelegate for Recorder {
        fn alert_sheet_clicked_button(&mut self, sheet: &mut AlertSheet, button_index: usize) {
            self.clicked.push(button_index);
            if self.dismiss_on_click {
                sheet.dismiss();
            }
        }

        fn alert_sheet_did_dismiss(&mut self, sheet: &AlertSheet) {
            self.dismissed += 1;
            self.state_on_dismiss = Some(sheet.state());
        }
    }

    #[test]
    fn test_every_content_combination() {
        for mask in 0u8..16 {
            let image = (mask & 1 != 0).then(|| ImageSource::named("icon"));
            let title = (mask & 2 != 0).then_some("Title");
            let message = (mask & 4 != 0).then_some("Message");
            let button = (mask & 8 != 0).then_some("OK");

            let sheet = AlertSheet::new(SCREEN, title, message, button, image);

            assert_eq!(sheet.roles().len(), mask.count_ones() as usize, "mask {mask:#06b}");
            assert_eq!(sheet.image_view().is_some(), mask & 1 != 0);
            assert_eq!(sheet.title_label().is_some(), mask & 2 != 0);
            assert_eq!(sheet.message_label().is_some(), mask & 4 != 0);
            assert_eq!(sheet.button().is_some(), mask & 8 != 0);

            let expected_height = if button.is_some() {
                SHEET_WITH_BUTTON_HEIGHT
            } else {
                SHEET_HEIGHT
            };
            assert_eq!(sheet.frame(), Rect::new(0.0, 667.0, 375.0, expected_height));
            assert_eq!(sheet.state(), SheetState::Hidden);
            assert_eq!(sheet.opacity(), 0.0);
        }
    }

    #[test]
    fn test_child_placement() {
        let sheet = full_sheet();
        let top = sheet.frame().y;

        assert_eq!(
            sheet.child_bounds(ChildRole::Image),
            Some(Rect::new(178.0, top + 5.0, 19.0, 18.0))
        );
        assert_eq!(
            sheet.child_bounds(ChildRole::Title),
            Some(Rect::new(47.5, top + 28.0, 280.0, 20.0))
        );
        assert_eq!(
            sheet.child_bounds(ChildRole::Message),
            Some(Rect::new(70.0, top + 53.0, 235.0, 34.0))
        );
        assert_eq!(
            sheet.child_bounds(ChildRole::Button),
            Some(Rect::new(87.5, top + 91.0, 200.0, 30.0))
        );
    }

    #[test]
    fn test_children_follow_frame_during_show() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();
        sheet.show(&host);

        let t0 = Instant::now();
        sheet.tick(t0);
        sheet.tick(t0 + Duration::from_millis(100));

        let frame = sheet.frame();
        assert!(frame.y < 667.0 && frame.y > 667.0 - 134.0, "y = {}", frame.y);
        let title = sheet.child_bounds(ChildRole::Title).unwrap();
        assert!((title.y - (frame.y + TOP_TO_TITLE)).abs() < 1e-3);
    }

    #[test]
    fn test_label_styling() {
        let sheet = full_sheet();

        let title = sheet.title_label().unwrap();
        assert_eq!(title.get_text(), "Network Error");
        assert_eq!(title.line_limit(), 1);
        assert_eq!(title.background_color(), DEFAULT_SHEET_COLOR);
        assert_eq!(title.text_color(), Color::WHITE);
        assert_eq!(title.font(), &Font::system(DEFAULT_SHEET_FONT_SIZE));

        let message = sheet.message_label().unwrap();
        assert_eq!(message.line_limit(), 0);
        assert_eq!(message.background_color(), DEFAULT_SHEET_COLOR);

        let button = sheet.button().unwrap();
        assert_eq!(button.get_title(), "DISMISS");
        assert_eq!(button.background_color(), DEFAULT_SHEET_COLOR);
    }

    #[test]
    fn test_background_color_propagates() {
        let mut sheet = full_sheet();
        sheet.clear_dirty();

        let red = Color::rgb(1.0, 0.0, 0.0);
        sheet.set_background_color(red);

        assert_eq!(sheet.background_color(), red);
        assert_eq!(sheet.title_label().unwrap().background_color(), red);
        assert_eq!(sheet.message_label().unwrap().background_color(), red);
        assert_eq!(sheet.button().unwrap().background_color(), red);
        assert_eq!(
            sheet.image_view().unwrap().background_color(),
            DEFAULT_SHEET_COLOR
        );
        assert!(sheet.needs_paint());
    }

    #[test]
    fn test_background_color_reaches_next_paint() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();
        sheet.show(&host);
        settle(&mut sheet, Instant::now());

        let red = Color::rgb(1.0, 0.0, 0.0);
        sheet.set_background_color(red);

        let mut ctx = PaintContext::new();
        sheet.paint(&mut ctx);
        match &ctx.commands()[0] {
            DrawCommand::Fill { color, .. } => assert_eq!(*color, red),
            other => panic!("expected outline fill first, got {:?}", other),
        }
        let label_fills = ctx
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::RoundedRect { .. }))
            .filter(|cmd| cmd.color() == Some(red))
            .count();
        assert_eq!(label_fills, 3);
    }

    #[test]
    fn test_font_propagates() {
        let mut sheet = full_sheet();
        let font = Font::named("Menlo", 15.0);
        sheet.set_font(font.clone());

        assert_eq!(sheet.font(), &font);
        assert_eq!(sheet.title_label().unwrap().font(), &font);
        assert_eq!(sheet.message_label().unwrap().font(), &font);
        assert_eq!(sheet.button().unwrap().font(), &font);
    }

    #[test]
    fn test_style_setters_without_children() {
        let mut sheet = AlertSheet::new(SCREEN, None, None, None, None);
        sheet.set_background_color(Color::BLACK);
        sheet.set_font(Font::system(20.0));

        assert_eq!(sheet.background_color(), Color::BLACK);
        assert_eq!(sheet.font().size, 20.0);
    }

    #[test]
    fn test_show_then_settle() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();

        sheet.show(&host);
        assert_eq!(sheet.state(), SheetState::Showing);
        assert!(sheet.is_visible());
        assert!(host.borrow().contains(sheet.id()));

        settle(&mut sheet, Instant::now());

        assert_eq!(sheet.state(), SheetState::Visible);
        assert_eq!(sheet.frame().y, 667.0 - 134.0);
        assert_eq!(sheet.opacity(), 1.0);
    }

    #[test]
    fn test_show_is_ignored_unless_hidden() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();

        sheet.show(&host);
        sheet.show(&host);
        assert_eq!(host.borrow().children().len(), 1);
        assert_eq!(sheet.state(), SheetState::Showing);
    }

    #[test]
    fn test_dismiss_is_ignored_unless_visible() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();

        sheet.dismiss();
        assert_eq!(sheet.state(), SheetState::Hidden);

        sheet.show(&host);
        sheet.dismiss();
        assert_eq!(sheet.state(), SheetState::Showing);
    }

    #[test]
    fn test_full_cycle_notifies_then_detaches() {
        let host = Surface::shared(SCREEN);
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut sheet = full_sheet();
        sheet.set_delegate(&recorder);

        sheet.show(&host);
        let now = settle(&mut sheet, Instant::now());

        sheet.dismiss();
        assert_eq!(sheet.state(), SheetState::Dismissing);
        assert_eq!(recorder.borrow().dismissed, 0);

        settle(&mut sheet, now);

        assert_eq!(sheet.state(), SheetState::Hidden);
        assert!(sheet.is_retired());
        assert_eq!(sheet.frame().y, 667.0);
        assert_eq!(sheet.opacity(), 0.0);
        assert_eq!(recorder.borrow().dismissed, 1);
        assert_eq!(recorder.borrow().state_on_dismiss, Some(SheetState::Hidden));
        assert!(!host.borrow().contains(sheet.id()));
    }

    #[test]
    fn test_retired_sheet_does_not_show_again() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();

        sheet.show(&host);
        let now = settle(&mut sheet, Instant::now());
        sheet.dismiss();
        settle(&mut sheet, now);

        sheet.show(&host);
        assert_eq!(sheet.state(), SheetState::Hidden);
        assert!(host.borrow().children().is_empty());
    }

    #[test]
    fn test_dismiss_without_delegate() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();

        sheet.show(&host);
        let now = settle(&mut sheet, Instant::now());
        sheet.dismiss();
        settle(&mut sheet, now);

        assert!(sheet.is_hidden());
        assert!(sheet.delegate().is_none());
    }

    #[test]
    fn test_dropped_delegate_is_not_called() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();
        {
            let recorder = Rc::new(RefCell::new(Recorder::default()));
            sheet.set_delegate(&recorder);
        }
        assert!(sheet.delegate().is_none());

        sheet.show(&host);
        let now = settle(&mut sheet, Instant::now());
        let [down, up] = Event::tap(187.5, 667.0 - 134.0 + 100.0);
        sheet.event(&down);
        sheet.event(&up);
        assert_eq!(sheet.state(), SheetState::Visible);

        sheet.dismiss();
        settle(&mut sheet, now);
        assert!(sheet.is_hidden());
    }

    #[test]
    fn test_cleared_delegate_is_not_called() {
        let host = Surface::shared(SCREEN);
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut sheet = full_sheet();
        sheet.set_delegate(&recorder);
        sheet.clear_delegate();
        assert!(sheet.delegate().is_none());

        sheet.show(&host);
        let now = settle(&mut sheet, Instant::now());
        sheet.dismiss();
        settle(&mut sheet, now);

        assert!(sheet.is_hidden());
        assert_eq!(recorder.borrow().dismissed, 0);
    }

    #[test]
    fn test_button_tap_reports_index_zero() {
        let host = Surface::shared(SCREEN);
        let recorder = Rc::new(RefCell::new(Recorder {
            dismiss_on_click: true,
            ..Recorder::default()
        }));
        let mut sheet = full_sheet();
        sheet.set_delegate(&recorder);
        sheet.show(&host);
        settle(&mut sheet, Instant::now());

        let button = sheet.child_bounds(ChildRole::Button).unwrap();
        let (x, y) = button.center();
        let [down, up] = Event::tap(x, y);
        assert_eq!(sheet.event(&down), EventResponse::Handled);
        assert_eq!(sheet.event(&up), EventResponse::Handled);

        assert_eq!(recorder.borrow().clicked, vec![0]);
        assert_eq!(sheet.state(), SheetState::Dismissing);
    }

    #[test]
    fn test_hidden_sheet_ignores_events_and_paints_nothing() {
        let mut sheet = full_sheet();
        let (x, y) = sheet.frame().center();
        let [down, _] = Event::tap(x, y);

        assert_eq!(sheet.event(&down), EventResponse::Ignored);

        let mut ctx = PaintContext::new();
        sheet.paint(&mut ctx);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_tap_outside_sheet_is_ignored() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();
        sheet.show(&host);
        settle(&mut sheet, Instant::now());

        let [down, _] = Event::tap(10.0, 10.0);
        assert_eq!(sheet.event(&down), EventResponse::Ignored);
    }

    #[test]
    fn test_tap_beside_the_arch_is_ignored() {
        let host = Surface::shared(SCREEN);
        let mut sheet = AlertSheet::new(SCREEN, Some("Title"), None, None, None);
        sheet.show(&host);
        settle(&mut sheet, Instant::now());

        let top = sheet.frame().y;
        let [corner, _] = Event::tap(1.0, top + 1.0);
        assert_eq!(sheet.event(&corner), EventResponse::Ignored);

        let [peak, _] = Event::tap(187.5, top + 1.0);
        assert_eq!(sheet.event(&peak), EventResponse::Handled);
    }

    #[test]
    fn test_paint_order_and_opacity() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();
        sheet.show(&host);
        settle(&mut sheet, Instant::now());

        let mut ctx = PaintContext::new();
        sheet.paint(&mut ctx);

        match &ctx.commands()[0] {
            DrawCommand::Fill { origin, color, .. } => {
                assert_eq!(*origin, (0.0, 667.0 - 134.0));
                assert_eq!(*color, DEFAULT_SHEET_COLOR);
            }
            other => panic!("expected outline fill first, got {:?}", other),
        }
        assert!(ctx.commands().len() > 4);
        assert_eq!(ctx.opacity(), 1.0);
    }

    #[test]
    fn test_screen_size_change_relayouts() {
        let host = Surface::shared(SCREEN);
        let mut sheet = full_sheet();
        sheet.show(&host);
        settle(&mut sheet, Instant::now());

        sheet.set_screen_size(Size::new(667.0, 375.0));

        assert_eq!(sheet.frame(), Rect::new(0.0, 375.0 - 134.0, 667.0, 134.0));
        assert_eq!(sheet.outline().size(), Size::new(667.0, 134.0));
        let title = sheet.child_bounds(ChildRole::Title).unwrap();
        assert_eq!(title.x, (667.0 - 280.0) / 2.0);
    }

    #[test]
    fn test_pins_match_constants() {
        assert_eq!(ChildRole::Image.pin(), Pin::new(5.0, 19.0, 18.0));
        assert_eq!(ChildRole::Title.pin(), Pin::new(28.0, 280.0, 20.0));
        assert_eq!(ChildRole::Message.pin(), Pin::new(53.0, 235.0, 34.0));
        assert_eq!(ChildRole::Button.pin(), Pin::new(91.0, 200.0, 30.0));
    }
}
