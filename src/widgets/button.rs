use bitflags::bitflags;

use crate::constants::{
    BUTTON_BORDER_WIDTH, BUTTON_FONT_FAMILY, BUTTON_FONT_SIZE, BUTTON_IMAGE_HIGHLIGHTED,
    BUTTON_IMAGE_NORMAL, DEFAULT_SHEET_COLOR,
};
use crate::invalidation::{ChangeFlags, WidgetId};
use crate::layout::{Constraints, Size};
use crate::renderer::{Border, LineBreak, PaintContext, TextAlign, TextRun};

use super::font::{Font, FontWeight};
use super::image::ImageSource;
use super::widget::{Color, Event, EventResponse, MouseButton, Rect, Widget};

bitflags! {
    /// Interaction state of a control. The empty set is the resting state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ControlState: u8 {
        /// Pressed with the pointer still inside
        const HIGHLIGHTED = 0b01;
    }
}

/// A bordered push button with separate resting and pressed backgrounds.
///
/// Activation follows the usual press/release rule: press inside, release
/// inside. The owner collects activations with [`take_activation`](Self::take_activation).
pub struct StyledButton {
    widget_id: WidgetId,
    dirty_flags: ChangeFlags,
    title: String,
    font: Font,
    title_color: Color,
    background: Color,
    border: Border,
    corner_radius: f32,
    normal_image: Option<ImageSource>,
    highlighted_image: Option<ImageSource>,
    state: ControlState,
    tracking: bool,
    activated: bool,
    bounds: Rect,
}

impl StyledButton {
    pub fn new(frame: Rect) -> Self {
        Self {
            widget_id: WidgetId::next(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            title: String::new(),
            font: Font::named(BUTTON_FONT_FAMILY, BUTTON_FONT_SIZE).weight(FontWeight::BOLD),
            title_color: Color::WHITE,
            background: DEFAULT_SHEET_COLOR,
            border: Border::new(BUTTON_BORDER_WIDTH, Color::WHITE),
            corner_radius: 0.0,
            normal_image: Some(ImageSource::named(BUTTON_IMAGE_NORMAL)),
            highlighted_image: Some(ImageSource::named(BUTTON_IMAGE_HIGHLIGHTED)),
            state: ControlState::empty(),
            tracking: false,
            activated: false,
            bounds: frame,
        }
    }

    /// A button with an empty frame, to be placed by its parent's layout.
    pub fn zero() -> Self {
        Self::new(Rect::zero())
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Replace both background images; `None` leaves the plain fill.
    pub fn background_images(
        mut self,
        normal: Option<ImageSource>,
        highlighted: Option<ImageSource>,
    ) -> Self {
        self.normal_image = normal;
        self.highlighted_image = highlighted;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background = color;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    pub fn title_color(&self) -> Color {
        self.title_color
    }

    pub fn border_style(&self) -> Border {
        self.border
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Background image shown in the given state.
    pub fn background_image(&self, state: ControlState) -> Option<&ImageSource> {
        if state.contains(ControlState::HIGHLIGHTED) {
            self.highlighted_image.as_ref().or(self.normal_image.as_ref())
        } else {
            self.normal_image.as_ref()
        }
    }

    /// Returns true once per completed press/release inside the button.
    pub fn take_activation(&mut self) -> bool {
        std::mem::take(&mut self.activated)
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        if self.state.contains(ControlState::HIGHLIGHTED) != highlighted {
            self.state.set(ControlState::HIGHLIGHTED, highlighted);
            self.mark_dirty(ChangeFlags::NEEDS_PAINT);
        }
    }
}

impl Widget for StyledButton {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let size = constraints.constrain(self.bounds.size());
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
        size
    }

    fn paint(&self, ctx: &mut PaintContext) {
        ctx.draw_rounded_rect_with_border(
            self.bounds,
            self.background,
            self.corner_radius,
            self.border,
        );
        if let Some(image) = self.background_image(self.state) {
            ctx.draw_image(image.clone(), self.bounds);
        }
        if !self.title.is_empty() {
            ctx.draw_text(TextRun {
                text: self.title.clone(),
                rect: self.bounds,
                color: self.title_color,
                font: self.font.clone(),
                align: TextAlign::Center,
                max_lines: 1,
                line_break: LineBreak::TruncateTail,
            });
        }
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        match *event {
            Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } if self.bounds.contains(x, y) => {
                self.tracking = true;
                self.set_highlighted(true);
                EventResponse::Handled
            }
            Event::MouseMove { x, y } if self.tracking => {
                let inside = self.bounds.contains(x, y);
                self.set_highlighted(inside);
                EventResponse::Handled
            }
            Event::MouseUp {
                x,
                y,
                button: MouseButton::Left,
            } if self.tracking => {
                self.tracking = false;
                self.set_highlighted(false);
                if self.bounds.contains(x, y) {
                    self.activated = true;
                }
                EventResponse::Handled
            }
            Event::MouseLeave if self.tracking => {
                self.tracking = false;
                self.set_highlighted(false);
                EventResponse::Handled
            }
            _ => EventResponse::Ignored,
        }
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn id(&self) -> WidgetId {
        self.widget_id
    }

    super::impl_dirty_flags!();
}
