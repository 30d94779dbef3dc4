use crate::constants::{DEFAULT_SHEET_COLOR, LABEL_FONT_FAMILY, LABEL_FONT_SIZE};
use crate::invalidation::{ChangeFlags, WidgetId};
use crate::layout::{Constraints, Size};
use crate::renderer::{LineBreak, PaintContext, TextAlign, TextRun};

use super::font::Font;
use super::widget::{Color, Rect, Widget};

/// Multi-line, centred, word-wrapping text on an opaque background.
///
/// Comes pre-styled with white `HelveticaNeue-Medium` 12 text on the sheet
/// color; every attribute can be changed afterwards.
pub struct StyledLabel {
    widget_id: WidgetId,
    dirty_flags: ChangeFlags,
    text: String,
    font: Font,
    text_color: Color,
    background: Color,
    align: TextAlign,
    max_lines: u32,
    line_break: LineBreak,
    bounds: Rect,
}

impl StyledLabel {
    pub fn new(frame: Rect) -> Self {
        Self {
            widget_id: WidgetId::next(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            text: String::new(),
            font: Font::named(LABEL_FONT_FAMILY, LABEL_FONT_SIZE),
            text_color: Color::WHITE,
            background: DEFAULT_SHEET_COLOR,
            align: TextAlign::Center,
            max_lines: 0,
            line_break: LineBreak::WordWrap,
            bounds: frame,
        }
    }

    /// A label with an empty frame, to be placed by its parent's layout.
    pub fn zero() -> Self {
        Self::new(Rect::zero())
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn max_lines(mut self, lines: u32) -> Self {
        self.max_lines = lines;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
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

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn alignment(&self) -> TextAlign {
        self.align
    }

    /// Maximum number of lines; 0 means unlimited
    pub fn line_limit(&self) -> u32 {
        self.max_lines
    }

    pub fn line_break(&self) -> LineBreak {
        self.line_break
    }
}

impl Widget for StyledLabel {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let size = constraints.constrain(self.bounds.size());
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
        size
    }

    fn paint(&self, ctx: &mut PaintContext) {
        ctx.draw_rect(self.bounds, self.background);
        if self.text.is_empty() {
            return;
        }
        ctx.draw_text(TextRun {
            text: self.text.clone(),
            rect: self.bounds,
            color: self.text_color,
            font: self.font.clone(),
            align: self.align,
            max_lines: self.max_lines,
            line_break: self.line_break,
        });
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
