//! Draw command definitions recorded by [`PaintContext`](super::PaintContext).

use std::sync::Arc;

use super::path::Tessellation;
use crate::widgets::font::Font;
use crate::widgets::image::ImageSource;
use crate::widgets::{Color, Rect};

/// Border definition for shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    /// Border width in logical pixels
    pub width: f32,
    /// Border color
    pub color: Color,
}

impl Border {
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Horizontal text alignment within its rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// How text that exceeds its rect's width is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreak {
    /// Wrap at word boundaries
    #[default]
    WordWrap,
    /// Cut the last visible line with an ellipsis
    TruncateTail,
}

/// A laid-out run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// The bounding rectangle for the text
    pub rect: Rect,
    pub color: Color,
    pub font: Font,
    pub align: TextAlign,
    /// Maximum number of lines; 0 means unlimited
    pub max_lines: u32,
    pub line_break: LineBreak,
}

/// A single draw operation in surface coordinates.
///
/// Colors already include the opacity that was active when the command was
/// recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A rounded rectangle with an optional border.
    RoundedRect {
        rect: Rect,
        color: Color,
        /// Corner radius in logical pixels
        radius: f32,
        border: Option<Border>,
    },

    /// A pre-tessellated shape translated to `origin`.
    Fill {
        tessellation: Arc<Tessellation>,
        origin: (f32, f32),
        color: Color,
    },

    Text(TextRun),

    /// An image drawn at its intrinsic size, centred in `rect`.
    Image {
        source: ImageSource,
        rect: Rect,
        opacity: f32,
    },
}

impl DrawCommand {
    /// Fill color of the command, if it has one.
    pub fn color(&self) -> Option<Color> {
        match self {
            DrawCommand::RoundedRect { color, .. } | DrawCommand::Fill { color, .. } => {
                Some(*color)
            }
            DrawCommand::Text(run) => Some(run.color),
            DrawCommand::Image { .. } => None,
        }
    }
}
