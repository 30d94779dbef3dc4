//! Image sources and the fixed-box image view.
//!
//! Raster sizes are read with `image`, SVG with `resvg`'s usvg parser.
//! Named sources are application assets resolved by the rendering backend,
//! so they have no intrinsic size on this side.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::invalidation::{ChangeFlags, WidgetId};
use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;

use super::widget::{Color, Rect, Widget};

/// Source for an image.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Application asset referenced by logical name
    Named(String),
    /// Raster image from a file path (PNG, JPEG, GIF, WebP)
    Path(PathBuf),
    /// Raster image from in-memory bytes
    Bytes(Arc<[u8]>),
    /// SVG from a file path
    SvgPath(PathBuf),
    /// SVG from in-memory bytes
    SvgBytes(Arc<[u8]>),
}

impl ImageSource {
    pub fn named(name: impl Into<String>) -> Self {
        ImageSource::Named(name.into())
    }

    /// Check if this is an SVG source
    pub fn is_svg(&self) -> bool {
        matches!(self, ImageSource::SvgPath(_) | ImageSource::SvgBytes(_))
    }

    /// Intrinsic pixel dimensions, or `None` when they cannot be determined.
    pub fn intrinsic_size(&self) -> Option<(u32, u32)> {
        let result = match self {
            ImageSource::Named(_) => return None,
            ImageSource::Path(path) => image::image_dimensions(path).map_err(|e| e.to_string()),
            ImageSource::Bytes(bytes) => raster_size(bytes).map_err(|e| e.to_string()),
            ImageSource::SvgPath(path) => std::fs::read(path)
                .map_err(|e| e.to_string())
                .and_then(|data| svg_size(&data)),
            ImageSource::SvgBytes(bytes) => svg_size(bytes),
        };

        match result {
            Ok(size) => Some(size),
            Err(err) => {
                log::warn!("Could not read image size for {}: {}", self.describe(), err);
                None
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            ImageSource::Named(name) => format!("asset '{}'", name),
            ImageSource::Path(path) | ImageSource::SvgPath(path) => path.display().to_string(),
            ImageSource::Bytes(bytes) | ImageSource::SvgBytes(bytes) => {
                format!("{} in-memory bytes", bytes.len())
            }
        }
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        let path = path.to_path_buf();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
        {
            ImageSource::SvgPath(path)
        } else {
            ImageSource::Path(path)
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::from(path.as_path())
    }
}

/// Read raster dimensions from the header without decoding pixels.
fn raster_size(bytes: &[u8]) -> image::ImageResult<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
}

fn svg_size(bytes: &[u8]) -> Result<(u32, u32), String> {
    let tree = resvg::usvg::Tree::from_data(bytes, &resvg::usvg::Options::default())
        .map_err(|e| e.to_string())?;
    let size = tree.size();
    Ok((size.width().round() as u32, size.height().round() as u32))
}

/// A fixed-size box that draws an image unscaled, centred inside it.
pub struct ImageView {
    widget_id: WidgetId,
    dirty_flags: ChangeFlags,
    source: ImageSource,
    intrinsic_size: Option<(u32, u32)>,
    background: Color,
    bounds: Rect,
}

impl ImageView {
    pub fn new(source: ImageSource) -> Self {
        let intrinsic_size = source.intrinsic_size();
        Self {
            widget_id: WidgetId::next(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            source,
            intrinsic_size,
            background: Color::TRANSPARENT,
            bounds: Rect::zero(),
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    pub fn intrinsic_size(&self) -> Option<(u32, u32)> {
        self.intrinsic_size
    }

    /// Where the image content lands: intrinsic size centred in the box,
    /// or the whole box when the size is unknown.
    pub fn content_rect(&self) -> Rect {
        match self.intrinsic_size {
            Some((w, h)) => {
                let (w, h) = (w as f32, h as f32);
                Rect::new(
                    self.bounds.x + (self.bounds.width - w) / 2.0,
                    self.bounds.y + (self.bounds.height - h) / 2.0,
                    w,
                    h,
                )
            }
            None => self.bounds,
        }
    }
}

impl Widget for ImageView {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let size = constraints.constrain(constraints.max_size());
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
        size
    }

    fn paint(&self, ctx: &mut PaintContext) {
        ctx.draw_rect(self.bounds, self.background);
        ctx.draw_image(self.source.clone(), self.content_rect());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;

    fn png_bytes(width: u32, height: u32) -> Arc<[u8]> {
        let mut out = Cursor::new(Vec::new());
        image::RgbaImage::new(width, height)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner().into()
    }

    #[test]
    fn test_raster_intrinsic_size() {
        let source = ImageSource::Bytes(png_bytes(19, 18));
        assert_eq!(source.intrinsic_size(), Some((19, 18)));
    }

    #[test]
    fn test_svg_intrinsic_size() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="12"></svg>"#;
        let source = ImageSource::SvgBytes(Arc::from(&svg[..]));
        assert!(source.is_svg());
        assert_eq!(source.intrinsic_size(), Some((24, 12)));
    }

    #[test]
    fn test_unreadable_and_named_sources_have_no_size() {
        assert_eq!(ImageSource::Bytes(Arc::from(&b"nope"[..])).intrinsic_size(), None);
        assert_eq!(ImageSource::named("btn-connect").intrinsic_size(), None);
    }

    #[test]
    fn test_path_extension_selects_svg() {
        assert!(ImageSource::from(PathBuf::from("icons/warning.SVG")).is_svg());
        assert!(!ImageSource::from(PathBuf::from("icons/warning.png")).is_svg());
    }

    #[test]
    fn test_content_is_centred_at_intrinsic_size() {
        let mut view = ImageView::new(ImageSource::Bytes(png_bytes(9, 8)));
        view.layout(Constraints::tight(Size::new(19.0, 18.0)));
        view.set_origin(100.0, 5.0);

        assert_eq!(view.content_rect(), Rect::new(105.0, 10.0, 9.0, 8.0));

        let mut ctx = PaintContext::new();
        view.paint(&mut ctx);
        assert!(matches!(
            ctx.commands()[1],
            DrawCommand::Image { rect, .. } if rect == Rect::new(105.0, 10.0, 9.0, 8.0)
        ));
    }
}
