//! The sheet's background shape: a flat-sided rectangle whose top edge is a
//! single quadratic arch.

use std::sync::Arc;

use crate::constants::{CURVE_HEIGHT, PATH_TOLERANCE};
use crate::layout::Size;
use crate::renderer::{tessellate_fill, Path, Tessellation};

/// Outline geometry for one sheet size, tessellated once per resize.
#[derive(Debug, Clone)]
pub struct Outline {
    size: Size,
    path: Path,
    tessellation: Arc<Tessellation>,
}

impl Outline {
    pub fn new(size: Size) -> Self {
        let path = outline_path(size, CURVE_HEIGHT);
        let tessellation = Arc::new(tessellate_fill(&path, PATH_TOLERANCE));
        Self {
            size,
            path,
            tessellation,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tessellation(&self) -> &Arc<Tessellation> {
        &self.tessellation
    }

    /// Hit test in the sheet's local coordinates.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.tessellation.contains(x, y)
    }
}

/// Bottom rectangle from the curve's base down, then the arch back across.
///
/// The control point sits `curve_height` above the top edge at the
/// horizontal midpoint, so the arch itself peaks exactly on the top edge.
pub fn outline_path(size: Size, curve_height: f32) -> Path {
    let mut path = Path::new();
    if size.is_empty() {
        return path;
    }

    path.move_to(0.0, curve_height)
        .line_to(0.0, size.height)
        .line_to(size.width, size.height)
        .line_to(size.width, curve_height)
        .quad_to((size.width / 2.0, -curve_height), (0.0, curve_height))
        .close();
    path
}
