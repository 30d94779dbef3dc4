//! Fixed-offset, fixed-size, horizontally centred placement.
//!
//! A [`Pin`] positions one child solely relative to its container's edges:
//! the child's top sits a fixed distance below the container's top, its size
//! is fixed, and its horizontal centre matches the container's. Pins never
//! reference siblings, so any subset of children can be present and each one
//! resolves independently for any container width.

use super::Size;
use crate::widgets::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin {
    /// Distance from the container's top edge to the child's top edge
    pub top: f32,
    /// Fixed child size
    pub size: Size,
}

impl Pin {
    pub const fn new(top: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            size: Size::new(width, height),
        }
    }

    /// Resolve to a rect in the container's local coordinates.
    ///
    /// Children wider than the container overflow equally on both sides,
    /// which keeps the centres aligned.
    pub fn resolve(&self, container_width: f32) -> Rect {
        Rect::new(
            (container_width - self.size.width) / 2.0,
            self.top,
            self.size.width,
            self.size.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_centres_horizontally() {
        let pin = Pin::new(28.0, 280.0, 20.0);
        assert_eq!(pin.resolve(320.0), Rect::new(20.0, 28.0, 280.0, 20.0));
        assert_eq!(pin.resolve(414.0), Rect::new(67.0, 28.0, 280.0, 20.0));
    }

    #[test]
    fn test_resolve_overflows_symmetrically() {
        let rect = Pin::new(0.0, 200.0, 30.0).resolve(100.0);
        assert_eq!(rect.x, -50.0);
        assert_eq!(rect.x + rect.width / 2.0, 50.0);
    }

    #[test]
    fn test_top_is_independent_of_width() {
        let pin = Pin::new(91.0, 200.0, 30.0);
        for width in [320.0, 375.0, 768.0, 1024.0] {
            assert_eq!(pin.resolve(width).y, 91.0);
        }
    }
}
