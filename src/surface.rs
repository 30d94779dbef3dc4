//! Host surfaces that overlays attach to.

use std::cell::RefCell;
use std::rc::Rc;

use crate::invalidation::WidgetId;
use crate::layout::Size;
use crate::widgets::Color;

/// Shared handle to a surface. Overlays keep a `Weak` to it so they can
/// detach themselves.
pub type SurfaceHandle = Rc<RefCell<Surface>>;

/// A full-screen container that tracks which overlays are attached to it,
/// bottom to top.
#[derive(Debug)]
pub struct Surface {
    size: Size,
    background: Color,
    children: Vec<WidgetId>,
}

impl Surface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: Color::WHITE,
            children: Vec::new(),
        }
    }

    pub fn shared(size: Size) -> SurfaceHandle {
        Rc::new(RefCell::new(Self::new(size)))
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Attach a child on top. Returns false if it was already attached.
    pub fn attach(&mut self, id: WidgetId) -> bool {
        if self.contains(id) {
            return false;
        }
        log::info!("Attaching {:?} to surface", id);
        self.children.push(id);
        true
    }

    /// Detach a child. Returns false if it was not attached.
    pub fn detach(&mut self, id: WidgetId) -> bool {
        let before = self.children.len();
        self.children.retain(|child| *child != id);
        let removed = self.children.len() != before;
        if removed {
            log::info!("Detached {:?} from surface", id);
        }
        removed
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.children.contains(&id)
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_is_idempotent() {
        let mut surface = Surface::new(Size::new(320.0, 568.0));
        let id = WidgetId::next();

        assert!(surface.attach(id));
        assert!(!surface.attach(id));
        assert_eq!(surface.children(), &[id]);
    }

    #[test]
    fn test_detach_keeps_order_of_others() {
        let mut surface = Surface::new(Size::new(320.0, 568.0));
        let (a, b, c) = (WidgetId::next(), WidgetId::next(), WidgetId::next());
        surface.attach(a);
        surface.attach(b);
        surface.attach(c);

        assert!(surface.detach(b));
        assert!(!surface.detach(b));
        assert_eq!(surface.children(), &[a, c]);
    }
}
