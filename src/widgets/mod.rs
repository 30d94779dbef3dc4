pub mod alert_sheet;
pub mod button;
pub mod font;
pub mod image;
pub mod label;
pub mod widget;

/// Macro to implement common dirty flag methods for simple widgets.
macro_rules! impl_dirty_flags {
    () => {
        fn mark_dirty(&mut self, flags: crate::invalidation::ChangeFlags) {
            self.dirty_flags |= flags;
        }
        fn needs_layout(&self) -> bool {
            self.dirty_flags
                .contains(crate::invalidation::ChangeFlags::NEEDS_LAYOUT)
        }
        fn needs_paint(&self) -> bool {
            self.dirty_flags
                .contains(crate::invalidation::ChangeFlags::NEEDS_PAINT)
        }
        fn clear_dirty(&mut self) {
            self.dirty_flags = crate::invalidation::ChangeFlags::empty();
        }
    };
}
pub(crate) use impl_dirty_flags;

pub use alert_sheet::{AlertSheet, AlertSheetDelegate, ChildRole, SheetState};
pub use button::{ControlState, StyledButton};
pub use font::{Font, FontFamily, FontWeight};
pub use image::{ImageSource, ImageView};
pub use label::StyledLabel;
pub use widget::{Color, Event, EventResponse, MouseButton, Rect, Widget};
