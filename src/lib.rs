//! A slide-up alert sheet overlay with a curved top edge, spring-driven
//! show/dismiss transitions and delegate callbacks.
//!
//! The sheet is a retained-mode [`Widget`](widgets::Widget): it lays out its
//! children once, records draw commands into a
//! [`PaintContext`](renderer::PaintContext) and is driven by an external clock
//! through [`AlertSheet::tick`](widgets::AlertSheet::tick). A small demo host
//! lives in [`host`].

pub mod animation;
pub mod constants;
pub mod host;
pub mod invalidation;
pub mod layout;
pub mod renderer;
pub mod surface;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{SpringConfig, TimingFunction, Transition};
    pub use crate::host::{DemoButton, DemoSheetDelegate, HostConfig, HostScreen};
    pub use crate::layout::{Constraints, Size};
    pub use crate::renderer::{DrawCommand, Mesh, PaintContext};
    pub use crate::surface::{Surface, SurfaceHandle};
    pub use crate::widgets::{
        AlertSheet, AlertSheetDelegate, ChildRole, Color, Event, EventResponse, Font,
        ImageSource, MouseButton, Rect, SheetState, StyledButton, StyledLabel, Widget,
    };
}
