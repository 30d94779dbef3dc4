//! Geometry, style and timing constants for the alert sheet and its demo host.
//!
//! All lengths are in logical pixels.

use crate::widgets::Color;

/// Sheet height when no action button is present.
pub const SHEET_HEIGHT: f32 = 94.0;

/// Sheet height when an action button is present.
pub const SHEET_WITH_BUTTON_HEIGHT: f32 = 134.0;

/// Height of the curved top edge. The quadratic control point sits this far
/// above the sheet's top edge.
pub const CURVE_HEIGHT: f32 = 18.0;

pub const IMAGE_WIDTH: f32 = 19.0;
pub const IMAGE_HEIGHT: f32 = 18.0;

pub const TITLE_MAX_WIDTH: f32 = 280.0;
pub const TITLE_MAX_HEIGHT: f32 = 20.0;

pub const MESSAGE_MAX_WIDTH: f32 = 235.0;
pub const MESSAGE_MAX_HEIGHT: f32 = 34.0;

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 30.0;

/// Offset from the sheet's top edge to the image box.
pub const TOP_TO_IMAGE: f32 = 5.0;
/// Offset from the sheet's top edge to the title label.
pub const TOP_TO_TITLE: f32 = 28.0;
/// Offset from the sheet's top edge to the message label.
pub const TOP_TO_MESSAGE: f32 = 53.0;
/// Offset from the sheet's top edge to the action button.
pub const TOP_TO_BUTTON: f32 = 91.0;

/// Duration of both the show and the dismiss transition.
pub const ANIMATION_DURATION_MS: f32 = 300.0;
pub const ANIMATION_DELAY_MS: f32 = 0.0;
/// Damping ratio of the sheet spring. 1.0 is critically damped (no overshoot).
pub const ANIMATION_DAMPING: f32 = 1.0;
/// Initial spring velocity, in units of the total travel per second of normalized time.
pub const ANIMATION_VELOCITY: f32 = 1.0;

/// Default fill of the sheet and of its styled children (112, 206, 216).
pub const DEFAULT_SHEET_COLOR: Color = Color::rgb(112.0 / 255.0, 206.0 / 255.0, 216.0 / 255.0);

/// Sheet font size; the sheet font defaults to the system family.
pub const DEFAULT_SHEET_FONT_SIZE: f32 = 13.0;

pub const LABEL_FONT_FAMILY: &str = "HelveticaNeue-Medium";
pub const LABEL_FONT_SIZE: f32 = 12.0;

pub const BUTTON_FONT_FAMILY: &str = "HelveticaNeue-Bold";
pub const BUTTON_FONT_SIZE: f32 = 13.0;
pub const BUTTON_BORDER_WIDTH: f32 = 1.0;

/// Asset name of the button background in its resting state.
pub const BUTTON_IMAGE_NORMAL: &str = "btn-connect";
/// Asset name of the button background while pressed.
pub const BUTTON_IMAGE_HIGHLIGHTED: &str = "btn-connect-tap";

pub const DEMO_BUTTON_WIDTH: f32 = 200.0;
pub const DEMO_BUTTON_HEIGHT: f32 = 44.0;
pub const DEMO_BUTTON_TOP_MARGIN: f32 = 44.0;
pub const DEMO_BUTTON_CORNER_RADIUS: f32 = 11.0;
pub const DEMO_BUTTON_TITLE: &str = "Display Alert Sheet";

/// Curve flattening tolerance used when tessellating the sheet outline.
pub const PATH_TOLERANCE: f32 = 0.25;
