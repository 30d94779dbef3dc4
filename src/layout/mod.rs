pub mod constraints;
pub mod pin;

pub use constraints::{Constraints, Size};
pub use pin::Pin;
