//! Constrained two-region layout for the home screen empty state.
//!
//! Banners stack from the top of the available space. A single primary
//! child is centered in the whole region when the banners leave room for
//! it, and appended below them otherwise.
//!
//! # Usage
//!
//! ```
//! use homescreen_layout::{Anchor, ConstrainedStack, Rect, Size, StackChildren};
//!
//! let children = StackChildren::new()
//!     .banner(Size::new(300.0, 100.0))
//!     .primary(Size::new(50.0, 50.0))
//!     .unwrap();
//!
//! let stack = ConstrainedStack::new(8.0, 0.0);
//! let result = stack.place_children(Rect::new(0.0, 0.0, 400.0, 1000.0), Some(400.0), &children);
//! assert_eq!(result.primary().unwrap().anchor, Anchor::Center);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod primitives;
pub mod scene;

pub use config::StackConfig;
pub use error::{check_dimension, LayoutError};
pub use layout::{
    Anchor, ChildId, ConstrainedStack, LayoutResult, Measure, MeasureFn, Padding, Placement, Role,
    StackChild, StackChildren, TextBlock,
};
pub use primitives::{Point, Rect, Size};
pub use scene::{Scene, SceneElement};
