//! Layout system for the home screen empty state.
//!
//! Children report their intrinsic size through [`Measure`]; the
//! [`ConstrainedStack`] stacks banners from the top and then decides
//! whether the primary child can sit at the center of the bounds.
//!
//! # Architecture
//!
//! ```text
//! StackChildren -> size_that_fits() -> Size
//!               -> place_children(bounds) -> LayoutResult
//! ```
//!
//! Both passes are pure and re-run on every layout cycle.

pub mod child;
pub mod measure;
pub mod metrics;
pub mod placement;
pub mod stack;

pub use child::{ChildId, Role, StackChild, StackChildren};
pub use measure::{Measure, MeasureFn, TextBlock};
pub use metrics::{Padding, BASE_FONT_SIZE, CHAR_WIDTH, DEFAULT_SPACING, LINE_HEIGHT};
pub use placement::{Anchor, LayoutResult, Placement};
pub use stack::ConstrainedStack;
