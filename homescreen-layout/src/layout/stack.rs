//! ConstrainedStack - banners on top, primary centered when it fits.
//!
//! Banners flow top to bottom, each centered horizontally. The primary
//! child is then either centered in the full bounds or, when the banners
//! already reach past the point where centering would overlap them,
//! appended directly below the last banner.

use crate::config::StackConfig;
use crate::primitives::{Point, Rect, Size};

use super::child::{Role, StackChildren};
use super::measure::Measure;
use super::placement::{Anchor, LayoutResult, Placement};

/// Two-region vertical layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstrainedStack {
    /// Spacing between children.
    spacing: f32,
    /// Lower bound for the fitted height.
    min_height: f32,
}

impl Default for ConstrainedStack {
    fn default() -> Self {
        Self::from_config(StackConfig::default())
    }
}

impl From<StackConfig> for ConstrainedStack {
    fn from(config: StackConfig) -> Self {
        Self::from_config(config)
    }
}

impl ConstrainedStack {
    pub fn new(spacing: f32, min_height: f32) -> Self {
        Self { spacing, min_height }
    }

    pub fn from_config(config: StackConfig) -> Self {
        Self::new(config.spacing, config.min_height)
    }

    /// Set spacing between children.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the minimum fitted height.
    pub fn min_height(mut self, min_height: f32) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn config(&self) -> StackConfig {
        StackConfig {
            spacing: self.spacing,
            min_height: self.min_height,
        }
    }

    /// Spacing contributed by `count` stacked children.
    #[inline]
    fn total_spacing(&self, count: usize) -> f32 {
        if count <= 1 {
            return 0.0;
        }
        self.spacing * (count - 1) as f32
    }

    /// Size needed to stack every child at `proposed_width`.
    ///
    /// The width echoes the proposal, or `f32::INFINITY` when unconstrained.
    /// The height is the stacked height, but never less than `min_height`.
    pub fn size_that_fits<M: Measure>(
        &self,
        proposed_width: Option<f32>,
        children: &StackChildren<M>,
    ) -> Size {
        let stacked: f32 = children
            .iter()
            .map(|(_, child)| child.measure(proposed_width).height)
            .sum::<f32>()
            + self.total_spacing(children.len());

        debug_assert!(!stacked.is_nan(), "NaN height in stack layout");

        Size::new(
            proposed_width.unwrap_or(f32::INFINITY),
            self.min_height.max(stacked),
        )
    }

    /// Place every child inside `bounds`.
    ///
    /// Children are measured at `proposed_width`, or at the bounds width
    /// when the proposal is unconstrained. Placements come back in input
    /// order.
    pub fn place_children<M: Measure>(
        &self,
        bounds: Rect,
        proposed_width: Option<f32>,
        children: &StackChildren<M>,
    ) -> LayoutResult {
        let measure_width = proposed_width.or(Some(bounds.width));
        let mut placements = Vec::with_capacity(children.len());

        // Cursor is relative to the top of bounds
        let mut y = 0.0;
        for (id, child) in children.banners() {
            let size = child.measure(measure_width);
            placements.push(Placement {
                id,
                role: Role::Banner,
                position: Point::new(centered_x(bounds, size.width), bounds.y + y),
                anchor: Anchor::TopLeft,
                size,
            });
            y += size.height + self.spacing;
        }

        let Some((id, primary)) = children.primary_child() else {
            return LayoutResult {
                size: bounds.size(),
                placements,
            };
        };

        let size = primary.measure(measure_width);
        let midline = bounds.height / 2.0;
        let placement = if y + size.height / 2.0 < midline {
            tracing::trace!(cursor = y, primary_height = size.height, midline, "primary centered");
            Placement {
                id,
                role: Role::Primary,
                position: bounds.center(),
                anchor: Anchor::Center,
                size,
            }
        } else {
            tracing::trace!(cursor = y, primary_height = size.height, midline, "primary appended");
            Placement {
                id,
                role: Role::Primary,
                position: Point::new(centered_x(bounds, size.width), bounds.y + y),
                anchor: Anchor::TopLeft,
                size,
            }
        };
        // Banners before the primary already occupy indices 0..id
        placements.insert(id.index(), placement);

        LayoutResult {
            size: bounds.size(),
            placements,
        }
    }

    /// Fit then place, with bounds at the origin.
    ///
    /// An unconstrained proposal resolves to the widest child so the
    /// bounds stay finite.
    pub fn layout<M: Measure>(
        &self,
        proposed_width: Option<f32>,
        children: &StackChildren<M>,
    ) -> LayoutResult {
        let fitted = self.size_that_fits(proposed_width, children);
        let width = if fitted.width.is_finite() {
            fitted.width
        } else {
            children.widest_unconstrained()
        };
        let bounds = Rect::new(0.0, 0.0, width, fitted.height);
        tracing::debug!(width, height = fitted.height, children = children.len(), "stack layout");
        self.place_children(bounds, proposed_width, children)
    }
}

#[inline]
fn centered_x(bounds: Rect, width: f32) -> f32 {
    bounds.x + (bounds.width - width) / 2.0
}
