//! Stack configuration.
//!
//! Loaded from the `config` section of a scene file; every field has a
//! default so partial documents are accepted.

use serde::{Deserialize, Serialize};

use crate::error::{check_dimension, LayoutError};
use crate::layout::metrics::DEFAULT_SPACING;

/// Tunables for a [`ConstrainedStack`](crate::ConstrainedStack).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Gap inserted between consecutive children.
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    /// Lower bound for the fitted height.
    #[serde(default)]
    pub min_height: f32,
}

fn default_spacing() -> f32 {
    DEFAULT_SPACING
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            min_height: 0.0,
        }
    }
}

impl StackConfig {
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_min_height(mut self, min_height: f32) -> Self {
        self.min_height = min_height;
        self
    }

    /// Reject spacing or minimum height that is negative or not finite.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_dimension("config", "spacing", self.spacing)?;
        check_dimension("config", "min_height", self.min_height)?;
        Ok(())
    }
}
