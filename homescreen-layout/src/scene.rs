//! JSON scene description.
//!
//! A scene lists children with either a fixed intrinsic size or a text
//! block, plus an optional priority. It lets layouts be computed and
//! inspected without a UI host.
//!
//! ```json
//! {
//!   "config": { "spacing": 8.0, "min_height": 400.0 },
//!   "width": 390.0,
//!   "children": [
//!     { "id": "invites", "size": { "width": 358.0, "height": 72.0 } },
//!     { "id": "empty", "priority": 1.0, "text": { "text": "No rooms yet" } }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::config::StackConfig;
use crate::error::{check_dimension, LayoutError};
use crate::layout::child::{ChildId, StackChildren};
use crate::layout::measure::{Measure, TextBlock};
use crate::layout::metrics::Padding;
use crate::primitives::Size;

#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub config: StackConfig,
    /// Proposed width; absent means unconstrained.
    #[serde(default)]
    pub width: Option<f32>,
    /// Fixed bounds height; absent means use the fitted height.
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub children: Vec<SceneChild>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneChild {
    pub id: String,
    #[serde(default)]
    pub priority: f32,
    #[serde(default)]
    pub size: Option<SceneSize>,
    #[serde(default)]
    pub text: Option<SceneText>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SceneSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneText {
    pub text: String,
    #[serde(default)]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub padding: Padding,
}

/// A measurable scene child.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneElement {
    Fixed(Size),
    Text(TextBlock),
}

impl Measure for SceneElement {
    fn measure(&self, proposed_width: Option<f32>) -> Size {
        match self {
            SceneElement::Fixed(size) => *size,
            SceneElement::Text(text) => text.measure(proposed_width),
        }
    }
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let scene: Scene = serde_json::from_str(json)?;
        tracing::debug!(children = scene.children.len(), "parsed scene");
        Ok(scene)
    }

    /// Validate the scene and build its children.
    ///
    /// Returns the children alongside their scene ids, indexed by `ChildId`.
    pub fn children(&self) -> Result<(StackChildren<SceneElement>, Vec<String>), LayoutError> {
        self.config.validate()?;
        if let Some(width) = self.width {
            check_dimension("scene", "width", width)?;
        }
        if let Some(height) = self.height {
            check_dimension("scene", "height", height)?;
        }

        let mut elements = Vec::with_capacity(self.children.len());
        for child in &self.children {
            elements.push((child.element()?, child.priority));
        }
        let children = StackChildren::from_prioritized(elements)?;
        let ids = self.children.iter().map(|c| c.id.clone()).collect();
        Ok((children, ids))
    }

    /// Scene id of a child, if the id is in range.
    pub fn child_name(&self, id: ChildId) -> Option<&str> {
        self.children.get(id.index()).map(|c| c.id.as_str())
    }
}

impl SceneChild {
    fn element(&self) -> Result<SceneElement, LayoutError> {
        if let Some(size) = self.size {
            self.check("width", size.width)?;
            self.check("height", size.height)?;
            return Ok(SceneElement::Fixed(Size::new(size.width, size.height)));
        }

        let Some(text) = &self.text else {
            return Err(LayoutError::MissingMeasure(self.id.clone()));
        };
        let mut block = TextBlock::new(text.text.clone()).padding(text.padding);
        if let Some(fs) = text.font_size {
            if !(fs.is_finite() && fs > 0.0) {
                return Err(self.invalid("font_size", fs));
            }
            block = block.font_size(fs);
        }
        for (field, value) in [
            ("padding.top", text.padding.top),
            ("padding.right", text.padding.right),
            ("padding.bottom", text.padding.bottom),
            ("padding.left", text.padding.left),
        ] {
            self.check(field, value)?;
        }
        Ok(SceneElement::Text(block))
    }

    fn subject(&self) -> String {
        format!("child '{}'", self.id)
    }

    fn check(&self, field: &'static str, value: f32) -> Result<(), LayoutError> {
        check_dimension(&self.subject(), field, value).map(|_| ())
    }

    fn invalid(&self, field: &'static str, value: f32) -> LayoutError {
        LayoutError::InvalidDimension {
            subject: self.subject(),
            field,
            value,
        }
    }
}
