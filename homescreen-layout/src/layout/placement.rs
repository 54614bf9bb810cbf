//! Layout output: where each child goes.

use serde::Serialize;

use crate::primitives::{Point, Rect, Size};

use super::child::{ChildId, Role};

/// The reference point of a child that `Placement::position` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    Center,
}

/// Position of one child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub id: ChildId,
    pub role: Role,
    /// Location of the child's anchor point.
    pub position: Point,
    pub anchor: Anchor,
    /// The measured size the child was placed with.
    pub size: Size,
}

impl Placement {
    /// The child's frame with its top-left origin resolved from the anchor.
    pub fn frame(&self) -> Rect {
        let origin = match self.anchor {
            Anchor::TopLeft => self.position,
            Anchor::Center => Point::new(
                self.position.x - self.size.width / 2.0,
                self.position.y - self.size.height / 2.0,
            ),
        };
        Rect::from_origin_size(origin, self.size)
    }
}

/// Total size plus one placement per child, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub size: Size,
    pub placements: Vec<Placement>,
}

impl LayoutResult {
    pub fn get(&self, id: ChildId) -> Option<&Placement> {
        self.placements.get(id.index()).filter(|p| p.id == id)
    }

    pub fn primary(&self) -> Option<&Placement> {
        self.placements.iter().find(|p| p.role == Role::Primary)
    }

    pub fn banners(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(|p| p.role == Role::Banner)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_top_left() {
        let p = Placement {
            id: ChildId(0),
            role: Role::Banner,
            position: Point::new(10.0, 20.0),
            anchor: Anchor::TopLeft,
            size: Size::new(30.0, 40.0),
        };
        assert_eq!(p.frame(), Rect::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn test_frame_center() {
        let p = Placement {
            id: ChildId(0),
            role: Role::Primary,
            position: Point::new(50.0, 50.0),
            anchor: Anchor::Center,
            size: Size::new(20.0, 10.0),
        };
        assert_eq!(p.frame(), Rect::new(40.0, 45.0, 20.0, 10.0));
        assert_eq!(p.frame().center(), p.position);
    }

    #[test]
    fn test_anchor_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Anchor::TopLeft).unwrap(), "\"top_left\"");
        assert_eq!(serde_json::to_string(&Role::Primary).unwrap(), "\"primary\"");
    }
}
