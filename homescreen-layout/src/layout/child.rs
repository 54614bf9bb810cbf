//! Stack children: banners plus at most one primary.
//!
//! `StackChildren` keeps every child in input order and records the
//! primary by index, so a second primary cannot be represented. Hosts that
//! describe children as a flat list with numeric priorities go through
//! [`StackChildren::from_prioritized`], which rejects duplicates.

use serde::Serialize;

use crate::error::LayoutError;

use super::measure::Measure;

/// Identity of a child: its position in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChildId(pub usize);

impl ChildId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which region a child belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Stacked at the top of the bounds.
    Banner,
    /// Centered when there is room, appended otherwise.
    Primary,
}

/// A child tagged with its role.
#[derive(Debug, Clone, PartialEq)]
pub enum StackChild<M> {
    Banner(M),
    Primary(M),
}

impl<M> StackChild<M> {
    pub fn role(&self) -> Role {
        match self {
            StackChild::Banner(_) => Role::Banner,
            StackChild::Primary(_) => Role::Primary,
        }
    }
}

/// Ordered children with at most one primary.
#[derive(Debug, Clone, PartialEq)]
pub struct StackChildren<M> {
    children: Vec<M>,
    primary: Option<usize>,
}

impl<M> Default for StackChildren<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> StackChildren<M> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            primary: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            children: Vec::with_capacity(capacity),
            primary: None,
        }
    }

    /// Append a banner.
    pub fn push_banner(&mut self, child: M) -> ChildId {
        self.children.push(child);
        ChildId(self.children.len() - 1)
    }

    /// Append the primary child. Fails if one is already present.
    pub fn push_primary(&mut self, child: M) -> Result<ChildId, LayoutError> {
        let index = self.children.len();
        if let Some(first) = self.primary {
            return Err(LayoutError::DuplicatePrimary { first, second: index });
        }
        self.children.push(child);
        self.primary = Some(index);
        Ok(ChildId(index))
    }

    /// Builder form of [`push_banner`](Self::push_banner).
    pub fn banner(mut self, child: M) -> Self {
        self.push_banner(child);
        self
    }

    /// Builder form of [`push_primary`](Self::push_primary).
    pub fn primary(mut self, child: M) -> Result<Self, LayoutError> {
        self.push_primary(child)?;
        Ok(self)
    }

    /// Build from `(child, priority)` pairs; a positive priority marks the primary.
    pub fn from_prioritized<I>(items: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (M, f32)>,
    {
        let items = items.into_iter();
        let mut children = Self::with_capacity(items.size_hint().0);
        for (child, priority) in items {
            if priority > 0.0 {
                children.push_primary(child)?;
            } else {
                children.push_banner(child);
            }
        }
        Ok(children)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, id: ChildId) -> Option<&M> {
        self.children.get(id.0)
    }

    pub fn role(&self, id: ChildId) -> Role {
        if self.primary == Some(id.0) {
            Role::Primary
        } else {
            Role::Banner
        }
    }

    /// The primary child, if any.
    pub fn primary_child(&self) -> Option<(ChildId, &M)> {
        self.primary.map(|i| (ChildId(i), &self.children[i]))
    }

    /// All children in input order.
    pub fn iter(&self) -> impl Iterator<Item = (ChildId, &M)> {
        self.children.iter().enumerate().map(|(i, m)| (ChildId(i), m))
    }

    /// Non-primary children in input order.
    pub fn banners(&self) -> impl Iterator<Item = (ChildId, &M)> {
        let primary = self.primary;
        self.iter().filter(move |(id, _)| Some(id.0) != primary)
    }
}

impl<M: Measure> StackChildren<M> {
    /// Width of the widest child measured without a width limit.
    pub fn widest_unconstrained(&self) -> f32 {
        self.children
            .iter()
            .map(|child| child.measure(None).width)
            .fold(0.0, f32::max)
    }
}

impl<M> TryFrom<Vec<StackChild<M>>> for StackChildren<M> {
    type Error = LayoutError;

    fn try_from(tagged: Vec<StackChild<M>>) -> Result<Self, Self::Error> {
        let mut children = Self::with_capacity(tagged.len());
        for child in tagged {
            match child {
                StackChild::Banner(m) => {
                    children.push_banner(m);
                }
                StackChild::Primary(m) => {
                    children.push_primary(m)?;
                }
            }
        }
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_input_order_ids() {
        let mut children = StackChildren::new();
        assert_eq!(children.push_banner("a"), ChildId(0));
        assert_eq!(children.push_primary("b").unwrap(), ChildId(1));
        assert_eq!(children.push_banner("c"), ChildId(2));
        assert_eq!(children.len(), 3);
        assert_eq!(children.role(ChildId(1)), Role::Primary);
        assert_eq!(children.role(ChildId(2)), Role::Banner);
    }

    #[test]
    fn test_second_primary_rejected() {
        let result = StackChildren::new()
            .banner(1)
            .primary(2)
            .and_then(|c| c.primary(3));
        match result {
            Err(LayoutError::DuplicatePrimary { first, second }) => {
                assert_eq!(first, 1);
                assert_eq!(second, 2);
            }
            other => panic!("expected DuplicatePrimary, got {other:?}"),
        }
    }

    #[test]
    fn test_banners_skip_primary_and_keep_order() {
        let children = StackChildren::new()
            .banner("a")
            .primary("main")
            .unwrap()
            .banner("b");
        let banners: Vec<_> = children.banners().map(|(_, m)| *m).collect();
        assert_eq!(banners, vec!["a", "b"]);
        assert_eq!(children.primary_child(), Some((ChildId(1), &"main")));
    }

    #[test]
    fn test_from_prioritized() {
        let children =
            StackChildren::from_prioritized(vec![("a", 0.0), ("b", 1.0), ("c", -2.0)]).unwrap();
        assert_eq!(children.primary_child().map(|(id, _)| id), Some(ChildId(1)));
        assert_eq!(children.banners().count(), 2);
    }

    #[test]
    fn test_from_prioritized_without_primary() {
        let children = StackChildren::from_prioritized(vec![("a", 0.0), ("b", 0.0)]).unwrap();
        assert!(children.primary_child().is_none());
        assert_eq!(children.banners().count(), 2);
    }

    #[test]
    fn test_from_prioritized_duplicate() {
        let err = StackChildren::from_prioritized(vec![("a", 2.0), ("b", 1.0)]).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicatePrimary { first: 0, second: 1 }));
    }

    #[test]
    fn test_widest_unconstrained() {
        use crate::primitives::Size;

        let children = StackChildren::new()
            .banner(Size::new(80.0, 10.0))
            .primary(Size::new(120.0, 10.0))
            .unwrap()
            .banner(Size::new(40.0, 10.0));
        assert_eq!(children.widest_unconstrained(), 120.0);
        assert_eq!(StackChildren::<Size>::new().widest_unconstrained(), 0.0);
    }

    #[test]
    fn test_try_from_tagged() {
        let tagged = vec![StackChild::Banner(1), StackChild::Primary(2)];
        assert_eq!(tagged[1].role(), Role::Primary);
        let children = StackChildren::try_from(tagged).unwrap();
        assert_eq!(children.get(ChildId(1)), Some(&2));

        let bad = vec![StackChild::Primary(1), StackChild::Primary(2)];
        assert!(StackChildren::try_from(bad).is_err());
    }
}
