use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::NodeId;
use crate::geometry::{Point, Size};

/// Child box as seen by its container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildDescriptor {
    pub id: NodeId,
    pub width: f32,
    pub height: f32,
    /// Hidden children are excluded from layout entirely.
    #[serde(default)]
    pub hidden: bool,
    /// Absolutely positioned children are excluded from flow placement and
    /// keep their own `position`.
    #[serde(default)]
    pub absolute: bool,
    /// Placement the child has without layout, relative to its parent.
    #[serde(default)]
    pub position: Point,
}

impl ChildDescriptor {
    pub fn new(id: impl Into<NodeId>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            hidden: false,
            absolute: false,
            position: Point::ORIGIN,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn absolute(mut self) -> Self {
        self.absolute = true;
        self
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the child takes part in flow placement.
    pub fn in_flow(&self) -> bool {
        !self.hidden && !self.absolute
    }
}

/// Resolves child identifiers to descriptors, usually across a whole document.
pub trait ChildLookup {
    fn child(&self, id: &str) -> Option<&ChildDescriptor>;
}

impl ChildLookup for HashMap<NodeId, ChildDescriptor> {
    fn child(&self, id: &str) -> Option<&ChildDescriptor> {
        self.get(id)
    }
}

impl ChildLookup for [ChildDescriptor] {
    fn child(&self, id: &str) -> Option<&ChildDescriptor> {
        self.iter().find(|child| child.id == id)
    }
}

impl ChildLookup for Vec<ChildDescriptor> {
    fn child(&self, id: &str) -> Option<&ChildDescriptor> {
        self.as_slice().child(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_flow_excludes_hidden_and_absolute() {
        assert!(ChildDescriptor::new("a", 1.0, 1.0).in_flow());
        assert!(!ChildDescriptor::new("b", 1.0, 1.0).hidden().in_flow());
        assert!(!ChildDescriptor::new("c", 1.0, 1.0).absolute().in_flow());
    }

    #[test]
    fn lookup_by_id() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), ChildDescriptor::new("a", 5.0, 6.0));
        assert_eq!(map.child("a").map(|c| c.size()), Some(Size::new(5.0, 6.0)));
        assert!(map.child("missing").is_none());

        let list = vec![ChildDescriptor::new("x", 1.0, 2.0).at(3.0, 4.0)];
        assert_eq!(list.child("x").map(|c| c.position), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn flags_default_to_false() {
        let child: ChildDescriptor =
            serde_json::from_str(r#"{"id":"a","width":10,"height":20}"#).unwrap();
        assert!(child.in_flow());
        assert_eq!(child.position, Point::ORIGIN);
    }
}
