//! Whole-document layout.
//!
//! A `Document` is a flat map of shapes plus a root id. Layout runs top-down:
//! each shape with children is solved as a container once, and its children's
//! absolute origins are derived from the parent's origin before descending.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Rect};
use crate::layout::{ComputedLayout, LayoutEngine};
use crate::model::{
    ChildDescriptor, ChildLookup, ContainerDescriptor, Gap, LayoutMode, NodeId, Padding,
};

/// Container-only properties of a shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    pub padding: Padding,
    pub gap: Gap,
    pub layout: LayoutMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(flatten)]
    pub item: ChildDescriptor,
    #[serde(default)]
    pub children: Vec<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<Frame>,
}

impl Shape {
    pub fn leaf(item: ChildDescriptor) -> Self {
        Self {
            item,
            children: Vec::new(),
            frame: None,
        }
    }

    pub fn frame(item: ChildDescriptor, frame: Frame) -> Self {
        Self {
            item,
            children: Vec::new(),
            frame: Some(frame),
        }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Container view of this shape. Shapes without a frame lay out as `none`.
    pub fn as_container(&self) -> ContainerDescriptor {
        let frame = self.frame.clone().unwrap_or_default();
        ContainerDescriptor {
            id: self.item.id.clone(),
            width: self.item.width,
            height: self.item.height,
            padding: frame.padding,
            gap: frame.gap,
            layout: frame.layout,
            children: self.children.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub root: NodeId,
    #[serde(default)]
    pub shapes: HashMap<NodeId, Shape>,
}

/// Result of laying out a whole document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentLayout {
    /// Absolute origin of every visited shape.
    pub origins: HashMap<NodeId, Point>,
    /// Absolute bounds of every visited shape, at its own width and height.
    pub bounds: HashMap<NodeId, Rect>,
    /// Raw solver output per container, keyed by container id.
    pub containers: HashMap<NodeId, ComputedLayout>,
}

impl DocumentLayout {
    pub fn origin_of(&self, id: &str) -> Option<Point> {
        self.origins.get(id).copied()
    }

    pub fn rect_of(&self, id: &str) -> Option<Rect> {
        self.bounds.get(id).copied()
    }
}

impl Document {
    pub fn new(root: impl Into<NodeId>) -> Self {
        Self {
            root: root.into(),
            shapes: HashMap::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: Self = serde_json::from_reader(reader)?;
        document.validate()?;
        Ok(document)
    }

    /// Every shape must be stored under its own id; children are resolved by
    /// map key while placements are keyed by the shape's id.
    pub fn validate(&self) -> Result<()> {
        match self.shapes.iter().find(|(key, shape)| key.as_str() != shape.id()) {
            Some((key, shape)) => Err(LayoutError::IdMismatch {
                key: key.clone(),
                id: shape.item.id.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn insert(&mut self, shape: Shape) -> &mut Self {
        self.shapes.insert(shape.item.id.clone(), shape);
        self
    }

    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn container(&self, id: &str) -> Option<ContainerDescriptor> {
        self.shapes.get(id).map(Shape::as_container)
    }

    /// Solve every container reachable from the root.
    ///
    /// Children without a placement (no layout mode, absolute, grid overflow)
    /// keep their own position relative to the parent's origin. Hidden shapes
    /// and dangling child ids are skipped along with their subtrees.
    pub fn layout(&self, engine: &LayoutEngine) -> Result<DocumentLayout> {
        let root = self
            .shapes
            .get(&self.root)
            .ok_or_else(|| LayoutError::ShapeNotFound(self.root.clone()))?;

        let mut out = DocumentLayout::default();
        if root.item.hidden {
            return Ok(out);
        }
        let mut visited = HashSet::new();
        self.visit(engine, root, root.item.position, &mut visited, &mut out)?;
        Ok(out)
    }

    fn visit<'a>(
        &'a self,
        engine: &LayoutEngine,
        shape: &'a Shape,
        origin: Point,
        visited: &mut HashSet<&'a str>,
        out: &mut DocumentLayout,
    ) -> Result<()> {
        if !visited.insert(shape.id()) {
            return Err(LayoutError::Cycle(shape.item.id.clone()));
        }
        out.origins.insert(shape.item.id.clone(), origin);
        out.bounds.insert(
            shape.item.id.clone(),
            Rect::from_origin_size(origin, shape.item.size()),
        );

        if shape.children.is_empty() {
            return Ok(());
        }

        let computed = engine.calculate(&shape.as_container(), self);
        for child_id in &shape.children {
            let Some(child) = self.shapes.get(child_id) else {
                continue;
            };
            if child.item.hidden {
                continue;
            }
            let local = computed
                .get(child_id)
                .map(|placement| placement.offset())
                .unwrap_or(child.item.position);
            self.visit(engine, child, origin.offset(local.x, local.y), visited, out)?;
        }

        out.containers.insert(shape.item.id.clone(), computed);
        Ok(())
    }
}

impl ChildLookup for Document {
    fn child(&self, id: &str) -> Option<&ChildDescriptor> {
        self.shapes.get(id).map(|shape| &shape.item)
    }
}
