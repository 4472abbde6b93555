use serde::{Deserialize, Serialize};

use super::{NodeId, Track};
use crate::geometry::Size;

/// Inner spacing of a container. Each side is independent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// One value for top/bottom, one for left/right.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Spacing between adjacent rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gap {
    pub row: f32,
    pub column: f32,
}

impl Gap {
    pub const fn new(row: f32, column: f32) -> Self {
        Self { row, column }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value)
    }
}

/// Main axis of a flex container. Reverse variants share their forward axis
/// and keep list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }
}

/// Main-axis distribution of leftover space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

/// Cross-axis alignment of every child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    Start,
    Center,
    End,
    #[default]
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexLayout {
    pub direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
}

impl FlexLayout {
    pub fn new(
        direction: FlexDirection,
        justify_content: JustifyContent,
        align_items: AlignItems,
    ) -> Self {
        Self {
            direction,
            justify_content,
            align_items,
        }
    }
}

/// Major axis of grid auto-placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridDirection {
    #[default]
    Row,
    Column,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub direction: GridDirection,
    pub columns: Vec<Track>,
    pub rows: Vec<Track>,
}

impl GridLayout {
    pub fn new(direction: GridDirection, columns: Vec<Track>, rows: Vec<Track>) -> Self {
        Self {
            direction,
            columns,
            rows,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.columns.len() * self.rows.len()
    }
}

/// Layout model applied to a container's children.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    None,
    Flex(FlexLayout),
    Grid(GridLayout),
}

impl LayoutMode {
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::None => "none",
            LayoutMode::Flex(_) => "flex",
            LayoutMode::Grid(_) => "grid",
        }
    }
}

/// Container box plus the ordered identifiers of its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerDescriptor {
    pub id: NodeId,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub gap: Gap,
    #[serde(default)]
    pub layout: LayoutMode,
    /// Placement order for flex and grid auto-placement.
    #[serde(default)]
    pub children: Vec<NodeId>,
}

impl ContainerDescriptor {
    pub fn new(id: impl Into<NodeId>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            padding: Padding::default(),
            gap: Gap::default(),
            layout: LayoutMode::None,
            children: Vec::new(),
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
