use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Transform};
use crate::model::Padding;

/// Final offset of a child relative to its container's origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
}

impl Placement {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Translation-only matrix for renderers that consume transforms.
    pub fn transform(&self) -> Transform {
        Transform::translation(self.x, self.y)
    }
}

/// Shift a content-box offset into container space.
///
/// Both solvers produce content-box offsets; this is the only place the
/// container's left/top padding is applied.
pub fn write(local: Point, padding: &Padding) -> Placement {
    Placement::new(local.x + padding.left, local.y + padding.top)
}
