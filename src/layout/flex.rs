//! Single-line flex distribution.
//!
//! Main-axis offsets come from justify-content, cross-axis offsets (and the
//! stretched cross size) from align-items. Items are placed in list order for
//! every direction; reverse directions only select their axis.

use crate::geometry::{Point, Size};
use crate::model::{AlignItems, FlexLayout, Gap, JustifyContent};

/// Solved flex child in content-box space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexItem {
    pub offset: Point,
    /// Intrinsic size, with the cross dimension replaced under `stretch`.
    pub size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn main(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    fn cross(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    fn gap(self, gap: Gap) -> f32 {
        match self {
            Axis::Horizontal => gap.column,
            Axis::Vertical => gap.row,
        }
    }

    fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }

    fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }
}

/// Lay out `items` (intrinsic sizes, in order) inside a `content` box.
pub fn solve(content: Size, layout: &FlexLayout, gap: Gap, items: &[Size]) -> Vec<FlexItem> {
    if items.is_empty() {
        return Vec::new();
    }

    let axis = if layout.direction.is_row() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };
    let main_length = axis.main(content);
    let cross_length = axis.cross(content);
    let main_gap = axis.gap(gap);

    let (leading, spacing) = justify(layout.justify_content, main_length, main_gap, items, axis);

    let mut cursor = leading;
    items
        .iter()
        .map(|item| {
            let main_size = axis.main(*item);
            let main_pos = cursor;
            cursor += main_size + main_gap + spacing;

            let (cross_pos, cross_size) =
                align(layout.align_items, cross_length, axis.cross(*item));

            FlexItem {
                offset: axis.point(main_pos, cross_pos),
                size: axis.size(main_size, cross_size),
            }
        })
        .collect()
}

/// Leading offset and extra between-item spacing along the main axis.
fn justify(
    justify_content: JustifyContent,
    main_length: f32,
    main_gap: f32,
    items: &[Size],
    axis: Axis,
) -> (f32, f32) {
    let content: f32 = items.iter().map(|item| axis.main(*item)).sum::<f32>()
        + main_gap * (items.len() - 1) as f32;
    let remaining = main_length - content;

    // Overflowing lines pack from the start with no extra spacing.
    if remaining <= 0.0 {
        return (0.0, 0.0);
    }

    match justify_content {
        JustifyContent::Start => (0.0, 0.0),
        JustifyContent::Center => (remaining / 2.0, 0.0),
        JustifyContent::End => (remaining, 0.0),
        JustifyContent::SpaceBetween if items.len() > 1 => {
            (0.0, remaining / (items.len() - 1) as f32)
        }
        JustifyContent::SpaceBetween => (0.0, 0.0),
    }
}

/// Cross-axis position and size for one item.
fn align(align_items: AlignItems, cross_length: f32, cross_size: f32) -> (f32, f32) {
    match align_items {
        AlignItems::Start => (0.0, cross_size),
        AlignItems::Center => ((cross_length - cross_size) / 2.0, cross_size),
        AlignItems::End => (cross_length - cross_size, cross_size),
        AlignItems::Stretch => (0.0, cross_length),
    }
}
