//! Fixed-track grid with sequential auto-placement.
//!
//! Every child occupies exactly one cell. Cells are handed out in row-major
//! order (`GridDirection::Row`) or column-major order (`GridDirection::Column`)
//! until the defined tracks run out; later children get no cell.

use crate::geometry::{Point, Size};
use crate::model::{Gap, GridDirection, GridLayout};

use super::track::TrackSizing;

/// Zero-based cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
}

impl GridCell {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Cell assigned to a child plus its content-box offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlacement {
    pub cell: GridCell,
    pub offset: Point,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridSolution {
    pub columns: TrackSizing,
    pub rows: TrackSizing,
    /// One entry per input child, in order. `None` marks overflow.
    pub placements: Vec<Option<GridPlacement>>,
}

impl GridSolution {
    /// Indices of children that did not fit in the defined tracks.
    pub fn overflowed(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements
            .iter()
            .enumerate()
            .filter_map(|(idx, placement)| placement.is_none().then_some(idx))
    }

    pub fn placed_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_some()).count()
    }
}

/// Resolve both track axes and auto-place `count` children.
pub fn solve(content: Size, layout: &GridLayout, gap: Gap, count: usize) -> GridSolution {
    let columns = TrackSizing::resolve(&layout.columns, content.width, gap.column);
    let rows = TrackSizing::resolve(&layout.rows, content.height, gap.row);

    let mut cursor = GridCell::new(0, 0);
    let mut placements = Vec::with_capacity(count);

    for _ in 0..count {
        match layout.direction {
            GridDirection::Row => {
                if cursor.column >= columns.len() {
                    cursor.column = 0;
                    cursor.row += 1;
                }
            }
            GridDirection::Column => {
                if cursor.row >= rows.len() {
                    cursor.row = 0;
                    cursor.column += 1;
                }
            }
        }

        let origin = columns.origin(cursor.column).zip(rows.origin(cursor.row));
        match origin {
            Some((x, y)) => {
                placements.push(Some(GridPlacement {
                    cell: cursor,
                    offset: Point::new(x, y),
                }));
                match layout.direction {
                    GridDirection::Row => cursor.column += 1,
                    GridDirection::Column => cursor.row += 1,
                }
            }
            None => placements.push(None),
        }
    }

    GridSolution {
        columns,
        rows,
        placements,
    }
}
