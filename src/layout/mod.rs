//! Container layout solver.
//!
//! `LayoutEngine::calculate` is the entry point: it resolves the content
//! box, filters the container's children down to the in-flow ones and hands
//! them to the flex or grid solver. Each solver works in content-box space;
//! `placement::write` shifts the result into container space.

pub mod content_box;
mod core;
pub mod flex;
pub mod grid;
pub mod placement;
pub mod track;

pub use self::core::{ComputedLayout, EngineConfig, LayoutEngine, eligible_children};
pub use flex::FlexItem;
pub use grid::{GridCell, GridPlacement, GridSolution};
pub use placement::Placement;
pub use track::TrackSizing;
