//! Descriptors consumed by the layout solver.
//!
//! Containers, children and track definitions are plain caller-owned data.
//! The solver only borrows them; nothing here holds layout state.

mod child;
mod container;
mod track;

pub use child::{ChildDescriptor, ChildLookup};
pub use container::{
    AlignItems, ContainerDescriptor, FlexDirection, FlexLayout, Gap, GridDirection, GridLayout,
    JustifyContent, LayoutMode, Padding,
};
pub use track::Track;

/// Identifier shared by containers and children.
pub type NodeId = String;
