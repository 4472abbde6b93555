//! Container layout solver for frame-based documents.
//!
//! Given a container box and an ordered list of child boxes, the solver
//! computes each child's offset with a single-line flex model or a
//! fixed-track grid model. It is pure and synchronous: no drawing, no
//! persistent state. `Document` drives it recursively over a shape tree.

pub mod document;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod registry;

pub use document::{Document, DocumentLayout, Frame, Shape};
pub use error::{LayoutError, Result};
pub use geometry::{Point, Rect, Size, Transform};
pub use layout::{
    ComputedLayout, EngineConfig, FlexItem, GridCell, GridPlacement, GridSolution, LayoutEngine,
    Placement, TrackSizing,
};
pub use logging::{
    LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult, MemorySink,
    WriterSink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use model::{
    AlignItems, ChildDescriptor, ChildLookup, ContainerDescriptor, FlexDirection, FlexLayout, Gap,
    GridDirection, GridLayout, JustifyContent, LayoutMode, NodeId, Padding, Track,
};
pub use registry::{ContainerState, PlacementRegistry};
