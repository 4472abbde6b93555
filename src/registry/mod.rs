mod core;

pub use self::core::{ContainerState, PlacementRegistry};
