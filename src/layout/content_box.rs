use crate::geometry::Size;
use crate::model::ContainerDescriptor;

/// Inner area left for children once padding is removed.
///
/// Not clamped: padding wider than the box yields a negative size, which the
/// solvers propagate as overlapping or negative offsets.
pub fn resolve(container: &ContainerDescriptor) -> Size {
    Size::new(
        container.width - container.padding.horizontal(),
        container.height - container.padding.vertical(),
    )
}
