use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::geometry::Size;
use crate::logging::{LogEvent, LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::{LayoutMetrics, MetricSnapshot};
use crate::model::{
    ChildDescriptor, ChildLookup, ContainerDescriptor, FlexLayout, GridLayout, LayoutMode, NodeId,
};

use super::placement::{self, Placement};
use super::{content_box, flex, grid};

/// Child placements produced for one container.
///
/// Children missing from the map keep their own position: containers
/// without a layout mode, filtered children and grid overflow all land here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputedLayout {
    placements: HashMap<NodeId, Placement>,
}

impl ComputedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<NodeId>, placement: Placement) {
        self.placements.insert(id.into(), placement);
    }

    pub fn get(&self, id: &str) -> Option<&Placement> {
        self.placements.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.placements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Placement)> {
        self.placements.iter()
    }

    /// Content hash over id-sorted entries; equal layouts hash equal.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut entries: Vec<_> = self.placements.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut hasher = blake3::Hasher::new();
        for (id, placement) in entries {
            hasher.update(&(id.len() as u64).to_le_bytes());
            hasher.update(id.as_bytes());
            hasher.update(&placement.x.to_bits().to_le_bytes());
            hasher.update(&placement.y.to_bits().to_le_bytes());
        }
        hasher.finalize()
    }
}

impl FromIterator<(NodeId, Placement)> for ComputedLayout {
    fn from_iter<T: IntoIterator<Item = (NodeId, Placement)>>(iter: T) -> Self {
        Self {
            placements: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ComputedLayout {
    type Item = (NodeId, Placement);
    type IntoIter = std::collections::hash_map::IntoIter<NodeId, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.into_iter()
    }
}

/// Observability settings for the engine. Layout results never depend on it.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Optional structured logger for per-container events.
    pub logger: Option<Logger>,
    /// Target field on per-container events.
    pub log_target: String,
    /// Shared counters, if enabled.
    pub metrics: Option<Arc<Mutex<LayoutMetrics>>>,
    /// Target field on metrics snapshot events.
    pub metrics_target: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            logger: None,
            log_target: "frame_layout::engine".to_string(),
            metrics: None,
            metrics_target: "frame_layout::metrics".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(LayoutMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<LayoutMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Stateless container solver. Shareable across threads; each call only
/// reads its inputs and returns a fresh `ComputedLayout`.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: EngineConfig,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Compute placements for the in-flow children of `container`.
    pub fn calculate<L>(&self, container: &ContainerDescriptor, lookup: &L) -> ComputedLayout
    where
        L: ChildLookup + ?Sized,
    {
        let content = content_box::resolve(container);
        let children = eligible_children(container, lookup);

        let (computed, overflowed) = match &container.layout {
            LayoutMode::None => {
                self.emit(LogLevel::Debug, "layout_skipped", container, []);
                self.with_metrics(|m| m.record_skipped());
                return ComputedLayout::new();
            }
            _ if children.is_empty() => (ComputedLayout::new(), 0),
            LayoutMode::Flex(props) => (self.solve_flex(container, content, props, &children), 0),
            LayoutMode::Grid(props) => self.solve_grid(container, content, props, &children),
        };

        self.emit(
            LogLevel::Debug,
            "layout_computed",
            container,
            [
                json_kv("placed", computed.len()),
                json_kv("overflowed", overflowed),
                json_kv("content_width", content.width),
                json_kv("content_height", content.height),
            ],
        );
        self.with_metrics(|m| m.record_solved(computed.len(), overflowed));
        computed
    }

    fn solve_flex(
        &self,
        container: &ContainerDescriptor,
        content: Size,
        props: &FlexLayout,
        children: &[&ChildDescriptor],
    ) -> ComputedLayout {
        let sizes: Vec<Size> = children.iter().map(|child| child.size()).collect();
        flex::solve(content, props, container.gap, &sizes)
            .into_iter()
            .zip(children)
            .map(|(item, child)| {
                (
                    child.id.clone(),
                    placement::write(item.offset, &container.padding),
                )
            })
            .collect()
    }

    fn solve_grid(
        &self,
        container: &ContainerDescriptor,
        content: Size,
        props: &GridLayout,
        children: &[&ChildDescriptor],
    ) -> (ComputedLayout, usize) {
        let solution = grid::solve(content, props, container.gap, children.len());
        let mut computed = ComputedLayout::new();
        let mut overflowed = 0;

        for (child, cell) in children.iter().zip(&solution.placements) {
            match cell {
                Some(cell) => {
                    computed.insert(
                        child.id.clone(),
                        placement::write(cell.offset, &container.padding),
                    );
                }
                None => {
                    overflowed += 1;
                    self.emit(
                        LogLevel::Warn,
                        "grid_overflow",
                        container,
                        [
                            json_str("child", child.id.as_str()),
                            json_kv("cells", props.cell_count()),
                        ],
                    );
                }
            }
        }

        (computed, overflowed)
    }

    /// Log a snapshot of the shared counters, if both logger and metrics are set.
    pub fn emit_metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let snapshot = self
            .config
            .metrics
            .as_ref()?
            .lock()
            .ok()
            .map(|metrics| metrics.snapshot())?;
        if let Some(logger) = &self.config.logger {
            let _ = logger.log_event(snapshot.to_log_event(&self.config.metrics_target));
        }
        Some(snapshot)
    }

    fn emit<const N: usize>(
        &self,
        level: LogLevel,
        message: &str,
        container: &ContainerDescriptor,
        fields: [(String, serde_json::Value); N],
    ) {
        let Some(logger) = &self.config.logger else {
            return;
        };
        if !logger.enabled(level) {
            return;
        }
        let event: LogEvent = event_with_fields(
            level,
            &self.config.log_target,
            message,
            [
                json_str("container", container.id.as_str()),
                ("mode".to_string(), json!(container.layout.name())),
            ]
            .into_iter()
            .chain(fields),
        );
        // Logging failures never affect layout results.
        let _ = logger.log_event(event);
    }

    fn with_metrics(&self, update: impl FnOnce(&mut LayoutMetrics)) {
        if let Some(metrics) = &self.config.metrics {
            if let Ok(mut guard) = metrics.lock() {
                update(&mut guard);
            }
        }
    }
}

/// In-flow children of `container`, in declaration order. Missing, hidden
/// and absolutely positioned children are dropped.
pub fn eligible_children<'a, L>(
    container: &ContainerDescriptor,
    lookup: &'a L,
) -> Vec<&'a ChildDescriptor>
where
    L: ChildLookup + ?Sized,
{
    container
        .children
        .iter()
        .filter_map(|id| lookup.child(id))
        .filter(|child| child.in_flow())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::logging::MemorySink;
    use crate::model::{
        AlignItems, FlexDirection, Gap, GridDirection, JustifyContent, Padding, Track,
    };

    fn lookup(children: &[(&str, f32, f32)]) -> HashMap<NodeId, ChildDescriptor> {
        children
            .iter()
            .map(|&(id, w, h)| (id.to_string(), ChildDescriptor::new(id, w, h)))
            .collect()
    }

    fn flex_container() -> ContainerDescriptor {
        ContainerDescriptor::new("layout-frame", 300.0, 200.0)
            .with_padding(Padding::uniform(20.0))
            .with_gap(Gap::uniform(10.0))
            .with_layout(LayoutMode::Flex(FlexLayout::new(
                FlexDirection::Row,
                JustifyContent::SpaceBetween,
                AlignItems::Center,
            )))
            .with_children(["r1", "r2", "r3"])
    }

    fn grid_container(children: usize) -> ContainerDescriptor {
        ContainerDescriptor::new("grid-frame", 350.0, 250.0)
            .with_padding(Padding::uniform(15.0))
            .with_gap(Gap::uniform(10.0))
            .with_layout(LayoutMode::Grid(GridLayout::new(
                GridDirection::Row,
                vec![Track::fixed(80.0), Track::flex(1.0), Track::Auto],
                vec![Track::fixed(70.0), Track::flex(1.0)],
            )))
            .with_children((1..=children).map(|i| format!("g{i}")))
    }

    fn grid_children(count: usize) -> HashMap<NodeId, ChildDescriptor> {
        (1..=count)
            .map(|i| {
                let id = format!("g{i}");
                (id.clone(), ChildDescriptor::new(id, 40.0, 40.0))
            })
            .collect()
    }

    fn at(layout: &ComputedLayout, id: &str) -> Option<Point> {
        layout.get(id).map(Placement::offset)
    }

    #[test]
    fn flex_row_space_between_center() {
        let children = lookup(&[("r1", 50.0, 50.0), ("r2", 80.0, 60.0), ("r3", 40.0, 70.0)]);
        let layout = LayoutEngine::new().calculate(&flex_container(), &children);
        assert_eq!(layout.len(), 3);
        assert_eq!(at(&layout, "r1"), Some(Point::new(20.0, 75.0)));
        assert_eq!(at(&layout, "r2"), Some(Point::new(115.0, 70.0)));
        assert_eq!(at(&layout, "r3"), Some(Point::new(240.0, 65.0)));
    }

    #[test]
    fn grid_row_auto_placement_with_padding() {
        let layout = LayoutEngine::new().calculate(&grid_container(5), &grid_children(5));
        assert_eq!(at(&layout, "g1"), Some(Point::new(15.0, 15.0)));
        assert_eq!(at(&layout, "g2"), Some(Point::new(105.0, 15.0)));
        assert_eq!(at(&layout, "g3"), Some(Point::new(225.0, 15.0)));
        assert_eq!(at(&layout, "g4"), Some(Point::new(15.0, 95.0)));
        assert_eq!(at(&layout, "g5"), Some(Point::new(105.0, 95.0)));
    }

    #[test]
    fn grid_overflow_child_is_absent_and_logged() {
        let sink = MemorySink::new();
        let mut config = EngineConfig::default().with_logger(Logger::new(sink.clone()));
        config.enable_metrics();
        let engine = LayoutEngine::with_config(config);

        let layout = engine.calculate(&grid_container(7), &grid_children(7));
        assert_eq!(layout.len(), 6);
        assert!(!layout.contains("g7"));

        let warnings: Vec<_> = sink
            .events()
            .into_iter()
            .filter(|e| e.message == "grid_overflow")
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, LogLevel::Warn);
        assert_eq!(warnings[0].field("child"), Some(&json!("g7")));

        let snapshot = engine.emit_metrics_snapshot().unwrap();
        assert_eq!(snapshot.children_placed, 6);
        assert_eq!(snapshot.children_overflowed, 1);
        assert_eq!(sink.messages().last().map(String::as_str), Some("layout_metrics"));
    }

    #[test]
    fn single_child_space_between() {
        let container = flex_container().with_children(["r2"]);
        let children = lookup(&[("r2", 80.0, 60.0)]);
        let layout = LayoutEngine::new().calculate(&container, &children);
        assert_eq!(at(&layout, "r2"), Some(Point::new(20.0, 70.0)));
    }

    #[test]
    fn no_eligible_children_for_any_mode() {
        let mut children = lookup(&[("r1", 50.0, 50.0), ("r2", 80.0, 60.0)]);
        children.insert("r1".into(), ChildDescriptor::new("r1", 50.0, 50.0).hidden());
        children.insert("r2".into(), ChildDescriptor::new("r2", 80.0, 60.0).absolute());

        let engine = LayoutEngine::new();
        for mode in [
            LayoutMode::None,
            flex_container().layout,
            grid_container(0).layout,
        ] {
            let container = flex_container().with_layout(mode);
            assert!(engine.calculate(&container, &children).is_empty());
        }
    }

    #[test]
    fn no_layout_mode_places_nothing() {
        let sink = MemorySink::new();
        let mut config = EngineConfig::default().with_logger(Logger::new(sink.clone()));
        config.enable_metrics();
        let engine = LayoutEngine::with_config(config);

        let children = lookup(&[("r1", 50.0, 50.0), ("r2", 80.0, 60.0), ("r3", 40.0, 70.0)]);
        let container = flex_container().with_layout(LayoutMode::None);
        assert!(engine.calculate(&container, &children).is_empty());
        assert_eq!(sink.messages(), vec!["layout_skipped".to_string()]);

        let handle = engine.config().metrics_handle().unwrap();
        assert_eq!(handle.lock().unwrap().snapshot().containers_skipped, 1);
    }

    #[test]
    fn empty_flex_and_grid_still_count_as_solved() {
        let sink = MemorySink::new();
        let mut config = EngineConfig::default().with_logger(Logger::new(sink.clone()));
        config.enable_metrics();
        let engine = LayoutEngine::with_config(config);

        let empty = HashMap::<NodeId, ChildDescriptor>::new();
        assert!(engine.calculate(&flex_container(), &empty).is_empty());
        assert!(engine.calculate(&grid_container(3), &empty).is_empty());
        assert_eq!(
            sink.messages(),
            vec!["layout_computed".to_string(), "layout_computed".to_string()]
        );
        assert!(sink.events().iter().all(|e| e.field("placed") == Some(&json!(0))));

        let snapshot = engine.config().metrics_handle().unwrap().lock().unwrap().snapshot();
        assert_eq!(snapshot.containers_solved, 2);
        assert_eq!(snapshot.containers_skipped, 0);
    }

    #[test]
    fn missing_and_filtered_children_are_skipped() {
        let mut children = lookup(&[("r1", 50.0, 50.0), ("r3", 40.0, 70.0)]);
        children.insert("r2".into(), ChildDescriptor::new("r2", 80.0, 60.0).absolute());
        let layout = LayoutEngine::new().calculate(&flex_container(), &children);
        assert_eq!(layout.len(), 2);
        assert!(layout.contains("r1"));
        assert!(!layout.contains("r2"));
        assert!(layout.contains("r3"));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let children = lookup(&[("r1", 50.3, 50.1), ("r2", 80.7, 60.9), ("r3", 40.2, 70.4)]);
        let engine = LayoutEngine::new();
        let first = engine.calculate(&flex_container(), &children);
        let second = engine.calculate(&flex_container(), &children);
        assert_eq!(first.fingerprint(), second.fingerprint());
        for (id, placement) in first.iter() {
            let other = second.get(id).unwrap();
            assert_eq!(placement.x.to_bits(), other.x.to_bits());
            assert_eq!(placement.y.to_bits(), other.y.to_bits());
        }
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a: ComputedLayout = [("x".to_string(), Placement::new(1.0, 2.0))]
            .into_iter()
            .collect();
        let b: ComputedLayout = [("x".to_string(), Placement::new(1.0, 3.0))]
            .into_iter()
            .collect();
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(ComputedLayout::new().fingerprint(), ComputedLayout::new().fingerprint());
    }

    #[test]
    fn slice_lookup_works_with_engine() {
        let children = vec![ChildDescriptor::new("r1", 50.0, 50.0)];
        let container = flex_container().with_children(["r1"]);
        let layout = LayoutEngine::new().calculate(&container, children.as_slice());
        assert!(layout.contains("r1"));
    }

    #[test]
    fn oversized_padding_propagates_negative_content_box() {
        let container = ContainerDescriptor::new("tight", 20.0, 10.0)
            .with_padding(Padding::uniform(15.0))
            .with_layout(LayoutMode::Flex(FlexLayout::new(
                FlexDirection::Row,
                JustifyContent::Center,
                AlignItems::Center,
            )))
            .with_children(["r1"]);
        let children = lookup(&[("r1", 4.0, 4.0)]);
        let layout = LayoutEngine::new().calculate(&container, &children);
        // Content box is -10 x -20: no leading space, cross offset (-20 - 4) / 2.
        assert_eq!(at(&layout, "r1"), Some(Point::new(15.0, 3.0)));

        let grid = ContainerDescriptor::new("tight-grid", 20.0, 20.0)
            .with_padding(Padding::uniform(15.0))
            .with_layout(LayoutMode::Grid(GridLayout::new(
                GridDirection::Row,
                vec![Track::flex(1.0), Track::flex(1.0)],
                vec![Track::Auto],
            )))
            .with_children(["g1", "g2"]);
        let layout = LayoutEngine::new().calculate(&grid, &grid_children(2));
        // Each column resolves to -5 px, so the second cell starts left of the first.
        assert_eq!(at(&layout, "g1"), Some(Point::new(15.0, 15.0)));
        assert_eq!(at(&layout, "g2"), Some(Point::new(10.0, 15.0)));
    }
}
