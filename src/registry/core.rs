use std::collections::{HashMap, HashSet};

use blake3::Hash;

use crate::document::DocumentLayout;
use crate::layout::{ComputedLayout, Placement};
use crate::model::NodeId;

/// Last layout seen for one container.
#[derive(Debug, Clone)]
pub struct ContainerState {
    pub layout: ComputedLayout,
    hash: Hash,
    pub is_dirty: bool,
}

impl ContainerState {
    fn new(layout: ComputedLayout) -> Self {
        Self {
            hash: layout.fingerprint(),
            layout,
            is_dirty: true,
        }
    }

    pub fn fingerprint(&self) -> Hash {
        self.hash
    }
}

/// Tracks solved layouts per container so renderers only revisit containers
/// whose child placements actually moved.
#[derive(Debug, Default)]
pub struct PlacementRegistry {
    entries: HashMap<NodeId, ContainerState>,
    dirty: HashSet<NodeId>,
}

impl PlacementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `layout` for `container`; returns whether it differs from the
    /// previously recorded one.
    pub fn sync(&mut self, container: &str, layout: ComputedLayout) -> bool {
        use std::collections::hash_map::Entry;

        let changed = match self.entries.entry(container.to_string()) {
            Entry::Occupied(mut entry) => {
                let hash = layout.fingerprint();
                let state = entry.get_mut();
                if state.hash == hash {
                    false
                } else {
                    state.layout = layout;
                    state.hash = hash;
                    state.is_dirty = true;
                    true
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(ContainerState::new(layout));
                true
            }
        };

        if changed {
            self.dirty.insert(container.to_string());
        }
        changed
    }

    /// Sync every container of a document layout and forget the rest.
    pub fn sync_document(&mut self, layout: &DocumentLayout) -> usize {
        let mut changed = 0;
        for (id, computed) in &layout.containers {
            if self.sync(id, computed.clone()) {
                changed += 1;
            }
        }
        self.retain(|id| layout.containers.contains_key(id));
        changed
    }

    /// Drop containers for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        let to_remove: Vec<_> = self
            .entries
            .keys()
            .filter(|id| !keep(id.as_str()))
            .cloned()
            .collect();
        for id in to_remove {
            self.entries.remove(&id);
            self.dirty.remove(&id);
        }
    }

    pub fn take_dirty(&mut self) -> Vec<(NodeId, ContainerState)> {
        let ids: Vec<_> = self.dirty.drain().collect();
        ids.into_iter()
            .filter_map(|id| {
                self.entries.get_mut(&id).map(|state| {
                    state.is_dirty = false;
                    (id.clone(), state.clone())
                })
            })
            .collect()
    }

    pub fn layout_of(&self, container: &str) -> Option<&ComputedLayout> {
        self.entries.get(container).map(|state| &state.layout)
    }

    pub fn placement_of(&self, container: &str, child: &str) -> Option<Placement> {
        self.layout_of(container)?.get(child).copied()
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
