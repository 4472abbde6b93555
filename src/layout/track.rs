//! Grid track sizing: definitions to pixel sizes, sizes to line positions.

use crate::model::Track;

/// Resolved sizes and line positions for one grid axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackSizing {
    pub sizes: Vec<f32>,
    /// `sizes.len() + 1` entries; `lines[i]` is the start of track `i`.
    pub lines: Vec<f32>,
}

impl TrackSizing {
    pub fn resolve(tracks: &[Track], available: f32, gap: f32) -> Self {
        let sizes = resolve_tracks(tracks, available, gap);
        let lines = line_positions(&sizes, gap);
        Self { sizes, lines }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Start offset of track `index`, if it exists.
    pub fn origin(&self, index: usize) -> Option<f32> {
        if index < self.sizes.len() {
            self.lines.get(index).copied()
        } else {
            None
        }
    }
}

/// Convert track definitions into pixel sizes.
///
/// Fixed and percent tracks are sized first; flex and auto tracks split
/// what remains after those and the gaps, in proportion to their weight.
pub fn resolve_tracks(tracks: &[Track], available: f32, gap: f32) -> Vec<f32> {
    let mut fixed_total = 0.0_f32;
    let mut flex_units = 0.0_f32;
    let mut sizes = Vec::with_capacity(tracks.len());

    for track in tracks {
        match *track {
            Track::Fixed(px) => {
                fixed_total += px;
                sizes.push(px);
            }
            Track::Percent(pct) => {
                let px = available * (pct / 100.0);
                fixed_total += px;
                sizes.push(px);
            }
            Track::Flex(weight) => {
                flex_units += weight;
                sizes.push(0.0);
            }
            Track::Auto => {
                flex_units += 1.0;
                sizes.push(0.0);
            }
            Track::Unsupported => sizes.push(0.0),
        }
    }

    let total_gap = tracks.len().saturating_sub(1) as f32 * gap;
    let remaining = available - fixed_total - total_gap;
    let unit = if flex_units > 0.0 {
        remaining / flex_units
    } else {
        0.0
    };

    for (size, track) in sizes.iter_mut().zip(tracks) {
        if let Some(weight) = track.flex_weight() {
            *size = weight * unit;
        }
    }

    sizes
}

/// Cumulative line positions, starting at 0 with a gap between tracks.
pub fn line_positions(sizes: &[f32], gap: f32) -> Vec<f32> {
    let mut lines = Vec::with_capacity(sizes.len() + 1);
    let mut position = 0.0_f32;
    lines.push(position);

    for (idx, size) in sizes.iter().enumerate() {
        position += size;
        if idx + 1 < sizes.len() {
            position += gap;
        }
        lines.push(position);
    }

    lines
}
