use serde::{Deserialize, Serialize};

/// Sizing rule for a single grid row or column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "TrackDef", into = "TrackDef")]
pub enum Track {
    /// Literal pixel size.
    Fixed(f32),
    /// Percentage points of the available length.
    Percent(f32),
    /// Share of the space left after fixed tracks and gaps, weighted.
    Flex(f32),
    /// Behaves as `Flex(1.0)`.
    Auto,
    /// Zero-size, non-flexible. Produced for track definitions the solver
    /// does not understand.
    Unsupported,
}

impl Track {
    pub fn fixed(px: f32) -> Self {
        Self::Fixed(px)
    }

    pub fn percent(pct: f32) -> Self {
        Self::Percent(pct)
    }

    pub fn flex(weight: f32) -> Self {
        Self::Flex(weight)
    }

    /// Weight contributed to the flexible unit count, if any.
    pub fn flex_weight(&self) -> Option<f32> {
        match self {
            Track::Flex(weight) => Some(*weight),
            Track::Auto => Some(1.0),
            Track::Fixed(_) | Track::Percent(_) | Track::Unsupported => None,
        }
    }
}

/// Wire form: `{ "type": "fixed", "value": 80 }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrackDef {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Option<f32>,
}

impl From<TrackDef> for Track {
    fn from(def: TrackDef) -> Self {
        match (def.kind.as_str(), def.value) {
            ("fixed", Some(px)) => Track::Fixed(px),
            ("percent", Some(pct)) => Track::Percent(pct),
            ("flex", weight) => Track::Flex(weight.unwrap_or(1.0)),
            ("auto", _) => Track::Auto,
            _ => Track::Unsupported,
        }
    }
}

impl From<Track> for TrackDef {
    fn from(track: Track) -> Self {
        let (kind, value) = match track {
            Track::Fixed(px) => ("fixed", Some(px)),
            Track::Percent(pct) => ("percent", Some(pct)),
            Track::Flex(weight) => ("flex", Some(weight)),
            Track::Auto => ("auto", None),
            Track::Unsupported => ("unsupported", None),
        };
        TrackDef {
            kind: kind.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Track {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn flex_defaults_to_single_unit() {
        assert_eq!(parse(r#"{"type":"flex"}"#), Track::Flex(1.0));
        assert_eq!(parse(r#"{"type":"flex","value":null}"#), Track::Flex(1.0));
        assert_eq!(parse(r#"{"type":"flex","value":3}"#), Track::Flex(3.0));
    }

    #[test]
    fn valueless_fixed_and_unknown_types_are_unsupported() {
        assert_eq!(parse(r#"{"type":"fixed"}"#), Track::Unsupported);
        assert_eq!(parse(r#"{"type":"percent","value":null}"#), Track::Unsupported);
        assert_eq!(parse(r#"{"type":"minmax","value":20}"#), Track::Unsupported);
    }

    #[test]
    fn auto_ignores_value() {
        assert_eq!(parse(r#"{"type":"auto","value":7}"#), Track::Auto);
        assert_eq!(Track::Auto.flex_weight(), Some(1.0));
        assert_eq!(Track::fixed(10.0).flex_weight(), None);
    }
}
