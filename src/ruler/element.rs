//! Closed set of ruler object kinds and the persisted guide line record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two ruler surfaces.
///
/// The `X` ruler is the horizontal bar along the top edge; it measures x
/// coordinates, so pressing on it creates a vertical guide. The `Y` ruler is
/// the vertical bar along the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Orientation of the guide line created from this ruler.
    pub fn guide_axis(self) -> GuideAxis {
        match self {
            Axis::X => GuideAxis::Vertical,
            Axis::Y => GuideAxis::Horizontal,
        }
    }
}

/// Orientation of a user-placed guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideAxis {
    /// Constant x, spans the visible height. Slides horizontally only.
    Vertical,
    /// Constant y, spans the visible width. Slides vertically only.
    Horizontal,
}

impl GuideAxis {
    /// The ruler this guide is measured against.
    pub fn ruler_axis(self) -> Axis {
        match self {
            GuideAxis::Vertical => Axis::X,
            GuideAxis::Horizontal => Axis::Y,
        }
    }
}

impl fmt::Display for GuideAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideAxis::Vertical => f.write_str("vertical"),
            GuideAxis::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Tag attached to every canvas object the ruler owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RulerTag {
    /// Ruler bar background.
    Background(Axis),
    /// Short tick line on a ruler bar.
    TickMark(Axis),
    /// Numeric label next to a tick.
    TickLabel(Axis),
    /// Coordinate readout shown while a guide is being moved.
    MoveMarker(Axis),
    /// Square covering the corner where both bars overlap.
    Block,
    /// User-placed guide line.
    Guide(GuideAxis),
}

impl RulerTag {
    /// Returns the ruler surface a pointer press on this object targets.
    ///
    /// Only the bar background, its ticks, and its labels count as the
    /// surface; the corner block and move markers do not.
    pub fn ruler_surface(&self) -> Option<Axis> {
        match *self {
            RulerTag::Background(axis) | RulerTag::TickMark(axis) | RulerTag::TickLabel(axis) => {
                Some(axis)
            }
            RulerTag::MoveMarker(_) | RulerTag::Block | RulerTag::Guide(_) => None,
        }
    }

    pub fn guide_axis(&self) -> Option<GuideAxis> {
        match *self {
            RulerTag::Guide(axis) => Some(axis),
            _ => None,
        }
    }

    pub fn is_background(&self) -> bool {
        matches!(self, RulerTag::Background(_) | RulerTag::Block)
    }

    /// Tick marks, tick labels, and move markers: everything rebuilt per render pass.
    pub fn is_step_marker(&self) -> bool {
        matches!(
            self,
            RulerTag::TickMark(_) | RulerTag::TickLabel(_) | RulerTag::MoveMarker(_)
        )
    }
}

/// A guide line as stored per artboard.
///
/// Only the position along the guide's own axis is kept; the cross-axis span
/// depends on the viewport and is recomputed whenever the line is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub id: String,
    pub axis: GuideAxis,
    /// `left` of a vertical guide, `top` of a horizontal one, in canvas units.
    pub position: f64,
}

impl GuideLine {
    pub fn new(id: impl Into<String>, axis: GuideAxis, position: f64) -> Self {
        Self {
            id: id.into(),
            axis,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruler_surface_covers_bar_ticks_and_labels() {
        assert_eq!(RulerTag::Background(Axis::X).ruler_surface(), Some(Axis::X));
        assert_eq!(RulerTag::TickMark(Axis::Y).ruler_surface(), Some(Axis::Y));
        assert_eq!(RulerTag::TickLabel(Axis::X).ruler_surface(), Some(Axis::X));
        assert_eq!(RulerTag::Block.ruler_surface(), None);
        assert_eq!(RulerTag::MoveMarker(Axis::X).ruler_surface(), None);
        assert_eq!(
            RulerTag::Guide(GuideAxis::Vertical).ruler_surface(),
            None
        );
    }

    #[test]
    fn guide_line_serializes_with_lowercase_axis() {
        let line = GuideLine::new("a1", GuideAxis::Horizontal, 42.5);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"id":"a1","axis":"horizontal","position":42.5}"#);
    }
}
