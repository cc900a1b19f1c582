//! Construction settings for each kind of ruler object.
//!
//! Every object the ruler places on the canvas is described by one of the
//! structs below, built through a named constructor from the current viewport
//! and style, then turned into a [`CanvasObject`]. Sizes given in device
//! pixels are divided by the zoom so they look the same at every zoom level.

use super::coords::Viewport;
use super::element::{Axis, GuideAxis, RulerTag};
use super::scale::{format_coordinate, marker_text_offset, round_half_up};
use super::style::RulerStyle;
use crate::canvas::{CanvasObject, Color, Cursor, Drawable, ObjectData, TransformLocks};

/// Thickness of a ruler bar in device pixels.
pub const BAR_SIZE: f64 = 20.0;
/// Distance from the outer edge of a bar to the start of a tick.
pub const TICK_OFFSET: f64 = 16.0;
pub const TICK_LENGTH: f64 = 5.0;
/// Gap between a guide line and its move marker.
pub const MARKER_GAP: f64 = 5.0;

/// Ruler bar background or corner block.
#[derive(Debug, Clone, PartialEq)]
pub struct BarOptions {
    pub tag: RulerTag,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl BarOptions {
    /// Bar pinned to the top (`X`) or left (`Y`) edge of the visible region.
    pub fn axis(axis: Axis, viewport: &Viewport, style: &RulerStyle) -> Self {
        let zoom = viewport.zoom();
        let pan = viewport.pan();
        let (width, height) = match axis {
            Axis::X => (viewport.width / zoom, BAR_SIZE / zoom),
            Axis::Y => (BAR_SIZE / zoom, viewport.height / zoom),
        };
        Self {
            tag: RulerTag::Background(axis),
            left: -pan.x / zoom,
            top: -pan.y / zoom,
            width,
            height,
            fill: style.background(),
            stroke: style.border(),
            stroke_width: 1.0 / zoom,
        }
    }

    /// Square covering the overlap of both bars.
    pub fn block(viewport: &Viewport, style: &RulerStyle) -> Self {
        let zoom = viewport.zoom();
        let pan = viewport.pan();
        Self {
            tag: RulerTag::Block,
            left: -pan.x / zoom,
            top: -pan.y / zoom,
            width: BAR_SIZE / zoom,
            height: BAR_SIZE / zoom,
            fill: style.background(),
            stroke: style.border(),
            stroke_width: 1.0 / zoom,
        }
    }

    /// Applies this geometry and palette to an existing bar object.
    pub fn apply(&self, object: &mut CanvasObject) {
        object.shape = Drawable::Rect {
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
        };
        object.fill = Some(self.fill);
        object.stroke = Some(self.stroke);
        object.stroke_width = self.stroke_width;
    }

    pub fn into_object(self, id: String) -> CanvasObject {
        let mut object = decoration(
            ObjectData::ruler(id, self.tag),
            Drawable::Rect {
                left: 0.0,
                top: 0.0,
                width: 0.0,
                height: 0.0,
            },
        );
        self.apply(&mut object);
        object
    }
}

/// Short tick line on a ruler bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLineOptions {
    pub axis: Axis,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl TickLineOptions {
    /// Tick at canvas coordinate `value` along `axis`.
    pub fn at(axis: Axis, value: f64, viewport: &Viewport, style: &RulerStyle) -> Self {
        let zoom = viewport.zoom();
        let pan = viewport.pan();
        let length = TICK_LENGTH / zoom;
        let (x1, y1, x2, y2) = match axis {
            Axis::X => {
                let top = viewport.edge_offset(pan.y, TICK_OFFSET);
                (value, top, value, top + length)
            }
            Axis::Y => {
                let left = viewport.edge_offset(pan.x, TICK_OFFSET);
                (left, value, left + length, value)
            }
        };
        Self {
            axis,
            x1,
            y1,
            x2,
            y2,
            stroke: style.text_stroke(),
            stroke_width: 1.0 / zoom,
        }
    }

    pub fn into_object(self, id: String) -> CanvasObject {
        let mut object = decoration(
            ObjectData::ruler(id, RulerTag::TickMark(self.axis)),
            Drawable::Line {
                x1: self.x1,
                y1: self.y1,
                x2: self.x2,
                y2: self.y2,
            },
        );
        object.stroke = Some(self.stroke);
        object.stroke_width = self.stroke_width;
        object
    }
}

/// Numeric label beside a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabelOptions {
    pub axis: Axis,
    pub text: String,
    pub left: f64,
    pub top: f64,
    pub font_family: String,
    pub font_size: f64,
    pub angle: f64,
    pub fill: Color,
    pub stroke_width: f64,
}

impl TickLabelOptions {
    /// Label for the tick at canvas coordinate `value`.
    ///
    /// Labels on the left bar are rotated 270° so they read bottom to top.
    pub fn at(axis: Axis, value: f64, viewport: &Viewport, style: &RulerStyle) -> Self {
        let zoom = viewport.zoom();
        let pan = viewport.pan();
        let nudge = marker_text_offset(value) / zoom;
        let (left, top, angle) = match axis {
            Axis::X => (value - nudge, -pan.y / zoom, 0.0),
            Axis::Y => (-pan.x / zoom, value + nudge, 270.0),
        };
        Self {
            axis,
            text: format_coordinate(value),
            left,
            top,
            font_family: style.font_family.clone(),
            font_size: style.label_font_size / zoom,
            angle,
            fill: style.text_stroke(),
            stroke_width: 2.0 / zoom,
        }
    }

    pub fn into_object(self, id: String) -> CanvasObject {
        let mut object = decoration(
            ObjectData::ruler(id, RulerTag::TickLabel(self.axis)),
            Drawable::Text {
                left: self.left,
                top: self.top,
                text: self.text,
                font_family: self.font_family,
                font_size: self.font_size,
                angle: self.angle,
            },
        );
        object.fill = Some(self.fill);
        object.stroke_width = self.stroke_width;
        object
    }
}

/// Guide line spanning the visible region.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLineOptions {
    pub axis: GuideAxis,
    pub position: f64,
    /// Cross-axis coordinate where the line starts, just past the ruler bar
    pub start: f64,
    /// Cross-axis length of the line
    pub length: f64,
    pub stroke: Color,
    pub stroke_width: f64,
    pub padding: f64,
}

impl GuideLineOptions {
    pub fn new(axis: GuideAxis, position: f64, viewport: &Viewport, style: &RulerStyle) -> Self {
        let (start, length) = guide_span(axis, viewport);
        let zoom = viewport.zoom();
        Self {
            axis,
            position,
            start,
            length,
            stroke: style.guide_line,
            stroke_width: 1.0 / zoom,
            padding: guide_padding(zoom),
        }
    }

    /// Line geometry for this guide.
    pub fn drawable(&self) -> Drawable {
        match self.axis {
            GuideAxis::Vertical => Drawable::Line {
                x1: self.position,
                y1: self.start,
                x2: self.position,
                y2: self.start + self.length,
            },
            GuideAxis::Horizontal => Drawable::Line {
                x1: self.start,
                y1: self.position,
                x2: self.start + self.length,
                y2: self.position,
            },
        }
    }

    pub fn into_object(self, id: String) -> CanvasObject {
        let cursor = match self.axis {
            GuideAxis::Vertical => Cursor::EwResize,
            GuideAxis::Horizontal => Cursor::NsResize,
        };
        let mut object = CanvasObject::new(
            ObjectData::ruler(id, RulerTag::Guide(self.axis)),
            self.drawable(),
        );
        object.stroke = Some(self.stroke);
        object.stroke_width = self.stroke_width;
        object.padding = self.padding;
        object.selectable = false;
        object.has_controls = false;
        object.has_borders = false;
        object.locks = TransformLocks::slide_only(self.axis);
        object.hover_cursor = cursor;
        object.move_cursor = cursor;
        object
    }
}

/// Coordinate readout shown next to a guide while it is moved.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveMarkerOptions {
    pub axis: Axis,
    pub text: String,
    pub left: f64,
    pub top: f64,
    pub font_family: String,
    pub font_size: f64,
    pub angle: f64,
    pub fill: Color,
}

impl MoveMarkerOptions {
    /// Marker for a guide of `axis` currently at `position`.
    pub fn for_guide(
        axis: GuideAxis,
        position: f64,
        viewport: &Viewport,
        style: &RulerStyle,
    ) -> Self {
        let zoom = viewport.zoom();
        let pan = viewport.pan();
        let gap = MARKER_GAP / zoom;
        let (left, top, angle) = match axis {
            GuideAxis::Vertical => (position + gap, viewport.edge_offset(pan.y, BAR_SIZE), 0.0),
            GuideAxis::Horizontal => (viewport.edge_offset(pan.x, BAR_SIZE), position - gap, 270.0),
        };
        Self {
            axis: axis.ruler_axis(),
            text: format_coordinate(round_half_up(position)),
            left,
            top,
            font_family: style.font_family.clone(),
            font_size: style.marker_font_size / zoom,
            angle,
            fill: style.move_marker,
        }
    }

    pub fn into_object(self, id: String) -> CanvasObject {
        let mut object = decoration(
            ObjectData::ruler(id, RulerTag::MoveMarker(self.axis)),
            Drawable::Text {
                left: self.left,
                top: self.top,
                text: self.text,
                font_family: self.font_family,
                font_size: self.font_size,
                angle: self.angle,
            },
        );
        object.fill = Some(self.fill);
        object
    }
}

/// Start and length of a guide across the visible region.
///
/// The line begins where the ruler bar ends and covers the visible extent in
/// canvas units.
pub fn guide_span(axis: GuideAxis, viewport: &Viewport) -> (f64, f64) {
    let zoom = viewport.zoom();
    let pan = viewport.pan();
    match axis {
        GuideAxis::Vertical => (viewport.edge_offset(pan.y, BAR_SIZE), viewport.height / zoom),
        GuideAxis::Horizontal => (viewport.edge_offset(pan.x, BAR_SIZE), viewport.width / zoom),
    }
}

/// Hit-test margin around a guide line.
///
/// Zoomed in, the margin is a constant 10 device pixels; zoomed out it
/// shrinks with the zoom so guides do not swallow nearby objects.
pub fn guide_padding(zoom: f64) -> f64 {
    if zoom > 1.0 { 10.0 / zoom } else { zoom * 10.0 }
}

fn decoration(data: ObjectData, shape: Drawable) -> CanvasObject {
    let mut object = CanvasObject::new(data, shape);
    object.selectable = false;
    object.hover_cursor = Cursor::Default;
    object.move_cursor = Cursor::Default;
    object.has_controls = false;
    object.has_borders = false;
    object
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruler::Point;

    fn viewport(zoom: f64, pan: Point) -> Viewport {
        Viewport::new(zoom, pan, 800.0, 600.0)
    }

    #[test]
    fn x_bar_follows_pan_and_zoom() {
        let bar = BarOptions::axis(
            Axis::X,
            &viewport(2.0, Point::new(-100.0, -40.0)),
            &RulerStyle::default(),
        );
        assert_eq!((bar.left, bar.top), (50.0, 20.0));
        assert_eq!((bar.width, bar.height), (400.0, 10.0));
        assert_eq!(bar.stroke_width, 0.5);
    }

    #[test]
    fn y_tick_label_is_rotated_and_nudged_down() {
        let label = TickLabelOptions::at(
            Axis::Y,
            -42.0,
            &viewport(1.0, Point::default()),
            &RulerStyle::default(),
        );
        assert_eq!(label.angle, 270.0);
        assert_eq!(label.top, -35.0);
        assert_eq!(label.text, "-42");
    }

    #[test]
    fn x_tick_sits_near_bar_bottom() {
        let tick = TickLineOptions::at(
            Axis::X,
            100.0,
            &viewport(2.0, Point::new(0.0, -20.0)),
            &RulerStyle::default(),
        );
        assert_eq!((tick.x1, tick.y1, tick.x2, tick.y2), (100.0, 18.0, 100.0, 20.5));
    }

    #[test]
    fn guide_object_is_locked_and_hidden_from_hit_testing() {
        let options = GuideLineOptions::new(
            GuideAxis::Horizontal,
            75.0,
            &viewport(1.0, Point::default()),
            &RulerStyle::default(),
        );
        let object = options.into_object("g1".into());
        assert!(!object.selectable);
        assert!(object.locks.movement_x);
        assert!(!object.locks.movement_y);
        assert_eq!(object.hover_cursor, Cursor::NsResize);
        assert_eq!(object.top(), 75.0);
        assert_eq!(object.left(), 20.0);
        assert!(object.data.save_exclude && object.data.ignore_snapping);
    }

    #[test]
    fn padding_depends_on_zoom_side() {
        assert_eq!(guide_padding(2.0), 5.0);
        assert_eq!(guide_padding(0.5), 5.0);
        assert_eq!(guide_padding(1.0), 10.0);
    }

    #[test]
    fn move_marker_text_is_rounded() {
        let marker = MoveMarkerOptions::for_guide(
            GuideAxis::Vertical,
            120.5,
            &viewport(1.0, Point::default()),
            &RulerStyle::default(),
        );
        assert_eq!(marker.text, "121");
        assert_eq!(marker.left, 125.5);
        assert_eq!(marker.top, 20.0);
        assert_eq!(marker.axis, Axis::X);
    }

    #[test]
    fn move_marker_is_inert_decoration() {
        let object = MoveMarkerOptions::for_guide(
            GuideAxis::Horizontal,
            64.0,
            &viewport(1.0, Point::default()),
            &RulerStyle::default(),
        )
        .into_object("marker".to_string());

        assert_eq!(object.tag(), Some(RulerTag::MoveMarker(Axis::Y)));
        assert!(!object.selectable);
        assert!(!object.has_controls);
        assert!(!object.has_borders);
        assert_eq!(object.hover_cursor, Cursor::Default);
        assert_eq!(object.move_cursor, Cursor::Default);
    }
}
