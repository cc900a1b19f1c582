//! Drawable objects held by a canvas.

use super::color::Color;
use crate::ruler::{GuideAxis, RulerTag};

/// Metadata attached to every canvas object.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectData {
    pub id: String,
    /// `Some` for objects owned by the ruler, `None` for user content.
    pub tag: Option<RulerTag>,
    /// Excluded from canvas serialization and export.
    pub save_exclude: bool,
    /// Ignored by the canvas snapping computations.
    pub ignore_snapping: bool,
}

impl ObjectData {
    /// Metadata for a ruler-owned object. Ruler objects never export or snap.
    pub fn ruler(id: impl Into<String>, tag: RulerTag) -> Self {
        Self {
            id: id.into(),
            tag: Some(tag),
            save_exclude: true,
            ignore_snapping: true,
        }
    }

    /// Metadata for ordinary user content.
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: None,
            save_exclude: false,
            ignore_snapping: false,
        }
    }
}

/// Geometry of a canvas object in logical canvas units.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// Straight segment between two points
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Axis-aligned rectangle
    Rect {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
    /// Single line of text anchored at its top-left corner
    Text {
        left: f64,
        top: f64,
        text: String,
        font_family: String,
        font_size: f64,
        /// Rotation in degrees around the anchor
        angle: f64,
    },
}

impl Drawable {
    pub fn left(&self) -> f64 {
        match self {
            Drawable::Line { x1, x2, .. } => x1.min(*x2),
            Drawable::Rect { left, .. } | Drawable::Text { left, .. } => *left,
        }
    }

    pub fn top(&self) -> f64 {
        match self {
            Drawable::Line { y1, y2, .. } => y1.min(*y2),
            Drawable::Rect { top, .. } | Drawable::Text { top, .. } => *top,
        }
    }

    /// Moves the object without changing its size.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Drawable::Line { x1, y1, x2, y2 } => {
                *x1 += dx;
                *x2 += dx;
                *y1 += dy;
                *y2 += dy;
            }
            Drawable::Rect { left, top, .. } | Drawable::Text { left, top, .. } => {
                *left += dx;
                *top += dy;
            }
        }
    }
}

/// Pointer cursor shown while hovering or dragging an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Move,
    EwResize,
    NsResize,
}

/// Per-axis transform locks honoured by the canvas when the user drags or
/// resizes an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformLocks {
    pub movement_x: bool,
    pub movement_y: bool,
    pub rotation: bool,
    pub scaling_x: bool,
    pub scaling_y: bool,
    pub uni_scaling: bool,
    pub skewing_x: bool,
    pub skewing_y: bool,
    pub scaling_flip: bool,
}

impl TransformLocks {
    /// Locks everything except sliding across the guide's own axis: a
    /// vertical guide moves left and right, a horizontal one up and down.
    pub fn slide_only(axis: GuideAxis) -> Self {
        Self {
            movement_x: axis == GuideAxis::Horizontal,
            movement_y: axis == GuideAxis::Vertical,
            rotation: true,
            scaling_x: true,
            scaling_y: true,
            uni_scaling: true,
            skewing_x: true,
            skewing_y: true,
            scaling_flip: true,
        }
    }
}

/// A single object on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasObject {
    pub data: ObjectData,
    pub shape: Drawable,
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub stroke_width: f64,
    pub selectable: bool,
    pub hover_cursor: Cursor,
    pub move_cursor: Cursor,
    pub locks: TransformLocks,
    /// Extra hit-test margin around the object
    pub padding: f64,
    pub has_controls: bool,
    pub has_borders: bool,
}

impl CanvasObject {
    /// Creates a selectable, unlocked object with no stroke or fill.
    pub fn new(data: ObjectData, shape: Drawable) -> Self {
        Self {
            data,
            shape,
            stroke: None,
            fill: None,
            stroke_width: 1.0,
            selectable: true,
            hover_cursor: Cursor::Move,
            move_cursor: Cursor::Move,
            locks: TransformLocks::default(),
            padding: 0.0,
            has_controls: true,
            has_borders: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn tag(&self) -> Option<RulerTag> {
        self.data.tag
    }

    pub fn left(&self) -> f64 {
        self.shape.left()
    }

    pub fn top(&self) -> f64 {
        self.shape.top()
    }

    /// Text content for text objects.
    pub fn text(&self) -> Option<&str> {
        match &self.shape {
            Drawable::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
