//! Canvas object model consumed by the ruler.
//!
//! The ruler never renders or hit-tests anything itself. It talks to the host
//! canvas through the [`Canvas`] trait:
//! - [`CanvasObject`]: one drawable object plus its interaction flags
//! - [`Viewport`](crate::ruler::Viewport): zoom, pan, and visible size
//! - [`PointerEvent`]: a pointer press already hit-tested by the canvas
//!
//! [`Scene`] is a plain in-memory implementation used by the CLI and tests.

pub mod color;
pub mod object;
pub mod scene;

pub use color::Color;
pub use object::{CanvasObject, Cursor, Drawable, ObjectData, TransformLocks};
pub use scene::Scene;

use crate::ruler::{Point, RulerTag, Viewport};

/// A pointer press delivered by the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Pointer location in device pixels
    pub position: Point,
    /// Id of the topmost object under the pointer, if any
    pub target: Option<String>,
}

impl PointerEvent {
    pub fn new(position: Point, target: Option<&str>) -> Self {
        Self {
            position,
            target: target.map(str::to_string),
        }
    }
}

/// Host canvas interface.
///
/// Objects are kept in draw order: index 0 is the bottom layer and the last
/// object is drawn on top.
pub trait Canvas {
    /// Current zoom/pan state and visible size.
    fn viewport(&self) -> Viewport;

    /// All objects in draw order.
    fn objects(&self) -> &[CanvasObject];

    fn object_mut(&mut self, id: &str) -> Option<&mut CanvasObject>;

    /// Appends an object on top of everything else.
    fn add(&mut self, object: CanvasObject);

    fn remove(&mut self, id: &str) -> Option<CanvasObject>;

    /// Moves an object to `index` in the draw order, clamped to the top.
    fn move_to(&mut self, id: &str, index: usize);

    /// Schedules a repaint. Canvases that repaint eagerly can ignore this.
    fn request_render(&mut self) {}

    fn object(&self, id: &str) -> Option<&CanvasObject> {
        self.objects().iter().find(|object| object.id() == id)
    }

    /// First object carrying `tag`.
    fn find_tagged(&self, tag: RulerTag) -> Option<&CanvasObject> {
        self.objects().iter().find(|object| object.tag() == Some(tag))
    }

    fn bring_to_front(&mut self, id: &str) {
        let top = self.objects().len().saturating_sub(1);
        self.move_to(id, top);
    }

    /// Removes every object for which `predicate` returns true.
    ///
    /// Returns the number of removed objects.
    fn remove_where(&mut self, predicate: &dyn Fn(&CanvasObject) -> bool) -> usize {
        let ids: Vec<String> = self
            .objects()
            .iter()
            .filter(|object| predicate(object))
            .map(|object| object.id().to_string())
            .collect();
        ids.iter()
            .filter(|id| self.remove(id.as_str()).is_some())
            .count()
    }

    /// Resolves a pointer event to logical canvas coordinates.
    fn pointer(&self, event: &PointerEvent) -> Point {
        self.viewport().to_logical(event.position)
    }
}
