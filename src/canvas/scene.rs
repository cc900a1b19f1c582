//! In-memory canvas implementation.

use super::{Canvas, CanvasObject};
use crate::ruler::{Point, RulerTag, Viewport};

/// A canvas that keeps its objects in a vector and never paints.
///
/// Used by the command-line tools to lay out ruler decoration and by tests as
/// a stand-in for the editor canvas. Dragging via [`Scene::drag`] honours the
/// same selectable and movement-lock flags a real canvas would.
#[derive(Debug, Clone)]
pub struct Scene {
    viewport: Viewport,
    /// All objects in draw order (first = bottom layer, last = top layer)
    objects: Vec<CanvasObject>,
    render_requests: usize,
}

impl Scene {
    /// Creates an empty scene at zoom 1 with no pan.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_viewport(Viewport::new(1.0, Point::default(), width, height))
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            objects: Vec::new(),
            render_requests: 0,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.transform[0] = zoom;
        self.viewport.transform[3] = zoom;
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.viewport.transform[4] = pan.x;
        self.viewport.transform[5] = pan.y;
    }

    /// Number of times a repaint was requested.
    pub fn render_requests(&self) -> usize {
        self.render_requests
    }

    /// Objects carrying `tag`, in draw order.
    pub fn tagged(&self, tag: RulerTag) -> impl Iterator<Item = &CanvasObject> + '_ {
        self.objects
            .iter()
            .filter(move |object| object.tag() == Some(tag))
    }

    /// Position of an object in the draw order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.objects.iter().position(|object| object.id() == id)
    }

    /// Drags an object by a logical offset the way a user would.
    ///
    /// Non-selectable objects do not move and locked axes are ignored.
    /// Returns `true` when the object moved.
    pub fn drag(&mut self, id: &str, dx: f64, dy: f64) -> bool {
        let Some(object) = self.object_mut(id) else {
            return false;
        };
        if !object.selectable {
            return false;
        }
        let dx = if object.locks.movement_x { 0.0 } else { dx };
        let dy = if object.locks.movement_y { 0.0 } else { dy };
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        object.shape.translate(dx, dy);
        true
    }
}

impl Canvas for Scene {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn objects(&self) -> &[CanvasObject] {
        &self.objects
    }

    fn object_mut(&mut self, id: &str) -> Option<&mut CanvasObject> {
        self.objects.iter_mut().find(|object| object.id() == id)
    }

    fn add(&mut self, object: CanvasObject) {
        self.objects.push(object);
    }

    fn remove(&mut self, id: &str) -> Option<CanvasObject> {
        let index = self.index_of(id)?;
        Some(self.objects.remove(index))
    }

    fn move_to(&mut self, id: &str, index: usize) {
        if let Some(current) = self.index_of(id) {
            let object = self.objects.remove(current);
            let index = index.min(self.objects.len());
            self.objects.insert(index, object);
        }
    }

    fn request_render(&mut self) {
        self.render_requests += 1;
    }
}
