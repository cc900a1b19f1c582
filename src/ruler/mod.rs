//! Ruler and guide line overlay.
//!
//! The overlay consists of two ruler bars (top and left), a corner block,
//! ticks with coordinate labels, user-placed guide lines and a move marker
//! showing a guide's coordinate while it is dragged. All of it lives on the
//! host canvas as ordinary objects tagged with a [`RulerTag`]; only guide
//! lines are persisted, per artboard, through a [`GuideStore`].
//!
//! [`Ruler`] ties the pieces together and exposes the entry points the editor
//! calls from its canvas event handlers.

pub mod coords;
pub mod element;
pub mod guide;
pub mod marker;
pub mod options;
pub mod render;
pub mod scale;
pub mod style;

pub use coords::{Point, Viewport, visible_top_left};
pub use element::{Axis, GuideAxis, GuideLine, RulerTag};
pub use scale::{marker_text_offset, tick_interval};
pub use style::{ColorScheme, RulerStyle};

use log::{debug, info, warn};

use crate::canvas::{Canvas, PointerEvent};
use crate::storage::{GuideStore, KeyValueStore};

/// Outcome of a ruler entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum RulerAction {
    /// A new guide line was placed.
    Created(GuideLine),
    /// An existing guide line was activated.
    Focused { id: String },
    /// Ruler objects changed without a guide being created or focused.
    Updated,
    /// Nothing to do for this event.
    Ignored,
}

/// Canvas events the ruler reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Zoom, pan, or canvas size changed.
    ViewportChanged,
    PointerDown(PointerEvent),
    PointerOver { target: String },
    PointerOut { target: String },
    /// An object is being dragged.
    ObjectMoving { target: String },
    /// A drag or transform finished.
    ObjectModified { target: String },
    SelectionUpdated { deselected: Vec<String> },
    SelectionCleared,
}

/// Ruler overlay bound to a guide line store.
///
/// Every entry point takes the canvas as `Option`: a missing canvas makes the
/// call a logged no-op. Storage failures are logged and never returned.
#[derive(Debug)]
pub struct Ruler<K> {
    guides: GuideStore<K>,
    style: RulerStyle,
    /// Artboard whose guides are currently on the canvas
    artboard: Option<String>,
}

impl<K: KeyValueStore> Ruler<K> {
    pub fn new(store: K) -> Self {
        Self::with_style(store, RulerStyle::default())
    }

    pub fn with_style(store: K, style: RulerStyle) -> Self {
        Self {
            guides: GuideStore::new(store),
            style,
            artboard: None,
        }
    }

    pub fn style(&self) -> &RulerStyle {
        &self.style
    }

    pub fn guide_store(&self) -> &GuideStore<K> {
        &self.guides
    }

    pub fn into_store(self) -> K {
        self.guides.into_inner()
    }

    /// Rebuilds the overlay for the current viewport and loads the stored
    /// guides of `artboard`.
    ///
    /// Called on startup, after every zoom, pan, or resize, and when the
    /// editor switches artboards. Guides left over from a different artboard
    /// are removed before the stored ones are loaded. Returns `false` when
    /// nothing was rendered.
    pub fn initialize<C>(
        &mut self,
        canvas: Option<&mut C>,
        scheme: ColorScheme,
        artboard: &str,
    ) -> bool
    where
        C: Canvas + ?Sized,
    {
        self.style.scheme = scheme;
        let Some(canvas) = canvas else {
            debug!("No canvas attached; skipping ruler initialisation");
            return false;
        };
        if !canvas.viewport().is_renderable() {
            debug!(
                "Viewport {:?} cannot be laid out; skipping ruler initialisation",
                canvas.viewport().transform
            );
            return false;
        }

        if self.artboard.as_deref() != Some(artboard) {
            let cleared = guide::remove_all_guides(canvas);
            marker::remove_move_markers(canvas);
            debug!("Switched to artboard {artboard}; cleared {cleared} guide(s)");
            self.artboard = Some(artboard.to_string());
        }

        render::render_axis_background(canvas, &self.style);
        guide::adjust_guides(canvas);
        render::render_step_markers(canvas, &self.style);

        let stored = self.guides.guides(artboard);
        let loaded = guide::load_guides(canvas, &self.style, &stored);
        if loaded > 0 {
            info!("Loaded {} guide line(s) for artboard {}", loaded, artboard);
        }

        canvas.request_render();
        true
    }

    /// Handles a pointer press.
    ///
    /// A press on the top ruler places a vertical guide at the pointer's x,
    /// a press on the left ruler a horizontal guide at its y. A press on an
    /// existing guide activates it and shows its move marker. In both cases
    /// the artboard's guides are persisted afterwards.
    pub fn add_new_line<C>(
        &mut self,
        event: &PointerEvent,
        canvas: Option<&mut C>,
        artboard: &str,
    ) -> RulerAction
    where
        C: Canvas + ?Sized,
    {
        let Some(canvas) = canvas else {
            debug!("No canvas attached; ignoring pointer press");
            return RulerAction::Ignored;
        };
        let Some(tag) = event
            .target
            .as_deref()
            .and_then(|id| canvas.object(id))
            .and_then(|object| object.tag())
        else {
            return RulerAction::Ignored;
        };
        if !canvas.viewport().is_renderable() {
            debug!("Viewport cannot be laid out; ignoring pointer press");
            return RulerAction::Ignored;
        }

        let action = if let Some(axis) = tag.ruler_surface() {
            let pointer = canvas.pointer(event);
            let position = match axis {
                Axis::X => pointer.x,
                Axis::Y => pointer.y,
            };
            let line = guide::create_guide(canvas, &self.style, axis.guide_axis(), position);
            RulerAction::Created(line)
        } else if let (RulerTag::Guide(_), Some(id)) = (tag, event.target.as_deref()) {
            guide::focus(canvas, &self.style, id);
            marker::render_move_marker(canvas, &self.style, id);
            RulerAction::Focused { id: id.to_string() }
        } else {
            return RulerAction::Ignored;
        };

        self.persist(&*canvas, artboard);
        canvas.request_render();
        action
    }

    /// Removes guides by id from the canvas and from the artboard's stored set.
    ///
    /// Unknown ids are skipped. Returns the number of guides removed.
    pub fn remove_lines<C>(
        &mut self,
        canvas: Option<&mut C>,
        artboard: &str,
        ids: &[String],
    ) -> usize
    where
        C: Canvas + ?Sized,
    {
        let Some(canvas) = canvas else {
            debug!("No canvas attached; not removing guide lines");
            return 0;
        };
        let removed = guide::remove_guides(canvas, ids);
        marker::remove_move_markers(canvas);
        if removed > 0 || self.guides.read().get(artboard).is_some() {
            self.persist(&*canvas, artboard);
        }
        canvas.request_render();
        removed
    }

    /// Removes every ruler object, guides included, from the canvas.
    ///
    /// Stored guides are kept so the next [`initialize`](Self::initialize)
    /// brings them back.
    pub fn remove_ruler<C>(&mut self, canvas: Option<&mut C>) -> usize
    where
        C: Canvas + ?Sized,
    {
        let Some(canvas) = canvas else {
            debug!("No canvas attached; nothing to remove");
            return 0;
        };
        let removed = canvas.remove_where(&|object| object.tag().is_some());
        canvas.request_render();
        removed
    }

    /// Forgets all stored guides of a deleted artboard.
    pub fn delete_artboard(&mut self, artboard: &str) -> bool {
        match self.guides.delete(artboard) {
            Ok(deleted) => deleted,
            Err(err) => {
                warn!("Failed to delete guide lines of artboard {artboard}: {err}");
                false
            }
        }
    }

    /// Lets a hovered guide be grabbed.
    pub fn pointer_over<C>(&mut self, canvas: Option<&mut C>, target: &str) -> bool
    where
        C: Canvas + ?Sized,
    {
        canvas.is_some_and(|canvas| guide::set_hovered(canvas, target, true))
    }

    pub fn pointer_out<C>(&mut self, canvas: Option<&mut C>, target: &str) -> bool
    where
        C: Canvas + ?Sized,
    {
        canvas.is_some_and(|canvas| guide::set_hovered(canvas, target, false))
    }

    /// Moves the marker along with a dragged guide.
    pub fn guide_moving<C>(&mut self, canvas: Option<&mut C>, target: &str) -> bool
    where
        C: Canvas + ?Sized,
    {
        let Some(canvas) = canvas else {
            return false;
        };
        if !is_guide(canvas, target) {
            return false;
        }
        let shown = marker::render_move_marker(canvas, &self.style, target).is_some();
        canvas.request_render();
        shown
    }

    /// Persists the artboard's guides after a guide was dropped.
    pub fn guide_modified<C>(
        &mut self,
        canvas: Option<&mut C>,
        artboard: &str,
        target: &str,
    ) -> bool
    where
        C: Canvas + ?Sized,
    {
        let Some(canvas) = canvas else {
            return false;
        };
        if !is_guide(canvas, target) {
            return false;
        }
        self.persist(&*canvas, artboard);
        true
    }

    /// Drops the move marker and repaints guides that lost selection.
    pub fn selection_updated<C>(&mut self, canvas: Option<&mut C>, deselected: &[String]) -> bool
    where
        C: Canvas + ?Sized,
    {
        let Some(canvas) = canvas else {
            return false;
        };
        let removed = marker::remove_move_markers(canvas);
        let recolored = guide::restore_deselected(canvas, &self.style, deselected);
        canvas.request_render();
        removed + recolored > 0
    }

    pub fn selection_cleared<C>(&mut self, canvas: Option<&mut C>) -> bool
    where
        C: Canvas + ?Sized,
    {
        let Some(canvas) = canvas else {
            return false;
        };
        let removed = marker::remove_move_markers(canvas);
        if removed > 0 {
            canvas.request_render();
        }
        removed > 0
    }

    /// Routes a canvas event to the matching entry point.
    pub fn handle_event<C>(
        &mut self,
        event: &CanvasEvent,
        canvas: Option<&mut C>,
        artboard: &str,
    ) -> RulerAction
    where
        C: Canvas + ?Sized,
    {
        let changed = match event {
            CanvasEvent::ViewportChanged => {
                let scheme = self.style.scheme;
                self.initialize(canvas, scheme, artboard)
            }
            CanvasEvent::PointerDown(pointer) => {
                return self.add_new_line(pointer, canvas, artboard);
            }
            CanvasEvent::PointerOver { target } => self.pointer_over(canvas, target),
            CanvasEvent::PointerOut { target } => self.pointer_out(canvas, target),
            CanvasEvent::ObjectMoving { target } => self.guide_moving(canvas, target),
            CanvasEvent::ObjectModified { target } => {
                self.guide_modified(canvas, artboard, target)
            }
            CanvasEvent::SelectionUpdated { deselected } => {
                self.selection_updated(canvas, deselected)
            }
            CanvasEvent::SelectionCleared => self.selection_cleared(canvas),
        };
        if changed {
            RulerAction::Updated
        } else {
            RulerAction::Ignored
        }
    }

    /// Rewrites the artboard's stored guides from those on the canvas.
    fn persist<C>(&mut self, canvas: &C, artboard: &str)
    where
        C: Canvas + ?Sized,
    {
        let lines = guide::guide_lines_on_canvas(canvas);
        if let Err(err) = self.guides.write(artboard, &lines) {
            warn!("Failed to persist guide lines of artboard {artboard}: {err}");
        }
    }
}

fn is_guide<C>(canvas: &C, id: &str) -> bool
where
    C: Canvas + ?Sized,
{
    canvas
        .object(id)
        .and_then(|object| object.tag())
        .is_some_and(|tag| tag.guide_axis().is_some())
}
