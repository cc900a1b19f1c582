//! Coordinate readout that follows a guide while it is being moved.

use super::element::RulerTag;
use super::guide::guide_of;
use super::options::MoveMarkerOptions;
use super::style::RulerStyle;
use crate::canvas::Canvas;
use crate::util::generate_id;

/// Shows the marker for `guide_id`, replacing any marker already shown.
///
/// Returns the marker's id, or `None` when `guide_id` is not a guide on the
/// canvas (in which case existing markers are still removed).
pub fn render_move_marker<C>(canvas: &mut C, style: &RulerStyle, guide_id: &str) -> Option<String>
where
    C: Canvas + ?Sized,
{
    remove_move_markers(canvas);

    let line = canvas.object(guide_id).and_then(guide_of)?;
    let viewport = canvas.viewport();
    if !viewport.is_renderable() {
        return None;
    }
    let id = generate_id();
    let options = MoveMarkerOptions::for_guide(line.axis, line.position, &viewport, style);
    canvas.add(options.into_object(id.clone()));
    Some(id)
}

/// Removes move markers of both axes.
pub fn remove_move_markers<C>(canvas: &mut C) -> usize
where
    C: Canvas + ?Sized,
{
    canvas.remove_where(&|object| matches!(object.tag(), Some(RulerTag::MoveMarker(_))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Scene;
    use crate::ruler::{Axis, GuideAxis};
    use crate::ruler::guide::create_guide;

    #[test]
    fn only_one_marker_exists() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        let vertical = create_guide(&mut scene, &style, GuideAxis::Vertical, 80.4);
        let horizontal = create_guide(&mut scene, &style, GuideAxis::Horizontal, 33.0);

        render_move_marker(&mut scene, &style, &vertical.id).unwrap();
        let marker_id = render_move_marker(&mut scene, &style, &horizontal.id).unwrap();

        assert_eq!(scene.tagged(RulerTag::MoveMarker(Axis::X)).count(), 0);
        let marker = scene.object(&marker_id).unwrap();
        assert_eq!(marker.tag(), Some(RulerTag::MoveMarker(Axis::Y)));
        assert_eq!(marker.text(), Some("33"));
        assert_eq!(marker.fill, Some(style.move_marker));
    }

    #[test]
    fn marker_for_unknown_guide_clears_existing() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        let line = create_guide(&mut scene, &style, GuideAxis::Vertical, 80.0);
        render_move_marker(&mut scene, &style, &line.id).unwrap();

        assert_eq!(render_move_marker(&mut scene, &style, "nope"), None);
        assert_eq!(remove_move_markers(&mut scene), 0);
    }

    #[test]
    fn marker_text_tracks_dragged_position() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        let line = create_guide(&mut scene, &style, GuideAxis::Vertical, 80.0);
        scene.object_mut(&line.id).unwrap().selectable = true;
        assert!(scene.drag(&line.id, 12.6, 40.0));

        let marker_id = render_move_marker(&mut scene, &style, &line.id).unwrap();
        assert_eq!(scene.object(&marker_id).unwrap().text(), Some("93"));
    }
}
