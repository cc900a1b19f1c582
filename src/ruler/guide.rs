//! Guide lines living on the canvas.
//!
//! A guide's position is its `left` (vertical) or `top` (horizontal). The
//! span along the other axis is derived from the viewport every time the
//! guide is created or the view changes.

use std::collections::HashSet;

use log::debug;

use super::element::{GuideAxis, GuideLine, RulerTag};
use super::options::{GuideLineOptions, guide_padding, guide_span};
use super::style::RulerStyle;
use crate::canvas::{Canvas, CanvasObject, Drawable};
use crate::util::generate_id;

/// Axis and position of a guide object, or `None` for anything else.
pub fn guide_of(object: &CanvasObject) -> Option<GuideLine> {
    let axis = object.tag()?.guide_axis()?;
    let position = match axis {
        GuideAxis::Vertical => object.left(),
        GuideAxis::Horizontal => object.top(),
    };
    Some(GuideLine::new(object.id(), axis, position))
}

/// Adds a new guide at `position` and returns its record.
pub fn create_guide<C>(
    canvas: &mut C,
    style: &RulerStyle,
    axis: GuideAxis,
    position: f64,
) -> GuideLine
where
    C: Canvas + ?Sized,
{
    let line = GuideLine::new(generate_id(), axis, position);
    place_guide(canvas, style, &line);
    debug!("Created {} guide {} at {}", axis, line.id, position);
    line
}

fn place_guide<C>(canvas: &mut C, style: &RulerStyle, line: &GuideLine)
where
    C: Canvas + ?Sized,
{
    let options = GuideLineOptions::new(line.axis, line.position, &canvas.viewport(), style);
    canvas.add(options.into_object(line.id.clone()));
}

/// Re-creates stored guides that are not already on the canvas.
///
/// Returns how many guides were added.
pub fn load_guides<C>(canvas: &mut C, style: &RulerStyle, lines: &[GuideLine]) -> usize
where
    C: Canvas + ?Sized,
{
    let mut added = 0;
    for line in lines {
        if canvas.object(&line.id).is_some() {
            debug!("Guide {} already on canvas, not loading again", line.id);
            continue;
        }
        place_guide(canvas, style, line);
        added += 1;
    }
    added
}

/// Guides currently on the canvas in draw order, first occurrence per id.
pub fn guide_lines_on_canvas<C>(canvas: &C) -> Vec<GuideLine>
where
    C: Canvas + ?Sized,
{
    let mut seen = HashSet::new();
    canvas
        .objects()
        .iter()
        .filter_map(guide_of)
        .filter(|line| seen.insert(line.id.clone()))
        .collect()
}

fn guide_ids<C>(canvas: &C) -> Vec<String>
where
    C: Canvas + ?Sized,
{
    canvas
        .objects()
        .iter()
        .filter(|object| object.tag().and_then(|tag| tag.guide_axis()).is_some())
        .map(|object| object.id().to_string())
        .collect()
}

/// Re-spans every guide to the current viewport and raises it above other
/// objects. Positions are kept.
pub fn adjust_guides<C>(canvas: &mut C)
where
    C: Canvas + ?Sized,
{
    let viewport = canvas.viewport();
    let zoom = viewport.zoom();
    for id in guide_ids(canvas) {
        let Some(object) = canvas.object_mut(&id) else {
            continue;
        };
        let Some(line) = guide_of(object) else {
            continue;
        };
        let (start, length) = guide_span(line.axis, &viewport);
        object.shape = match line.axis {
            GuideAxis::Vertical => Drawable::Line {
                x1: line.position,
                y1: start,
                x2: line.position,
                y2: start + length,
            },
            GuideAxis::Horizontal => Drawable::Line {
                x1: start,
                y1: line.position,
                x2: start + length,
                y2: line.position,
            },
        };
        object.stroke_width = 1.0 / zoom;
        object.padding = guide_padding(zoom);
        canvas.bring_to_front(&id);
    }
}

/// Makes a guide draggable while hovered and inert otherwise.
///
/// Returns `false` when `id` is not a guide.
pub fn set_hovered<C>(canvas: &mut C, id: &str, hovered: bool) -> bool
where
    C: Canvas + ?Sized,
{
    match canvas.object_mut(id) {
        Some(object) if is_guide(object) => {
            object.selectable = hovered;
            true
        }
        _ => false,
    }
}

/// Paints a guide in the active color.
pub fn focus<C>(canvas: &mut C, style: &RulerStyle, id: &str) -> bool
where
    C: Canvas + ?Sized,
{
    match canvas.object_mut(id) {
        Some(object) if is_guide(object) => {
            object.stroke = Some(style.guide_active);
            object.fill = Some(style.guide_active);
            true
        }
        _ => false,
    }
}

/// Paints guides that just lost selection in the deselected color.
///
/// Ids that are not guides are ignored. Returns how many guides changed.
pub fn restore_deselected<C>(canvas: &mut C, style: &RulerStyle, ids: &[String]) -> usize
where
    C: Canvas + ?Sized,
{
    let mut recolored = 0;
    for id in ids {
        if let Some(object) = canvas.object_mut(id) {
            if is_guide(object) {
                object.stroke = Some(style.guide_deselected);
                object.fill = Some(style.guide_deselected);
                recolored += 1;
            }
        }
    }
    recolored
}

/// Removes the named guides. Unknown ids and non-guide objects are skipped.
pub fn remove_guides<C>(canvas: &mut C, ids: &[String]) -> usize
where
    C: Canvas + ?Sized,
{
    let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
    canvas.remove_where(&|object| is_guide(object) && wanted.contains(object.id()))
}

/// Removes every guide, whatever its artboard.
pub fn remove_all_guides<C>(canvas: &mut C) -> usize
where
    C: Canvas + ?Sized,
{
    canvas.remove_where(&|object| is_guide(object))
}

fn is_guide(object: &CanvasObject) -> bool {
    matches!(object.tag(), Some(RulerTag::Guide(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{ObjectData, Scene};
    use crate::ruler::Point;

    fn photo() -> CanvasObject {
        CanvasObject::new(
            ObjectData::user("photo"),
            Drawable::Rect {
                left: 0.0,
                top: 0.0,
                width: 10.0,
                height: 10.0,
            },
        )
    }

    #[test]
    fn created_guide_reads_back_its_position() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        let line = create_guide(&mut scene, &style, GuideAxis::Vertical, 120.0);

        let on_canvas = guide_lines_on_canvas(&scene);
        assert_eq!(on_canvas, vec![line.clone()]);
        let object = scene.object(&line.id).unwrap();
        assert_eq!(object.stroke, Some(style.guide_line));
        assert_eq!(object.top(), 20.0);
    }

    #[test]
    fn load_skips_guides_already_present() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        let existing = create_guide(&mut scene, &style, GuideAxis::Horizontal, 50.0);
        let stored = vec![existing, GuideLine::new("b", GuideAxis::Vertical, 10.0)];

        assert_eq!(load_guides(&mut scene, &style, &stored), 1);
        assert_eq!(guide_lines_on_canvas(&scene).len(), 2);
    }

    #[test]
    fn adjust_respans_and_raises_guides() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        let line = create_guide(&mut scene, &style, GuideAxis::Vertical, 80.0);
        scene.add(photo());

        scene.set_zoom(2.0);
        scene.set_pan(Point::new(-40.0, -60.0));
        adjust_guides(&mut scene);

        let object = scene.objects().last().unwrap();
        assert_eq!(object.id(), line.id);
        assert_eq!(
            object.shape,
            Drawable::Line {
                x1: 80.0,
                y1: 40.0,
                x2: 80.0,
                y2: 190.0,
            }
        );
        assert_eq!(object.stroke_width, 0.5);
        assert_eq!(object.padding, 5.0);
    }

    #[test]
    fn hover_toggles_selectable_on_guides_only() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        let line = create_guide(&mut scene, &style, GuideAxis::Vertical, 80.0);
        scene.add(photo());

        assert!(set_hovered(&mut scene, &line.id, true));
        assert!(scene.object(&line.id).unwrap().selectable);
        assert!(set_hovered(&mut scene, &line.id, false));
        assert!(!scene.object(&line.id).unwrap().selectable);
        assert!(!set_hovered(&mut scene, "photo", false));
        assert!(scene.object("photo").unwrap().selectable);
    }

    #[test]
    fn focus_and_deselect_recolor() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        let line = create_guide(&mut scene, &style, GuideAxis::Vertical, 80.0);

        assert!(focus(&mut scene, &style, &line.id));
        assert_eq!(scene.object(&line.id).unwrap().stroke, Some(style.guide_active));

        let ids = vec![line.id.clone(), "missing".to_string()];
        assert_eq!(restore_deselected(&mut scene, &style, &ids), 1);
        assert_eq!(
            scene.object(&line.id).unwrap().stroke,
            Some(style.guide_deselected)
        );
    }

    #[test]
    fn remove_ignores_unknown_and_non_guides() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        let line = create_guide(&mut scene, &style, GuideAxis::Vertical, 80.0);
        scene.add(photo());

        let ids = vec![line.id.clone(), "photo".to_string(), "x2".to_string()];
        assert_eq!(remove_guides(&mut scene, &ids), 1);
        assert!(scene.object("photo").is_some());
        assert!(guide_lines_on_canvas(&scene).is_empty());
    }

    #[test]
    fn remove_all_guides_keeps_other_objects() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        create_guide(&mut scene, &style, GuideAxis::Vertical, 80.0);
        create_guide(&mut scene, &style, GuideAxis::Horizontal, 40.0);
        scene.add(photo());

        assert_eq!(remove_all_guides(&mut scene), 2);
        assert_eq!(scene.objects().len(), 1);
    }
}
