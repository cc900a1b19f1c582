//! Ruler bars, corner block, ticks and tick labels.
//!
//! Decoration is never patched in place: each render removes the previous
//! objects of the same kind and adds a fresh set for the current viewport.

use log::{debug, warn};

use super::coords::Viewport;
use super::element::{Axis, RulerTag};
use super::options::{BarOptions, TickLabelOptions, TickLineOptions};
use super::scale::{round_half_up, tick_interval};
use super::style::RulerStyle;
use crate::canvas::Canvas;
use crate::util::generate_id;

/// Upper bound on ticks per axis; only reached with degenerate zoom values.
const MAX_TICKS_PER_AXIS: usize = 10_000;

/// Replaces both ruler bars and the corner block.
///
/// Returns `false` without touching the canvas when the viewport cannot be
/// laid out.
pub fn render_axis_background<C>(canvas: &mut C, style: &RulerStyle) -> bool
where
    C: Canvas + ?Sized,
{
    let viewport = canvas.viewport();
    if !viewport.is_renderable() {
        debug!("Skipping ruler background: viewport {:?}", viewport.transform);
        return false;
    }

    canvas.remove_where(&|object| object.tag().is_some_and(|tag| tag.is_background()));

    for axis in [Axis::X, Axis::Y] {
        let bar = BarOptions::axis(axis, &viewport, style);
        canvas.add(bar.into_object(generate_id()));
    }
    canvas.add(BarOptions::block(&viewport, style).into_object(generate_id()));
    true
}

/// Replaces all ticks and tick labels, and drops any live move marker.
///
/// The corner block is moved back on top and re-laid out so it keeps covering
/// the bar overlap. Returns the number of ticks placed on both axes.
pub fn render_step_markers<C>(canvas: &mut C, style: &RulerStyle) -> usize
where
    C: Canvas + ?Sized,
{
    let viewport = canvas.viewport();
    if !viewport.is_renderable() {
        debug!("Skipping ruler ticks: viewport {:?}", viewport.transform);
        return 0;
    }

    canvas.remove_where(&|object| object.tag().is_some_and(|tag| tag.is_step_marker()));

    let mut placed = 0;
    for axis in [Axis::X, Axis::Y] {
        for value in axis_ticks(axis, &viewport) {
            let tick = TickLineOptions::at(axis, value, &viewport, style);
            canvas.add(tick.into_object(generate_id()));
            let label = TickLabelOptions::at(axis, value, &viewport, style);
            canvas.add(label.into_object(generate_id()));
            placed += 1;
        }
    }

    refront_block(canvas, &viewport, style);
    placed
}

fn axis_ticks(axis: Axis, viewport: &Viewport) -> Vec<f64> {
    let origin = viewport.visible_top_left();
    let pan = viewport.pan();
    match axis {
        Axis::X => tick_positions(origin.x, viewport.width, pan.x, viewport.zoom()),
        Axis::Y => tick_positions(origin.y, viewport.height, pan.y, viewport.zoom()),
    }
}

/// Canvas coordinates of the ticks along one axis.
///
/// Starts at the multiple of the interval nearest to `origin` and stops
/// before `(extent - pan) / zoom`, the far edge of the visible region.
pub fn tick_positions(origin: f64, extent: f64, pan: f64, zoom: f64) -> Vec<f64> {
    let interval = tick_interval(zoom);
    let start = round_half_up(origin / interval) * interval;
    let end = (extent - pan) / zoom;
    if !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }

    let mut ticks = Vec::new();
    let mut value = start;
    while value < end {
        if ticks.len() == MAX_TICKS_PER_AXIS {
            warn!(
                "Tick count capped at {} for zoom {}",
                MAX_TICKS_PER_AXIS, zoom
            );
            break;
        }
        ticks.push(value);
        value += interval;
    }
    ticks
}

fn refront_block<C>(canvas: &mut C, viewport: &Viewport, style: &RulerStyle)
where
    C: Canvas + ?Sized,
{
    let Some(id) = canvas
        .find_tagged(RulerTag::Block)
        .map(|block| block.id().to_string())
    else {
        return;
    };
    if let Some(block) = canvas.object_mut(&id) {
        BarOptions::block(viewport, style).apply(block);
    }
    canvas.bring_to_front(&id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasObject, Drawable, ObjectData, Scene};
    use crate::ruler::Point;

    fn count(scene: &Scene, tag: RulerTag) -> usize {
        scene.tagged(tag).count()
    }

    #[test]
    fn ticks_start_at_nearest_multiple() {
        // zoom 1 → interval 100, visible from 130 to 930
        let ticks = tick_positions(130.0, 800.0, -130.0, 1.0);
        assert_eq!(ticks.first(), Some(&100.0));
        assert_eq!(ticks.last(), Some(&900.0));
        assert_eq!(ticks.len(), 9);
    }

    #[test]
    fn ticks_stop_before_far_edge() {
        let ticks = tick_positions(0.0, 300.0, 0.0, 1.0);
        assert_eq!(ticks, vec![0.0, 100.0, 200.0]);
    }

    #[test]
    fn non_finite_zoom_yields_no_ticks() {
        assert!(tick_positions(0.0, 300.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn background_is_rebuilt_not_duplicated() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        assert!(render_axis_background(&mut scene, &style));
        assert!(render_axis_background(&mut scene, &style));

        assert_eq!(count(&scene, RulerTag::Background(Axis::X)), 1);
        assert_eq!(count(&scene, RulerTag::Background(Axis::Y)), 1);
        assert_eq!(count(&scene, RulerTag::Block), 1);
    }

    #[test]
    fn step_markers_replace_previous_set_and_keep_block_on_top() {
        let mut scene = Scene::new(400.0, 300.0);
        let style = RulerStyle::default();
        render_axis_background(&mut scene, &style);
        let placed = render_step_markers(&mut scene, &style);
        // interval 100: x 0..=300, y 0..=200
        assert_eq!(placed, 7);

        scene.add(CanvasObject::new(
            ObjectData::user("photo"),
            Drawable::Rect {
                left: 0.0,
                top: 0.0,
                width: 50.0,
                height: 50.0,
            },
        ));
        scene.set_zoom(2.0);
        let placed = render_step_markers(&mut scene, &style);
        // interval 25 over 0..200 and 0..150
        assert_eq!(placed, 14);
        assert_eq!(count(&scene, RulerTag::TickMark(Axis::X)), 8);
        assert_eq!(count(&scene, RulerTag::TickLabel(Axis::Y)), 6);

        let top = scene.objects().last().unwrap();
        assert_eq!(top.tag(), Some(RulerTag::Block));
        assert_eq!(
            top.shape,
            Drawable::Rect {
                left: 0.0,
                top: 0.0,
                width: 10.0,
                height: 10.0,
            }
        );
    }

    #[test]
    fn labels_use_dark_scheme_text_color() {
        let mut scene = Scene::with_viewport(Viewport::new(1.0, Point::default(), 150.0, 50.0));
        let style = RulerStyle::default().with_scheme(crate::ruler::ColorScheme::Dark);
        render_step_markers(&mut scene, &style);
        let label = scene.tagged(RulerTag::TickLabel(Axis::X)).next().unwrap();
        assert_eq!(label.fill, Some(style.text_stroke()));
        assert_eq!(label.text(), Some("0"));
    }

    #[test]
    fn degenerate_viewport_is_skipped() {
        let mut scene = Scene::new(400.0, 300.0);
        scene.set_zoom(0.0);
        let style = RulerStyle::default();
        assert!(!render_axis_background(&mut scene, &style));
        assert_eq!(render_step_markers(&mut scene, &style), 0);
        assert!(scene.objects().is_empty());
    }
}
