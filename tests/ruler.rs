use artboard_ruler::ruler::{Axis, Point, RulerTag};
use artboard_ruler::{
    Canvas, CanvasEvent, ColorScheme, FileStore, GuideAxis, PointerEvent, Ruler, RulerAction,
    Scene,
};
use tempfile::TempDir;

fn press_on(scene: &Scene, tag: RulerTag, x: f64, y: f64) -> CanvasEvent {
    let target = scene.find_tagged(tag).unwrap().id().to_string();
    CanvasEvent::PointerDown(PointerEvent::new(Point::new(x, y), Some(&target)))
}

#[test]
fn guides_survive_a_restart_through_file_store() {
    let temp = TempDir::new().unwrap();

    let created = {
        let mut scene = Scene::new(1024.0, 768.0);
        let mut ruler = Ruler::new(FileStore::new(temp.path()));
        ruler.initialize(Some(&mut scene), ColorScheme::Light, "poster");

        let press = press_on(&scene, RulerTag::TickMark(Axis::X), 300.0, 18.0);
        let RulerAction::Created(vertical) = ruler.handle_event(&press, Some(&mut scene), "poster")
        else {
            panic!("press on the top ruler should create a guide");
        };
        let press = press_on(&scene, RulerTag::Background(Axis::Y), 8.0, 410.0);
        let RulerAction::Created(horizontal) =
            ruler.handle_event(&press, Some(&mut scene), "poster")
        else {
            panic!("press on the left ruler should create a guide");
        };
        vec![vertical, horizontal]
    };
    assert_eq!(created[0].axis, GuideAxis::Vertical);
    assert_eq!(created[1].axis, GuideAxis::Horizontal);
    assert_eq!(created[1].position, 410.0);

    let mut scene = Scene::new(1024.0, 768.0);
    scene.set_zoom(0.5);
    let mut ruler = Ruler::new(FileStore::new(temp.path()));
    assert!(ruler.initialize(Some(&mut scene), ColorScheme::Dark, "poster"));

    for line in &created {
        let guide = scene.object(&line.id).expect("guide restored");
        assert_eq!(guide.tag(), Some(RulerTag::Guide(line.axis)));
        assert_eq!(guide.stroke_width, 2.0);
    }
    assert_eq!(ruler.guide_store().guides("poster"), created);
}

#[test]
fn deleting_artboard_leaves_canvas_untouched() {
    let temp = TempDir::new().unwrap();
    let mut scene = Scene::new(640.0, 480.0);
    let mut ruler = Ruler::new(FileStore::new(temp.path()));
    ruler.initialize(Some(&mut scene), ColorScheme::Light, "card");
    let press = press_on(&scene, RulerTag::Background(Axis::X), 200.0, 4.0);
    ruler.handle_event(&press, Some(&mut scene), "card");

    assert!(ruler.delete_artboard("card"));
    assert!(ruler.guide_store().guides("card").is_empty());
    assert_eq!(scene.tagged(RulerTag::Guide(GuideAxis::Vertical)).count(), 1);
}
