use barviz_scenegraph::marks::group::SceneGroup;
use barviz_scenegraph::marks::mark::SceneMark;
use barviz_scenegraph::marks::rect::SceneRectMark;
use barviz_scenegraph::marks::text::{SceneTextMark, TextAlignSpec};
use barviz_scenegraph::scene_graph::SceneGraph;

fn make_scene() -> SceneGraph {
    let mut axis = SceneGroup::new("x-axis", [0.0, 280.0]);
    axis.push(SceneTextMark {
        text: "cat".to_string().into(),
        x: 140.0.into(),
        align: TextAlignSpec::Center.into(),
        ..Default::default()
    });

    let mut plot = SceneGroup::new("plot", [60.0, 60.0]);
    plot.push(axis);
    plot.push(SceneRectMark {
        name: "bars".to_string(),
        len: 2,
        x: vec![0.0, 140.0].into(),
        y: vec![280.0, 280.0].into(),
        width: 140.0.into(),
        height: 0.0.into(),
        ..Default::default()
    });

    let mut scene = SceneGraph::new(400.0, 400.0, [0.0, 0.0]);
    scene.marks.push(plot.into());
    scene
}

#[test]
fn test_get_mark_by_path() {
    let mut scene = make_scene();
    assert_eq!(scene.get_mark(&[0, 1]).map(|m| m.name()), Some("bars"));
    assert!(scene.get_mark(&[]).is_none());
    assert!(scene.get_mark(&[0, 5]).is_none());

    let SceneMark::Rect(rect) = scene.get_mark_mut(&[0, 1]).unwrap() else {
        panic!("expected rect mark");
    };
    rect.height = vec![-10.0, -20.0].into();
    let SceneMark::Rect(rect) = scene.get_mark(&[0, 1]).unwrap() else {
        panic!("expected rect mark");
    };
    assert_eq!(rect.height_vec(), vec![-10.0, -20.0]);

    assert!(scene.get_mark_mut(&[0, 0, 0, 0]).is_err());
}

#[test]
fn test_json_round_trip() {
    let scene = make_scene();
    let json = scene.to_json().unwrap();
    assert!(json.contains("\"bars\""));
    assert_eq!(SceneGraph::from_json(&json).unwrap(), scene);
}
