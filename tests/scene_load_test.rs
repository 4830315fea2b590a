// Integration tests for the demo host: scene loading and the full
// hover/scroll/undo stack over real hit-testing

use std::io::Write;

use optswitch::error::SceneError;
use optswitch::scene::{load_scene, sample_scene};
use optswitch::tool::{Modifiers, OptionSwitcher, ToolEvents};
use optswitch::traits::{Host, Tag};

const SCENE_JSON: &str = r#"{
    "tags": [
        { "name": "Walls" },
        { "name": "Option Fireplace: Scandi" },
        { "name": "Option Fireplace: Farmhouse", "visible": false }
    ],
    "entities": [
        { "label": "Room", "tag": "Walls", "x": 0, "y": 0, "width": 40, "height": 20 },
        { "label": "Stove", "tag": "Option Fireplace: Scandi", "x": 2, "y": 2, "width": 10, "height": 5 },
        { "label": "Hearth", "tag": "Option Fireplace: Farmhouse", "x": 2, "y": 2, "width": 12, "height": 6 }
    ]
}"#;

fn write_scene(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write scene");
    file
}

#[test]
fn test_load_scene_from_disk() {
    let file = write_scene(SCENE_JSON);
    let scene = load_scene(file.path()).expect("scene should load");

    assert_eq!(scene.tags().len(), 3);
    assert_eq!(scene.entities().len(), 3);
    // Visibility defaults to true when the field is omitted.
    assert!(scene.tags()[0].is_visible());
    assert!(!scene.tags()[2].is_visible());
}

#[test]
fn test_malformed_json_reports_a_parse_error() {
    let file = write_scene("{ not json");
    let err = load_scene(file.path()).unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)));
}

#[test]
fn test_missing_file_reports_an_io_error() {
    let err = load_scene(std::path::Path::new("/nonexistent/scene.json")).unwrap_err();
    assert!(matches!(err, SceneError::Io(_)));
}

#[test]
fn test_dangling_tag_reference_is_rejected() {
    let file = write_scene(
        r#"{
            "tags": [{ "name": "Walls" }],
            "entities": [
                { "label": "Ghost", "tag": "Missing", "x": 0, "y": 0, "width": 1, "height": 1 }
            ]
        }"#,
    );
    let err = load_scene(file.path()).unwrap_err();
    assert!(matches!(err, SceneError::UnknownTag(label, tag) if label == "Ghost" && tag == "Missing"));
}

#[test]
fn test_full_stack_hover_scroll_and_undo() {
    let file = write_scene(SCENE_JSON);
    let mut scene = load_scene(file.path()).expect("scene should load");
    let mut tool = OptionSwitcher::new();

    tool.activate(&mut scene).unwrap();

    // The stove box is topmost at (5, 4); hovering it resolves the group.
    tool.pointer_moved(&mut scene, 5.0, 4.0);
    let group = tool.current().expect("group under the pointer");
    assert_eq!(group.name(), "Fireplace");
    assert_eq!(group.selected_name(), "Scandi");

    // Constrained scroll swaps the visible option.
    let modifiers = Modifiers {
        control: true,
        ..Modifiers::default()
    };
    tool.scrolled(&mut scene, -1.0, modifiers);
    assert!(!scene.tags()[1].is_visible(), "Scandi hidden");
    assert!(scene.tags()[2].is_visible(), "Farmhouse shown");

    // With Scandi hidden, the same spot now picks the Farmhouse hearth.
    tool.pointer_moved(&mut scene, 5.0, 4.0);
    assert_eq!(tool.current().unwrap().selected_name(), "Farmhouse");

    // Deactivation commits one undoable step; undo restores the state
    // from before the session's first change.
    tool.deactivate(&mut scene).unwrap();
    assert_eq!(scene.undo_depth(), 1);
    assert!(scene.undo());
    assert!(scene.tags()[1].is_visible(), "Scandi back");
    assert!(!scene.tags()[2].is_visible(), "Farmhouse hidden again");
}

#[test]
fn test_sample_scene_resolves_its_groups() {
    let mut scene = sample_scene();
    let mut tool = OptionSwitcher::new();

    // The sample's Scandi stove sits at (5, 4) with size 14x6.
    tool.pointer_moved(&mut scene, 8.0, 6.0);

    let group = tool.current().expect("fireplace group in the sample");
    assert_eq!(group.name(), "Fireplace");
    assert_eq!(group.size(), 3);
}
