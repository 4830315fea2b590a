//! Scene documents on disk, plus the compiled-in sample.

use std::path::Path;

use super::model::{EntitySpec, Scene, SceneSpec, TagSpec};
use super::SceneError;

/// Load and validate a scene document.
pub fn load_scene(path: &Path) -> Result<Scene, SceneError> {
    let contents = std::fs::read_to_string(path)?;
    let spec: SceneSpec = serde_json::from_str(&contents)?;
    tracing::info!(
        "loaded scene from {} ({} tags, {} entities)",
        path.display(),
        spec.tags.len(),
        spec.entities.len()
    );
    Scene::from_spec(spec)
}

/// The built-in sample: a small floor plan with two option groups — three
/// fireplaces and two staircases — plus permanent structure.
pub fn sample_scene() -> Scene {
    let tags = [
        ("Walls", true),
        ("Option Fireplace: Scandi", true),
        ("Option Fireplace: Farmhouse", false),
        ("Option Fireplace: Victorian", false),
        ("Option Stairs: Spiral", true),
        ("Option Stairs: Straight", false),
    ];
    let entities = [
        ("Living room", "Walls", 1.0, 1.0, 58.0, 20.0),
        ("Hall", "Walls", 59.0, 1.0, 16.0, 20.0),
        ("Scandi stove", "Option Fireplace: Scandi", 5.0, 4.0, 14.0, 6.0),
        (
            "Farmhouse hearth",
            "Option Fireplace: Farmhouse",
            5.0,
            4.0,
            16.0,
            7.0,
        ),
        (
            "Victorian mantel",
            "Option Fireplace: Victorian",
            5.0,
            4.0,
            15.0,
            6.0,
        ),
        ("Spiral stairs", "Option Stairs: Spiral", 62.0, 5.0, 10.0, 10.0),
        (
            "Straight stairs",
            "Option Stairs: Straight",
            61.0,
            4.0,
            12.0,
            8.0,
        ),
    ];

    let spec = SceneSpec {
        tags: tags
            .iter()
            .map(|(name, visible)| TagSpec {
                name: name.to_string(),
                visible: *visible,
            })
            .collect(),
        entities: entities
            .iter()
            .map(|(label, tag, x, y, width, height)| EntitySpec {
                label: label.to_string(),
                tag: tag.to_string(),
                x: *x,
                y: *y,
                width: *width,
                height: *height,
            })
            .collect(),
    };
    Scene::from_spec(spec).expect("sample scene is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Host, Tag};

    #[test]
    fn test_sample_scene_has_switchable_groups() {
        let scene = sample_scene();
        let fireplace_tags: Vec<String> = scene
            .tags()
            .iter()
            .map(|t| t.name())
            .filter(|n| n.starts_with("Option Fireplace: "))
            .collect();
        assert_eq!(fireplace_tags.len(), 3);

        // Exactly one option visible per group out of the box.
        let visible: Vec<String> = scene
            .tags()
            .iter()
            .filter(|t| t.is_visible())
            .map(|t| t.name())
            .collect();
        assert!(visible.contains(&"Option Fireplace: Scandi".to_string()));
        assert!(!visible.contains(&"Option Fireplace: Farmhouse".to_string()));
    }
}
