//! Tests for scene assembly and HTML output

use std::fs;

use catmap::atlas::default_atlas;
use catmap::domain::{Category, Diagram};
use catmap::render::{render_to_html, scene_json};
use catmap::render_default_atlas;
use catmap::util::testing;
use serde_json::Value;
use tempfile::TempDir;

fn dangling_diagram() -> Diagram {
    let mut diagram = Diagram::new();
    diagram
        .add_category("A", Category::new([0.0, 0.0, 0.0], "red", "circle"))
        .add_functor("A", "Ghost", "g");
    diagram
}

#[test]
fn given_default_atlas_when_rendering_then_writes_standalone_html_document() {
    // Arrange
    testing::init_test_setup();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("map.html");

    // Act
    render_to_html(&default_atlas(), &path).unwrap();

    // Assert
    let html = fs::read_to_string(&path).unwrap();
    assert!(html.to_lowercase().contains("<html"));
    assert!(html.contains("plotly"));
    assert!(html.contains("Vect_k"));
    assert!(html.contains("π₁ (Fundamental Group)"));
}

#[test]
fn given_default_path_when_rendering_builtin_atlas_then_file_appears() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("test.html");

    // Act
    render_default_atlas(&path).unwrap();

    // Assert
    assert!(path.exists());
}

#[test]
fn given_same_diagram_when_serialized_twice_then_scene_json_is_identical() {
    // Arrange
    let atlas = default_atlas();

    // Act
    let first = scene_json(&atlas).unwrap();
    let second = scene_json(&atlas).unwrap();

    // Assert
    assert_eq!(first, second);
}

#[test]
fn given_atlas_when_serialized_then_three_traces_with_fixed_presentation() {
    // Arrange
    let atlas = default_atlas();

    // Act
    let scene: Value = serde_json::from_str(&scene_json(&atlas).unwrap()).unwrap();

    // Assert: marker, segment, and label traces in that order
    let traces = scene["data"].as_array().unwrap();
    assert_eq!(traces.len(), 3);
    assert_eq!(traces[0]["mode"], "markers+text");
    assert_eq!(traces[1]["mode"], "lines");
    assert_eq!(traces[2]["mode"], "text");

    // One marker per category, labeled with its name
    assert_eq!(traces[0]["x"].as_array().unwrap().len(), 6);
    assert_eq!(traces[0]["marker"]["size"], 12);

    // Two endpoints plus one break per functor, break at every third entry
    let xs = traces[1]["x"].as_array().unwrap();
    assert_eq!(xs.len(), 3 * atlas.functors.len());
    assert!(xs[2].is_null());

    // First functor is Top -> Set: midpoint of (-2, 2, 1) and (0, 0, -1)
    assert_eq!(traces[2]["x"][0], -1.0);
    assert_eq!(traces[2]["y"][0], 1.0);
    assert_eq!(traces[2]["z"][0], 0.0);
    assert_eq!(traces[2]["text"][0], "U (Forgetful)");

    // Fixed chart-level presentation
    assert_eq!(scene["layout"]["showlegend"], false);
    assert_eq!(
        scene["layout"]["title"]["text"],
        "A 3D Map of Mathematical Categories and Functors"
    );
}

#[test]
fn given_diagram_without_functors_when_serialized_then_line_and_label_traces_empty() {
    // Arrange
    let mut diagram = Diagram::new();
    diagram.add_category("A", Category::new([1.0, 2.0, 3.0], "red", "circle"));

    // Act
    let scene: Value = serde_json::from_str(&scene_json(&diagram).unwrap()).unwrap();

    // Assert
    let traces = scene["data"].as_array().unwrap();
    assert_eq!(traces[0]["x"].as_array().unwrap().len(), 1);
    assert!(traces[1]["x"].as_array().unwrap().is_empty());
    assert!(traces[2]["x"].as_array().unwrap().is_empty());
}

#[test]
fn given_dangling_functor_when_rendering_then_errors_and_writes_nothing() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.html");

    // Act
    let result = render_to_html(&dangling_diagram(), &path);

    // Assert
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn given_existing_output_when_rendering_fails_then_prior_file_untouched() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.html");
    fs::write(&path, "prior contents").unwrap();

    // Act
    let result = render_to_html(&dangling_diagram(), &path);

    // Assert
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "prior contents");
}
