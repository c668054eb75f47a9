//! Rendering: pure scene layers plus chart assembly and HTML output

pub mod layers;
pub mod scene;

pub use layers::{LabelLayer, MarkerLayer, SegmentLayer};
pub use scene::{build_plot, render_to_html, scene_json};
