//! Chart assembly and HTML output
//!
//! Builds the three plotly traces from the scene layers, applies the fixed
//! presentation settings, and serializes the result. Validation runs before
//! anything else, so a malformed diagram never reaches the filesystem.

use std::fs;
use std::path::Path;

use plotly::common::{Font, HoverInfo, Line, Marker, Mode, Position, Title};
use plotly::layout::{Axis, Layout, LayoutScene, Margin};
use plotly::{Plot, Scatter3D};
use tracing::{debug, instrument};

use crate::domain::{Diagram, RenderError, RenderResult};
use crate::render::layers::{LabelLayer, MarkerLayer, SegmentLayer};

const TITLE: &str = "A 3D Map of Mathematical Categories and Functors";
const MARKER_SIZE: usize = 12;
const MARKER_OPACITY: f64 = 0.8;
const SEGMENT_WIDTH: f64 = 2.0;
const SEGMENT_COLOR: &str = "darkgrey";
const LABEL_FONT_SIZE: usize = 10;
const LABEL_FONT_COLOR: &str = "black";

/// Assembles the full figure: marker, segment, and label traces plus the
/// fixed layout.
///
/// # Errors
///
/// Returns [`RenderError::Diagram`] if a functor endpoint does not name an
/// existing category.
pub fn build_plot(diagram: &Diagram) -> RenderResult<Plot> {
    diagram.validate()?;

    let markers = MarkerLayer::from_diagram(diagram);
    let segments = SegmentLayer::from_diagram(diagram)?;
    let labels = LabelLayer::from_diagram(diagram)?;
    debug!(
        categories = markers.len(),
        functors = labels.len(),
        "assembling scene"
    );

    let mut plot = Plot::new();
    plot.add_trace(marker_trace(markers));
    plot.add_trace(segment_trace(segments));
    plot.add_trace(label_trace(labels));
    plot.set_layout(scene_layout());
    Ok(plot)
}

/// Renders `diagram` into a standalone interactive HTML document at `path`.
///
/// The file is overwritten unconditionally on success and left untouched on
/// any failure.
#[instrument(skip(diagram))]
pub fn render_to_html(diagram: &Diagram, path: &Path) -> RenderResult<()> {
    let plot = build_plot(diagram)?;
    let html = plot.to_html();
    fs::write(path, html).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote interactive scene to {}", path.display());
    Ok(())
}

/// Serializes the assembled figure to JSON.
///
/// Unlike the HTML document, which wraps the figure in a generated element
/// id, this serialization is fully deterministic for a given diagram.
pub fn scene_json(diagram: &Diagram) -> RenderResult<String> {
    Ok(build_plot(diagram)?.to_json())
}

fn marker_trace(layer: MarkerLayer) -> Box<Scatter3D<f64, f64, f64>> {
    Scatter3D::new(layer.xs, layer.ys, layer.zs)
        .mode(Mode::MarkersText)
        .text_array(layer.names.clone())
        .text_position(Position::TopCenter)
        .marker(
            Marker::new()
                .size(MARKER_SIZE)
                .opacity(MARKER_OPACITY)
                .color_array(layer.colors),
        )
        .hover_info(HoverInfo::Text)
        .hover_text_array(layer.names)
}

fn segment_trace(layer: SegmentLayer) -> Box<Scatter3D<Option<f64>, Option<f64>, Option<f64>>> {
    Scatter3D::new(layer.xs, layer.ys, layer.zs)
        .mode(Mode::Lines)
        .line(Line::new().width(SEGMENT_WIDTH).color(SEGMENT_COLOR))
        .hover_info(HoverInfo::None)
}

fn label_trace(layer: LabelLayer) -> Box<Scatter3D<f64, f64, f64>> {
    Scatter3D::new(layer.xs, layer.ys, layer.zs)
        .mode(Mode::Text)
        .text_array(layer.texts.clone())
        .text_font(
            Font::new()
                .size(LABEL_FONT_SIZE)
                .color(LABEL_FONT_COLOR),
        )
        .hover_info(HoverInfo::Text)
        .hover_text_array(layer.texts)
}

fn scene_layout() -> Layout {
    // One switch hides tick labels, titles, grid, and background panes.
    let hidden_axis = || Axis::new().visible(false);
    Layout::new()
        .title(Title::with_text(TITLE))
        .show_legend(false)
        .scene(
            LayoutScene::new()
                .x_axis(hidden_axis())
                .y_axis(hidden_axis())
                .z_axis(hidden_axis()),
        )
        .margin(Margin::new().left(0).right(0).bottom(0).top(40))
}
