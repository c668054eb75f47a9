//! catmap renders a fixed atlas of mathematical categories and the functors
//! between them into a single self-contained interactive 3D HTML document.
//!
//! The data is authored as literal constants (`atlas`), checked for dangling
//! functor endpoints (`domain`), transformed into three scene layers, and
//! serialized through the charting layer (`render`).

pub mod atlas;
pub mod domain;
pub mod output;
pub mod render;
pub mod util;

use std::path::Path;

use domain::RenderResult;

/// Renders the built-in atlas to `path`.
///
/// Convenience wrapper around [`render::render_to_html`] with
/// [`atlas::default_atlas`].
///
/// # Errors
///
/// Returns an error if the output file cannot be written.
pub fn render_default_atlas(path: &Path) -> RenderResult<()> {
    render::render_to_html(&atlas::default_atlas(), path)
}
