//! Chart assembly and rendering.
//!
//! [`ChartComposer`] turns parsed metrics into one [`RenderRequest`] per
//! metric; a [`ChartRenderer`] turns each request into an image file.  The
//! composer never touches the filesystem itself.

pub mod compose;
pub mod png;

pub use compose::{title_case, ChartComposer, RenderRequest};
pub use png::PngRenderer;

use plot_core::Result;

/// Writes the image described by a [`RenderRequest`] to `request.path`.
pub trait ChartRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<()>;
}
