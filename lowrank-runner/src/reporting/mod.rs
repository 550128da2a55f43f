//! Report rendering: one formatted table, three backends.

pub mod html;
pub mod png;
pub mod table;
pub mod text;

pub use html::{render_html, write_html};
pub use png::{render_png, write_png};
pub use table::{report_filename, ReportTable};
pub use text::render_text;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
