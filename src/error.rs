use thiserror::Error;

/// Errors raised while setting up the sketchpad or exporting a drawing.
///
/// Undo/redo with nothing to do and empty strokes are not errors; those
/// operations are plain no-ops.
#[derive(Debug, Error)]
pub enum SketchError {
    /// The rendering backend gave us no raster context. Fatal during setup.
    #[error("2D raster context not available")]
    ContextUnavailable,

    /// The off-screen export surface would have no pixels
    #[error("export surface is empty ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("failed to encode exported image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write exported image: {0}")]
    Io(#[from] std::io::Error),

    /// The browser refused to hand the exported image to the user
    #[error("download failed: {0}")]
    Download(String),
}

pub type SketchResult<T> = Result<T, SketchError>;
