use thiserror::Error;

/// Errors raised at the edges of the board: startup, configuration and
/// background assets. Operations on the drawing itself never fail.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The creation context carried no graphics context to draw with
    #[error("no rendering context available, the canvas cannot be drawn")]
    MissingRenderContext,

    #[error("invalid color {value:?}, expected #rrggbb or #rrggbbaa")]
    InvalidColor { value: String },

    #[error("background list is empty")]
    NoBackgrounds,

    #[error("unknown background {0:?}")]
    UnknownBackground(String),

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: f32, height: f32 },

    #[error("brush diameter {0} is outside the allowed range")]
    InvalidBrushDiameter(f32),

    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("failed to load background {name:?}: {source}")]
    Asset {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for board operations that can fail
pub type BoardResult<T> = Result<T, BoardError>;
