/// Error type shared by the core pipeline
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("allocation error: could not reserve {bytes} bytes for export")]
    Allocation { bytes: usize },

    #[error("invalid edge {index}: ({a}, {b}) is outside vertex range 0..{vertex_count}")]
    InvalidEdge {
        index: usize,
        a: usize,
        b: usize,
        vertex_count: usize,
    },

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("invalid rotation order: {0:?}, expected a permutation of xyz")]
    InvalidRotationOrder(String),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

impl RenderError {
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor(input.into())
    }
}
