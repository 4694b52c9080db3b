/// Errors surfaced while preparing the heatmap.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GlobeError {
    /// The image could not be fetched or decoded
    #[error("image load failed: {0}")]
    ImageLoad(String),
    /// Pixel buffer does not match the declared dimensions
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    ImageSize { expected: usize, actual: usize },
    /// Image with a zero dimension
    #[error("image has no pixels")]
    EmptyImage,
}
