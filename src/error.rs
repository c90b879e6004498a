use core::fmt;

/// Errors raised when an image view or a blur call violates the buffer
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlurError {
    /// Buffer length does not match `width * height * bytes_per_pixel`.
    BufferSize { expected: usize, actual: usize },
    /// Pixels must be 3 (BGR) or 4 (BGRA) bytes wide.
    BytesPerPixel { actual: usize },
    /// Source and destination views differ in width, height, or pixel width.
    ShapeMismatch {
        src: (usize, usize, usize),
        dst: (usize, usize, usize),
    },
}

impl fmt::Display for BlurError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferSize { expected, actual } => {
                write!(f, "buffer size mismatch: expected {expected} bytes, got {actual}")
            }
            Self::BytesPerPixel { actual } => {
                write!(f, "unsupported pixel width: {actual} bytes (expected 3 or 4)")
            }
            Self::ShapeMismatch { src, dst } => {
                write!(
                    f,
                    "source shape {}x{}x{} does not match destination {}x{}x{}",
                    src.0, src.1, src.2, dst.0, dst.1, dst.2
                )
            }
        }
    }
}

impl std::error::Error for BlurError {}
