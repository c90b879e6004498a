//! Gaussian kernel construction.
//!
//! A blur configuration is captured by a [`Kernel`]: a square, normalized
//! table of Gaussian weights. The kernel is built once per configuration
//! from the image extent and a blur-strength factor, then handed to the
//! convolution engine in [`super::blur`].

use ndarray::Array2;

/// Smallest kernel edge length.
const KERNEL_SIZE_MIN: usize = 3;
/// Largest kernel edge length.
const KERNEL_SIZE_MAX: usize = 9;
/// Image pixels per kernel-size step: a 450-pixel image gets a 9x9 kernel.
const IMAGE_SIZE_TO_KERNEL_RATIO: usize = 50;
/// Sigma at blur factor 1.0.
const SIGMA_MAX: f32 = 10.0;

/// Normalized 2D Gaussian convolution kernel.
///
/// The weight table is a single contiguous row-major block owned by the
/// kernel; it is immutable after construction and freed with it.
#[derive(Debug, Clone)]
pub struct Kernel {
    size: usize,
    half: usize,
    weights: Array2<f32>,
}

impl Kernel {
    /// Build a kernel for an image of the given extent.
    ///
    /// The edge length scales with the image (`image_size / 50`) and is
    /// clamped to `[3, 9]`, so even a degenerate `image_size` of zero yields
    /// a valid minimum-size kernel. The spread is `sigma = blur_factor * 10`
    /// with a floor of 1.0, keeping a usable blur for factors near zero.
    ///
    /// # Arguments
    /// * `image_size` - Image extent in pixels
    /// * `blur_factor` - Blur strength, intended range 0.0-1.0
    ///
    /// # Returns
    /// Kernel whose weights sum to 1.0
    pub fn build(image_size: usize, blur_factor: f32) -> Self {
        let size = (image_size / IMAGE_SIZE_TO_KERNEL_RATIO)
            .clamp(KERNEL_SIZE_MIN, KERNEL_SIZE_MAX);
        let half = size / 2;

        let sigma = (blur_factor * SIGMA_MAX).max(1.0);
        let s = 2.0 * sigma * sigma;

        // Discrete approximation of the isotropic Gaussian density,
        // centered on cell (half, half).
        let mut weights = Array2::<f32>::zeros((size, size));
        let mut sum = 0.0f32;
        for row in 0..size {
            for col in 0..size {
                let x = (row as isize - half as isize) as f32;
                let y = (col as isize - half as isize) as f32;
                let w = (-(x * x + y * y) / s).exp() / (std::f32::consts::PI * s);
                weights[[row, col]] = w;
                sum += w;
            }
        }

        weights.mapv_inplace(|w| w / sum);

        Self {
            size,
            half,
            weights,
        }
    }

    /// Edge length of the square weight table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half the edge length, rounded down; the convolution window reaches
    /// this many pixels from the center.
    pub fn half(&self) -> usize {
        self.half
    }

    /// Weight of cell `(row, col)` in the table.
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.weights[[row, col]]
    }

    /// Full weight table.
    pub fn weights(&self) -> &Array2<f32> {
        &self.weights
    }
}
