//! Gaussian blur convolution engine.
//!
//! Convolves a [`Kernel`] over every interior pixel of a source view and
//! writes the result into a destination view of identical shape. Border
//! pixels whose convolution window would leave the image are copied through
//! untouched, so the interior path never samples out of bounds.
//!
//! Every destination pixel depends only on read-only source pixels and is
//! written exactly once, so rows are filled in parallel with rayon.

use rayon::prelude::*;
use tracing::debug;

use super::core::Kernel;
use crate::image::{ImageView, ImageViewMut};
use crate::BlurError;

/// Blur `src` into `dst` with the given kernel.
///
/// Both views must have identical width, height, and bytes per pixel. On
/// return the destination buffer is fully overwritten: blue, green, and red
/// channels hold the convolved values, and for 4-byte pixels the source
/// alpha byte is copied through unblended. The source is never mutated.
///
/// # Arguments
/// * `src` - Source image view
/// * `dst` - Destination image view of the same shape
/// * `kernel` - Normalized convolution kernel from [`Kernel::build`]
///
/// # Errors
/// [`BlurError::ShapeMismatch`] when the views disagree on any dimension.
pub fn gaussian_blur(
    src: &ImageView<'_>,
    dst: &mut ImageViewMut<'_>,
    kernel: &Kernel,
) -> Result<(), BlurError> {
    if src.dim() != dst.dim() {
        return Err(BlurError::ShapeMismatch {
            src: src.dim(),
            dst: dst.dim(),
        });
    }

    let (height, width, bytes_per_pixel) = src.dim();
    if height == 0 || width == 0 {
        return Ok(());
    }

    debug!(width, height, kernel_size = kernel.size(), "blurring image");

    dst.data_mut()
        .par_chunks_mut(width * bytes_per_pixel)
        .enumerate()
        .for_each(|(row, dst_row)| blur_row(src, kernel, row, dst_row));

    debug!("blur complete");
    Ok(())
}

/// Convolve one destination row.
fn blur_row(src: &ImageView<'_>, kernel: &Kernel, row: usize, dst_row: &mut [u8]) {
    let (height, width, bpp) = src.dim();
    let data = src.data();
    let size = kernel.size();
    let half = kernel.half();

    for col in 0..width {
        let pixel = (row * width + col) * bpp;
        let out = col * bpp;

        // Edge pass-through: windows that would reach outside the image
        // copy the source pixel directly.
        if row < half || row + half >= height || col < half || col + half >= width {
            dst_row[out..out + bpp].copy_from_slice(&data[pixel..pixel + bpp]);
            continue;
        }

        let mut blue = 0.0f32;
        let mut green = 0.0f32;
        let mut red = 0.0f32;

        for kr in 0..size {
            for kc in 0..size {
                let neighbor = ((row + kr - half) * width + (col + kc - half)) * bpp;
                let w = kernel.weight(kr, kc);
                blue += data[neighbor] as f32 * w;
                green += data[neighbor + 1] as f32 * w;
                red += data[neighbor + 2] as f32 * w;
            }
        }

        // Round to nearest so a normalized kernel maps a constant image to
        // itself exactly.
        dst_row[out] = (blue + 0.5).clamp(0.0, 255.0) as u8;
        dst_row[out + 1] = (green + 0.5).clamp(0.0, 255.0) as u8;
        dst_row[out + 2] = (red + 0.5).clamp(0.0, 255.0) as u8;
        if bpp == 4 {
            dst_row[out + 3] = data[pixel + 3];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    fn blurred(width: usize, height: usize, bpp: usize, src: &[u8], factor: f32) -> Vec<u8> {
        let kernel = Kernel::build(width, factor);
        let src_view = ImageView::from_slice(width, height, bpp, src).unwrap();
        let mut out = vec![0u8; src.len()];
        let mut dst_view = ImageViewMut::from_slice(width, height, bpp, &mut out).unwrap();
        gaussian_blur(&src_view, &mut dst_view, &kernel).unwrap();
        out
    }

    #[test]
    fn test_uniform_image_is_unchanged() {
        let (width, height) = (100usize, 100usize);
        let mut src = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            src.extend_from_slice(&[10, 20, 30]);
        }

        let out = blurred(width, height, 3, &src, 0.5);

        // A normalized kernel leaves a constant image untouched, border
        // pass-through included.
        assert_eq!(out, src);
    }

    #[test]
    fn test_border_ring_passes_through() {
        let (width, height) = (64usize, 64usize);
        let src = patterned(width * height * 3);

        let out = blurred(width, height, 3, &src, 1.0);

        let half = Kernel::build(width, 1.0).half();
        assert_eq!(half, 1);
        for row in 0..height {
            for col in 0..width {
                if row < half || row + half >= height || col < half || col + half >= width {
                    let p = (row * width + col) * 3;
                    assert_eq!(&out[p..p + 3], &src[p..p + 3], "border pixel ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn test_interior_actually_blurs() {
        let (width, height) = (64usize, 64usize);
        let src = patterned(width * height * 3);

        let out = blurred(width, height, 3, &src, 1.0);

        assert_ne!(out, src);
    }

    #[test]
    fn test_alpha_preserved_everywhere() {
        let (width, height) = (60usize, 60usize);
        let src = patterned(width * height * 4);

        let out = blurred(width, height, 4, &src, 0.8);

        for pixel in 0..width * height {
            assert_eq!(out[pixel * 4 + 3], src[pixel * 4 + 3]);
        }
    }

    #[test]
    fn test_all_white_stays_white() {
        let (width, height) = (64usize, 64usize);
        let src = vec![255u8; width * height * 3];

        let out = blurred(width, height, 3, &src, 1.0);

        assert_eq!(out, src);
    }

    #[test]
    fn test_bright_spot_spreads() {
        let (width, height) = (200usize, 200usize);
        let mut src = vec![0u8; width * height * 3];
        let spot = (100 * width + 100) * 3;
        src[spot] = 255;
        src[spot + 1] = 255;
        src[spot + 2] = 255;

        let out = blurred(width, height, 3, &src, 0.8);

        // Energy spreads: the spot dims below full white, neighbors pick
        // some of it up.
        for c in 0..3 {
            assert!(out[spot + c] < 255);
            assert!(out[spot + c] > 0);
        }
        let right = (100 * width + 101) * 3;
        let below = (101 * width + 100) * 3;
        for c in 0..3 {
            assert!(out[right + c] > 0);
            assert!(out[below + c] > 0);
        }
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let kernel = Kernel::build(100, 0.5);
        let src = vec![0u8; 10 * 10 * 3];
        let mut dst = vec![0u8; 10 * 9 * 3];
        let src_view = ImageView::from_slice(10, 10, 3, &src).unwrap();
        let mut dst_view = ImageViewMut::from_slice(10, 9, 3, &mut dst).unwrap();

        let err = gaussian_blur(&src_view, &mut dst_view, &kernel).unwrap_err();
        assert_eq!(
            err,
            BlurError::ShapeMismatch {
                src: (10, 10, 3),
                dst: (9, 10, 3),
            }
        );
    }

    #[test]
    fn test_empty_image_is_a_no_op() {
        let kernel = Kernel::build(0, 0.5);
        let src: Vec<u8> = Vec::new();
        let mut dst: Vec<u8> = Vec::new();
        let src_view = ImageView::from_slice(0, 0, 3, &src).unwrap();
        let mut dst_view = ImageViewMut::from_slice(0, 0, 3, &mut dst).unwrap();

        gaussian_blur(&src_view, &mut dst_view, &kernel).unwrap();
    }

    #[test]
    fn test_source_left_untouched() {
        let (width, height) = (32usize, 32usize);
        let src = patterned(width * height * 3);
        let before = src.clone();

        let _ = blurred(width, height, 3, &src, 1.0);

        assert_eq!(src, before);
    }
}
