//! Gaussian blur core for interleaved raster images.
//!
//! ## Image Format
//!
//! Images are row-major, channel-interleaved byte buffers in blue, green,
//! red, [alpha] order with 3 or 4 bytes per pixel. The crate borrows pixel
//! memory through [`ImageView`] / [`ImageViewMut`] and never allocates or
//! frees it; decoding and buffer management belong to the caller.
//!
//! ## Architecture
//!
//! Two strictly layered pieces:
//! - [`Kernel`] derives a normalized Gaussian weight table from the image
//!   extent and a blur factor ([`filters::core`]).
//! - [`gaussian_blur`] convolves that kernel over the interior of a source
//!   view into a destination view of the same shape ([`filters::blur`]).
//!   Border pixels are copied through untouched.
//!
//! Destination rows are independent, so the convolution fills them in
//! parallel with rayon.
//!
//! ```
//! use rasterblur::{gaussian_blur, ImageView, ImageViewMut, Kernel};
//!
//! let (width, height) = (120, 80);
//! let src = vec![128u8; width * height * 3];
//! let mut dst = vec![0u8; width * height * 3];
//!
//! let kernel = Kernel::build(width, 0.5);
//! let src_view = ImageView::from_slice(width, height, 3, &src)?;
//! let mut dst_view = ImageViewMut::from_slice(width, height, 3, &mut dst)?;
//! gaussian_blur(&src_view, &mut dst_view, &kernel)?;
//! # Ok::<(), rasterblur::BlurError>(())
//! ```

mod error;
mod image;
pub mod filters;

pub use error::BlurError;
pub use filters::blur::gaussian_blur;
pub use filters::core::Kernel;
pub use image::{ImageView, ImageViewMut};
