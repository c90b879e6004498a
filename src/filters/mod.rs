//! Filter modules.
//!
//! All filters follow these principles:
//! - **Borrowed buffers** - sources are read-only, destinations write-only,
//!   both caller-owned
//! - **Alpha preservation** - the alpha channel (if present) is copied, never
//!   blended
//! - **Thread-safe** - per-pixel work is independent, parallelized over rows
//!   with rayon

pub mod blur;
pub mod core;
