#![deny(missing_docs)]
#![warn(clippy::unwrap_used)]
//! `mandlebrot` is a library for rendering black and white images of the Mandlebrot set
//! in the binary 'P4' Portable BitMap (PBM) format.
//!
//! The image covers the area of the complex plane from -1.5 to 0.5 on the real axis and
//! from -1 to 1 on the imaginary axis. Points in the set are drawn black, all others white,
//! one bit per pixel, packed eight pixels to a byte.
//!
//! The `mandlebrot` binary built from this crate renders an image of a size given on the
//! command line to STDOUT or to a file.

/// We'll put our errors in an `errors` module, and other modules in this crate will
/// `use crate::errors::*;` to get access to everything `error_chain` creates.
pub mod errors;

/// `escapes` determines whether a point of the complex plane is in the Mandlebrot set
pub mod escapes;

/// `pbm` writes bit-packed binary PBM bitmaps to a byte sink
pub mod pbm;

/// `pixel_to_point` maps pixel coordinates to points on the complex plane
pub mod pixel_to_point;

/// `render` drives the evaluation of every pixel, in row order, into a PBM bitmap
pub mod render;
