use std::io::Write;

use log::debug;
use num::Complex;

use crate::errors::*;
use crate::escapes::escapes;
use crate::pbm::PbmWriter;
use crate::pixel_to_point::pixel_to_point;

/// The corner of the rendered area of the complex plane that pixel (0, 0) maps to.
/// The imaginary axis grows down the image, matching the row order.
pub const UPPER_LEFT: Complex<f64> = Complex { re: -1.5, im: -1.0 };

/// The corner of the rendered area diagonally opposite `UPPER_LEFT`
pub const LOWER_RIGHT: Complex<f64> = Complex { re: 0.5, im: 1.0 };

/// Each pixel's point is given this many iterations to escape before it is taken
/// to be a member of the set
pub const ESCAPE_LIMIT: u64 = 50;

/// Render a square image of the Mandlebrot set, 'size' pixels wide and high, into 'sink'
/// as a binary PBM bitmap. Pixels whose points are in the set are black.
///
/// Pixels are evaluated strictly in row order, a row at a time, as the bit packing of
/// each byte of output depends on the pixels before it in the row.
///
/// A 'size' of zero is rejected before anything is written, so a failed call never
/// leaves a partial header in the sink.
pub fn render<W: Write>(sink: W, size: usize) -> Result<()> {
    if size == 0 {
        bail!("Image size must be a positive number of pixels");
    }

    debug!("Rendering a {} x {} pixel image", size, size);

    let bounds = (size, size);
    let mut bitmap = PbmWriter::new(sink);
    bitmap.write_header(size, size)?;

    for row in 0..size {
        for column in 0..size {
            let point = pixel_to_point(bounds, (column, row), UPPER_LEFT, LOWER_RIGHT);
            bitmap.write_pixel(!escapes(point, ESCAPE_LIMIT))?;
        }
        bitmap.end_row()?;
    }

    Ok(())
}
