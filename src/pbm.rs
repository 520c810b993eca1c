use std::io::Write;

use crate::errors::*;

/// The accumulator starts at the most significant bit of a byte, so the leftmost
/// pixel of each group of eight ends up in the highest bit
const FIRST_BIT: u8 = 128;

/// `PbmWriter` writes a binary 'P4' format Portable BitMap image to the byte sink
/// it is given, one bit per pixel.
///
/// Pixels must be supplied in row order, left to right, via `write_pixel`, with
/// `end_row` called at the end of every row. Eight pixels are packed
/// into each byte, most significant bit first, and every row is padded out to a whole
/// number of bytes, so rows always start on a byte boundary as the format requires.
///
/// The sink is supplied by the caller, who is also responsible for closing it. Write
/// errors from the sink are returned unchanged.
pub struct PbmWriter<W: Write> {
    sink: W,
    bit: u8,
    byte_acc: u8,
}

impl<W: Write> PbmWriter<W> {
    /// Create a `PbmWriter` that will write an image to 'sink'
    pub fn new(sink: W) -> Self {
        PbmWriter {
            sink,
            bit: FIRST_BIT,
            byte_acc: 0,
        }
    }

    /// Write the 'P4' magic number and the image dimensions in pixels.
    /// This must be called once, before the first pixel is written.
    pub fn write_header(&mut self, width: usize, height: usize) -> Result<()> {
        self.sink
            .write_all(format!("P4\n{} {}\n", width, height).as_bytes())
            .chain_err(|| "Could not write the PBM header to the sink")
    }

    /// Add the next pixel of the current row, 'true' for black.
    /// Once eight pixels have accumulated the completed byte is written to the sink.
    pub fn write_pixel(&mut self, black: bool) -> Result<()> {
        if black {
            self.byte_acc |= self.bit;
        }

        self.bit >>= 1;
        if self.bit == 0 {
            self.flush_byte()?;
        }

        Ok(())
    }

    /// Finish the current row. If pixels have accumulated since the last completed byte,
    /// the partial byte is written out, with its trailing bits left zero (white), so that
    /// the next row starts on a fresh byte boundary.
    pub fn end_row(&mut self) -> Result<()> {
        if self.bit != FIRST_BIT {
            self.flush_byte()?;
        }

        Ok(())
    }

    fn flush_byte(&mut self) -> Result<()> {
        self.sink
            .write_all(&[self.byte_acc])
            .chain_err(|| "Could not write packed pixels to the sink")?;

        self.bit = FIRST_BIT;
        self.byte_acc = 0;

        Ok(())
    }
}
