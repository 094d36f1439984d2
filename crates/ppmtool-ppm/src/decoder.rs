/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{info, trace};
use ppmtool_core::bytestream::ByteReaderTrait;
use ppmtool_core::color::Color;
use ppmtool_core::errors::ImageErrors;
use ppmtool_core::options::DecoderOptions;

use crate::reader::TokenReader;
use crate::{MAGIC_NUMBER, MAX_MAX_COLOR_VALUE};

/// An instance of a PPM decoder
///
/// The decoder can currently decode the plain text P3 format
pub struct PPMDecoder<T: ByteReaderTrait> {
    width:           usize,
    height:          usize,
    max_color:       u32,
    decoded_headers: bool,
    reader:          TokenReader<T>,
    options:         DecoderOptions
}

impl<T: ByteReaderTrait> PPMDecoder<T> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use ppmtool_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(&b"NOT VALID PPM"[..]);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: T) -> PPMDecoder<T> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    /// # Example
    /// ```
    /// use ppmtool_core::options::DecoderOptions;
    /// use ppmtool_ppm::PPMDecoder;
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(options, &b"P3 2 1 255 0 0 0 0 0 0"[..]);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: T) -> PPMDecoder<T> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_color: 0,
            decoded_headers: false,
            reader: TokenReader::new(data),
            options
        }
    }
    /// Read PPM headers and store them in internal state
    ///
    /// Calling this more than once is a no-op
    pub fn read_headers(&mut self) -> Result<(), ImageErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        match self.reader.next_word()? {
            None => return Err(ImageErrors::format("No magic number specification")),
            Some(magic) if magic != MAGIC_NUMBER => {
                let msg = format!(
                    "Unsupported magic number: {magic}. This implementation only supports {MAGIC_NUMBER}"
                );
                return Err(ImageErrors::IllegalFormat(msg));
            }
            Some(_) => {}
        }

        let width = self.read_dimension("width")?;

        if width > self.options.get_max_width() {
            let msg = format!(
                "Width {} greater than max width {}",
                width,
                self.options.get_max_width()
            );
            return Err(ImageErrors::IllegalFormat(msg));
        }
        let height = self.read_dimension("height")?;

        if height > self.options.get_max_height() {
            let msg = format!(
                "Height {} greater than max height {}",
                height,
                self.options.get_max_height()
            );
            return Err(ImageErrors::IllegalFormat(msg));
        }
        info!("Width: {}, height: {}", width, height);

        let max_color = self
            .reader
            .next_integer()?
            .ok_or_else(|| ImageErrors::format("No max color specification"))?;

        let max_color = u32::try_from(max_color)
            .ok()
            .filter(|x| *x <= MAX_MAX_COLOR_VALUE)
            .ok_or_else(|| {
                ImageErrors::IllegalFormat(format!(
                    "Max color specification out of range. Expecting: >= 0 && <= {MAX_MAX_COLOR_VALUE}. Given: {max_color}"
                ))
            })?;

        info!("Max color: {}", max_color);

        self.width = width;
        self.height = height;
        self.max_color = max_color;
        self.decoded_headers = true;

        Ok(())
    }

    fn read_dimension(&mut self, name: &str) -> Result<usize, ImageErrors> {
        let value = self
            .reader
            .next_integer()?
            .ok_or_else(|| ImageErrors::IllegalFormat(format!("No {name} specification")))?;

        usize::try_from(value)
            .map_err(|_| ImageErrors::IllegalFormat(format!("Expecting {name} >= 0. Was: {value}")))
    }

    fn read_channel(&mut self) -> Result<i32, ImageErrors> {
        self.reader
            .next_integer()?
            .ok_or_else(|| ImageErrors::format("Not enough RGB values"))
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }
    /// Return the max color value declared in the header
    /// or none if headers aren't decoded
    pub const fn get_max_color(&self) -> Option<u32> {
        if self.decoded_headers {
            Some(self.max_color)
        } else {
            None
        }
    }
    /// Decode a ppm encoded file and return its pixels
    ///
    /// Pixels are returned in row major order, i.e pixel `(x,y)`
    /// is at index `y * width + x`
    ///
    /// # Errors
    /// Any malformed header or pixel is an error, no pixels are returned
    /// in that case
    pub fn decode(&mut self) -> Result<Vec<Color>, ImageErrors> {
        self.read_headers()?;

        let size = self.width.saturating_mul(self.height);
        let max_color = f64::from(self.max_color);
        // don't trust the header for the full allocation, the stream may be truncated
        let mut pixels = Vec::with_capacity(size.min(1 << 20));

        for y in 0..self.height {
            for x in 0..self.width {
                let r = self.read_channel()?;
                let g = self.read_channel()?;
                let b = self.read_channel()?;

                trace!("Pixel ({x},{y}) = {r} {g} {b}");

                pixels.push(Color::new(
                    f64::from(r) / max_color,
                    f64::from(g) / max_color,
                    f64::from(b) / max_color
                )?);
            }
        }
        Ok(pixels)
    }
}
