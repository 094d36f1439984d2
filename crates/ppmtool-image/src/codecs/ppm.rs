/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Represents a PPM image decoder and encoder
use std::io::Write;

use ppmtool_core::bytestream::ByteReaderTrait;
use ppmtool_core::errors::ImageErrors;
use ppmtool_core::options::EncoderOptions;
pub use ppmtool_ppm::{PPMDecoder, PPMEncoder as PPMEnc};

use crate::image::Image;
use crate::metadata::ImageMetadata;
use crate::traits::{DecoderTrait, EncoderTrait};

/// A PPM encoder writing to one or more sinks
///
/// All sinks receive the image in a single encoding pass
pub struct PPMEncoder<W: Write> {
    options: EncoderOptions,
    sinks:   Vec<W>
}

impl<W: Write> PPMEncoder<W> {
    /// Create an encoder with no sinks
    pub fn new(options: EncoderOptions) -> PPMEncoder<W> {
        PPMEncoder {
            options,
            sinks: vec![]
        }
    }
    /// Create an encoder writing to `sinks`
    pub fn new_with_sinks(options: EncoderOptions, sinks: Vec<W>) -> PPMEncoder<W> {
        PPMEncoder { options, sinks }
    }
    /// Add another sink the image will be written to
    pub fn add_sink(&mut self, sink: W) {
        self.sinks.push(sink);
    }
    /// Destroy the encoder returning its sinks
    pub fn into_sinks(self) -> Vec<W> {
        self.sinks
    }
}

impl<W: Write> EncoderTrait for PPMEncoder<W> {
    fn name(&self) -> &'static str {
        "PPM Encoder"
    }

    fn encode(&mut self, image: &Image) -> Result<(), ImageErrors> {
        let mut sinks: Vec<Option<&mut dyn Write>> = self
            .sinks
            .iter_mut()
            .map(|sink| Some(sink as &mut dyn Write))
            .collect();

        image.write_to_sinks(&self.options, &mut sinks)
    }
}

impl<T> DecoderTrait for PPMDecoder<T>
where
    T: ByteReaderTrait
{
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let pixels = self.decode()?;
        // decode succeeded so headers are present
        let (width, height) = self.get_dimensions().unwrap_or_default();

        let mut image = Image::from_pixels(pixels, width, height)?;

        if let Some(max_color) = self.get_max_color() {
            image.metadata_mut().set_max_color(max_color);
        }
        Ok(image)
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        self.get_dimensions()
    }

    fn name(&self) -> &'static str {
        "PPM Decoder"
    }

    fn read_headers(&mut self) -> Result<Option<ImageMetadata>, ImageErrors> {
        PPMDecoder::read_headers(self)?;

        let (width, height) = self.get_dimensions().unwrap_or_default();

        let metadata = ImageMetadata {
            width,
            height,
            max_color: self.get_max_color()
        };

        Ok(Some(metadata))
    }
}
