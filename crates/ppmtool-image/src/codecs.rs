/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! The library only understands the plain text PPM (`P3`) format,
//! see [`ppm`] for the decoder and encoder glue.
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use ppmtool_core::bytestream::ByteReaderTrait;
use ppmtool_core::errors::ImageErrors;
use ppmtool_core::options::{DecoderOptions, EncoderOptions};

use crate::codecs::ppm::{PPMDecoder, PPMEnc};
use crate::image::Image;
use crate::traits::DecoderTrait;

pub mod ppm;

impl Image {
    /// Open an encoded file, decode it and close it
    ///
    /// The file is closed on every exit path, including failures
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ppmtool_core::options::DecoderOptions;
    /// use ppmtool_image::image::Image;
    /// let options = DecoderOptions::default().set_max_width(100);
    /// let image = Image::open("/a/file.ppm", options).unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(file: P, options: DecoderOptions) -> Result<Image, ImageErrors> {
        debug!("Opening {:?}", file.as_ref());

        let reader = BufReader::new(File::open(file)?);
        Self::read(reader, options)
    }
    /// Decode an image from a byte source with the configured options
    ///
    /// # Arguments
    ///  - `src`: The encoded source, anything implementing `BufRead` works
    ///  - `options`: The configured decoder options
    ///
    /// # Example
    /// ```
    /// use ppmtool_core::options::DecoderOptions;
    /// use ppmtool_image::image::Image;
    ///
    /// let image = Image::read(&b"P3 2 1 255 0 0 0 255 255 255"[..], DecoderOptions::default()).unwrap();
    /// assert_eq!(image.get_dimensions(), (2, 1));
    /// ```
    pub fn read<T>(src: T, options: DecoderOptions) -> Result<Image, ImageErrors>
    where
        T: ByteReaderTrait
    {
        Self::from_decoder(PPMDecoder::new_with_options(options, src))
    }
    /// Decode an image using an already configured decoder
    pub fn from_decoder(mut decoder: impl DecoderTrait) -> Result<Image, ImageErrors> {
        decoder.decode()
    }
    /// Encode this image to every sink present in `sinks`
    ///
    /// Every sink receives the same bytes, `None` sinks are skipped
    /// and an empty `sinks` is a no-op.
    ///
    /// # Errors
    /// - [`ImageErrors::IllegalArgument`] if the max color in `options`
    ///   is above 65536, nothing is written in that case
    /// - The first error returned by a sink
    pub fn write_to_sinks(
        &self, options: &EncoderOptions, sinks: &mut [Option<&mut dyn Write>]
    ) -> Result<(), ImageErrors> {
        let (width, height) = self.get_dimensions();

        PPMEnc::new(*options).encode(width, height, self.get_pixels(), sinks)
    }
    /// Encode this image into a new vector
    pub fn write_to_vec(&self, options: &EncoderOptions) -> Result<Vec<u8>, ImageErrors> {
        let mut out = vec![];
        let mut sinks: [Option<&mut dyn Write>; 1] = [Some(&mut out)];

        self.write_to_sinks(options, &mut sinks)?;
        Ok(out)
    }
    /// Save the image to a file, creating or truncating it
    ///
    /// # Example
    /// ```no_run
    /// use ppmtool_core::options::EncoderOptions;
    /// use ppmtool_image::image::Image;
    /// // create a simple 200x200 image consisting of pure black
    /// let image = Image::new(200, 200);
    /// image.save("black.ppm", &EncoderOptions::default()).unwrap();
    /// ```
    pub fn save<P: AsRef<Path>>(&self, file: P, options: &EncoderOptions) -> Result<(), ImageErrors> {
        debug!("Saving to {:?}", file.as_ref());
        // validate before creating the file so a bad option doesn't truncate it
        if options.get_max_color() > ppmtool_ppm::MAX_MAX_COLOR_VALUE {
            return self.write_to_sinks(options, &mut []);
        }
        let mut writer = BufWriter::new(File::create(file)?);
        let mut sinks: [Option<&mut dyn Write>; 1] = [Some(&mut writer)];

        self.write_to_sinks(options, &mut sinks)
    }
}
