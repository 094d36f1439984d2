/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Main traits for image decoders, encoders and operations
use log::trace;
use ppmtool_core::errors::ImageErrors;

use crate::image::Image;
use crate::metadata::ImageMetadata;

/// Encapsulates an image decoder.
///
/// All supported image decoders must implement this class
pub trait DecoderTrait {
    /// Decode a buffer already in memory
    ///
    /// The buffer should be set during initialization of the decoder
    ///
    /// # Returns
    ///  - `Ok(image)` - The decoded image
    ///  - `Err(error)` - An error that occurred during decoding.
    fn decode(&mut self) -> Result<Image, ImageErrors>;

    /// Get width and height of the image
    ///
    /// # Returns
    /// - Some(width,height)
    /// - None -> If the image hasn't been decoded and we can't extract
    ///  the width and height.
    fn dimensions(&self) -> Option<(usize, usize)>;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;

    /// Decode image headers returning the image metadata
    fn read_headers(&mut self) -> Result<Option<ImageMetadata>, ImageErrors>;
}

/// This encapsulates an image operation.
///
/// All operations that can be stored in a workflow
/// need to encapsulate this struct.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute a simple operation on the image
    /// manipulating the image struct
    ///
    /// An operation should compute its new pixels from the current ones and
    /// replace them in one step, so that a failed operation leaves the image unchanged.
    ///
    /// # Arguments
    /// - image: A mutable reference to an image which
    /// this operation will manipulate
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Execute the operation on an image
    ///
    /// This is the method callers should use, implementers
    /// provide [`execute_impl`](Self::execute_impl)
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.get_dimensions();
        trace!("Running {} on a {}x{} image", self.name(), width, height);

        self.execute_impl(image)
    }
    /// Execute the operation on a copy of `image`, leaving the original intact
    fn clone_and_execute(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut copy = image.clone();
        self.execute(&mut copy)?;
        Ok(copy)
    }
}

/// This encapsulates an image encoder.
///
/// All image encoders should implement this trait
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// Encode and write to a file
    ///
    /// The file is stored internally by the encoder, e.g
    /// in the struct and this only writes the image
    fn encode(&mut self, image: &Image) -> Result<(), ImageErrors>;
}
