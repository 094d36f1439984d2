/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! This module provides the ability to store details about an image
//! that are not its pixels, e.g the max color of the file it was read from

/// Image metadata
///
/// The decoder usually sets this up, images created in memory
/// only carry their dimensions
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ImageMetadata {
    // REMEMBER: If you add a field here add it's serialization
    // to serde.rs
    pub(crate) width:     usize,
    pub(crate) height:    usize,
    pub(crate) max_color: Option<u32>
}

impl ImageMetadata {
    /// Get image dimensions as a tuple of width and height
    ///
    /// # Example
    ///
    /// ```rust
    /// use ppmtool_image::metadata::ImageMetadata;
    /// let meta = ImageMetadata::default();
    /// // default dimensions are usually zero
    /// assert_eq!(meta.get_dimensions(),(0,0));
    /// ```
    pub const fn get_dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub(crate) fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }
    /// The max color declared by the file this image was decoded from
    ///
    /// `None` for images not created by a decoder
    pub const fn get_max_color(&self) -> Option<u32> {
        self.max_color
    }
    /// Set the max color of the source file
    pub fn set_max_color(&mut self, max_color: u32) {
        self.max_color = Some(max_color);
    }
}
