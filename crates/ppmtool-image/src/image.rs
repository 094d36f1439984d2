/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is a `width` x `height` grid of [`Color`] values
//! stored in row major order, with metadata describing where it came from.
use log::trace;
use ppmtool_core::color::Color;
use ppmtool_core::errors::ImageErrors;

use crate::metadata::ImageMetadata;

/// Represents a single image
///
/// The image owns its pixels, cloning an image gives a fully
/// independent copy which can be modified without affecting the source.
#[derive(Clone, Debug)]
pub struct Image {
    pixels:   Vec<Color>,
    metadata: ImageMetadata
}

impl Image {
    /// Create a new image of the given dimensions where every pixel is black
    ///
    /// # Panics
    /// If `width * height` overflows a [`usize`]
    ///
    /// # Example
    /// ```
    /// use ppmtool_core::color::Color;
    /// use ppmtool_image::image::Image;
    /// let image = Image::new(3, 2);
    ///
    /// assert_eq!(image.get_dimensions(), (3, 2));
    /// assert_eq!(image.get_color(2, 1).unwrap(), Color::BLACK);
    /// ```
    pub fn new(width: usize, height: usize) -> Image {
        Image::fill(Color::BLACK, width, height)
    }
    /// Create a new image of the given dimensions where every pixel is `color`
    ///
    /// # Panics
    /// If `width * height` overflows a [`usize`], use [`Image::from_pixels`]
    /// for a fallible constructor
    pub fn fill(color: Color, width: usize, height: usize) -> Image {
        let size = checked_size(width, height);

        let mut metadata = ImageMetadata::default();
        metadata.set_dimensions(width, height);

        Image {
            pixels: vec![color; size],
            metadata
        }
    }
    /// Create an image by calling `func(x, y)` for every pixel
    ///
    /// # Panics
    /// If `width * height` overflows a [`usize`]
    ///
    /// # Example
    /// ```
    /// use ppmtool_core::color::Color;
    /// use ppmtool_image::image::Image;
    /// // a single white pixel in the top left
    /// let image = Image::from_fn(2, 2, |x, y| {
    ///     if x == 0 && y == 0 { Color::WHITE } else { Color::BLACK }
    /// });
    /// assert_eq!(image.get_color(0, 0).unwrap(), Color::WHITE);
    /// assert_eq!(image.get_color(1, 1).unwrap(), Color::BLACK);
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Image
    where
        F: FnMut(usize, usize) -> Color
    {
        let mut image = Image::new(width, height);

        if width > 0 {
            for (y, row) in image.pixels.chunks_exact_mut(width).enumerate() {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = func(x, y);
                }
            }
        }
        image
    }
    /// Create an image from row major pixels
    ///
    /// # Errors
    /// [`ImageErrors::IllegalArgument`] if `pixels.len()` is not `width * height`
    pub fn from_pixels(pixels: Vec<Color>, width: usize, height: usize) -> Result<Image, ImageErrors> {
        check_length(pixels.len(), width, height)?;

        let mut metadata = ImageMetadata::default();
        metadata.set_dimensions(width, height);

        Ok(Image { pixels, metadata })
    }
    /// Get image dimensions as a tuple of (width,height)
    pub const fn get_dimensions(&self) -> (usize, usize) {
        self.metadata.get_dimensions()
    }
    /// Get the image width
    pub const fn width(&self) -> usize {
        self.metadata.get_dimensions().0
    }
    /// Get the image height
    pub const fn height(&self) -> usize {
        self.metadata.get_dimensions().1
    }
    /// Return true if the image holds no pixels,
    /// i.e either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
    /// Return the color at `(x, y)`
    ///
    /// # Errors
    /// [`ImageErrors::IllegalArgument`] if `x` is not in `0..width`
    /// or `y` is not in `0..height`
    pub fn get_color(&self, x: isize, y: isize) -> Result<Color, ImageErrors> {
        let (width, height) = self.get_dimensions();

        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(ux), Ok(uy)) if ux < width && uy < height => Ok(self.pixels[uy * width + ux]),
            _ => Err(ImageErrors::IllegalArgument(format!(
                "Coordinates ({x},{y}) outside image of dimensions {width}x{height}"
            )))
        }
    }
    /// Return all pixels in row major order
    pub fn get_pixels(&self) -> &[Color] {
        &self.pixels
    }
    /// Replace all pixels of this image
    ///
    /// The new pixels replace the old ones wholesale, callers computing
    /// a transform should build the new pixels from [`get_pixels`](Self::get_pixels)
    /// and then swap them in here.
    ///
    /// # Errors
    /// [`ImageErrors::IllegalArgument`] if `pixels` doesn't match the image dimensions,
    /// the image is left unchanged in that case
    pub fn set_pixels(&mut self, pixels: Vec<Color>) -> Result<(), ImageErrors> {
        let (width, height) = self.get_dimensions();
        check_length(pixels.len(), width, height)?;

        trace!("Replacing {} pixels", pixels.len());
        self.pixels = pixels;
        Ok(())
    }
    /// Consume the image returning its pixels
    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }
    /// Get image metadata
    pub const fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }
    /// Get a mutable reference to the image metadata
    ///
    /// Dimensions can't be modified through this
    pub fn metadata_mut(&mut self) -> &mut ImageMetadata {
        &mut self.metadata
    }
}

/// Images compare equal when they have the same dimensions and pixels,
/// metadata is not considered
impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.get_dimensions() == other.get_dimensions() && self.pixels == other.pixels
    }
}

impl Eq for Image {}

fn checked_size(width: usize, height: usize) -> usize {
    width
        .checked_mul(height)
        .unwrap_or_else(|| panic!("Image dimensions {width}x{height} overflow usize"))
}

fn check_length(length: usize, width: usize, height: usize) -> Result<(), ImageErrors> {
    if width.checked_mul(height) != Some(length) {
        return Err(ImageErrors::IllegalArgument(format!(
            "Expected {width}x{height} pixels but found {length}"
        )));
    }
    Ok(())
}
