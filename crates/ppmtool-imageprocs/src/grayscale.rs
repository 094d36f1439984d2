/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an image to greyscale
//!
//! Every pixel is replaced by its luma, written to all three channels
use log::debug;
use ppmtool_core::color::Color;
use ppmtool_core::errors::ImageErrors;
use ppmtool_image::image::Image;
use ppmtool_image::traits::OperationsTrait;

/// ITU-R BT.709 luma weights for red, green and blue
pub const BT_709_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Convert an image to greyscale
///
/// # Example
/// ```
/// use ppmtool_core::color::Color;
/// use ppmtool_image::image::Image;
/// use ppmtool_image::traits::OperationsTrait;
/// use ppmtool_imageprocs::grayscale::Grayscale;
///
/// let mut image = Image::fill(Color::new(1.0, 0.0, 0.0).unwrap(), 2, 2);
/// Grayscale::new().execute(&mut image).unwrap();
///
/// let pixel = image.get_color(1, 1).unwrap();
/// assert!((pixel.red() - 0.2126).abs() < 1e-4);
/// assert_eq!(pixel.red(), pixel.blue());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grayscale {
    weights: [f64; 3]
}

impl Default for Grayscale {
    fn default() -> Self {
        Grayscale {
            weights: BT_709_WEIGHTS
        }
    }
}

impl Grayscale {
    /// Create a greyscale operation using BT.709 weights
    #[must_use]
    pub fn new() -> Grayscale {
        Grayscale::default()
    }
    /// Create a greyscale operation with custom weights
    ///
    /// # Errors
    /// [`ImageErrors::IllegalArgument`] if a weight is negative or not finite
    /// or if the weights don't sum to one
    pub fn with_weights(r: f64, g: f64, b: f64) -> Result<Grayscale, ImageErrors> {
        let weights = [r, g, b];

        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ImageErrors::IllegalArgument(format!(
                "Greyscale weights must be finite and non negative, got: {r} {g} {b}"
            )));
        }
        let sum: f64 = weights.iter().sum();

        if (sum - 1.0).abs() > 1e-6 {
            return Err(ImageErrors::IllegalArgument(format!(
                "Greyscale weights must sum to 1, got: {sum}"
            )));
        }
        Ok(Grayscale { weights })
    }
    /// The red, green and blue weights in use
    #[must_use]
    pub const fn weights(&self) -> [f64; 3] {
        self.weights
    }
    /// Return the luma of `color` as a grey color
    #[must_use]
    pub fn luma(&self, color: &Color) -> Color {
        let [wr, wg, wb] = self.weights;
        // weights may sum to a hair above one
        let luma = (wr * color.red() + wg * color.green() + wb * color.blue()).clamp(0.0, 1.0);

        Color::new(luma, luma, luma).unwrap_or(Color::BLACK)
    }
}

/// Convert `in_pixels` to greyscale, writing results to `out_pixels`
pub fn grayscale(op: &Grayscale, in_pixels: &[Color], out_pixels: &mut [Color]) {
    for (out, pixel) in out_pixels.iter_mut().zip(in_pixels) {
        *out = op.luma(pixel);
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        debug!("Greyscale weights: {:?}", self.weights);

        let mut out = vec![Color::BLACK; image.get_pixels().len()];
        grayscale(self, image.get_pixels(), &mut out);

        image.set_pixels(out)
    }
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};
    use ppmtool_core::color::Color;
    use ppmtool_core::errors::ErrorKind;
    use ppmtool_image::image::Image;
    use ppmtool_image::traits::OperationsTrait;

    use crate::grayscale::Grayscale;

    fn random_color(rand: &mut WyRand) -> Color {
        let mut c = || f64::from(rand.generate_range(0_u32..=255)) / 255.0;
        Color::new(c(), c(), c()).unwrap()
    }

    #[test]
    fn primaries_map_to_their_weight() {
        let op = Grayscale::new();

        for (color, weight) in [
            (Color::new(1.0, 0.0, 0.0).unwrap(), 0.2126),
            (Color::new(0.0, 1.0, 0.0).unwrap(), 0.7152),
            (Color::new(0.0, 0.0, 1.0).unwrap(), 0.0722)
        ] {
            let grey = op.luma(&color);
            assert!((grey.red() - weight).abs() < 1e-4);
            assert!((grey.green() - weight).abs() < 1e-4);
            assert!((grey.blue() - weight).abs() < 1e-4);
        }
        assert_eq!(op.luma(&Color::WHITE), Color::WHITE);
        assert_eq!(op.luma(&Color::BLACK), Color::BLACK);
    }

    #[test]
    fn every_pixel_becomes_grey() {
        let mut rand = WyRand::new_seed(0x5eed);
        let mut image = Image::from_fn(13, 7, |_, _| random_color(&mut rand));
        let copy = image.clone();

        Grayscale::new().execute(&mut image).unwrap();

        for (grey, original) in image.get_pixels().iter().zip(copy.get_pixels()) {
            assert_eq!(grey.red(), grey.green());
            assert_eq!(grey.green(), grey.blue());
            assert_eq!(*grey, Grayscale::new().luma(original));
        }
    }

    #[test]
    fn is_idempotent() {
        let mut rand = WyRand::new_seed(99);
        let mut image = Image::from_fn(6, 6, |_, _| random_color(&mut rand));

        Grayscale::new().execute(&mut image).unwrap();
        let once = image.clone();
        Grayscale::new().execute(&mut image).unwrap();

        for (a, b) in image.get_pixels().iter().zip(once.get_pixels()) {
            assert!((a.red() - b.red()).abs() < 1e-12);
        }
    }

    #[test]
    fn custom_weights() {
        let op = Grayscale::with_weights(1.0, 0.0, 0.0).unwrap();
        let grey = op.luma(&Color::new(0.3, 0.9, 0.1).unwrap());
        assert_eq!(grey, Color::new(0.3, 0.3, 0.3).unwrap());

        for (r, g, b) in [(0.5, 0.5, 0.5), (-0.1, 0.6, 0.5), (f64::NAN, 0.5, 0.5), (0.2, 0.2, 0.2)] {
            let err = Grayscale::with_weights(r, g, b).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Argument);
        }
    }

    #[test]
    fn empty_image() {
        let mut image = Image::new(0, 3);
        Grayscale::new().execute(&mut image).unwrap();
        assert!(image.is_empty());
    }
}
