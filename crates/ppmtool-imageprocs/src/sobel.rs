/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sobel derivative filter
use ppmtool_core::color::Color;
use ppmtool_core::errors::ImageErrors;
use ppmtool_image::image::Image;
use ppmtool_image::traits::OperationsTrait;

/// Perform a sobel image derivative.
///
/// This operation calculates the gradient of the image,
/// which represents how quickly pixel values change from
/// one point to another in both the horizontal and vertical directions.
///
/// The matrix for sobel is
///
/// Gx matrix
/// ```text
///   -1, 0, 1,
///   -2, 0, 2,
///   -1, 0, 1
/// ```
/// Gy matrix
/// ```text
/// -1,-2,-1,
///  0, 0, 0,
///  1, 2, 1
/// ```
///
/// The window is a 3x3 window, coordinates outside the image are clamped
/// to the nearest edge so a uniform image has no edges, borders included.
/// Each channel is computed independently and clamped to 1.0
#[derive(Default, Copy, Clone, Debug)]
pub struct Sobel;

impl Sobel {
    #[must_use]
    pub fn new() -> Sobel {
        Self
    }
}

impl OperationsTrait for Sobel {
    fn name(&self) -> &'static str {
        "Sobel"
    }
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.get_dimensions();

        let mut out = vec![Color::BLACK; image.get_pixels().len()];
        sobel_color(image.get_pixels(), &mut out, width, height);

        image.set_pixels(out)
    }
}

/// Directional sums of a single pixel's neighbourhood, one entry per channel
#[derive(Default)]
struct Sums {
    top:    [f64; 3],
    bottom: [f64; 3],
    left:   [f64; 3],
    right:  [f64; 3]
}

fn accumulate(sum: &mut [f64; 3], color: &[f64; 3], weight: f64) {
    for (s, c) in sum.iter_mut().zip(color) {
        *s += c * weight;
    }
}

/// Calculate the edge magnitude of the pixel at `(x,y)`
///
/// Neighbours past the image border are replaced by the nearest
/// pixel inside the image.
fn sobel_pixel(in_pixels: &[Color], width: usize, height: usize, x: usize, y: usize) -> Color {
    let mut sums = Sums::default();

    for dy in -1_isize..=1 {
        let ny = y.saturating_add_signed(dy).min(height - 1);

        for dx in -1_isize..=1 {
            let nx = x.saturating_add_signed(dx).min(width - 1);
            let color = in_pixels[ny * width + nx].to_array();
            // the neighbours in line with the center carry double weight
            let row_weight = if dx == 0 { 2.0 } else { 1.0 };
            let column_weight = if dy == 0 { 2.0 } else { 1.0 };

            match dy {
                -1 => accumulate(&mut sums.top, &color, row_weight),
                1 => accumulate(&mut sums.bottom, &color, row_weight),
                _ => {}
            }
            match dx {
                -1 => accumulate(&mut sums.left, &color, column_weight),
                1 => accumulate(&mut sums.right, &color, column_weight),
                _ => {}
            }
        }
    }
    let mut magnitude = [0.0; 3];

    for (i, value) in magnitude.iter_mut().enumerate() {
        let horizontal = sums.top[i] - sums.bottom[i];
        let vertical = sums.left[i] - sums.right[i];

        *value = horizontal.hypot(vertical).min(1.0);
    }
    // clamped into 0..=1 above
    Color::new(magnitude[0], magnitude[1], magnitude[2]).unwrap_or(Color::BLACK)
}

/// Carry out the sobel filter on row major pixels
///
/// Every output pixel is computed from `in_pixels` only, `out_pixels`
/// is never read.
///
/// # Arguments.
/// - in_pixels: Input pixels of the image
/// - out_pixels: Output pixels which we will fill with new sobel values
/// - width: Width of the image
/// - height: Height of the image
pub fn sobel_color(in_pixels: &[Color], out_pixels: &mut [Color], width: usize, height: usize) {
    if width == 0 || height == 0 {
        return;
    }
    for (y, out_row) in out_pixels.chunks_exact_mut(width).take(height).enumerate() {
        for (x, out) in out_row.iter_mut().enumerate() {
            *out = sobel_pixel(in_pixels, width, height, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};
    use ppmtool_core::color::Color;
    use ppmtool_image::image::Image;
    use ppmtool_image::traits::OperationsTrait;

    use crate::sobel::Sobel;

    #[test]
    fn uniform_image_is_black() {
        let mut rand = WyRand::new_seed(3);

        for _ in 0..5 {
            let mut c = || f64::from(rand.generate_range(0_u32..=1000)) / 1000.0;
            let color = Color::new(c(), c(), c()).unwrap();

            let mut image = Image::fill(color, 7, 4);
            Sobel::new().execute(&mut image).unwrap();

            assert!(image.get_pixels().iter().all(|p| *p == Color::BLACK));
        }
    }

    #[test]
    fn single_pixel_is_black() {
        let mut image = Image::fill(Color::WHITE, 1, 1);
        Sobel::new().execute(&mut image).unwrap();

        assert_eq!(image.get_color(0, 0).unwrap(), Color::BLACK);
    }

    #[test]
    fn vertical_edge() {
        // left half black, right half at 0.1
        let grey = Color::new(0.1, 0.1, 0.1).unwrap();
        let mut image = Image::from_fn(4, 3, |x, _| if x < 2 { Color::BLACK } else { grey });

        Sobel::new().execute(&mut image).unwrap();

        // a full column of differences, 0.1 * (1 + 2 + 1)
        assert!((image.get_color(1, 1).unwrap().red() - 0.4).abs() < 1e-9);
        assert!((image.get_color(2, 1).unwrap().green() - 0.4).abs() < 1e-9);
        // border rows repeat themselves, so they see the same column
        assert!((image.get_color(1, 0).unwrap().blue() - 0.4).abs() < 1e-9);
        // away from the edge nothing changes, image borders included
        assert_eq!(image.get_color(0, 1).unwrap(), Color::BLACK);
        assert_eq!(image.get_color(3, 1).unwrap(), Color::BLACK);
    }

    #[test]
    fn channels_are_independent_and_clamped() {
        let red = Color::new(1.0, 0.0, 0.0).unwrap();
        let mut image = Image::from_fn(3, 3, |x, _| if x == 0 { red } else { Color::BLACK });

        Sobel::new().execute(&mut image).unwrap();

        let center = image.get_color(1, 1).unwrap();
        assert_eq!(center, red);
        // right column doesn't neighbour the red column
        assert_eq!(image.get_color(2, 1).unwrap(), Color::BLACK);
    }

    #[test]
    fn reads_only_original_pixels() {
        // a single white dot, a read-modify-write pass would smear it
        let mut image = Image::from_fn(3, 1, |x, _| if x == 1 { Color::WHITE } else { Color::BLACK });

        Sobel::new().execute(&mut image).unwrap();

        assert_eq!(image.get_color(0, 0).unwrap(), Color::WHITE);
        assert_eq!(image.get_color(1, 0).unwrap(), Color::BLACK);
        assert_eq!(image.get_color(2, 0).unwrap(), Color::WHITE);
    }
}
