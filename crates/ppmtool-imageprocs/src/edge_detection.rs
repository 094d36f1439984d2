/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Edge detection with a selectable algorithm
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;
use ppmtool_core::errors::ImageErrors;
use ppmtool_image::image::Image;
use ppmtool_image::traits::OperationsTrait;

use crate::sobel::Sobel;

/// Supported edge detection algorithms
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum EdgeDetectionAlgorithm {
    /// See [`Sobel`]
    #[default]
    Sobel
}

impl EdgeDetectionAlgorithm {
    /// Every supported algorithm
    pub const ALL: [EdgeDetectionAlgorithm; 1] = [EdgeDetectionAlgorithm::Sobel];

    /// The name used to select this algorithm
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EdgeDetectionAlgorithm::Sobel => "sobel"
        }
    }
    /// Names of all supported algorithms, e.g `[sobel]`
    #[must_use]
    pub fn all_to_string() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|x| x.name()).collect();
        format!("[{}]", names.join(" "))
    }
}

impl Display for EdgeDetectionAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdgeDetectionAlgorithm {
    type Err = ImageErrors;

    /// Parse an algorithm name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ImageErrors::IllegalArgument(format!(
                    "Unrecognized edge detection algorithm: {s}. Supported: {}",
                    Self::all_to_string()
                ))
            })
    }
}

/// Replace every pixel with its edge magnitude
///
/// The algorithm is checked before the image is touched,
/// a missing algorithm fails and leaves the image unchanged.
#[derive(Copy, Clone, Debug)]
pub struct EdgeDetection {
    algorithm: Option<EdgeDetectionAlgorithm>
}

impl EdgeDetection {
    /// Create an edge detection operation using `algorithm`
    #[must_use]
    pub fn new(algorithm: EdgeDetectionAlgorithm) -> EdgeDetection {
        EdgeDetection {
            algorithm: Some(algorithm)
        }
    }
    /// Create an edge detection operation where the algorithm may not be known
    ///
    /// Executing it with `None` is an argument error
    #[must_use]
    pub fn from_option(algorithm: Option<EdgeDetectionAlgorithm>) -> EdgeDetection {
        EdgeDetection { algorithm }
    }
    /// Create an edge detection operation from an algorithm name
    ///
    /// # Errors
    /// [`ImageErrors::IllegalArgument`] if the name isn't a supported algorithm
    pub fn from_name(name: &str) -> Result<EdgeDetection, ImageErrors> {
        Ok(EdgeDetection::new(name.parse()?))
    }
    #[must_use]
    pub const fn algorithm(&self) -> Option<EdgeDetectionAlgorithm> {
        self.algorithm
    }
}

impl OperationsTrait for EdgeDetection {
    fn name(&self) -> &'static str {
        "Edge Detection"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        match self.algorithm {
            Some(EdgeDetectionAlgorithm::Sobel) => {
                debug!("Detecting edges with sobel");
                Sobel::new().execute_impl(image)
            }
            None => Err(ImageErrors::IllegalArgument(format!(
                "No edge detection algorithm given. Supported: {}",
                EdgeDetectionAlgorithm::all_to_string()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};
    use ppmtool_core::color::Color;
    use ppmtool_core::errors::ErrorKind;
    use ppmtool_image::image::Image;
    use ppmtool_image::traits::OperationsTrait;

    use crate::edge_detection::{EdgeDetection, EdgeDetectionAlgorithm};
    use crate::grayscale::Grayscale;

    fn random_image(seed: u64, width: usize, height: usize) -> Image {
        let mut rand = WyRand::new_seed(seed);
        Image::from_fn(width, height, |_, _| {
            let mut c = || f64::from(rand.generate_range(0_u32..=255)) / 255.0;
            Color::new(c(), c(), c()).unwrap()
        })
    }

    #[test]
    fn parse_names() {
        for name in ["sobel", "SOBEL", "Sobel", " sobel "] {
            assert_eq!(
                name.parse::<EdgeDetectionAlgorithm>().unwrap(),
                EdgeDetectionAlgorithm::Sobel
            );
        }
        let err = "canny".parse::<EdgeDetectionAlgorithm>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(err.to_string().contains("[sobel]"));

        assert_eq!(EdgeDetectionAlgorithm::Sobel.to_string(), "sobel");
    }

    #[test]
    fn missing_algorithm_leaves_image_unchanged() {
        let mut image = random_image(11, 9, 9);
        let before = image.clone();

        let err = EdgeDetection::from_option(None)
            .execute(&mut image)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Argument);
        assert_eq!(image, before);
        assert!(EdgeDetection::from_name("laplace").is_err());
    }

    #[test]
    fn clone_is_isolated_from_transforms() {
        let mut image = random_image(12, 8, 5);
        let copy = image.clone();

        EdgeDetection::new(EdgeDetectionAlgorithm::Sobel)
            .execute(&mut image)
            .unwrap();
        Grayscale::new().execute(&mut image).unwrap();

        assert_ne!(image, copy);
        assert_eq!(copy, random_image(12, 8, 5));
    }

    #[test]
    fn clone_and_execute_keeps_source() {
        let image = random_image(13, 4, 4);
        let edges = EdgeDetection::new(EdgeDetectionAlgorithm::Sobel)
            .clone_and_execute(&image)
            .unwrap();

        assert_eq!(image, random_image(13, 4, 4));
        assert_eq!(edges.get_dimensions(), image.get_dimensions());
    }
}
