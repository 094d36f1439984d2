/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `ppmtool-image`
//!
//! This implements greyscale conversion and edge detection on images
//!
//! It implements the `OperationsTrait` defined by ppmtool-image.
//!
//! # Example
//! - Detect edges of a two color image
//! ```
//! use ppmtool_core::color::Color;
//! use ppmtool_image::image::Image;
//! use ppmtool_image::traits::OperationsTrait;
//! use ppmtool_imageprocs::edge_detection::{EdgeDetection, EdgeDetectionAlgorithm};
//!
//! let mut image = Image::from_fn(10, 10, |x, _| if x < 5 { Color::BLACK } else { Color::WHITE });
//! let edges = EdgeDetection::new(EdgeDetectionAlgorithm::Sobel);
//! // execute the filter
//! edges.execute(&mut image).unwrap();
//!
//! assert_eq!(image.get_color(0, 0).unwrap(), Color::BLACK);
//! assert_eq!(image.get_color(5, 5).unwrap(), Color::WHITE);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::module_name_repetitions,
    clippy::many_single_char_names
)]

pub mod edge_detection;
pub mod grayscale;
pub mod sobel;
