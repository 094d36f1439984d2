/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An image library, containing the necessary capabilities to
//! read, hold and write PPM images and to run operations on them
//!
//! # Example
//! ```
//! use std::io::Write;
//!
//! use ppmtool_core::options::{DecoderOptions, EncoderOptions};
//! use ppmtool_image::image::Image;
//!
//! let image = Image::read(&b"P3 1 1 255 255 128 0"[..], DecoderOptions::default()).unwrap();
//! assert_eq!(image.get_dimensions(), (1, 1));
//!
//! let mut out = vec![];
//! let mut sinks: [Option<&mut dyn Write>; 1] = [Some(&mut out)];
//! image.write_to_sinks(&EncoderOptions::default(), &mut sinks).unwrap();
//!
//! assert_eq!(out, b"P3\n1 1\n255\n255 128 0\n");
//! ```
pub use ppmtool_core;

pub mod codecs;
pub mod image;
pub mod metadata;
mod serde;
pub mod traits;
pub mod workflow;
