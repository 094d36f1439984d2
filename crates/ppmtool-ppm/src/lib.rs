/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain text Portable Pixmap (`P3`) decoder and encoder
//!
//! The decoder tokenizes the input, skipping whitespace and `#` comments,
//! validates the header and returns every pixel as a normalized
//! [`Color`](ppmtool_core::color::Color) in row major order.
//!
//! # Example
//! ```
//! use ppmtool_ppm::PPMDecoder;
//!
//! let mut decoder = PPMDecoder::new(&b"P3\n2 1\n255\n255 0 0  0 255 0\n"[..]);
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(decoder.get_dimensions(), Some((2, 1)));
//! assert_eq!(pixels[0].red(), 1.0);
//! assert_eq!(pixels[1].green(), 1.0);
//! ```
//!
//! Binary variants (`P5`, `P6`, `P7`) are not supported.
pub use decoder::PPMDecoder;
pub use encoder::PPMEncoder;
pub use ppmtool_core;
pub use reader::TokenReader;

mod decoder;
mod encoder;
mod reader;

/// The only magic number supported
pub const MAGIC_NUMBER: &str = "P3";

/// Maximum accepted max color value, both when reading and writing.
///
/// The text format itself has no upper bound, files with a
/// larger value are rejected.
pub const MAX_MAX_COLOR_VALUE: u32 = 65536;
