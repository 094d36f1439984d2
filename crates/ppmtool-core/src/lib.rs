/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all ppmtool libraries
//!
//! This crate provides the pieces shared by the decoder,
//! the image representation and the image operations
//!
//! It currently contains
//!
//! - A normalized RGB [`Color`](crate::color::Color) value
//! - The error type returned by every fallible operation
//! - A byte reader trait which the tokenizer consumes
//! - Decoder and encoder options
//!
//! # Features
//!  - `serde`: Enables serializing of colors and options
//!
pub mod bytestream;
pub mod color;
pub mod errors;
pub mod options;
