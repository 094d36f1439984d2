/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and encoder options
//!
//! Options are built with the builder pattern,
//! i.e every setter consumes and returns the options
//!
//! ```
//! use ppmtool_core::options::{DecoderOptions, EncoderOptions};
//!
//! let decoder_options = DecoderOptions::default().set_max_width(1024);
//! let encoder_options = EncoderOptions::default().set_max_color(65535);
//!
//! assert_eq!(decoder_options.get_max_width(), 1024);
//! assert_eq!(encoder_options.get_max_color(), 65535);
//! ```

/// Default color factor used when writing images
pub const DEFAULT_MAX_COLOR: u32 = 255;

/// Options shared by decoders
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:  usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height: usize
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }
    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }
    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:  1 << 14,
            max_height: 1 << 14
        }
    }
}

/// Options shared by encoders
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EncoderOptions {
    /// Color factor used to scale normalized components
    /// into integers, typical values are 1, 255 and 65535.
    ///
    /// This is validated by the encoder, not here
    max_color: u32
}

impl EncoderOptions {
    /// Get the color factor used when writing pixels
    pub const fn get_max_color(&self) -> u32 {
        self.max_color
    }
    /// Set the color factor used when writing pixels
    pub fn set_max_color(mut self, max_color: u32) -> Self {
        self.max_color = max_color;
        self
    }
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            max_color: DEFAULT_MAX_COLOR
        }
    }
}
