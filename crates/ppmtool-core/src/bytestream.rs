/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading bytes in ppmtool
//!
//! The tokenizer only ever needs one byte at a time and
//! a way to know when the stream is exhausted, which is what
//! [`ByteReaderTrait`] provides.

use std::io::{BufRead, ErrorKind};

use crate::errors::ImageErrors;

/// The de-facto input trait implemented for readers.
///
/// # Considerations
///
/// This is implemented for anything that implements [`BufRead`], so
/// `&[u8]`, [`Cursor`](std::io::Cursor), [`BufReader`](std::io::BufReader)
/// and a locked stdin all work. Wrap unbuffered sources such as [`File`](std::fs::File)
/// in a `BufReader` first, reading them byte by byte is a syscall per byte.
pub trait ByteReaderTrait {
    /// Read a single byte from the underlying source
    ///
    /// # Returns
    /// - `Ok(Some(byte))` - The next byte in the stream
    /// - `Ok(None)` - End of stream was reached
    /// - `Err()` - The underlying source failed
    fn read_byte(&mut self) -> Result<Option<u8>, ImageErrors>;
}

impl<T: BufRead + ?Sized> ByteReaderTrait for T {
    fn read_byte(&mut self) -> Result<Option<u8>, ImageErrors> {
        loop {
            let byte = match self.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ImageErrors::from(e))
            };
            if byte.is_some() {
                self.consume(1);
            }
            return Ok(byte);
        }
    }
}
