/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmtool_core::bytestream::ByteReaderTrait;
use ppmtool_core::errors::ImageErrors;

/// Splits a byte stream into whitespace separated tokens.
///
/// Whitespace is space, tab, `\r` and `\n`.
/// A `#` starts a comment which runs until the next `\r` or `\n`,
/// a comment found in the middle of a token discards that token.
pub struct TokenReader<T: ByteReaderTrait> {
    inner: T
}

impl<T: ByteReaderTrait> TokenReader<T> {
    pub fn new(source: T) -> TokenReader<T> {
        TokenReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    pub fn consume(self) -> T {
        self.inner
    }
    /// Return the next token, or `None` if the stream
    /// ended before a token started
    pub fn next_word(&mut self) -> Result<Option<String>, ImageErrors> {
        let mut token: Option<Vec<u8>> = None;
        let mut in_comment = false;

        while let Some(byte) = self.inner.read_byte()? {
            match byte {
                b' ' | b'\t' | b'\r' | b'\n' => {
                    if byte == b'\r' || byte == b'\n' {
                        in_comment = false;
                    }
                    if token.is_some() {
                        break;
                    }
                }
                b'#' => {
                    in_comment = true;
                    token = None;
                }
                _ if in_comment => {}
                _ => token.get_or_insert_with(Vec::new).push(byte)
            }
        }
        Ok(token.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }
    /// Return the next token parsed as a base 10 integer,
    /// or `None` if the stream is exhausted
    ///
    /// # Errors
    /// [`ImageErrors::InvalidInteger`] if a token exists but isn't an integer
    pub fn next_integer(&mut self) -> Result<Option<i32>, ImageErrors> {
        match self.next_word()? {
            Some(word) => match word.parse::<i32>() {
                Ok(value) => Ok(Some(value)),
                Err(e) => Err(ImageErrors::InvalidInteger(word, e))
            },
            None => Ok(None)
        }
    }
}
