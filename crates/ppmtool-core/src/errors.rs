/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding, processing and encoding
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::num::ParseIntError;

/// Broad classification of an [`ImageErrors`] value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Malformed or semantically invalid PPM content
    Format,
    /// An invalid parameter was passed by the caller
    Argument,
    /// The underlying source or sink failed
    Io
}

/// All possible errors that can occur.
///
/// Every fallible function in the ppmtool crates returns this,
/// use [`kind`](ImageErrors::kind) to tell the categories apart.
pub enum ImageErrors {
    /// Illegal PPM content, e.g a bad magic number or a missing dimension
    IllegalFormat(String),
    /// A token was present but could not be parsed as an integer
    InvalidInteger(String, ParseIntError),
    /// Invalid argument passed to a function, e.g an out of bounds coordinate
    IllegalArgument(String),
    /// Errors from the underlying reader or writer
    IoErrors(io::Error)
}

impl ImageErrors {
    /// Return the category of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ImageErrors::IllegalFormat(_) | ImageErrors::InvalidInteger(_, _) => ErrorKind::Format,
            ImageErrors::IllegalArgument(_) => ErrorKind::Argument,
            ImageErrors::IoErrors(_) => ErrorKind::Io
        }
    }
    /// Create an illegal format error from anything string like
    pub fn format<S: Into<String>>(msg: S) -> ImageErrors {
        ImageErrors::IllegalFormat(msg.into())
    }
    /// Create an illegal argument error from anything string like
    pub fn argument<S: Into<String>>(msg: S) -> ImageErrors {
        ImageErrors::IllegalArgument(msg.into())
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalFormat(msg) => {
                writeln!(f, "Illegal PPM format: {msg}")
            }
            Self::InvalidInteger(token, err) => {
                writeln!(
                    f,
                    "Illegal PPM format: Expected Integer, but could not parse: {token} ({err})"
                )
            }
            Self::IllegalArgument(msg) => {
                writeln!(f, "Illegal argument: {msg}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error: {err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // same as debug minus the trailing newline
        match self {
            Self::IllegalFormat(msg) => write!(f, "Illegal PPM format: {msg}"),
            Self::InvalidInteger(token, _) => write!(
                f,
                "Illegal PPM format: Expected Integer, but could not parse: {token}"
            ),
            Self::IllegalArgument(msg) => write!(f, "Illegal argument: {msg}"),
            Self::IoErrors(err) => write!(f, "I/O error: {err}")
        }
    }
}

impl std::error::Error for ImageErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInteger(_, err) => Some(err),
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for ImageErrors {
    fn from(err: io::Error) -> Self {
        ImageErrors::IoErrors(err)
    }
}
