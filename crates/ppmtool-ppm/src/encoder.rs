/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::Write as _;
use std::io::Write;

use log::info;
use ppmtool_core::color::Color;
use ppmtool_core::errors::ImageErrors;
use ppmtool_core::options::EncoderOptions;

use crate::{MAGIC_NUMBER, MAX_MAX_COLOR_VALUE};

/// A PPM encoder
///
/// Writes the plain text `P3` format, one image row per line.
/// The same bytes can be sent to any number of sinks in a single pass.
pub struct PPMEncoder {
    options: EncoderOptions
}

impl PPMEncoder {
    /// Create a new PPM encoder with the given options
    pub fn new(options: EncoderOptions) -> PPMEncoder {
        Self { options }
    }

    /// Write the header
    fn write_headers(
        &self, width: usize, height: usize, sinks: &mut [Option<&mut dyn Write>]
    ) -> Result<(), ImageErrors> {
        let max_color = self.options.get_max_color();
        let header = format!("{MAGIC_NUMBER}\n{width} {height}\n{max_color}\n");

        write_to_all(sinks, header.as_bytes())
    }

    /// Encode `pixels` and write them to every sink present in `sinks`
    ///
    /// Pixels are expected in row major order.
    /// `None` sinks are skipped, an empty `sinks` writes nothing.
    ///
    /// # Errors
    /// - [`ImageErrors::IllegalArgument`] if the max color in the options is greater than
    ///   [`MAX_MAX_COLOR_VALUE`] or if `pixels` doesn't hold `width*height` colors.
    ///   Nothing is written in that case.
    /// - Any error from a sink, returned as is
    pub fn encode(
        &self, width: usize, height: usize, pixels: &[Color],
        sinks: &mut [Option<&mut dyn Write>]
    ) -> Result<(), ImageErrors> {
        let max_color = self.options.get_max_color();

        if max_color > MAX_MAX_COLOR_VALUE {
            return Err(ImageErrors::IllegalArgument(format!(
                "Max color specification out of range. Expecting: >= 0 && <= {MAX_MAX_COLOR_VALUE}. Given: {max_color}"
            )));
        }
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(ImageErrors::argument(
                "Data length does not match image dimensions"
            ));
        }
        if sinks.iter().all(Option::is_none) {
            return Ok(());
        }
        self.write_headers(width, height, sinks)?;

        if width > 0 {
            let mut line = String::with_capacity(width * 12);

            for row in pixels.chunks_exact(width) {
                line.clear();

                for (pos, pixel) in row.iter().enumerate() {
                    if pos != 0 {
                        line.push(' ');
                    }
                    // writing to a String can't fail
                    let _ = write!(
                        line,
                        "{} {} {}",
                        pixel.red_scaled(max_color),
                        pixel.green_scaled(max_color),
                        pixel.blue_scaled(max_color)
                    );
                }
                line.push('\n');

                write_to_all(sinks, line.as_bytes())?;
            }
        }
        for sink in sinks.iter_mut().flatten() {
            sink.flush()?;
        }
        info!(
            "Wrote {}x{} image with max color {} to {} sink(s)",
            width,
            height,
            max_color,
            sinks.iter().flatten().count()
        );
        Ok(())
    }
}

fn write_to_all(sinks: &mut [Option<&mut dyn Write>], bytes: &[u8]) -> Result<(), ImageErrors> {
    for sink in sinks.iter_mut().flatten() {
        sink.write_all(bytes)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use ppmtool_core::color::Color;
    use ppmtool_core::errors::ErrorKind;
    use ppmtool_core::options::EncoderOptions;

    use crate::PPMEncoder;

    fn encode_to_vec(width: usize, height: usize, pixels: &[Color], max_color: u32) -> Vec<u8> {
        let mut out = vec![];
        let encoder = PPMEncoder::new(EncoderOptions::default().set_max_color(max_color));
        let mut sinks: [Option<&mut dyn Write>; 1] = [Some(&mut out)];
        encoder.encode(width, height, pixels, &mut sinks).unwrap();
        out
    }

    #[test]
    fn writes_header_and_rows() {
        let pixels = [
            Color::new(1.0, 0.0, 0.0).unwrap(),
            Color::new(0.0, 1.0, 0.0).unwrap()
        ];
        let out = encode_to_vec(2, 1, &pixels, 255);
        assert_eq!(out, b"P3\n2 1\n255\n255 0 0 0 255 0\n");
    }

    #[test]
    fn rounds_to_the_output_scale() {
        let pixels = [Color::new(0.5, 0.25, 1.0).unwrap(); 4];
        let out = encode_to_vec(2, 2, &pixels, 1);
        assert_eq!(out, b"P3\n2 2\n1\n1 0 1 1 0 1\n1 0 1 1 0 1\n");

        let out = encode_to_vec(1, 1, &pixels[..1], 65536);
        assert_eq!(out, b"P3\n1 1\n65536\n32768 16384 65536\n");
    }

    #[test]
    fn empty_images_are_header_only() {
        assert_eq!(encode_to_vec(0, 3, &[], 255), b"P3\n0 3\n255\n");
        assert_eq!(encode_to_vec(3, 0, &[], 255), b"P3\n3 0\n255\n");
    }

    #[test]
    fn fans_out_to_every_sink() {
        let pixels = [Color::WHITE, Color::BLACK];
        let mut a = vec![];
        let mut b = vec![];

        let mut sinks: [Option<&mut dyn Write>; 3] = [Some(&mut a), None, Some(&mut b)];
        PPMEncoder::new(EncoderOptions::default())
            .encode(1, 2, &pixels, &mut sinks)
            .unwrap();

        assert_eq!(a, b"P3\n1 2\n255\n255 255 255\n0 0 0\n");
        assert_eq!(a, b);
    }

    #[test]
    fn no_sinks_is_a_no_op() {
        let encoder = PPMEncoder::new(EncoderOptions::default());
        encoder.encode(1, 1, &[Color::BLACK], &mut []).unwrap();
        let mut sinks: [Option<&mut dyn Write>; 1] = [None];
        encoder.encode(1, 1, &[Color::BLACK], &mut sinks).unwrap();
    }

    #[test]
    fn rejects_bad_arguments_before_writing() {
        let mut out = vec![];
        let mut sinks: [Option<&mut dyn Write>; 1] = [Some(&mut out)];

        let err = PPMEncoder::new(EncoderOptions::default().set_max_color(65537))
            .encode(1, 1, &[Color::BLACK], &mut sinks)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);

        let err = PPMEncoder::new(EncoderOptions::default())
            .encode(2, 1, &[Color::BLACK], &mut sinks)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);

        drop(sinks);
        assert!(out.is_empty());
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate() {
        let mut sink = FailingSink;
        let mut sinks: [Option<&mut dyn Write>; 1] = [Some(&mut sink)];
        let err = PPMEncoder::new(EncoderOptions::default())
            .encode(1, 1, &[Color::BLACK], &mut sinks)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
