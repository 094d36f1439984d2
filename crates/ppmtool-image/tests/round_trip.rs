/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::Write;

use nanorand::{Rng, WyRand};
use ppmtool_core::color::Color;
use ppmtool_core::errors::ErrorKind;
use ppmtool_core::options::{DecoderOptions, EncoderOptions};
use ppmtool_image::image::Image;

/// Create a random P3 file along with the raw values written to it
fn random_ppm(seed: u64, width: usize, height: usize, max_color: u32) -> (String, Vec<u32>) {
    let mut rand = WyRand::new_seed(seed);
    let mut file = format!("P3\n{width} {height}\n{max_color}\n");
    let mut values = vec![];

    for _ in 0..height {
        for x in 0..width {
            if x != 0 {
                file.push(' ');
            }
            let pixel: Vec<u32> = (0..3)
                .map(|_| rand.generate_range(0_u32..=max_color))
                .collect();

            write!(file, "{} {} {}", pixel[0], pixel[1], pixel[2]).unwrap();
            values.extend(pixel);
        }
        file.push('\n');
    }
    (file, values)
}

#[test]
fn decode_encode_at_same_scale_is_lossless() {
    for (seed, width, height) in [(1, 17, 9), (2, 1, 31), (3, 64, 1)] {
        let (file, _) = random_ppm(seed, width, height, 255);

        let image = Image::read(file.as_bytes(), DecoderOptions::default()).unwrap();
        let out = image.write_to_vec(&EncoderOptions::default()).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), file);
    }
}

#[test]
fn values_are_normalized_by_max_color() {
    let (file, values) = random_ppm(42, 8, 8, 1000);
    let image = Image::read(file.as_bytes(), DecoderOptions::default()).unwrap();

    for (pixel, raw) in image.get_pixels().iter().zip(values.chunks_exact(3)) {
        assert!((pixel.red() - f64::from(raw[0]) / 1000.0).abs() < 1e-12);
        assert!((pixel.green() - f64::from(raw[1]) / 1000.0).abs() < 1e-12);
        assert!((pixel.blue() - f64::from(raw[2]) / 1000.0).abs() < 1e-12);
    }
}

#[test]
fn rescaling_rounds_to_nearest() {
    let image = Image::read(&b"P3 2 1 100 50 25 100 0 1 99"[..], DecoderOptions::default()).unwrap();
    let out = image
        .write_to_vec(&EncoderOptions::default().set_max_color(10))
        .unwrap();

    assert_eq!(out, b"P3\n2 1\n10\n5 3 10 0 0 10\n");
}

#[test]
fn reference_image() {
    let file = "P3\n2 1\n255\n255 0 0  0 255 0\n";
    let image = Image::read(file.as_bytes(), DecoderOptions::default()).unwrap();

    assert_eq!(image.get_color(0, 0).unwrap(), Color::new(1.0, 0.0, 0.0).unwrap());
    assert_eq!(image.get_color(1, 0).unwrap(), Color::new(0.0, 1.0, 0.0).unwrap());

    let out = image.write_to_vec(&EncoderOptions::default()).unwrap();
    assert_eq!(out, b"P3\n2 1\n255\n255 0 0 0 255 0\n");
}

#[test]
fn empty_images_are_header_only() {
    let image = Image::read(&b"P3 0 2 255"[..], DecoderOptions::default()).unwrap();

    assert!(image.is_empty());
    assert_eq!(
        image.write_to_vec(&EncoderOptions::default()).unwrap(),
        b"P3\n0 2\n255\n"
    );
}

#[test]
fn file_round_trip() {
    let path = std::env::temp_dir().join(format!("ppmtool-round-trip-{}.ppm", std::process::id()));
    let (file, _) = random_ppm(7, 5, 4, 255);
    let image = Image::read(file.as_bytes(), DecoderOptions::default()).unwrap();

    image.save(&path, &EncoderOptions::default()).unwrap();
    let reread = Image::open(&path, DecoderOptions::default()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(image, reread);
    assert_eq!(reread.metadata().get_max_color(), Some(255));
}

#[test]
fn bad_max_color_does_not_touch_the_file() {
    let path = std::env::temp_dir().join(format!("ppmtool-bad-scale-{}.ppm", std::process::id()));
    std::fs::write(&path, b"untouched").unwrap();

    let err = Image::new(1, 1)
        .save(&path, &EncoderOptions::default().set_max_color(65537))
        .unwrap_err();
    let contents = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(err.kind(), ErrorKind::Argument);
    assert_eq!(contents, b"untouched");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Image::open("/this/file/does/not/exist.ppm", DecoderOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}
