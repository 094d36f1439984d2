/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single normalized RGB pixel
//!
//! Components are stored as `f64` in the range `0..=1`,
//! this loses some precision for very deep images but allows
//! any max color value in the file to map to the same representation.
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::errors::ImageErrors;

/// A single pixel backed by a normalized RGB value.
///
/// Colors can only be created via [`Color::new`] which checks
/// that every component lies in `0.0..=1.0`, hence any `Color`
/// you hold is valid.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Color {
    r: f64,
    g: f64,
    b: f64
}

impl Color {
    /// Pure black, `(0,0,0)`
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0
    };
    /// Pure white, `(1,1,1)`
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0
    };

    /// Create a new color from normalized components
    ///
    /// # Errors
    /// [`ImageErrors::IllegalFormat`] if any component is not in `0.0..=1.0`,
    /// NaN included
    pub fn new(r: f64, g: f64, b: f64) -> Result<Color, ImageErrors> {
        check_component("r", r)?;
        check_component("g", g)?;
        check_component("b", b)?;
        // adding zero turns -0.0 into 0.0 so equal colors hash equally
        Ok(Color {
            r: r + 0.0,
            g: g + 0.0,
            b: b + 0.0
        })
    }
    /// The red value, between 0 and 1
    pub const fn red(&self) -> f64 {
        self.r
    }
    /// The green value, between 0 and 1
    pub const fn green(&self) -> f64 {
        self.g
    }
    /// The blue value, between 0 and 1
    pub const fn blue(&self) -> f64 {
        self.b
    }
    /// Components as an `[r, g, b]` array
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
    /// The red value multiplied by `factor` and rounded, e.g pass 255 to get
    /// a value between 0 and 255
    pub fn red_scaled(&self, factor: u32) -> u64 {
        scaled(self.r, factor)
    }
    /// The green value multiplied by `factor` and rounded
    pub fn green_scaled(&self, factor: u32) -> u64 {
        scaled(self.g, factor)
    }
    /// The blue value multiplied by `factor` and rounded
    pub fn blue_scaled(&self, factor: u32) -> u64 {
        scaled(self.b, factor)
    }
    /// Return `"r g b"` with every component scaled by `factor`
    pub fn to_string_scaled(&self, factor: u32) -> String {
        format!(
            "{} {} {}",
            self.red_scaled(factor),
            self.green_scaled(factor),
            self.blue_scaled(factor)
        )
    }
}

/// Scale a normalized component by `factor`, rounding to the nearest integer
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scaled(component: f64, factor: u32) -> u64 {
    (component * f64::from(factor)).round() as u64
}

fn check_component(name: &str, value: f64) -> Result<(), ImageErrors> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ImageErrors::IllegalFormat(format!(
            "Expecting {name} to be >= 0 and <= 1, got: {value}"
        )));
    }
    Ok(())
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

// NaN is rejected on construction, so equality is total
impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.to_bits().hash(state);
        self.g.to_bits().hash(state);
        self.b.to_bits().hash(state);
    }
}

impl Display for Color {
    /// Formats the color using 255 as the color factor
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_scaled(255))
    }
}
