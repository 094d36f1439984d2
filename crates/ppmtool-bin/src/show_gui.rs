/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::env::temp_dir;
use std::process::Command;
use std::time::UNIX_EPOCH;

use log::{debug, trace};
use ppmtool_core::errors::ImageErrors;
use ppmtool_core::options::EncoderOptions;
use ppmtool_image::image::Image;

/// Write `image` to a temporary file and open it with the default viewer
pub fn open_in_default_app(image: &Image, options: &EncoderOptions) -> Result<(), ImageErrors> {
    let time = std::time::SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|x| x.as_millis())
        .unwrap_or_default();

    let mut path = temp_dir();
    path.push(format!("ppmtool-{}-{}.ppm", std::process::id(), time));

    image.save(&path, options)?;
    trace!("Wrote preview to {:?}", path);

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut command = Command::new("xdg-open");

    debug!("Opening preview with {:?}", command.get_program());
    command.arg(&path).spawn()?;

    Ok(())
}
