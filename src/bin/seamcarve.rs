// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use anyhow::{Context, Result};
use clap::{crate_version, value_t, App, Arg, ArgMatches};
use env_logger::Env;
use log::info;
use seamcarve::{calculate_energy, energy_to_image, SeamCarver};

fn target(matches: &ArgMatches, name: &str, current: u32) -> Result<u32> {
    if matches.is_present(name) {
        Ok(value_t!(matches, name, u32)?)
    } else {
        Ok(current)
    }
}

fn main() -> Result<()> {
    let matches = App::new("seamcarve")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .value_name("PIXELS")
                .help("Target width (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .value_name("PIXELS")
                .help("Target height (default: unchanged)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .conflicts_with_all(&["width", "height"])
                .help("Write the energy map of the input instead of carving"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input)
        .with_context(|| format!("could not read {}", input))?
        .to_rgb8();
    let (width, height) = image.dimensions();

    if matches.is_present("energy") {
        energy_to_image(&calculate_energy(&image))
            .save(output)
            .with_context(|| format!("could not write {}", output))?;
        info!("wrote energy map of {}x{} image", width, height);
        return Ok(());
    }

    let new_width = target(&matches, "width", width)?;
    let new_height = target(&matches, "height", height)?;
    info!(
        "carving {} from {}x{} to {}x{}",
        input, width, height, new_width, new_height
    );

    let mut carver = SeamCarver::new(image)?;
    carver.carve(new_width as usize, new_height as usize)?;
    carver
        .into_image()
        .save(output)
        .with_context(|| format!("could not write {}", output))?;
    info!("wrote {}", output);
    Ok(())
}
