// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use log::info;
use seamcarve::SeamCarver;
use std::process;

fn dimension(matches: &ArgMatches, name: &str, current: u32) -> Result<u32, Error> {
    match matches.value_of(name) {
        None => Ok(current),
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| format_err!("--{} expects a whole number, got {:?}", name, value)),
    }
}

fn run() -> Result<(), Error> {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
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
                .help("Target width (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height (default: unchanged)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .short("e")
                .help("Write the energy map of the carved image instead of the image"),
        )
        .get_matches();

    // Both are required, so clap has already refused to get this far
    // without them.
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input)?.to_rgb8();
    let mut carver = SeamCarver::new(&image)?;
    let (width, height) = carver.dimensions();
    let new_width = dimension(&matches, "width", width)?;
    let new_height = dimension(&matches, "height", height)?;

    carver.carve(new_width, new_height)?;
    info!("writing {}x{} result to {}", new_width, new_height, output);

    if matches.is_present("energy") {
        carver.energy_picture().save(output)?;
    } else {
        carver.picture().save(output)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}
