// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_gradient(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 20) as u8, (y * 20) as u8, ((x * y) % 256) as u8])
    })
    .save(path)
    .unwrap();
}

#[test]
fn carves_to_the_requested_size() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_gradient(&input, 10, 8);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "7", "--height", "5"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (7, 5));
}

#[test]
fn unspecified_dimensions_are_kept() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_gradient(&input, 6, 6);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "4"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (4, 6));
}

#[test]
fn writes_the_energy_map_on_request() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("energy.png");
    write_gradient(&input, 5, 5);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--energy")
        .assert()
        .success();

    let energy = image::open(&output).unwrap().to_luma8();
    assert_eq!(energy.dimensions(), (5, 5));
    // Borders carry the most energy in a gentle gradient.
    assert_eq!(energy.get_pixel(0, 0)[0], 255);
}

#[test]
fn refuses_to_upscale() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_gradient(&input, 4, 4);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot upscale"));

    assert!(!output.exists());
}

#[test]
fn complains_about_missing_input() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(dir.path().join("nothing.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure();
}
