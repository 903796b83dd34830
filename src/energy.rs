// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a picture
//!
//! The energy of a pixel is the dual-gradient magnitude of its four
//! direct neighbors:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! Pixels on the border have no neighbor on one side, and are given a
//! flat [`BORDER_ENERGY`] instead, which is far above anything an
//! interior pixel usually reaches.  Energies are never cached; they
//! are a pure function of whatever the store holds right now.

use crate::errors::CarveError;
use crate::pixelstore::PixelStore;
use image::{GrayImage, Luma};
use itertools::iproduct;

/// The energy of every pixel on the edge of the picture.
pub const BORDER_ENERGY: f64 = 1000.0;

/// Anything the seam search can walk: a rectangle with an energy at
/// every coordinate.  Coordinates passed to `energy_at` are already
/// known to be in range.
pub trait EnergyField {
    fn dimensions(&self) -> (u32, u32);

    fn energy_at(&self, x: u32, y: u32) -> f64;
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.
#[inline]
fn energy_of_pair(p1: [u8; 3], p2: [u8; 3]) -> u32 {
    p1.iter()
        .zip(p2.iter())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            (d * d) as u32
        })
        .sum()
}

impl EnergyField for PixelStore {
    fn dimensions(&self) -> (u32, u32) {
        PixelStore::dimensions(self)
    }

    fn energy_at(&self, x: u32, y: u32) -> f64 {
        let (width, height) = PixelStore::dimensions(self);
        if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
            return BORDER_ENERGY;
        }
        let horizontal = energy_of_pair(self.channels(x + 1, y), self.channels(x - 1, y));
        let vertical = energy_of_pair(self.channels(x, y + 1), self.channels(x, y - 1));
        f64::from(horizontal + vertical).sqrt()
    }
}

/// The energy of one pixel, refusing coordinates outside the store.
pub fn energy(store: &PixelStore, x: u32, y: u32) -> Result<f64, CarveError> {
    let (width, height) = store.dimensions();
    if x >= width || y >= height {
        return Err(CarveError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(store.energy_at(x, y))
}

/// Render an energy field as a grayscale image, scaled so that the
/// most energetic pixel is white.
pub fn energy_to_image<F: EnergyField + ?Sized>(field: &F) -> GrayImage {
    let (width, height) = field.dimensions();
    let energies: Vec<f64> = iproduct!(0..height, 0..width)
        .map(|(y, x)| field.energy_at(x, y))
        .collect();
    let factor = energies.iter().cloned().fold(0.0, f64::max);

    let mut out = GrayImage::new(width, height);
    for (i, (y, x)) in iproduct!(0..height, 0..width).enumerate() {
        let scaled = if factor > 0.0 {
            (energies[i] * 255.0 / factor).round()
        } else {
            0.0
        };
        let level: u8 = num_traits::cast(scaled).unwrap_or(u8::MAX);
        out.put_pixel(x, y, Luma([level]));
    }
    out
}
