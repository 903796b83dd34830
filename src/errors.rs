// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.
//!
//! All of these are caller mistakes caught before anything is
//! touched: a rejected request leaves the picture exactly as it was.

use crate::orientation::Orientation;
use failure::Fail;

#[derive(Debug, PartialEq, Fail)]
pub enum CarveError {
    /// No picture was handed to the constructor.
    #[fail(display = "no picture was supplied")]
    MissingPicture,

    /// A picture with no pixels can't be carved.
    #[fail(display = "cannot carve an empty {}x{} picture", width, height)]
    EmptyPicture { width: u32, height: u32 },

    #[fail(
        display = "pixel ({}, {}) lies outside the {}x{} picture",
        x, y, width, height
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[fail(
        display = "{} seam has {} entries, expected {}",
        orientation, actual, expected
    )]
    SeamLength {
        orientation: Orientation,
        expected: usize,
        actual: usize,
    },

    #[fail(
        display = "{} seam entry {} is {}, outside 0..{}",
        orientation, index, value, limit
    )]
    SeamEntryOutOfRange {
        orientation: Orientation,
        index: usize,
        value: u32,
        limit: u32,
    },

    /// Entries `index` and `index + 1` are more than one pixel apart.
    #[fail(
        display = "{} seam jumps from {} to {} at entry {}",
        orientation, from, to, index
    )]
    SeamDisconnected {
        orientation: Orientation,
        index: usize,
        from: u32,
        to: u32,
    },

    #[fail(
        display = "cannot remove a {} seam: the {} is already 1",
        orientation, dimension
    )]
    DimensionExhausted {
        orientation: Orientation,
        dimension: &'static str,
    },

    #[fail(
        display = "seam carving cannot upscale {}x{} to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },

    #[fail(display = "cannot carve down to {}x{}", new_width, new_height)]
    ZeroTarget { new_width: u32, new_height: u32 },

    #[fail(
        display = "target picture is {}x{}, carved picture is {}x{}",
        target_width, target_height, width, height
    )]
    DimensionMismatch {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },
}

impl CarveError {
    pub(crate) fn exhausted(orientation: Orientation) -> Self {
        CarveError::DimensionExhausted {
            orientation,
            dimension: orientation.dimension_name(),
        }
    }
}
