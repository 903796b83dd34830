// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam
//!
//! The picture is treated as a directed acyclic graph: every pixel
//! `(x, y)` has an edge to each of `(x-1, y+1)`, `(x, y+1)` and
//! `(x+1, y+1)` that exists, weighted by the energy of the pixel the
//! edge points at.  A vertical seam is a cheapest path from any pixel
//! in the top row to any pixel in the bottom row.
//!
//! Every edge points one row down, so row-major order is already a
//! topological order and a single relaxation pass in that order
//! settles every node.  Horizontal seams are vertical seams through a
//! [`Flipper`].

use crate::cq;
use crate::energy::EnergyField;
use crate::flipper::Flipper;
use crate::orientation::Orientation;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use itertools::iproduct;
use log::trace;

/// This trait defines how seams are requested from something holding
/// a picture.
pub trait SeamFinder {
    /// Request a left-to-right seam: one row index per column.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// Request a top-to-bottom seam: one column index per row.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

/// Find the cheapest seam through a field in the given orientation.
pub fn find_seam<F: EnergyField + ?Sized>(field: &F, orientation: Orientation) -> Vec<u32> {
    match orientation {
        Orientation::Vertical => find_vertical(field),
        Orientation::Horizontal => find_vertical(&Flipper::new(field)),
    }
}

/// Given an energy field, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the cheapest top-to-bottom seam.
fn find_vertical<F: EnergyField + ?Sized>(field: &F) -> Vec<u32> {
    let (width, height) = field.dimensions();

    // Nothing to cross.
    if width == 0 || height == 0 {
        return Vec::new();
    }

    // A single column or a single row: the path is trivial, and column
    // zero is taken.
    if width == 1 || height == 1 {
        return vec![0; height as usize];
    }

    let mut energy: TwoDimensionalMap<f64> = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        energy[(x, y)] = field.energy_at(x, y);
    }

    let mut paths: TwoDimensionalMap<EnergyAndBackPointer<f64>> = TwoDimensionalMap::filled(
        width,
        height,
        EnergyAndBackPointer {
            energy: f64::INFINITY,
            parent: 0,
        },
    );
    for x in 0..width {
        paths[(x, 0)].energy = energy[(x, 0)];
    }

    // Push every settled pixel's cost down its (up to) three edges.
    // The comparison is strict, so among equally cheap parents the
    // leftmost, which is relaxed first, keeps the child.
    let maxwidth = width - 1;
    for (y, x) in iproduct!(0..height - 1, 0..width) {
        let reached = paths[(x, y)].energy;
        let children = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
        for child in children {
            let candidate = reached + energy[(child, y + 1)];
            let node = &mut paths[(child, y + 1)];
            if candidate < node.energy {
                *node = EnergyAndBackPointer {
                    energy: candidate,
                    parent: x,
                };
            }
        }
    }

    // Cheapest pixel on the bottom row; first one wins a tie.
    let bottom = height - 1;
    let mut seam_col = 0;
    for x in 1..width {
        if paths[(x, bottom)].energy < paths[(seam_col, bottom)].energy {
            seam_col = x;
        }
    }
    trace!(
        "cheapest seam through {}x{} ends at column {} costing {}",
        width,
        height,
        seam_col,
        paths[(seam_col, bottom)].energy
    );

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = paths[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Total energy of the pixels along a seam.  The seam is assumed to
/// fit the field.
pub fn seam_energy<F: EnergyField + ?Sized>(
    field: &F,
    seam: &[u32],
    orientation: Orientation,
) -> f64 {
    seam.iter()
        .enumerate()
        .map(|(i, &s)| match orientation {
            Orientation::Vertical => field.energy_at(s, i as u32),
            Orientation::Horizontal => field.energy_at(i as u32, s),
        })
        .sum()
}
