// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional map
//!
//! An addressable two-dimensional field of copyable values: packed
//! colors for the pixel store, energies for the search, energy plus
//! back pointer for the seam digraph.
//!
//! The backing vector is allocated once at full size.  Width and
//! height are the *logical* dimensions and may only shrink; the row
//! stride never changes, so shrinking is a bookkeeping operation and
//! the cells beyond the logical edge are simply never addressed again.

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    stride: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell at `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, P::default())
    }

    /// Define a new map with every cell at `value`.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            stride: width,
            data: vec![value; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  The
    // cells past the logical edge still hold carved-away values, so
    // the bounds are checked against width and height, not the stride.
    fn get_index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside the {}x{} map",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.stride as usize) + (x as usize)
    }

    /// The live cells of row `y`, `width` of them.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = self.get_index(0, y);
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }

    /// Forget the rightmost column.
    pub fn shrink_width(&mut self) {
        debug_assert!(self.width > 0);
        self.width -= 1;
    }

    /// Forget the bottom row.
    pub fn shrink_height(&mut self) {
        debug_assert!(self.height > 0);
        self.height -= 1;
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// One node of the seam digraph: the cheapest known cost of reaching
/// this pixel from the top row, and the column of the pixel above it
/// on that path.
#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}
