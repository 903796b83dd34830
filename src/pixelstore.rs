// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel store
//!
//! A private copy of the picture being carved, kept as packed
//! `0x00RRGGBB` values.  It shrinks one row or column at a time and
//! never grows.  Coordinates handed to the accessors are trusted;
//! callers validate.

use crate::orientation::Orientation;
use crate::picture::Picture;
use crate::twodmap::TwoDimensionalMap;
use image::Rgb;
use itertools::iproduct;

#[inline]
pub(crate) fn pack(color: Rgb<u8>) -> u32 {
    let [r, g, b] = color.0;
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

#[inline]
pub(crate) fn unpack(packed: u32) -> [u8; 3] {
    [(packed >> 16) as u8, (packed >> 8) as u8, packed as u8]
}

#[derive(Debug, Clone)]
pub struct PixelStore {
    pixels: TwoDimensionalMap<u32>,
}

impl PixelStore {
    /// Copy every pixel of a picture.
    pub fn from_picture<P: Picture + ?Sized>(picture: &P) -> Self {
        let (width, height) = (picture.width(), picture.height());
        let mut pixels = TwoDimensionalMap::new(width, height);
        for (y, x) in iproduct!(0..height, 0..width) {
            pixels[(x, y)] = pack(picture.color_at(x, y));
        }
        PixelStore { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb<u8> {
        Rgb(unpack(self.pixels[(x, y)]))
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb<u8>) {
        self.pixels[(x, y)] = pack(color);
    }

    /// The three channels of a pixel, ready for arithmetic.
    #[inline]
    pub(crate) fn channels(&self, x: u32, y: u32) -> [u8; 3] {
        unpack(self.pixels[(x, y)])
    }

    /// Drop pixel `col` from `row`, sliding everything to its right
    /// one place left.  The last cell of the row is left stale until
    /// the width shrinks.
    pub fn collapse_column(&mut self, row: u32, col: u32) {
        let row = self.pixels.row_mut(row);
        row.copy_within(col as usize + 1.., col as usize);
    }

    /// Drop pixel `row` from `col`, sliding everything below it one
    /// place up.  The last cell of the column is left stale until the
    /// height shrinks.
    pub fn collapse_row(&mut self, col: u32, row: u32) {
        for y in row..self.height() - 1 {
            self.pixels[(col, y)] = self.pixels[(col, y + 1)];
        }
    }

    /// Lose the trailing column (vertical) or row (horizontal).
    pub(crate) fn shrink(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Vertical => self.pixels.shrink_width(),
            Orientation::Horizontal => self.pixels.shrink_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    // Each pixel's red channel records where it started: 10 * y + x.
    fn numbered(width: u32, height: u32) -> PixelStore {
        let image = RgbImage::from_fn(width, height, |x, y| Rgb([(10 * y + x) as u8, 0, 0]));
        PixelStore::from_picture(&image)
    }

    fn reds(store: &PixelStore) -> Vec<Vec<u8>> {
        (0..store.height())
            .map(|y| (0..store.width()).map(|x| store.get(x, y)[0]).collect())
            .collect()
    }

    #[test]
    fn packing_keeps_every_channel() {
        let color = Rgb([0x12, 0xab, 0xff]);
        assert_eq!(pack(color), 0x0012_abff);
        assert_eq!(unpack(pack(color)), color.0);
    }

    #[test]
    fn copies_the_picture() {
        let store = numbered(3, 2);
        assert_eq!(store.dimensions(), (3, 2));
        assert_eq!(reds(&store), vec![vec![0, 1, 2], vec![10, 11, 12]]);
    }

    #[test]
    fn set_overwrites_one_pixel() {
        let mut store = numbered(2, 2);
        store.set(1, 0, Rgb([1, 2, 3]));
        assert_eq!(store.get(1, 0), Rgb([1, 2, 3]));
        assert_eq!(store.get(0, 1), Rgb([10, 0, 0]));
    }

    #[test]
    fn collapsing_columns_shifts_left() {
        let mut store = numbered(4, 2);
        store.collapse_column(0, 1);
        store.collapse_column(1, 3);
        store.shrink(Orientation::Vertical);
        assert_eq!(reds(&store), vec![vec![0, 2, 3], vec![10, 11, 12]]);
    }

    #[test]
    fn collapsing_rows_shifts_up() {
        let mut store = numbered(2, 3);
        store.collapse_row(0, 0);
        store.collapse_row(1, 2);
        store.shrink(Orientation::Horizontal);
        assert_eq!(reds(&store), vec![vec![10, 1], vec![20, 11]]);
    }

    #[test]
    #[should_panic(expected = "outside the 3x2 map")]
    fn the_trailing_cell_is_gone_after_a_collapse() {
        let mut store = numbered(4, 2);
        store.collapse_column(0, 0);
        store.shrink(Orientation::Vertical);
        store.get(3, 0);
    }
}
