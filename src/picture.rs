// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The boundary with whatever decodes and encodes images.
//!
//! The carver only needs to read an RGB color at a coordinate on the
//! way in, and to write one on the way out.  Any ImageRS view with
//! 8-bit channels qualifies as a source, and an `RgbImage` qualifies as
//! a destination.

use image::{GenericImageView, ImageBuffer, Pixel, Rgb};

/// A source of 8-bit RGB pixels.
pub trait Picture {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// The color at column `col`, row `row`.
    fn color_at(&self, col: u32, row: u32) -> Rgb<u8>;
}

/// A picture that can also be written to.
pub trait PictureMut: Picture {
    fn set_color_at(&mut self, col: u32, row: u32, color: Rgb<u8>);
}

impl<I, P> Picture for I
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn color_at(&self, col: u32, row: u32) -> Rgb<u8> {
        self.get_pixel(col, row).to_rgb()
    }
}

impl PictureMut for ImageBuffer<Rgb<u8>, Vec<u8>> {
    fn set_color_at(&mut self, col: u32, row: u32, color: Rgb<u8>) {
        self.put_pixel(col, row, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbImage};

    #[test]
    fn gray_pictures_read_as_rgb() {
        let gray = GrayImage::from_pixel(2, 3, Luma([42]));
        assert_eq!(Picture::width(&gray), 2);
        assert_eq!(Picture::height(&gray), 3);
        assert_eq!(gray.color_at(1, 2), Rgb([42, 42, 42]));
    }

    #[test]
    fn rgb_pictures_are_writable() {
        let mut rgb = RgbImage::new(2, 2);
        rgb.set_color_at(1, 0, Rgb([1, 2, 3]));
        assert_eq!(rgb.color_at(1, 0), Rgb([1, 2, 3]));
        assert_eq!(rgb.color_at(0, 0), Rgb([0, 0, 0]));
    }
}
