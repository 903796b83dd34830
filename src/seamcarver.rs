// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main structure
//!
//! A `SeamCarver` takes a private copy of a picture and shrinks it a
//! seam at a time.  Finding a seam only needs `&self`; removing one
//! needs `&mut self`, so a seam can never be applied to a picture that
//! changed after it was found without the caller going out of their
//! way to do so.

use crate::energy::{self, energy_to_image};
use crate::errors::CarveError;
use crate::orientation::Orientation;
use crate::picture::{Picture, PictureMut};
use crate::pixelstore::PixelStore;
use crate::seamfinder::{find_seam, SeamFinder};
use crate::seamremover::remove_seam;
use image::{GrayImage, RgbImage};
use itertools::iproduct;
use log::info;

/// A picture being carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    store: PixelStore,
}

impl SeamCarver {
    /// Creates a new SeamCarver holding a copy of the picture.
    pub fn new<P: Picture + ?Sized>(picture: &P) -> Result<Self, CarveError> {
        let (width, height) = (picture.width(), picture.height());
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyPicture { width, height });
        }
        Ok(SeamCarver {
            store: PixelStore::from_picture(picture),
        })
    }

    /// As `new`, for callers that may not have a picture at all.
    pub fn from_picture<P: Picture + ?Sized>(picture: Option<&P>) -> Result<Self, CarveError> {
        picture
            .ok_or(CarveError::MissingPicture)
            .and_then(|picture| Self::new(picture))
    }

    pub fn width(&self) -> u32 {
        self.store.width()
    }

    pub fn height(&self) -> u32 {
        self.store.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.store.dimensions()
    }

    /// The pixels as they currently stand.
    pub fn pixels(&self) -> &PixelStore {
        &self.store
    }

    /// Energy of the pixel at column `x`, row `y`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64, CarveError> {
        energy::energy(&self.store, x, y)
    }

    /// The current energy map as a grayscale picture.
    pub fn energy_picture(&self) -> GrayImage {
        energy_to_image(&self.store)
    }

    pub fn find_seam(&self, orientation: Orientation) -> Vec<u32> {
        find_seam(&self.store, orientation)
    }

    pub fn remove_seam(&mut self, seam: &[u32], orientation: Orientation) -> Result<(), CarveError> {
        remove_seam(&mut self.store, seam, orientation)
    }

    /// Remove a top-to-bottom seam; the width drops by one.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        self.remove_seam(seam, Orientation::Vertical)
    }

    /// Remove a left-to-right seam; the height drops by one.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<(), CarveError> {
        self.remove_seam(seam, Orientation::Horizontal)
    }

    /// A fresh picture of the current contents.
    pub fn picture(&self) -> RgbImage {
        let (width, height) = self.dimensions();
        RgbImage::from_fn(width, height, |x, y| self.store.get(x, y))
    }

    /// Copy the current contents into a picture of the same size.
    pub fn write_to<P: PictureMut + ?Sized>(&self, target: &mut P) -> Result<(), CarveError> {
        let (width, height) = self.dimensions();
        let (target_width, target_height) = (target.width(), target.height());
        if (width, height) != (target_width, target_height) {
            return Err(CarveError::DimensionMismatch {
                width,
                height,
                target_width,
                target_height,
            });
        }
        for (y, x) in iproduct!(0..height, 0..width) {
            target.set_color_at(x, y, self.store.get(x, y));
        }
        Ok(())
    }

    fn carve_once(&mut self, orientation: Orientation) -> Result<(), CarveError> {
        let seam = self.find_seam(orientation);
        self.remove_seam(&seam, orientation)
    }

    // The entire energy map and seam digraph are rebuilt for every
    // seam.  Only the pixels either side of the last seam actually
    // changed, but nothing here tries to exploit that.

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the picture, alternating directions while both
    /// dimensions are too large.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<(), CarveError> {
        let (width, height) = self.dimensions();
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::ZeroTarget {
                new_width,
                new_height,
            });
        }
        if width < new_width || height < new_height {
            return Err(CarveError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        info!(
            "carving {}x{} down to {}x{}",
            width, height, new_width, new_height
        );

        let mut direction = Orientation::Vertical;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Vertical)?;
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Horizontal)?;
        }
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        self.find_seam(Orientation::Horizontal)
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        self.find_seam(Orientation::Vertical)
    }
}
