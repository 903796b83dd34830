// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking by seam carving.
//!
//! ```no_run
//! use seamcarve::{SeamCarver, SeamFinder};
//!
//! let image = image::open("in.png").unwrap().to_rgb8();
//! let mut carver = SeamCarver::new(&image).unwrap();
//! let seam = carver.find_vertical_seam();
//! carver.remove_vertical_seam(&seam).unwrap();
//! carver.picture().save("out.png").unwrap();
//! ```

#[macro_use]
mod ternary;

pub mod energy;
pub use energy::{energy_to_image, EnergyField, BORDER_ENERGY};

pub mod errors;
pub use errors::CarveError;

pub mod flipper;
pub use flipper::Flipper;

pub mod orientation;
pub use orientation::Orientation;

pub mod picture;
pub use picture::{Picture, PictureMut};

pub mod pixelstore;
pub use pixelstore::PixelStore;

pub mod seamcarver;
pub use seamcarver::SeamCarver;

pub mod seamfinder;
pub use seamfinder::{find_seam, seam_energy, SeamFinder};

pub mod seamremover;
pub use seamremover::{remove_seam, validate_seam};

mod twodmap;
