// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy field dimensional flipper

//! A proxy for an [`EnergyField`] that maps the width to the wrapped
//! field's height, and vice versa, as well as every x to y and vice
//! versa.
//!
//! A horizontal seam through the wrapped field is exactly a vertical
//! seam through the flipped view, so one search routine serves both
//! orientations.  The seam comes back already in the wrapped field's
//! terms: entry `i` of a vertical seam through the view is the
//! view-column at view-row `i`, which is the wrapped field's row at
//! its column `i`.  Nothing is copied or transposed.

use crate::energy::EnergyField;

pub struct Flipper<'a, F: EnergyField + ?Sized> {
    pub field: &'a F,
}

impl<'a, F: EnergyField + ?Sized> Flipper<'a, F> {
    pub fn new(field: &'a F) -> Self {
        Flipper { field }
    }
}

impl<'a, F: EnergyField + ?Sized> EnergyField for Flipper<'a, F> {
    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.field.dimensions();
        (y, x)
    }

    fn energy_at(&self, x: u32, y: u32) -> f64 {
        self.field.energy_at(y, x)
    }
}
