// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam orientation
//!
//! Which way a seam runs.  A vertical seam runs top-to-bottom, has one
//! entry per row, and shrinks the width; a horizontal seam runs
//! left-to-right, has one entry per column, and shrinks the height.
//! Every search and removal takes one of these as an argument; nothing
//! remembers the last one used.

use std::fmt;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    /// Top-to-bottom; shrinks the width.
    Vertical,
    /// Left-to-right; shrinks the height.
    Horizontal,
}

impl Orientation {
    /// The other one.  Used when alternating carves.
    pub fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// How many entries a seam in this orientation has for an image of
    /// the given dimensions.
    pub fn seam_length(self, (width, height): (u32, u32)) -> u32 {
        match self {
            Orientation::Vertical => height,
            Orientation::Horizontal => width,
        }
    }

    /// The dimension a seam in this orientation removes from, which is
    /// also the exclusive upper bound of every seam entry.
    pub fn span(self, (width, height): (u32, u32)) -> u32 {
        match self {
            Orientation::Vertical => width,
            Orientation::Horizontal => height,
        }
    }

    /// Name of the dimension that shrinks, for messages.
    pub fn dimension_name(self) -> &'static str {
        match self {
            Orientation::Vertical => "width",
            Orientation::Horizontal => "height",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}
