// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Remove a seam
//!
//! The whole seam is checked before the first pixel moves.  Each row
//! (vertical seam) or column (horizontal seam) is then collapsed at
//! its own entry, and the store loses its trailing column or row.

use crate::errors::CarveError;
use crate::orientation::Orientation;
use crate::pixelstore::PixelStore;
use log::debug;

/// Check that a seam could be removed from the store as it stands.
pub fn validate_seam(
    store: &PixelStore,
    seam: &[u32],
    orientation: Orientation,
) -> Result<(), CarveError> {
    let dimensions = store.dimensions();

    let expected = orientation.seam_length(dimensions) as usize;
    if seam.len() != expected {
        return Err(CarveError::SeamLength {
            orientation,
            expected,
            actual: seam.len(),
        });
    }

    let limit = orientation.span(dimensions);
    if limit <= 1 {
        return Err(CarveError::exhausted(orientation));
    }

    if let Some((index, &value)) = seam.iter().enumerate().find(|(_, &s)| s >= limit) {
        return Err(CarveError::SeamEntryOutOfRange {
            orientation,
            index,
            value,
            limit,
        });
    }

    if let Some((index, pair)) = seam
        .windows(2)
        .enumerate()
        .find(|(_, pair)| pair[0].max(pair[1]) - pair[0].min(pair[1]) > 1)
    {
        return Err(CarveError::SeamDisconnected {
            orientation,
            index,
            from: pair[0],
            to: pair[1],
        });
    }

    Ok(())
}

/// Validate a seam, then cut it out of the store.
pub fn remove_seam(
    store: &mut PixelStore,
    seam: &[u32],
    orientation: Orientation,
) -> Result<(), CarveError> {
    validate_seam(store, seam, orientation)?;

    match orientation {
        Orientation::Vertical => {
            for (row, &col) in seam.iter().enumerate() {
                store.collapse_column(row as u32, col);
            }
        }
        Orientation::Horizontal => {
            for (col, &row) in seam.iter().enumerate() {
                store.collapse_row(col as u32, row);
            }
        }
    }
    store.shrink(orientation);

    debug!(
        "removed {} seam, picture is now {}x{}",
        orientation,
        store.width(),
        store.height()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

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
    fn vertical_seams_remove_one_pixel_per_row() {
        let mut store = numbered(4, 3);
        remove_seam(&mut store, &[3, 2, 1], Orientation::Vertical).unwrap();
        assert_eq!(store.dimensions(), (3, 3));
        assert_eq!(
            reds(&store),
            vec![vec![0, 1, 2], vec![10, 11, 13], vec![20, 22, 23]]
        );
    }

    #[test]
    fn horizontal_seams_remove_one_pixel_per_column() {
        let mut store = numbered(3, 4);
        remove_seam(&mut store, &[0, 1, 2], Orientation::Horizontal).unwrap();
        assert_eq!(store.dimensions(), (3, 3));
        assert_eq!(
            reds(&store),
            vec![vec![10, 1, 2], vec![20, 21, 12], vec![30, 31, 32]]
        );
    }

    #[test]
    fn wrong_length_is_refused() {
        let mut store = numbered(4, 3);
        assert_eq!(
            remove_seam(&mut store, &[0, 0], Orientation::Vertical),
            Err(CarveError::SeamLength {
                orientation: Orientation::Vertical,
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            remove_seam(&mut store, &[0, 0, 0], Orientation::Horizontal),
            Err(CarveError::SeamLength {
                orientation: Orientation::Horizontal,
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn out_of_range_entries_are_refused() {
        let mut store = numbered(4, 3);
        assert_eq!(
            remove_seam(&mut store, &[3, 3, 4], Orientation::Vertical),
            Err(CarveError::SeamEntryOutOfRange {
                orientation: Orientation::Vertical,
                index: 2,
                value: 4,
                limit: 4
            })
        );
    }

    #[test]
    fn jumps_are_refused_without_touching_anything() {
        let mut store = numbered(4, 3);
        let before = reds(&store);
        assert_eq!(
            remove_seam(&mut store, &[0, 1, 3], Orientation::Vertical),
            Err(CarveError::SeamDisconnected {
                orientation: Orientation::Vertical,
                index: 1,
                from: 1,
                to: 3
            })
        );
        assert_eq!(store.dimensions(), (4, 3));
        assert_eq!(reds(&store), before);
    }

    #[test]
    fn the_last_column_cannot_go() {
        let mut store = numbered(2, 3);
        remove_seam(&mut store, &[1, 1, 0], Orientation::Vertical).unwrap();
        assert_eq!(store.width(), 1);
        assert_eq!(
            remove_seam(&mut store, &[0, 0, 0], Orientation::Vertical),
            Err(CarveError::exhausted(Orientation::Vertical))
        );
        // The other direction still has room.
        remove_seam(&mut store, &[0], Orientation::Horizontal).unwrap();
        assert_eq!(store.dimensions(), (1, 2));
    }
}
