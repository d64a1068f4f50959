// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of the color gradient across
//! it, taken between its left and right neighbors and between its upper
//! and lower neighbors.  Neighbors wrap around the edges of the image,
//! so a pixel in the first column uses the last column as its left
//! neighbor, and the border needs no special formula.
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```

use crate::gridview::GridView;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma, Pixel, Primitive};
use itertools::{iproduct, zip};
use num_traits::ToPrimitive;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.
fn energy_of_pair<P: Pixel>(p1: &P, p2: &P) -> f64 {
    #[inline]
    fn channel<S: Primitive>(c: &S) -> f64 {
        c.to_f64().unwrap_or(0.0)
    }

    let (c1, c2) = (p1.to_rgb().0, p2.to_rgb().0);
    zip(c1.iter(), c2.iter())
        .map(|(a, b)| {
            let d = channel(a) - channel(b);
            d * d
        })
        .sum()
}

/// The energy of a single pixel.  Pure: the same grid and coordinates
/// always give the same value, so it must be recomputed after every
/// removal rather than cached.
pub fn pixel_energy<G: GridView>(grid: &G, column: usize, row: usize) -> f64 {
    let (width, height) = (grid.column_count(), grid.row_count());
    let (left, right) = ((column + width - 1) % width, (column + 1) % width);
    let (up, down) = ((row + height - 1) % height, (row + 1) % height);

    let dx = energy_of_pair(&grid.pixel(right, row), &grid.pixel(left, row));
    let dy = energy_of_pair(&grid.pixel(column, down), &grid.pixel(column, up));
    (dx + dy).sqrt()
}

/// Compute the energy of every pixel in a grid.
pub fn calculate_energy<G: GridView>(grid: &G) -> TwoDimensionalMap<f64> {
    let (width, height) = (grid.column_count(), grid.row_count());
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = pixel_energy(grid, x, y);
    }
    emap
}

/// Render an energy map as a grayscale image, scaled so that the most
/// energetic pixel is white.  A map with no energy at all is black.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let peak = energy.cells().iter().cloned().fold(0.0, f64::max);
    GrayImage::from_fn(energy.width() as u32, energy.height() as u32, |x, y| {
        let e = energy[(x as usize, y as usize)];
        let level = if peak > 0.0 {
            (e / peak * 255.0).round().min(255.0)
        } else {
            0.0
        };
        Luma([level as u8])
    })
}
