// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam
//!
//! Dynamic programming over the energy map: every pixel records the
//! least total energy of any seam reaching it from the top edge, and
//! which of the (up to) three pixels above it that seam came through.
//! The cheapest pixel on the bottom row is the end of the cheapest
//! seam, and following the back pointers recovers the rest.
//!
//! Ties go to whichever candidate is seen first under a strict `<`:
//! straight up, then up-left, then up-right, and on the bottom row the
//! leftmost column.
//!
//! There is no horizontal algorithm.  A horizontal seam is a vertical
//! seam through the clockwise-turned view, carried back into source
//! rows.  Because the turn puts the bottom source row in view column
//! zero, horizontal ties go to the lowest row, then the row below,
//! then the row above.

use crate::energy::calculate_energy;
use crate::gridview::GridView;
use crate::seam::Seam;
use crate::turned::{row_from_turned, Turned};
use crate::twodmap::{EnergyRecord, TwoDimensionalMap};

/// How seams are requested from anything holding an image.  It's a
/// primitive interface, just enough to make room for other carvers.
pub trait SeamFinder {
    /// One column index per row, top to bottom.
    fn find_vertical_seam(&self) -> Seam;

    /// One row index per column, left to right.
    fn find_horizontal_seam(&self) -> Seam;
}

impl<G: GridView> SeamFinder for G {
    fn find_vertical_seam(&self) -> Seam {
        energy_to_vertical_seam(&calculate_energy(self))
    }

    fn find_horizontal_seam(&self) -> Seam {
        let height = self.row_count();
        Turned::clockwise(self)
            .find_vertical_seam()
            .iter()
            .map(|&index| row_from_turned(index, height))
            .collect::<Vec<_>>()
            .into()
    }
}

// Of the pixels above `x` in `row`, the one with the least total.
fn cheapest_parent(table: &TwoDimensionalMap<EnergyRecord>, x: usize, row: usize) -> usize {
    let right = Some(x + 1).filter(|&r| r < table.width());
    [Some(x), x.checked_sub(1), right]
        .iter()
        .flatten()
        .fold(x, |best, &candidate| {
            if table[(candidate, row)].total < table[(best, row)].total {
                candidate
            } else {
                best
            }
        })
}

/// Given an energy map, return the column of each row's seam pixel,
/// top to bottom.
pub fn energy_to_vertical_seam(energy: &TwoDimensionalMap<f64>) -> Seam {
    let (width, height) = (energy.width(), energy.height());
    if width == 0 || height == 0 {
        return Seam::from(Vec::new());
    }

    let mut table: TwoDimensionalMap<EnergyRecord> = TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        let e = energy[(x, 0)];
        table[(x, 0)] = EnergyRecord {
            energy: e,
            total: e,
            predecessor: None,
        };
    }

    for y in 1..height {
        for x in 0..width {
            let parent = cheapest_parent(&table, x, y - 1);
            let e = energy[(x, y)];
            table[(x, y)] = EnergyRecord {
                energy: e,
                total: e + table[(parent, y - 1)].total,
                predecessor: Some(parent),
            };
        }
    }

    let last = height - 1;
    let mut column = (1..width).fold(0, |best, x| {
        if table[(x, last)].total < table[(best, last)].total {
            x
        } else {
            best
        }
    });

    // Working backwards, collect the columns bottom to top, then
    // reverse.
    let mut seam = (0..height)
        .rev()
        .fold(Vec::with_capacity(height), |mut acc, y| {
            acc.push(column);
            column = table[(column, y)].predecessor.unwrap_or(column);
            acc
        });
    seam.reverse();
    Seam::from(seam)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gridview::materialize;
    use approx::assert_relative_eq;
    use image::{Luma, Rgb, RgbImage};

    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, 9.0, 1.0, 9.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0, 0.0, 9.0, 9.0, 9.0,
        0.0, 9.0,
    ];

    fn noisy(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            let v = (x * 37 + y * 91 + x * y * 13) % 256;
            Rgb([v as u8, (v * 7 % 256) as u8, (255 - v) as u8])
        })
    }

    fn gray_bands(levels: &[u8], vertical: bool) -> image::GrayImage {
        let n = levels.len() as u32;
        let (w, h) = if vertical { (n, 4) } else { (4, n) };
        image::GrayImage::from_fn(w, h, |x, y| {
            let band = if vertical { x } else { y };
            Luma([levels[band as usize]])
        })
    }

    // Every connected path of `length` steps over `limit` indices.
    fn all_paths(length: usize, limit: usize) -> Vec<Vec<usize>> {
        let mut paths: Vec<Vec<usize>> = (0..limit).map(|i| vec![i]).collect();
        for _ in 1..length {
            paths = paths
                .into_iter()
                .flat_map(|path| {
                    let last = *path.last().unwrap();
                    let lo = last.saturating_sub(1);
                    let hi = (last + 1).min(limit - 1);
                    (lo..=hi).map(move |next| {
                        let mut p = path.clone();
                        p.push(next);
                        p
                    })
                })
                .collect();
        }
        paths
    }

    fn assert_connected(seam: &[usize], length: usize, limit: usize) {
        assert_eq!(seam.len(), length);
        assert!(seam.iter().all(|&i| i < limit));
        assert!(seam
            .windows(2)
            .all(|p| (p[0] as isize - p[1] as isize).abs() <= 1));
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energies = TwoDimensionalMap::from_raw(5, 4, ENERGY_DATA.to_vec()).unwrap();
        assert_eq!(&*energy_to_vertical_seam(&energies), &[2, 3, 4, 3]);
    }

    #[test]
    fn flat_energy_runs_straight_down_the_left() {
        let energies = TwoDimensionalMap::new(3, 4);
        assert_eq!(&*energy_to_vertical_seam(&energies), &[0, 0, 0, 0]);
    }

    #[test]
    fn up_left_beats_up_right_on_a_tie() {
        let energies =
            TwoDimensionalMap::from_raw(3, 2, vec![0.0, 5.0, 0.0, 9.0, 0.0, 9.0]).unwrap();
        assert_eq!(&*energy_to_vertical_seam(&energies), &[0, 1]);
    }

    #[test]
    fn straight_up_beats_a_diagonal_tie() {
        let energies =
            TwoDimensionalMap::from_raw(3, 2, vec![2.0, 2.0, 2.0, 9.0, 0.0, 9.0]).unwrap();
        assert_eq!(&*energy_to_vertical_seam(&energies), &[1, 1]);
    }

    #[test]
    fn routes_around_a_bright_center() {
        let image = RgbImage::from_fn(3, 3, |x, y| {
            if (x, y) == (1, 1) {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        let seam = image.find_vertical_seam();
        assert_eq!(&*seam, &[0, 1, 0]);
        assert!(seam.iter().any(|&c| c != 1));
    }

    #[test]
    fn one_column_forces_column_zero() {
        let image = noisy(1, 6);
        assert_eq!(&*image.find_vertical_seam(), &[0; 6]);
    }

    #[test]
    fn one_row_picks_the_cheapest_pixel() {
        // Energies along the row: high, zero, high, zero.
        let image = image::GrayImage::from_fn(4, 1, |x, _| Luma([if x == 3 { 90 } else { 0 }]));
        assert_eq!(&*image.find_vertical_seam(), &[1]);
    }

    #[test]
    fn one_row_horizontal_seam_is_all_zeros() {
        let image = noisy(5, 1);
        assert_eq!(&*image.find_horizontal_seam(), &[0; 5]);
    }

    #[test]
    fn seams_are_connected_and_in_range() {
        for &(w, h) in &[(7, 5), (2, 9), (9, 2), (13, 11)] {
            let image = noisy(w, h);
            assert_connected(&image.find_vertical_seam(), h as usize, w as usize);
            assert_connected(&image.find_horizontal_seam(), w as usize, h as usize);
        }
    }

    #[test]
    fn vertical_seam_follows_a_flat_column() {
        let image = gray_bands(&[0, 0, 0, 100, 200], true);
        assert_eq!(&*image.find_vertical_seam(), &[1; 4]);
    }

    #[test]
    fn horizontal_seam_follows_a_flat_row() {
        // Only row 1 has the same color above and below it.  Mirrored
        // or shifted index mapping would land on row 3 or row 2.
        let image = gray_bands(&[0, 0, 0, 100, 200], false);
        assert_eq!(&*image.find_horizontal_seam(), &[1; 4]);
    }

    #[test]
    fn vertical_seam_is_a_minimum() {
        let image = noisy(4, 4);
        let energy = calculate_energy(&image);
        let best = all_paths(4, 4)
            .into_iter()
            .map(|p| Seam::from(p).total_energy(&energy))
            .fold(f64::INFINITY, f64::min);
        assert_relative_eq!(image.find_vertical_seam().total_energy(&energy), best);
    }

    #[test]
    fn horizontal_seam_is_a_minimum() {
        let image = noisy(5, 3);
        let energy = calculate_energy(&image);
        let cost = |seam: &[usize]| -> f64 {
            seam.iter()
                .enumerate()
                .map(|(x, &y)| energy[(x, y)])
                .sum()
        };
        let best = all_paths(5, 3)
            .iter()
            .map(|p| cost(p.as_slice()))
            .fold(f64::INFINITY, f64::min);
        assert_relative_eq!(cost(&*image.find_horizontal_seam()), best);
    }

    #[test]
    fn horizontal_seam_is_the_turned_vertical_seam() {
        let image = noisy(6, 4);
        let turned = materialize(&Turned::clockwise(&image));
        let expected: Vec<usize> = turned
            .find_vertical_seam()
            .iter()
            .map(|&i| 4 - 1 - i)
            .collect();
        assert_eq!(image.find_horizontal_seam().into_inner(), expected);
    }
}
