// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flat two-dimensional tables
//!
//! An addressable two-dimensional field holding one value per pixel:
//! a plain `f64` for an energy map, or an [`EnergyRecord`] for the
//! seam-finding table.  Storage is a single row-major vector, so a row
//! is contiguous in memory.

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<T: Default + Copy> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Default + Copy> TwoDimensionalMap<T> {
    /// A map of the given dimensions with every cell set to the
    /// default value of the content type.
    pub fn new(width: usize, height: usize) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` if the vector
    /// does not hold exactly `width * height` cells.
    pub fn from_raw(width: usize, height: usize, cells: Vec<T>) -> Option<Self> {
        if cells.len() == width * height {
            Some(TwoDimensionalMap {
                width,
                height,
                cells,
            })
        } else {
            None
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// One row of the map, left to right.
    pub fn row(&self, y: usize) -> &[T] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width]
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    // Keep the index math in a single location and never, ever mess
    // with it.  Same layout as image::ImageBuffer.
    fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl<T: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.cells[self.get_index(x, y)]
    }
}

impl<T: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

/// One cell of the seam-finding table.  Lives exactly as long as one
/// search; the image changes after every removal.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct EnergyRecord {
    /// Gradient energy of this pixel alone.
    pub energy: f64,
    /// Least cumulative energy of any seam from the top edge to here.
    pub total: f64,
    /// Column in the row above that `total` came through.  `None` on
    /// the top row.
    pub predecessor: Option<usize>,
}
