// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Quarter-turned grid view
//!
//! A proxy over any [`GridView`] that presents the image rotated by 90°.
//! Columns become rows and rows become columns, so a horizontal seam
//! through the source is a vertical seam through the view, and the
//! vertical seam finder and remover do all the work.
//!
//! The convention matters, because the seam's indices have to be
//! carried back into the source.  Turning clockwise, the source pixel
//! at `(x, y)` lands at `(H - 1 - y, x)` in the view, where `H` is the
//! source height.  A vertical seam through the clockwise view therefore
//! lists, for each source column `x`, the view column `H - 1 - y`, and
//! [`row_from_turned`] undoes that.  The map is its own inverse, so the
//! same function carries a caller's source rows into the view.

use crate::gridview::GridView;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuarterTurn {
    Clockwise,
    CounterClockwise,
}

pub struct Turned<'a, G: GridView> {
    grid: &'a G,
    turn: QuarterTurn,
}

impl<'a, G: GridView> Turned<'a, G> {
    pub fn new(grid: &'a G, turn: QuarterTurn) -> Self {
        Turned { grid, turn }
    }

    pub fn clockwise(grid: &'a G) -> Self {
        Turned::new(grid, QuarterTurn::Clockwise)
    }

    pub fn counter_clockwise(grid: &'a G) -> Self {
        Turned::new(grid, QuarterTurn::CounterClockwise)
    }
}

impl<'a, G: GridView> GridView for Turned<'a, G> {
    type Pixel = G::Pixel;

    fn column_count(&self) -> usize {
        self.grid.row_count()
    }

    fn row_count(&self) -> usize {
        self.grid.column_count()
    }

    fn pixel(&self, column: usize, row: usize) -> G::Pixel {
        match self.turn {
            QuarterTurn::Clockwise => self.grid.pixel(row, self.grid.row_count() - 1 - column),
            QuarterTurn::CounterClockwise => {
                self.grid.pixel(self.grid.column_count() - 1 - row, column)
            }
        }
    }
}

/// Carry an index between source rows and clockwise-view columns.
/// `height` is the height of the source.
pub fn row_from_turned(index: usize, height: usize) -> usize {
    height - 1 - index
}
