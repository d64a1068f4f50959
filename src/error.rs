// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carver
//!
//! Every one of these is a precondition violation, detected before the
//! image is touched.  None of them are transient.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeamError {
    /// The seam does not have one entry per row (vertical) or per
    /// column (horizontal).
    #[error("seam has {found} entries, expected {expected}")]
    InvalidSeamLength { expected: usize, found: usize },

    /// An entry of the seam points outside the image.
    #[error("seam entry {position} is {index}, must be below {limit}")]
    InvalidSeamIndex {
        position: usize,
        index: usize,
        limit: usize,
    },

    /// Either the image is empty, or a removal would make it so.
    #[error("cannot carve a {width}x{height} image any further")]
    DegenerateGrid { width: usize, height: usize },

    /// Two consecutive seam entries are more than one pixel apart.
    #[error("seam jumps by more than one pixel at entry {position}")]
    NonAdjacentSeam { position: usize },

    #[error("pixel ({column}, {row}) lies outside a {width}x{height} image")]
    PixelOutOfBounds {
        column: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    /// Seam carving only ever shrinks.
    #[error("cannot enlarge a {width}x{height} image to {target_width}x{target_height}")]
    Enlargement {
        width: usize,
        height: usize,
        target_width: usize,
        target_height: usize,
    },
}

pub type Result<T> = std::result::Result<T, SeamError>;
