// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams, and the checks a seam must pass before it may be removed.

use crate::error::{Result, SeamError};
use crate::twodmap::TwoDimensionalMap;
use std::ops::Deref;

/// A connected path through the image, one index per row (vertical
/// seam: column indices) or per column (horizontal seam: row indices).
/// Only meaningful for the image dimensions it was found against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam(Vec<usize>);

impl Seam {
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Sum of the energies the seam passes through, reading the seam
    /// as a vertical one over `energy`.
    pub fn total_energy(&self, energy: &TwoDimensionalMap<f64>) -> f64 {
        self.0
            .iter()
            .enumerate()
            .map(|(row, &column)| energy[(column, row)])
            .sum()
    }
}

impl From<Vec<usize>> for Seam {
    fn from(indices: Vec<usize>) -> Self {
        Seam(indices)
    }
}

impl Deref for Seam {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl AsRef<[usize]> for Seam {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Check a seam against the image it is about to be cut from.  `length`
/// is the extent the seam runs along, `limit` the extent it indexes
/// into.
pub(crate) fn check_seam(seam: &[usize], length: usize, limit: usize) -> Result<()> {
    if seam.len() != length {
        return Err(SeamError::InvalidSeamLength {
            expected: length,
            found: seam.len(),
        });
    }

    if let Some((position, &index)) = seam.iter().enumerate().find(|(_, &i)| i >= limit) {
        return Err(SeamError::InvalidSeamIndex {
            position,
            index,
            limit,
        });
    }

    match seam
        .windows(2)
        .position(|pair| pair[0].max(pair[1]) - pair[0].min(pair[1]) > 1)
    {
        Some(position) => Err(SeamError::NonAdjacentSeam {
            position: position + 1,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_connected_seam() {
        assert_eq!(check_seam(&[0, 1, 2, 2, 1], 5, 3), Ok(()));
    }

    #[test]
    fn rejects_the_wrong_length() {
        assert_eq!(
            check_seam(&[0, 1], 3, 4),
            Err(SeamError::InvalidSeamLength {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_an_index_past_the_edge() {
        assert_eq!(
            check_seam(&[2, 3, 4], 3, 4),
            Err(SeamError::InvalidSeamIndex {
                position: 2,
                index: 4,
                limit: 4
            })
        );
    }

    #[test]
    fn rejects_a_jump() {
        assert_eq!(
            check_seam(&[0, 0, 2, 2], 4, 3),
            Err(SeamError::NonAdjacentSeam { position: 2 })
        );
    }

    #[test]
    fn sums_energy_along_the_path() {
        let energy = TwoDimensionalMap::from_raw(2, 2, vec![1.0, 2.0, 4.0, 8.0]).unwrap();
        let seam = Seam::from(vec![1, 0]);
        assert_eq!(seam.total_energy(&energy), 6.0);
    }
}
