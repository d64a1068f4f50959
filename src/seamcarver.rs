// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The carver itself
//!
//! Owns the image being carved, answers energy and seam queries about
//! it, removes seams from it, and drives the whole thing down to a
//! target size one seam at a time.

use crate::energy::{calculate_energy, pixel_energy};
use crate::error::{Result, SeamError};
use crate::gridview::materialize;
use crate::seam::{check_seam, Seam};
use crate::seamfinder::SeamFinder;
use crate::turned::{row_from_turned, Turned};
use crate::twodmap::TwoDimensionalMap;
use image::{ImageBuffer, Pixel, Primitive};
use log::{debug, trace};

// Compacts the raw buffer in place: each row's pixels left of the
// seam stay put, the ones right of it slide one pixel left, and the
// buffer is truncated by one column's worth.
fn cut_vertical_seam<P, S>(
    image: ImageBuffer<P, Vec<S>>,
    seam: &[usize],
) -> Option<ImageBuffer<P, Vec<S>>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = (image.width() as usize, image.height() as usize);
    let channels = P::CHANNEL_COUNT as usize;
    let stride = width * channels;
    let mut raw = image.into_raw();
    let mut write = 0;
    for (y, &x) in seam.iter().enumerate() {
        let row = y * stride;
        let cut = row + x * channels;
        let end = row + stride;
        raw.copy_within(row..cut, write);
        write += cut - row;
        raw.copy_within(cut + channels..end, write);
        write += end - cut - channels;
    }
    raw.truncate(write);
    ImageBuffer::from_raw((width - 1) as u32, height as u32, raw)
}

#[derive(Debug, PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        match self {
            Carve::Width => Carve::Height,
            Carve::Height => Carve::Width,
        }
    }
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: ImageBuffer<P, Vec<S>>,
}

impl<P, S> SeamCarver<P, S>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Takes ownership of an image.  An image with no pixels has
    /// nothing to carve and is refused.
    pub fn new(image: ImageBuffer<P, Vec<S>>) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(SeamError::DegenerateGrid {
                width: image.width() as usize,
                height: image.height() as usize,
            });
        }
        Ok(SeamCarver { image })
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    pub fn image(&self) -> &ImageBuffer<P, Vec<S>> {
        &self.image
    }

    pub fn into_image(self) -> ImageBuffer<P, Vec<S>> {
        self.image
    }

    /// Energy of the pixel at column `i`, row `j`.
    pub fn energy(&self, i: usize, j: usize) -> Result<f64> {
        let (width, height) = (self.width(), self.height());
        if i >= width || j >= height {
            return Err(SeamError::PixelOutOfBounds {
                column: i,
                row: j,
                width,
                height,
            });
        }
        Ok(pixel_energy(&self.image, i, j))
    }

    pub fn energy_map(&self) -> TwoDimensionalMap<f64> {
        calculate_energy(&self.image)
    }

    pub fn find_vertical_seam(&self) -> Seam {
        self.image.find_vertical_seam()
    }

    pub fn find_horizontal_seam(&self) -> Seam {
        self.image.find_horizontal_seam()
    }

    /// Remove one pixel from every row, at the column the seam names
    /// for that row.  The image is one column narrower afterward.
    pub fn remove_vertical_seam(&mut self, seam: &[usize]) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if width <= 1 {
            return Err(SeamError::DegenerateGrid { width, height });
        }
        check_seam(seam, height, width)?;

        let image = std::mem::replace(&mut self.image, ImageBuffer::new(0, 0));
        self.image = cut_vertical_seam(image, seam)
            .ok_or(SeamError::DegenerateGrid { width, height })?;
        debug!("removed vertical seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Remove one pixel from every column, at the row the seam names
    /// for that column.  The image is one row shorter afterward.
    ///
    /// Turns the image clockwise, carries the seam's rows into the
    /// turned image's columns, removes it there as a vertical seam, and
    /// turns the result back.
    pub fn remove_horizontal_seam(&mut self, seam: &[usize]) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if height <= 1 {
            return Err(SeamError::DegenerateGrid { width, height });
        }
        check_seam(seam, width, height)?;

        let turned_seam: Vec<usize> = seam
            .iter()
            .map(|&row| row_from_turned(row, height))
            .collect();
        let turned = materialize(&Turned::clockwise(&self.image));
        let turned = cut_vertical_seam(turned, &turned_seam)
            .ok_or(SeamError::DegenerateGrid { width, height })?;
        self.image = materialize(&Turned::counter_clockwise(&turned));
        debug!("removed horizontal seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    fn carve_once(&mut self, direction: Carve) -> Result<()> {
        match direction {
            Carve::Width => {
                let seam = self.find_vertical_seam();
                trace!("vertical seam {:?}", seam);
                self.remove_vertical_seam(&seam)
            }
            Carve::Height => {
                let seam = self.find_horizontal_seam();
                trace!("horizontal seam {:?}", seam);
                self.remove_horizontal_seam(&seam)
            }
        }
    }

    // This is absurdly inefficient, as the entire energy map and seam
    // table are recalculated for every seam.  Only the pixels either
    // side of the last seam actually changed.

    /// Repeatedly carve seams out of the image until it is `width` by
    /// `height`.  While both dimensions are too large, alternate between
    /// columns and rows; then finish whichever is left.
    pub fn carve(&mut self, width: usize, height: usize) -> Result<()> {
        let (current_width, current_height) = (self.width(), self.height());
        if width > current_width || height > current_height {
            return Err(SeamError::Enlargement {
                width: current_width,
                height: current_height,
                target_width: width,
                target_height: height,
            });
        }
        if width == 0 || height == 0 {
            return Err(SeamError::DegenerateGrid { width, height });
        }

        let mut direction = Carve::Width;
        while self.width() > width && self.height() > height {
            self.carve_once(direction)?;
            direction = direction.turn();
            debug!("B: {}, {}", self.width(), self.height());
        }
        while self.width() > width {
            self.carve_once(Carve::Width)?;
            debug!("W: {}, {}", self.width(), self.height());
        }
        while self.height() > height {
            self.carve_once(Carve::Height)?;
            debug!("H: {}, {}", self.width(), self.height());
        }
        Ok(())
    }
}
