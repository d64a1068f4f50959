// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Read-only pixel grids
//!
//! The energy function and the seam finder only ever need three things
//! from an image: how many columns, how many rows, and the pixel at a
//! coordinate.  Anything that can answer those can be carved, which
//! is how the turned view gets horizontal seams out of the vertical
//! seam finder.

use image::{ImageBuffer, Pixel, Primitive};

pub trait GridView {
    type Pixel: Pixel;

    fn column_count(&self) -> usize;

    fn row_count(&self) -> usize;

    /// The pixel at `column`, `row`.  Callers keep both in range.
    fn pixel(&self, column: usize, row: usize) -> Self::Pixel;
}

impl<P, S> GridView for ImageBuffer<P, Vec<S>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    type Pixel = P;

    fn column_count(&self) -> usize {
        self.width() as usize
    }

    fn row_count(&self) -> usize {
        self.height() as usize
    }

    fn pixel(&self, column: usize, row: usize) -> P {
        *self.get_pixel(column as u32, row as u32)
    }
}

/// Copy any view into a freshly allocated image.
pub fn materialize<G>(view: &G) -> ImageBuffer<G::Pixel, Vec<<G::Pixel as Pixel>::Subpixel>>
where
    G: GridView,
{
    ImageBuffer::from_fn(view.column_count() as u32, view.row_count() as u32, |x, y| {
        view.pixel(x as usize, y as usize)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn image_buffers_are_grids() {
        let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));
        assert_eq!(image.column_count(), 3);
        assert_eq!(image.row_count(), 2);
        assert_eq!(image.pixel(2, 1), Rgb([2, 1, 7]));
    }

    #[test]
    fn materialize_copies_every_pixel() {
        let image = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8, y as u8, 0]));
        let copy = materialize(&image);
        assert_eq!(copy, image);
    }
}
