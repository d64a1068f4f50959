// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A seam is a connected path of pixels running top to bottom (or left
//! to right) through an image.  Removing the seam with the least
//! gradient energy shrinks the image by one column (or row) while
//! leaving the visually busy parts alone.

pub mod energy;
pub mod error;
pub mod gridview;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;
pub mod turned;
pub mod twodmap;

pub use energy::{calculate_energy, energy_to_image, pixel_energy};
pub use error::{Result, SeamError};
pub use gridview::GridView;
pub use seam::Seam;
pub use seamcarver::SeamCarver;
pub use seamfinder::{energy_to_vertical_seam, SeamFinder};
