// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use seamcarve::SeamCarver;

fn sample() -> RgbImage {
    RgbImage::from_fn(160, 120, |x, y| {
        let v = (x * 31 + y * 17 + x * y * 5) % 256;
        Rgb([v as u8, (255 - v) as u8, (v / 3) as u8])
    })
}

fn seams(c: &mut Criterion) {
    let image = sample();

    c.bench_function("find vertical seam", |b| {
        let carver = SeamCarver::new(image.clone()).unwrap();
        b.iter(|| black_box(carver.find_vertical_seam()))
    });

    c.bench_function("find horizontal seam", |b| {
        let carver = SeamCarver::new(image.clone()).unwrap();
        b.iter(|| black_box(carver.find_horizontal_seam()))
    });

    c.bench_function("carve ten columns", |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(image.clone()).unwrap();
            carver.carve(150, 120).unwrap();
            black_box(carver.into_image())
        })
    });
}

criterion_group!(benches, seams);
criterion_main!(benches);
