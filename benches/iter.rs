#![feature(test)]

extern crate test;
use test::{black_box, Bencher};

use ndview::prelude::*;

#[bench]
fn offsets_sum_2d_regular(bench: &mut Bencher) {
    let v = View::new(&[64, 64]).unwrap();
    bench.iter(|| v.offsets().fold(0, |acc, x| acc + x));
}

#[bench]
fn offsets_sum_2d_cutout(bench: &mut Bencher) {
    let mut v = View::new(&[66, 66]).unwrap();
    v.select_dimension(Axis(0), [1, -2])
        .unwrap()
        .select_dimension(Axis(1), [1, -2])
        .unwrap();
    bench.iter(|| v.offsets().fold(0, |acc, x| acc + x));
}

#[bench]
fn offsets_sum_2d_indexed(bench: &mut Bencher) {
    let mut v = View::new(&[64, 64]).unwrap();
    v.circshift(&[7, 3]);
    bench.iter(|| v.offsets().fold(0, |acc, x| acc + x));
}

#[bench]
fn protocol_sum_3d_transposed(bench: &mut Bencher) {
    let mut v = View::new(&[16, 16, 16]).unwrap();
    v.permute(&[2, 0, 1]).unwrap();
    bench.iter(|| {
        let mut it = v.iter(Axis(0)).unwrap();
        let mut sum = 0;
        let mut offset = it.begin();
        while offset != END {
            sum += offset;
            offset = it.advance();
        }
        sum
    });
}

#[bench]
fn extract_2d_flipped(bench: &mut Bencher) {
    let data = (0..64 * 64).map(|x| x as f64).collect::<Vec<_>>();
    let mut v = View::new(&[64, 64]).unwrap();
    v.flip_lr();
    bench.iter(|| black_box(v.extract_from(&data).unwrap()));
}

#[bench]
fn extract_indexed_rows(bench: &mut Bencher) {
    let src = (0..64 * 64).map(|x| x as f64).collect::<Vec<_>>();
    let rows = (0..64).rev().collect::<Vec<_>>();
    let mut src_view = View::new(&[64, 64]).unwrap();
    src_view.select_indices_dimension(Axis(0), &rows).unwrap();
    let mut dst_view = View::new(&[64, 64]).unwrap();
    dst_view.circshift_axis(1, Axis(0));
    let mut dst = vec![0.; 64 * 64];
    bench.iter(|| View::extract(&src_view, &src, &dst_view, &mut dst).unwrap());
}
