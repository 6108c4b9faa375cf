use defmac::defmac;
use num_complex::Complex;
use quickcheck::{quickcheck, TestResult};

use ndview::prelude::*;
use ndview::ErrorKind;

defmac!(iota n => (0..n as i32).collect::<Vec<i32>>());

quickcheck! {
    fn extract_then_insert_round_trips(rows: u8, cols: u8, k: i8, flip: bool) -> TestResult {
        let (rows, cols) = (rows as Ix % 6 + 1, cols as Ix % 6 + 1);
        let data = iota!(rows * cols);
        let mut v = View::new(&[rows, cols]).unwrap();
        v.rot90(k as Ixs).circshift(&[k as Ixs, 1]);
        if flip {
            v.flip_lr();
        }
        let gathered = v.extract_from(&data).unwrap();
        let mut back = vec![-1; data.len()];
        v.extract_to(&mut back, Source::Slice(&gathered)).unwrap();
        TestResult::from_bool(back == data)
    }
}

#[test]
fn gather_by_index_list() {
    let mut v = View::new(&[3, 1]).unwrap();
    v.select_indices_dimension(Axis(0), &[2, 0, 1]).unwrap();
    assert_eq!(v.extract_from(&[10, 20, 30]).unwrap(), vec![30, 10, 20]);
}

#[test]
fn extract_into_slice() {
    let data = iota!(12);
    let mut v = View::new(&[3, 4]).unwrap();
    v.select_dimension(Axis(0), 1).unwrap();
    let mut row = [0; 4];
    v.extract_from_into(&data, &mut row).unwrap();
    assert_eq!(row, [1, 4, 7, 10]);
    let mut short = [0; 3];
    assert_eq!(
        v.extract_from_into(&data, &mut short).unwrap_err().kind(),
        ErrorKind::LengthMismatch
    );
}

#[test]
fn scatter_scalar_and_slice() {
    let mut buf = vec![0; 9];
    let mut v = View::new(&[3, 3]).unwrap();
    v.select_dimension(Axis(0), [0, 2, 2]).unwrap();
    v.extract_to(&mut buf, Source::Scalar(1)).unwrap();
    assert_eq!(buf, [1, 0, 1, 1, 0, 1, 1, 0, 1]);

    v.restore().select_dimension(Axis(1), 1).unwrap().flip_ud();
    let values = vec![7, 8, 9];
    v.extract_to(&mut buf, Source::from(&values)).unwrap();
    assert_eq!(buf, [1, 0, 1, 9, 8, 7, 1, 0, 1]);

    assert_eq!(
        v.extract_to(&mut buf, Source::from(&values[..2])).unwrap_err().kind(),
        ErrorKind::LengthMismatch
    );
    assert_eq!(
        v.extract_to(&mut buf[..8], Source::Scalar(0)).unwrap_err().kind(),
        ErrorKind::LengthMismatch
    );
}

#[test]
fn view_to_view() {
    // copy the transposed 2 x 3 block into the last two columns of a 3 x 3
    let src = iota!(6);
    let mut src_view = View::new(&[2, 3]).unwrap();
    src_view.permute(&[1, 0]).unwrap();
    let mut dst = vec![0; 9];
    let mut dst_view = View::new(&[3, 3]).unwrap();
    dst_view.select_dimension(Axis(1), [1, 2]).unwrap();

    View::extract(&src_view, &src, &dst_view, &mut dst).unwrap();
    assert_eq!(dst, [0, 0, 0, 0, 2, 4, 1, 3, 5]);
}

#[test]
fn view_to_view_different_shapes() {
    let src = iota!(6);
    let src_view = View::new(&[6]).unwrap();
    let mut dst = vec![0; 6];
    let mut dst_view = View::new(&[2, 3]).unwrap();
    dst_view.flip_lr();
    View::extract(&src_view, &src, &dst_view, &mut dst).unwrap();
    assert_eq!(dst, [4, 5, 2, 3, 0, 1]);
}

#[test]
fn view_to_view_errors() {
    let src = iota!(6);
    let src_view = View::new(&[2, 3]).unwrap();
    let mut dst_view = View::new(&[2, 3]).unwrap();
    dst_view.select_dimension(Axis(1), 0).unwrap();
    let mut dst = vec![0; 6];
    assert_eq!(
        View::extract(&src_view, &src, &dst_view, &mut dst).unwrap_err().kind(),
        ErrorKind::ShapeMismatch
    );
    assert_eq!(
        View::extract(&src_view, &src[..5], &src_view, &mut dst).unwrap_err().kind(),
        ErrorKind::LengthMismatch
    );
    assert_eq!(dst, [0; 6]);
}

#[test]
fn indexed_rows_copy() {
    let src = iota!(12);
    let mut src_view = View::new(&[3, 4]).unwrap();
    src_view
        .select_indices_dimension(Axis(0), &[2, 1])
        .unwrap()
        .select_dimension(Axis(1), [1, 2])
        .unwrap();
    let mut dst = vec![0; 4];
    let mut dst_view = View::new(&[2, 2]).unwrap();
    dst_view.select_indices_dimension(Axis(0), &[1, 0]).unwrap();
    View::extract(&src_view, &src, &dst_view, &mut dst).unwrap();
    // src rows [2, 1] of columns [1, 2] land in dst rows [1, 0]
    assert_eq!(dst, [4, 5, 7, 8]);
}

#[test]
fn copy_inside_one_buffer() {
    let mut buf = iota!(8);
    let mut top = View::new(&[2, 4]).unwrap();
    top.select_dimension(Axis(0), 0).unwrap();
    let mut bottom = View::new(&[2, 4]).unwrap();
    bottom.select_dimension(Axis(0), 1).unwrap().flip_lr();
    View::copy_within(&top, &bottom, &mut buf).unwrap();
    assert_eq!(buf, [0, 6, 2, 4, 4, 2, 6, 0]);

    let mut overlap = View::new(&[2, 4]).unwrap();
    overlap.select_dimension(Axis(1), [1, 2]).unwrap();
    let mut head = View::new(&[2, 4]).unwrap();
    head.select_dimension(Axis(1), [0, 1]).unwrap();
    assert_eq!(
        View::copy_within(&head, &overlap, &mut buf).unwrap_err().kind(),
        ErrorKind::Aliasing
    );
    assert_eq!(buf, [0, 6, 2, 4, 4, 2, 6, 0]);
}

#[test]
fn complex_elements() {
    let data = (0..4)
        .map(|i| Complex::new(i as f64, -(i as f64)))
        .collect::<Vec<_>>();
    let mut v = View::new(&[2, 2]).unwrap();
    v.rot90(2);
    let out = v.extract_from(&data).unwrap();
    assert_eq!(out[0], Complex::new(3., -3.));
    assert_eq!(out[3], Complex::new(0., 0.));

    let mut buf = vec![Complex::new(0., 0.); 4];
    v.extract_to(&mut buf, Source::Scalar(Complex::new(1., 1.))).unwrap();
    assert!(buf.iter().all(|c| *c == Complex::new(1., 1.)));
}

#[test]
fn non_copy_elements() {
    let words = ["a", "b", "c", "d", "e", "f"]
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();
    let mut v = View::new(&[3, 2]).unwrap();
    v.select_dimension(Axis(0), colon![-1, -1, 0]).unwrap();
    v.select_dimension(Axis(1), 1).unwrap();
    assert_eq!(v.extract_from(&words).unwrap(), vec!["f", "e", "d"]);
}

#[test]
fn copy_of_selection_uses_source_buffer() {
    let mut v = View::new(&[4]).unwrap();
    v.select_dimension(Axis(0), [2, 3]).unwrap();
    let c = View::copy_of(&v);
    assert_eq!(c.initial_len(), 2);
    assert_eq!(c.buffer_len(), 4);

    let data = [10, 20, 30, 40];
    assert_eq!(c.extract_from(&data).unwrap(), vec![30, 40]);
    let mut out = [0; 2];
    c.extract_from_into(&data, &mut out).unwrap();
    assert_eq!(out, [30, 40]);
    let mut buf = data;
    c.extract_to(&mut buf, Source::Scalar(0)).unwrap();
    assert_eq!(buf, [10, 20, 0, 0]);

    assert_eq!(
        c.extract_from(&[10, 20]).unwrap_err().kind(),
        ErrorKind::LengthMismatch
    );
}
