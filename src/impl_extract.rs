// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Copying data through views.
//!
//! A view addresses a buffer of `buffer_len()` elements. The element type
//! is free: the routines only clone elements from one position to another.

use itertools::zip;

use crate::axis_kind::AxisKind;
use crate::error::{from_kind, ErrorKind};
use crate::iterators::Iter;
use crate::{Ix, Ixs, Result, View};

/// Data to scatter with [`View::extract_to`].
#[derive(Clone, Debug)]
pub enum Source<'a, T> {
    /// The same value at every addressed offset.
    Scalar(T),
    /// One value per addressed offset, in iteration order.
    Slice(&'a [T]),
}

impl<'a, T> From<&'a [T]> for Source<'a, T> {
    fn from(s: &'a [T]) -> Self {
        Source::Slice(s)
    }
}

impl<'a, T> From<&'a Vec<T>> for Source<'a, T> {
    fn from(s: &'a Vec<T>) -> Self {
        Source::Slice(s)
    }
}

impl View {
    fn check_buffer(&self, len: usize) -> Result<()> {
        if len != self.buffer_len() {
            return Err(from_kind(ErrorKind::LengthMismatch));
        }
        Ok(())
    }

    /// Gather the addressed elements of `src` into a new vector, in
    /// iteration order.
    ///
    /// **Errors** with `LengthMismatch` if `src.len() != buffer_len()`.
    ///
    /// ```
    /// use ndview::{Axis, View};
    ///
    /// let mut v = View::new(&[3]).unwrap();
    /// v.select_indices_dimension(Axis(0), &[2, 0, 1]).unwrap();
    /// assert_eq!(v.extract_from(&[10, 20, 30]).unwrap(), vec![30, 10, 20]);
    /// ```
    pub fn extract_from<T: Clone>(&self, src: &[T]) -> Result<Vec<T>> {
        self.check_buffer(src.len())?;
        Ok(self.offsets().map(|offset| src[offset].clone()).collect())
    }

    /// Gather the addressed elements of `src` into `dst`.
    ///
    /// `src` and `dst` are distinct buffers: gathering within a single
    /// buffer is rejected by the borrow checker, use [`View::copy_within`].
    ///
    /// **Errors** with `LengthMismatch` if `src.len() != buffer_len()` or
    /// `dst.len() != len()`.
    pub fn extract_from_into<T: Clone>(&self, src: &[T], dst: &mut [T]) -> Result<()> {
        self.check_buffer(src.len())?;
        if dst.len() != self.len() {
            return Err(from_kind(ErrorKind::LengthMismatch));
        }
        for (elt, offset) in zip(dst, self.offsets()) {
            *elt = src[offset].clone();
        }
        Ok(())
    }

    /// Scatter `src` into the addressed elements of `dst`.
    ///
    /// **Errors** with `LengthMismatch` if `dst.len() != buffer_len()` or a
    /// slice source does not hold `len()` elements.
    ///
    /// ```
    /// use ndview::{Axis, Source, View};
    ///
    /// let mut v = View::new(&[2, 2]).unwrap();
    /// v.select_dimension(Axis(1), 1).unwrap();
    /// let mut data = [0; 4];
    /// v.extract_to(&mut data, Source::Scalar(7)).unwrap();
    /// assert_eq!(data, [0, 0, 7, 7]);
    /// ```
    pub fn extract_to<T: Clone>(&self, dst: &mut [T], src: Source<'_, T>) -> Result<()> {
        self.check_buffer(dst.len())?;
        match src {
            Source::Scalar(value) => {
                for offset in self.offsets() {
                    dst[offset] = value.clone();
                }
            }
            Source::Slice(values) => {
                if values.len() != self.len() {
                    return Err(from_kind(ErrorKind::LengthMismatch));
                }
                for (value, offset) in zip(values, self.offsets()) {
                    dst[offset] = value.clone();
                }
            }
        }
        Ok(())
    }

    /// Copy the elements addressed by `src_view` in `src` to the elements
    /// addressed by `dst_view` in `dst`, pairing them in iteration order.
    ///
    /// The views may have different shapes as long as they address the same
    /// number of elements.
    ///
    /// **Errors** with `ShapeMismatch` if the views differ in length, and
    /// with `LengthMismatch` if a buffer does not match its view.
    pub fn extract<T: Clone>(src_view: &View, src: &[T], dst_view: &View, dst: &mut [T]) -> Result<()> {
        src_view.check_buffer(src.len())?;
        dst_view.check_buffer(dst.len())?;
        if src_view.len() != dst_view.len() {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        if let (AxisKind::Indexed(si), AxisKind::Indexed(di)) = (&src_view.dims[0], &dst_view.dims[0]) {
            if si.len() == di.len() && !si.is_empty() {
                extract_indexed_rows(src_view, si, src, dst_view, di, dst);
                return Ok(());
            }
        }
        for (s, d) in zip(src_view.offsets(), dst_view.offsets()) {
            dst[d] = src[s].clone();
        }
        Ok(())
    }

    /// Copy between two views of the same buffer.
    ///
    /// **Errors** with `Aliasing` if the views address a common element,
    /// with `ShapeMismatch` if they differ in length, and with
    /// `LengthMismatch` if `buf` does not match either view.
    ///
    /// ```
    /// use ndview::{Axis, View};
    ///
    /// let mut left = View::new(&[2, 2]).unwrap();
    /// left.select_dimension(Axis(1), 0).unwrap();
    /// let mut right = View::new(&[2, 2]).unwrap();
    /// right.select_dimension(Axis(1), 1).unwrap();
    /// let mut data = [1, 2, 3, 4];
    /// View::copy_within(&left, &right, &mut data).unwrap();
    /// assert_eq!(data, [1, 2, 1, 2]);
    /// assert!(View::copy_within(&left, &left, &mut data).is_err());
    /// ```
    pub fn copy_within<T: Clone>(src_view: &View, dst_view: &View, buf: &mut [T]) -> Result<()> {
        src_view.check_buffer(buf.len())?;
        dst_view.check_buffer(buf.len())?;
        if src_view.len() != dst_view.len() {
            return Err(from_kind(ErrorKind::ShapeMismatch));
        }
        let mut read = vec![false; buf.len()];
        for offset in src_view.offsets() {
            read[offset] = true;
        }
        if dst_view.offsets().any(|offset| read[offset]) {
            return Err(from_kind(ErrorKind::Aliasing));
        }
        for (s, d) in zip(src_view.offsets(), dst_view.offsets()) {
            buf[d] = buf[s].clone();
        }
        Ok(())
    }
}

/// Both views are indexed along axis 0 with the same size: walk the two
/// index lists directly for every pair of rows given by the other axes.
fn extract_indexed_rows<T: Clone>(
    src_view: &View,
    si: &[Ixs],
    src: &[T],
    dst_view: &View,
    di: &[Ixs],
    dst: &mut [T],
) {
    let src_rows = Iter::new(src_view, 1).offsets();
    let dst_rows = Iter::new(dst_view, 1).offsets();
    for (srow, drow) in zip(src_rows, dst_rows) {
        // row offsets include the first index of axis 0
        let sbase = srow as Ixs - si[0];
        let dbase = drow as Ixs - di[0];
        for (&s, &d) in zip(si, di) {
            dst[(dbase + d) as Ix] = src[(sbase + s) as Ix].clone();
        }
    }
}
