// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::cmp;
use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::axis_kind::AxisKind;
use crate::error::{from_kind, ErrorKind};
use crate::{Axis, Ix, Ixs, Result};

/// Views always store at least this many axes.
pub(crate) const MIN_RANK: usize = 2;

/// How trailing singleton axes are treated when comparing shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TrailingDims {
    /// `[3, 4]` and `[3, 4, 1]` are the same shape.
    Ignore,
    /// Every stored axis must match, singletons included.
    Strict,
}

/// An n-dimensional view: an address computation object mapping
/// coordinates to offsets in a flat buffer it does not own.
///
/// A view is created from a shape, laid out column-major: axis 0 has step 1
/// and axis *k* has the product of the sizes of the axes before it as step.
/// Selection and rearrangement methods then rewrite the per-axis
/// [`AxisKind`]s in place without touching any data; [`View::extract_from`]
/// and friends move data through the resulting offsets.
///
/// ```
/// use ndview::{Axis, View};
///
/// let mut v = View::new(&[3, 2]).unwrap();
/// v.flip_dimension(Axis(0)).select_dimension(Axis(1), 1).unwrap();
/// let data = [1, 2, 3, 4, 5, 6];
/// assert_eq!(v.extract_from(&data).unwrap(), vec![6, 5, 4]);
/// ```
///
/// `Clone` duplicates the saved states as well; [`View::copy_of`] starts a
/// fresh history from the current state.
#[derive(Clone, Debug)]
pub struct View {
    pub(crate) dims: Vec<AxisKind>,
    initial: Vec<AxisKind>,
    saved: Vec<Vec<AxisKind>>,
    /// Length of the buffer every offset points into.
    buffer_len: Ix,
}

impl View {
    /// Create a view of a buffer holding `shape` elements column-major.
    ///
    /// Shapes with fewer than two axes are padded with singletons.
    ///
    /// **Errors** with `InvalidShape` if `shape` is empty or the element
    /// count does not fit in an `isize`.
    pub fn new(shape: &[Ix]) -> Result<View> {
        if shape.is_empty() {
            return Err(from_kind(ErrorKind::InvalidShape));
        }
        let mut dims = Vec::with_capacity(cmp::max(MIN_RANK, shape.len()));
        let mut stride: Ix = 1;
        for &size in shape {
            dims.push(AxisKind::Stepped { first: 0, step: stride as Ixs, size });
            stride = stride
                .checked_mul(size)
                .filter(|&s| s <= Ixs::MAX as Ix)
                .ok_or_else(|| from_kind(ErrorKind::InvalidShape))?;
        }
        while dims.len() < MIN_RANK {
            dims.push(AxisKind::singleton());
        }
        Ok(View::from_dims(dims))
    }

    fn from_dims(dims: Vec<AxisKind>) -> View {
        debug_assert!(dims.len() >= MIN_RANK);
        View {
            buffer_len: dims.iter().map(AxisKind::size).product(),
            initial: dims.clone(),
            dims,
            saved: Vec::new(),
        }
    }

    /// Rebuild a view from stored parts, checking that both states have a
    /// representable element count and that every offset they produce lies
    /// in `0..buffer_len`.
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn from_parts(
        dims: Vec<AxisKind>,
        initial: Vec<AxisKind>,
        buffer_len: Ix,
    ) -> Result<View> {
        if dims.len() < MIN_RANK || initial.len() < MIN_RANK || buffer_len > Ixs::MAX as Ix {
            return Err(from_kind(ErrorKind::InvalidShape));
        }
        for state in [&dims, &initial] {
            checked_len(state).ok_or_else(|| from_kind(ErrorKind::InvalidShape))?;
            offsets_within(state, buffer_len)?;
        }
        Ok(View {
            dims,
            initial,
            saved: Vec::new(),
            buffer_len,
        })
    }

    /// Copy the current state of `other` into a new view.
    ///
    /// The copy's initial state is `other`'s current state and it has no
    /// saved states. It addresses the same buffer as `other`.
    ///
    /// ```
    /// use ndview::{Axis, View};
    ///
    /// let mut v = View::new(&[4]).unwrap();
    /// v.select_dimension(Axis(0), [2, 3]).unwrap();
    /// let c = View::copy_of(&v);
    /// assert_eq!(c.initial_len(), 2);
    /// assert_eq!(c.buffer_len(), 4);
    /// assert_eq!(c.extract_from(&[10, 20, 30, 40]).unwrap(), vec![30, 40]);
    /// ```
    pub fn copy_of(other: &View) -> View {
        View {
            dims: other.dims.clone(),
            initial: other.dims.clone(),
            saved: Vec::new(),
            buffer_len: other.buffer_len,
        }
    }

    /// Number of stored axes, trailing singletons included.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Number of axes once trailing singleton axes are stripped; at least 2.
    pub fn rank(&self) -> usize {
        rank_of(&self.dims)
    }

    /// Number of elements addressed by the view.
    pub fn len(&self) -> Ix {
        self.dims.iter().map(AxisKind::size).product()
    }

    /// Return `true` if the view addresses no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size along `axis`, 1 past the stored axes.
    #[inline]
    pub fn size(&self, axis: Axis) -> Ix {
        self.dims.get(axis.index()).map_or(1, AxisKind::size)
    }

    /// Sizes of the first `rank()` axes.
    pub fn shape(&self) -> Vec<Ix> {
        shape_of(&self.dims)
    }

    /// Number of elements addressed by the initial state.
    pub fn initial_len(&self) -> Ix {
        self.initial.iter().map(AxisKind::size).product()
    }

    /// Shape of the initial state.
    pub fn initial_shape(&self) -> Vec<Ix> {
        shape_of(&self.initial)
    }

    /// Length of the buffer the view addresses, the element count of the
    /// shape it was created with. Copies keep the length of their source.
    #[inline]
    pub fn buffer_len(&self) -> Ix {
        self.buffer_len
    }

    /// The stored axes.
    pub fn dims(&self) -> &[AxisKind] {
        &self.dims
    }

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn initial_dims(&self) -> &[AxisKind] {
        &self.initial
    }

    pub fn is_indexed(&self, axis: Axis) -> bool {
        self.dims.get(axis.index()).map_or(false, AxisKind::is_indexed)
    }

    /// Offsets of an indexed axis.
    ///
    /// **Errors** with `NotIndexed` if the axis is stepped.
    pub fn indices(&self, axis: Axis) -> Result<&[Ixs]> {
        match self.dims.get(axis.index()) {
            Some(AxisKind::Indexed(indices)) => Ok(&indices[..]),
            _ => Err(from_kind(ErrorKind::NotIndexed)),
        }
    }

    /// Offset contribution of the first element of a stepped axis.
    ///
    /// **Errors** with `IsIndexed` if the axis is indexed.
    pub fn first(&self, axis: Axis) -> Result<Ixs> {
        self.stepped(axis).map(|(first, _, _)| first)
    }

    /// Stride of a stepped axis.
    ///
    /// **Errors** with `IsIndexed` if the axis is indexed.
    pub fn step(&self, axis: Axis) -> Result<Ixs> {
        self.stepped(axis).map(|(_, step, _)| step)
    }

    /// One past the last contribution of a stepped axis
    /// (`first + size * step`), or `-1` for an indexed axis.
    pub fn end(&self, axis: Axis) -> Ixs {
        match self.stepped(axis) {
            Ok((first, step, size)) => first + size as Ixs * step,
            Err(_) => -1,
        }
    }

    fn stepped(&self, axis: Axis) -> Result<(Ixs, Ixs, Ix)> {
        match self.dims.get(axis.index()) {
            Some(&AxisKind::Stepped { first, step, size }) => Ok((first, step, size)),
            Some(AxisKind::Indexed(_)) => Err(from_kind(ErrorKind::IsIndexed)),
            None => Ok((0, 1, 1)),
        }
    }

    /// Buffer offset of an element.
    ///
    /// `coords` is either one coordinate per axis of `rank()`, or a single
    /// linear index counted column-major through the view.
    ///
    /// **Errors** with `OutOfBounds` if a coordinate is too large and with
    /// `RankMismatch` if the number of coordinates is neither 1 nor `rank()`.
    ///
    /// ```
    /// use ndview::View;
    ///
    /// let v = View::new(&[2, 3, 4]).unwrap();
    /// assert_eq!(v.absolute_index(&[1, 2, 3]).unwrap(), 1 + 2 * 2 + 3 * 6);
    /// assert_eq!(v.absolute_index(&[23]).unwrap(), 23);
    /// ```
    pub fn absolute_index(&self, coords: &[Ix]) -> Result<Ixs> {
        let rank = self.rank();
        if coords.len() == 1 {
            let sub = self.subscript(coords[0])?;
            return Ok(self.offset_of(&sub));
        }
        if coords.len() != rank {
            return Err(from_kind(ErrorKind::RankMismatch));
        }
        if coords
            .iter()
            .enumerate()
            .any(|(axis, &c)| c >= self.size(Axis(axis)))
        {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(self.offset_of(coords))
    }

    /// Coordinates, one per axis of `rank()`, of the element at column-major
    /// position `linear` of the view.
    ///
    /// **Errors** with `OutOfBounds` if `linear >= len()`.
    pub fn subscript(&self, linear: Ix) -> Result<Vec<Ix>> {
        if linear >= self.len() {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        let mut rest = linear;
        Ok((0..self.rank())
            .map(|axis| {
                let size = self.size(Axis(axis));
                let c = rest % size;
                rest /= size;
                c
            })
            .collect())
    }

    /// Sum of contributions at `coords`; missing coordinates are 0.
    pub(crate) fn offset_of(&self, coords: &[Ix]) -> Ixs {
        self.dims
            .iter()
            .enumerate()
            .map(|(axis, d)| match coords.get(axis) {
                Some(&c) => d.offset_at(c),
                None => d.leading(),
            })
            .sum()
    }

    /// Sum of the frozen contributions of the axes before `axis`.
    pub(crate) fn leading_offset(&self, axis: usize) -> Ixs {
        self.dims[..axis].iter().map(AxisKind::leading).sum()
    }

    /// Return `true` if both views have the same shape.
    ///
    /// ```
    /// use ndview::{TrailingDims, View};
    ///
    /// let a = View::new(&[3, 4]).unwrap();
    /// let b = View::new(&[3, 4, 1]).unwrap();
    /// assert!(a.shape_eq(&b, TrailingDims::Ignore));
    /// assert!(!a.shape_eq(&b, TrailingDims::Strict));
    /// ```
    pub fn shape_eq(&self, other: &View, trailing: TrailingDims) -> bool {
        match trailing {
            TrailingDims::Ignore => self.shape() == other.shape(),
            TrailingDims::Strict => {
                self.ndim() == other.ndim()
                    && self.dims.iter().zip(&other.dims).all(|(a, b)| a.size() == b.size())
            }
        }
    }

    /// Return `true` if the view walks `0..len()` in order, so that
    /// extraction is a plain copy of the buffer prefix.
    pub fn is_contiguous(&self) -> bool {
        self.offsets().enumerate().all(|(i, offset)| i == offset)
    }

    /// Push the current state on the stack of saved states.
    pub fn save(&mut self) -> &mut Self {
        self.saved.push(self.dims.clone());
        self
    }

    /// Pop the last saved state, or go back to the initial state if nothing
    /// is saved.
    pub fn restore(&mut self) -> &mut Self {
        self.dims = match self.saved.pop() {
            Some(dims) => dims,
            None => {
                debug!("restore: no saved state, resetting to initial state");
                self.initial.clone()
            }
        };
        self
    }

    /// Pad with singleton axes up to `ndim` stored axes.
    pub(crate) fn expand_to(&mut self, ndim: usize) {
        while self.dims.len() < ndim {
            self.dims.push(AxisKind::singleton());
        }
    }
}

fn rank_of(dims: &[AxisKind]) -> usize {
    let last = dims.iter().rposition(|d| d.size() != 1).map_or(0, |p| p + 1);
    cmp::max(MIN_RANK, last)
}

fn shape_of(dims: &[AxisKind]) -> Vec<Ix> {
    (0..rank_of(dims))
        .map(|axis| dims.get(axis).map_or(1, AxisKind::size))
        .collect()
}

#[cfg_attr(not(feature = "serde"), allow(dead_code))]
fn checked_len(dims: &[AxisKind]) -> Option<Ix> {
    dims.iter()
        .try_fold(1, |len: Ix, d| len.checked_mul(d.size()))
        .filter(|&len| len <= Ixs::MAX as Ix)
}

/// Check that every offset of `dims` lies in `0..buffer_len`.
///
/// **Errors** with `OutOfBounds` if one does not, or if the offset range
/// cannot be computed without overflow.
#[cfg_attr(not(feature = "serde"), allow(dead_code))]
fn offsets_within(dims: &[AxisKind], buffer_len: Ix) -> Result<()> {
    if dims.iter().any(|d| d.size() == 0) {
        return Ok(());
    }
    let overflow = || from_kind(ErrorKind::OutOfBounds);
    let mut low: Ixs = 0;
    let mut high: Ixs = 0;
    for d in dims {
        if let Some((lo, hi)) = d.bounds()? {
            low = low.checked_add(lo).ok_or_else(overflow)?;
            high = high.checked_add(hi).ok_or_else(overflow)?;
        }
    }
    if low < 0 || high as Ix >= buffer_len {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    Ok(())
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "View(shape=[{}], axes=[{}])",
            self.shape().iter().format(", "),
            self.dims.iter().format(", ")
        )
    }
}
