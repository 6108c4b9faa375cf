// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error related to view construction, selection or extraction.
///
/// Every fallible operation of the crate returns this type. A view is left
/// unchanged by a call that fails.
#[derive(Clone, Debug)]
pub struct ViewError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ViewError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ViewError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error related to a view.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// shape is empty or its element count overflows
    InvalidShape,
    /// axis is not a valid axis for this operation
    InvalidDimension,
    /// colon triple is malformed or out of range
    InvalidColon,
    /// coordinate or position out of range
    OutOfBounds,
    /// boolean mask length differs from the axis size
    SizeMismatch,
    /// number of coordinates matches neither 1 nor the rank
    RankMismatch,
    /// order is not a permutation covering the rank
    InvalidPermutation,
    /// shift amount not smaller than the rank
    InvalidShift,
    /// operation requires a stepped axis
    IsIndexed,
    /// operation requires an indexed axis
    NotIndexed,
    /// buffer length differs from the view's requirement
    LengthMismatch,
    /// source and destination views have different lengths
    ShapeMismatch,
    /// source and destination regions overlap
    Aliasing,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ViewError {
    ViewError { repr: k }
}

impl PartialEq for ViewError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Eq for ViewError {}

impl Error for ViewError {}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::InvalidShape => "invalid shape",
            ErrorKind::InvalidDimension => "invalid dimension",
            ErrorKind::InvalidColon => "invalid colon (malformed or out of range)",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::SizeMismatch => "mask length does not match axis size",
            ErrorKind::RankMismatch => "number of indices does not match rank",
            ErrorKind::InvalidPermutation => "invalid permutation",
            ErrorKind::InvalidShift => "shift is not smaller than the rank",
            ErrorKind::IsIndexed => "axis is indexed",
            ErrorKind::NotIndexed => "axis is not indexed",
            ErrorKind::LengthMismatch => "buffer length does not match view",
            ErrorKind::ShapeMismatch => "views have different lengths",
            ErrorKind::Aliasing => "source and destination views overlap",
        };
        write!(f, "ViewError/{:?}: {}", self.kind(), description)
    }
}
