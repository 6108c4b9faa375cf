// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndview"]
#![doc(html_root_url = "https://docs.rs/ndview/0.1/")]
#![warn(missing_debug_implementations)]

//! The `ndview` crate provides [`View`], the addressing engine of a
//! MATLAB-like n-dimensional array over a flat buffer.
//!
//! A view maps n-dimensional coordinates to offsets in a buffer it does not
//! own. Each axis is either *stepped* (an affine map `first + i * step`) or
//! *indexed* (an explicit list of offsets, produced by index lists, boolean
//! masks and circular shifts).
//!
//! - **Selection and rearrangement**: [`View::select_dimension`] with a
//!   [`Colon`], [`View::select_indices_dimension`],
//!   [`View::select_boolean_dimension`], [`View::permute`],
//!   [`View::shift_dimension`], [`View::flip_dimension`], [`View::rot90`],
//!   [`View::circshift`]; undo with [`View::save`] and [`View::restore`].
//! - **Iteration**: [`View::iter`] returns an [`Iter`], an odometer over the
//!   offsets with axis 0 fastest; [`View::offsets`] is the same as a std
//!   iterator.
//! - **Copying**: [`View::extract_from`], [`View::extract_to`],
//!   [`View::extract`] and [`View::copy_within`] move elements of any
//!   `Clone` type through views.
//!
//! Buffers are laid out column-major: a view created with shape `[2, 3, 4]`
//! addresses element `(i, j, k)` at `i + 2 * j + 6 * k`.
//!
//! ```
//! use ndview::prelude::*;
//!
//! // 3 x 3 matrix, column-major
//! let data = (0..9).collect::<Vec<_>>();
//! let mut v = View::new(&[3, 3]).unwrap();
//! v.select_boolean_dimension(Axis(0), &[true, false, true]).unwrap()
//!  .flip_lr();
//! assert_eq!(v.shape(), vec![2, 3]);
//! assert_eq!(v.extract_from(&data).unwrap(), vec![6, 8, 3, 5, 0, 2]);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `serde`: serialization of [`View`], [`AxisKind`] and [`Colon`].

#[macro_use]
mod macros;

mod axis;
mod axis_kind;
mod error;
mod impl_extract;
mod impl_select;
pub mod iterators;
pub mod prelude;
mod slice;
mod view;
#[cfg(feature = "serde")]
mod view_serde;

pub use crate::axis::Axis;
pub use crate::axis_kind::AxisKind;
pub use crate::error::{ErrorKind, ViewError};
pub use crate::impl_extract::Source;
pub use crate::iterators::{Iter, Offsets, END};
pub use crate::slice::Colon;
pub use crate::view::{TrailingDims, View};

/// Array index type: sizes, positions and coordinates.
pub type Ix = usize;
/// Signed offset type: buffer offsets and strides.
pub type Ixs = isize;

/// Result type of the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, ViewError>;
