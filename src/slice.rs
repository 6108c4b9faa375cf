// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::RangeFull;
use std::str::FromStr;

use crate::error::{from_kind, ErrorKind};
use crate::{Ix, Ixs, Result, ViewError};

/// A selection along one axis: `first`, `step` and an inclusive `last`.
///
/// Negative `first` or `last` are counted from the back of the axis, `-1`
/// being the last element.
///
/// ## Examples
///
/// `Colon::all()` is the full range of an axis. It can also be created with
/// `Colon::from(..)` or `colon![..]`. The MATLAB equivalent is `(:)`.
///
/// `Colon::new(a, 2, b)` is every second element from `a` up to and
/// including `b`. It can also be created with `Colon::from([a, 2, b])` or
/// `colon![a, 2, b]`. The MATLAB equivalent is `(a+1:2:b+1)`.
///
/// `Colon::new(-1, -1, 0)` is every element in reverse order. The MATLAB
/// equivalent is `(end:-1:1)`.
///
/// A colon whose direction disagrees with its step, such as
/// `Colon::new(3, 1, 1)`, selects nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colon {
    pub first: Ixs,
    pub step: Ixs,
    pub last: Ixs,
}

/// A colon resolved against a concrete axis size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ColonRange {
    pub start: Ix,
    pub step: Ixs,
    pub len: Ix,
}

impl ColonRange {
    /// Position of the `i`th selected element.
    #[inline]
    pub fn position(&self, i: Ix) -> Ix {
        (self.start as Ixs + i as Ixs * self.step) as Ix
    }
}

impl Colon {
    /// Create a new `Colon` with the given extents.
    ///
    /// `step` must be nonzero, this is checked when the colon is applied.
    pub fn new(first: Ixs, step: Ixs, last: Ixs) -> Colon {
        Colon { first, step, last }
    }

    /// The whole axis, in order.
    pub fn all() -> Colon {
        Colon::new(0, 1, -1)
    }

    /// The single element `i`.
    pub fn index(i: Ixs) -> Colon {
        Colon::new(i, 1, i)
    }

    /// The whole axis, reversed.
    pub fn reversed() -> Colon {
        Colon::new(-1, -1, 0)
    }

    /// Return `true` if the colon selects the whole axis in order.
    pub fn is_all(&self) -> bool {
        *self == Colon::all()
    }

    /// Resolve against an axis of length `size`.
    ///
    /// **Errors** with `InvalidColon` if the step is zero or an endpoint is
    /// outside `[0, size)` once negative values are counted from the back.
    /// The whole-axis colon resolves on any axis, even an empty one.
    pub(crate) fn resolve(&self, size: Ix) -> Result<ColonRange> {
        if self.step == 0 {
            return Err(from_kind(ErrorKind::InvalidColon));
        }
        if self.is_all() {
            return Ok(ColonRange { start: 0, step: 1, len: size });
        }
        let first = abs_index(size, self.first)?;
        let last = abs_index(size, self.last)?;
        let span = last as Ixs - first as Ixs;
        let len = if span != 0 && (span > 0) != (self.step > 0) {
            0
        } else {
            (span / self.step) as Ix + 1
        };
        Ok(ColonRange { start: first, step: self.step, len })
    }
}

fn abs_index(size: Ix, index: Ixs) -> Result<Ix> {
    let n = size as Ixs;
    let index = if index < 0 { index + n } else { index };
    if index < 0 || index >= n {
        Err(from_kind(ErrorKind::InvalidColon))
    } else {
        Ok(index as Ix)
    }
}

macro_rules! impl_colon_from_index_type {
    ($index:ty) => {
        impl From<$index> for Colon {
            #[inline]
            fn from(i: $index) -> Colon {
                Colon::index(i as Ixs)
            }
        }

        impl From<[$index; 2]> for Colon {
            #[inline]
            fn from(r: [$index; 2]) -> Colon {
                Colon::new(r[0] as Ixs, 1, r[1] as Ixs)
            }
        }

        impl From<[$index; 3]> for Colon {
            #[inline]
            fn from(r: [$index; 3]) -> Colon {
                Colon::new(r[0] as Ixs, r[1] as Ixs, r[2] as Ixs)
            }
        }
    };
}

impl_colon_from_index_type!(isize);
impl_colon_from_index_type!(usize);
impl_colon_from_index_type!(i32);
impl_colon_from_index_type!(i64);

impl From<RangeFull> for Colon {
    #[inline]
    fn from(_: RangeFull) -> Colon {
        Colon::all()
    }
}

impl fmt::Display for Colon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return write!(f, ":");
        }
        write_bound(f, self.first)?;
        if self.step != 1 {
            write!(f, ":{}", self.step)?;
        }
        if self.first != self.last || self.step != 1 {
            write!(f, ":")?;
            write_bound(f, self.last)?;
        }
        Ok(())
    }
}

fn write_bound(f: &mut fmt::Formatter<'_>, bound: Ixs) -> fmt::Result {
    match bound {
        -1 => write!(f, "end"),
        b if b < 0 => write!(f, "end-{}", -(b + 1)),
        b => write!(f, "{}", b),
    }
}

/// Parse MATLAB colon notation with zero-based indices.
///
/// Accepts `:`, `a`, `a:b` and `a:s:b`, where a bound is an integer, `end`
/// or `end-k`.
///
/// ```
/// use ndview::Colon;
///
/// let c: Colon = "end:-1:0".parse().unwrap();
/// assert_eq!(c, Colon::reversed());
/// ```
impl FromStr for Colon {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Colon> {
        let s = s.trim();
        if s == ":" {
            return Ok(Colon::all());
        }
        let parts = s.split(':').map(str::trim).collect::<Vec<_>>();
        match parts[..] {
            [a] => Ok(Colon::index(parse_bound(a)?)),
            [a, b] => Ok(Colon::new(parse_bound(a)?, 1, parse_bound(b)?)),
            [a, step, b] => {
                let step = step
                    .parse::<Ixs>()
                    .map_err(|_| from_kind(ErrorKind::InvalidColon))?;
                Ok(Colon::new(parse_bound(a)?, step, parse_bound(b)?))
            }
            _ => Err(from_kind(ErrorKind::InvalidColon)),
        }
    }
}

fn parse_bound(s: &str) -> Result<Ixs> {
    let invalid = |_| from_kind(ErrorKind::InvalidColon);
    if let Some(rest) = s.strip_prefix("end") {
        let rest = rest.trim();
        if rest.is_empty() {
            return Ok(-1);
        }
        let back = rest
            .strip_prefix('-')
            .ok_or_else(|| from_kind(ErrorKind::InvalidColon))?
            .trim()
            .parse::<Ixs>()
            .map_err(invalid)?;
        if back < 0 {
            return Err(from_kind(ErrorKind::InvalidColon));
        }
        Ok(-1 - back)
    } else {
        s.parse::<Ixs>().map_err(invalid)
    }
}
