// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use itertools::Itertools;

use crate::error::{from_kind, ErrorKind};
use crate::slice::Colon;
use crate::{Ix, Ixs, Result};

/// How one axis of a view maps its positions onto buffer offsets.
///
/// The offset of an element is the sum, over all axes, of the contribution
/// of its position along each axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisKind {
    /// Affine axis: position `i` contributes `first + i * step`.
    Stepped { first: Ixs, step: Ixs, size: Ix },
    /// Gather axis: position `i` contributes `indices[i]`.
    Indexed(Vec<Ixs>),
}

impl AxisKind {
    /// The implicit axis past the stored ones.
    #[inline]
    pub(crate) fn singleton() -> AxisKind {
        AxisKind::Stepped { first: 0, step: 1, size: 1 }
    }

    /// Number of positions along the axis.
    #[inline]
    pub fn size(&self) -> Ix {
        match *self {
            AxisKind::Stepped { size, .. } => size,
            AxisKind::Indexed(ref indices) => indices.len(),
        }
    }

    /// Return `true` if the axis is an explicit list of offsets.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        matches!(*self, AxisKind::Indexed(_))
    }

    /// Contribution of position `i`; `i` must be in bounds.
    #[inline]
    pub fn offset_at(&self, i: Ix) -> Ixs {
        match *self {
            AxisKind::Stepped { first, step, .. } => first + i as Ixs * step,
            AxisKind::Indexed(ref indices) => indices[i],
        }
    }

    /// Contribution of position 0, the value an axis is frozen at when it is
    /// not enumerated. An empty axis contributes nothing.
    #[inline]
    pub fn leading(&self) -> Ixs {
        match *self {
            AxisKind::Stepped { first, .. } => first,
            AxisKind::Indexed(ref indices) => indices.first().cloned().unwrap_or(0),
        }
    }

    /// Smallest and largest contribution, `None` for an empty axis.
    ///
    /// **Errors** with `OutOfBounds` if the last contribution of a stepped
    /// axis does not fit in an `isize`.
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn bounds(&self) -> Result<Option<(Ixs, Ixs)>> {
        if self.size() == 0 {
            return Ok(None);
        }
        match *self {
            AxisKind::Stepped { first, step, size } => {
                let last = Ixs::try_from(size - 1)
                    .ok()
                    .and_then(|n| n.checked_mul(step))
                    .and_then(|span| span.checked_add(first))
                    .ok_or_else(|| from_kind(ErrorKind::OutOfBounds))?;
                Ok(Some((first.min(last), first.max(last))))
            }
            AxisKind::Indexed(ref indices) => Ok(indices.iter().cloned().minmax().into_option()),
        }
    }

    /// Apply `colon` to the current positions of the axis.
    pub(crate) fn select(&self, colon: &Colon) -> Result<AxisKind> {
        let range = colon.resolve(self.size())?;
        Ok(match *self {
            AxisKind::Stepped { first, step, .. } => AxisKind::Stepped {
                first: first + range.start as Ixs * step,
                step: step * range.step,
                size: range.len,
            },
            AxisKind::Indexed(ref indices) => {
                AxisKind::Indexed((0..range.len).map(|i| indices[range.position(i)]).collect())
            }
        })
    }

    /// Gather the given positions into an indexed axis.
    ///
    /// **Errors** with `OutOfBounds` if a position is not smaller than the
    /// size of the axis.
    pub(crate) fn gather(&self, positions: &[Ix]) -> Result<AxisKind> {
        let size = self.size();
        if positions.iter().any(|&p| p >= size) {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(self.gather_unchecked(positions))
    }

    pub(crate) fn gather_unchecked(&self, positions: &[Ix]) -> AxisKind {
        debug_assert!(positions.iter().all(|&p| p < self.size()));
        AxisKind::Indexed(positions.iter().map(|&p| self.offset_at(p)).collect())
    }

    /// The same axis traversed back to front.
    pub(crate) fn reversed(&self) -> AxisKind {
        match *self {
            AxisKind::Stepped { first, step, size } if size > 0 => AxisKind::Stepped {
                first: first + (size as Ixs - 1) * step,
                step: -step,
                size,
            },
            AxisKind::Stepped { .. } => self.clone(),
            AxisKind::Indexed(ref indices) => AxisKind::Indexed(indices.iter().rev().cloned().collect()),
        }
    }

    /// Add `delta` to the contribution of every position.
    pub(crate) fn shift_offset(&mut self, delta: Ixs) {
        match *self {
            AxisKind::Stepped { ref mut first, .. } => *first += delta,
            AxisKind::Indexed(ref mut indices) => {
                for index in indices {
                    *index += delta;
                }
            }
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AxisKind::Stepped { first, step, size } => write!(f, "{}+{}*(0..{})", first, step, size),
            AxisKind::Indexed(ref indices) => write!(f, "[{}]", indices.iter().format(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_composes_affine_maps() {
        let axis = AxisKind::Stepped { first: 2, step: 3, size: 6 };
        let sel = axis.select(&Colon::new(1, 2, 5)).unwrap();
        assert_eq!(sel, AxisKind::Stepped { first: 5, step: 6, size: 3 });
        let rev = axis.select(&Colon::reversed()).unwrap();
        assert_eq!(rev, axis.reversed());
    }

    #[test]
    fn select_on_indexed_uses_positions() {
        let axis = AxisKind::Indexed(vec![10, 40, 20, 30]);
        let sel = axis.select(&Colon::new(-1, -2, 0)).unwrap();
        assert_eq!(sel, AxisKind::Indexed(vec![30, 40]));
    }

    #[test]
    fn gather_checks_bounds() {
        let axis = AxisKind::Stepped { first: 0, step: 4, size: 3 };
        assert_eq!(axis.gather(&[2, 0, 0]).unwrap(), AxisKind::Indexed(vec![8, 0, 0]));
        assert_eq!(axis.gather(&[3]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn bounds_and_shift() {
        let mut axis = AxisKind::Stepped { first: 8, step: -2, size: 4 };
        assert_eq!(axis.bounds().unwrap(), Some((2, 8)));
        axis.shift_offset(1);
        assert_eq!(axis.leading(), 9);
        assert_eq!(AxisKind::Indexed(vec![]).bounds().unwrap(), None);
        let huge = AxisKind::Stepped { first: 0, step: 1 << 62, size: 5 };
        assert_eq!(huge.bounds().unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(AxisKind::Indexed(vec![]).leading(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(AxisKind::singleton().to_string(), "0+1*(0..1)");
        assert_eq!(AxisKind::Indexed(vec![3, 1]).to_string(), "[3, 1]");
    }
}
